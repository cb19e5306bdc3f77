//! RTO compliance checking over a week of schedule entries.

use serde::{Deserialize, Serialize};

use super::{ScheduleError, WorkScheduleEntry};

/// Outcome of checking one member's week against the office-day requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub office_days: u32,
    pub remote_days: u32,
    pub required_office_days: u32,
    pub compliant: bool,
    /// Office days still owed; zero when compliant.
    pub deficit: u32,
}

impl ComplianceResult {
    /// Human-readable one-line verdict for dashboards and logs.
    pub fn summary(&self) -> String {
        if self.compliant {
            format!(
                "Compliant: {} office day(s) meets the {}-day requirement",
                self.office_days, self.required_office_days
            )
        } else {
            format!(
                "Non-compliant: {} office day(s) recorded, {} more needed to meet the {}-day requirement",
                self.office_days, self.deficit, self.required_office_days
            )
        }
    }
}

/// Checks a member's schedule entries against a required number of office
/// days.
///
/// Office days are entries marked `Office`; `Remote` and `Flexible` both
/// count as remote since presence cannot be assumed. Requirements above
/// the five-day working week are impossible to satisfy and rejected as
/// configuration errors rather than reported as non-compliance.
pub fn check_compliance(
    entries: &[WorkScheduleEntry],
    required_office_days: u32,
) -> Result<ComplianceResult, ScheduleError> {
    if required_office_days > 5 {
        return Err(ScheduleError::configuration(format!(
            "required_office_days {} exceeds the 5-day working week",
            required_office_days
        )));
    }

    let office_days = entries
        .iter()
        .filter(|e| e.work_type.counts_as_office())
        .count() as u32;
    let remote_days = entries
        .iter()
        .filter(|e| !e.work_type.counts_as_office())
        .count() as u32;

    let compliant = office_days >= required_office_days;
    let deficit = required_office_days.saturating_sub(office_days);

    Ok(ComplianceResult {
        office_days,
        remote_days,
        required_office_days,
        compliant,
        deficit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{UserId, WorkDate};
    use crate::domain::schedule::WorkType;

    fn entry(day: u32, work_type: WorkType) -> WorkScheduleEntry {
        WorkScheduleEntry::new(
            UserId::new("user-1").unwrap(),
            WorkDate::new(2025, 3, day).unwrap(),
            work_type,
        )
    }

    #[test]
    fn meeting_the_requirement_exactly_is_compliant() {
        let entries = vec![
            entry(17, WorkType::Office),
            entry(18, WorkType::Office),
            entry(19, WorkType::Office),
            entry(20, WorkType::Remote),
            entry(21, WorkType::Remote),
        ];

        let result = check_compliance(&entries, 3).unwrap();

        assert!(result.compliant);
        assert_eq!(result.office_days, 3);
        assert_eq!(result.remote_days, 2);
        assert_eq!(result.deficit, 0);
    }

    #[test]
    fn falling_short_reports_the_deficit() {
        let entries = vec![
            entry(17, WorkType::Office),
            entry(18, WorkType::Remote),
            entry(19, WorkType::Remote),
        ];

        let result = check_compliance(&entries, 3).unwrap();

        assert!(!result.compliant);
        assert_eq!(result.office_days, 1);
        assert_eq!(result.deficit, 2);
    }

    #[test]
    fn flexible_days_count_as_remote() {
        let entries = vec![
            entry(17, WorkType::Office),
            entry(18, WorkType::Flexible),
            entry(19, WorkType::Flexible),
        ];

        let result = check_compliance(&entries, 2).unwrap();

        assert_eq!(result.office_days, 1);
        assert_eq!(result.remote_days, 2);
        assert!(!result.compliant);
    }

    #[test]
    fn zero_requirement_is_always_compliant() {
        let result = check_compliance(&[], 0).unwrap();
        assert!(result.compliant);
        assert_eq!(result.deficit, 0);
    }

    #[test]
    fn empty_week_against_a_requirement_is_non_compliant() {
        let result = check_compliance(&[], 3).unwrap();
        assert!(!result.compliant);
        assert_eq!(result.office_days, 0);
        assert_eq!(result.deficit, 3);
    }

    #[test]
    fn requirement_above_working_week_is_a_configuration_error() {
        let result = check_compliance(&[], 6);
        assert!(matches!(result, Err(ScheduleError::Configuration { .. })));
    }

    #[test]
    fn summary_names_the_deficit_when_non_compliant() {
        let entries = vec![entry(17, WorkType::Office)];
        let result = check_compliance(&entries, 3).unwrap();
        let summary = result.summary();
        assert!(summary.contains("Non-compliant"));
        assert!(summary.contains("2 more needed"));
    }

    #[test]
    fn summary_reports_compliance() {
        let entries = vec![
            entry(17, WorkType::Office),
            entry(18, WorkType::Office),
        ];
        let result = check_compliance(&entries, 2).unwrap();
        assert!(result.summary().starts_with("Compliant"));
    }
}
