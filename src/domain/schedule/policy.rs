//! Per-team return-to-office policy.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

use super::{ScheduleError, WorkType};

/// Minutes in a day; core hours must end by midnight.
const MINUTES_PER_DAY: u16 = 24 * 60;

/// A required presence window, in minutes from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CoreHoursRaw")]
pub struct CoreHours {
    start_minute: u16,
    end_minute: u16,
}

impl CoreHours {
    /// Creates a core-hours window. The window must have positive length
    /// and end by midnight.
    pub fn new(start_minute: u16, end_minute: u16) -> Result<Self, ValidationError> {
        if end_minute > MINUTES_PER_DAY {
            return Err(ValidationError::out_of_range(
                "core_hours.end_minute",
                0,
                i64::from(MINUTES_PER_DAY),
            ));
        }
        if start_minute >= end_minute {
            return Err(ValidationError::invalid_format(
                "core_hours",
                "start must come before end",
            ));
        }
        Ok(Self {
            start_minute,
            end_minute,
        })
    }

    pub fn start_minute(&self) -> u16 {
        self.start_minute
    }

    pub fn end_minute(&self) -> u16 {
        self.end_minute
    }
}

#[derive(Deserialize)]
struct CoreHoursRaw {
    start_minute: u16,
    end_minute: u16,
}

impl TryFrom<CoreHoursRaw> for CoreHours {
    type Error = ValidationError;

    fn try_from(raw: CoreHoursRaw) -> Result<Self, Self::Error> {
        CoreHours::new(raw.start_minute, raw.end_minute)
    }
}

impl fmt::Display for CoreHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start_minute / 60,
            self.start_minute % 60,
            self.end_minute / 60,
            self.end_minute % 60
        )
    }
}

/// A team's return-to-office policy.
///
/// Governs how many office days a week each member owes, which work types
/// members may schedule, and (optionally) the core hours members are
/// expected to be reachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RtoPolicyRaw")]
pub struct RtoPolicy {
    required_office_days: u8,
    core_hours: Option<CoreHours>,
    allowed_work_types: Vec<WorkType>,
}

impl RtoPolicy {
    /// Creates a validated policy.
    ///
    /// `required_office_days` may not exceed the five-day working week,
    /// and the policy must allow at least one work type.
    pub fn new(
        required_office_days: u8,
        core_hours: Option<CoreHours>,
        allowed_work_types: Vec<WorkType>,
    ) -> Result<Self, ScheduleError> {
        if required_office_days > 5 {
            return Err(ScheduleError::configuration(format!(
                "required_office_days {} exceeds the 5-day working week",
                required_office_days
            )));
        }
        if allowed_work_types.is_empty() {
            return Err(ScheduleError::configuration(
                "policy must allow at least one work type",
            ));
        }
        Ok(Self {
            required_office_days,
            core_hours,
            allowed_work_types,
        })
    }

    pub fn required_office_days(&self) -> u8 {
        self.required_office_days
    }

    pub fn core_hours(&self) -> Option<&CoreHours> {
        self.core_hours.as_ref()
    }

    pub fn allowed_work_types(&self) -> &[WorkType] {
        &self.allowed_work_types
    }

    /// Returns true if members may schedule the given work type.
    pub fn allows(&self, work_type: WorkType) -> bool {
        self.allowed_work_types.contains(&work_type)
    }
}

impl Default for RtoPolicy {
    /// Three office days a week, no core hours, every work type allowed.
    fn default() -> Self {
        Self {
            required_office_days: 3,
            core_hours: None,
            allowed_work_types: vec![WorkType::Office, WorkType::Remote, WorkType::Flexible],
        }
    }
}

#[derive(Deserialize)]
struct RtoPolicyRaw {
    required_office_days: u8,
    #[serde(default)]
    core_hours: Option<CoreHours>,
    allowed_work_types: Vec<WorkType>,
}

impl TryFrom<RtoPolicyRaw> for RtoPolicy {
    type Error = ScheduleError;

    fn try_from(raw: RtoPolicyRaw) -> Result<Self, Self::Error> {
        RtoPolicy::new(raw.required_office_days, raw.core_hours, raw.allowed_work_types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_accepts_full_working_week() {
        let policy = RtoPolicy::new(5, None, vec![WorkType::Office]).unwrap();
        assert_eq!(policy.required_office_days(), 5);
    }

    #[test]
    fn policy_rejects_more_than_five_required_days() {
        let result = RtoPolicy::new(6, None, vec![WorkType::Office]);
        assert!(matches!(result, Err(ScheduleError::Configuration { .. })));
    }

    #[test]
    fn policy_rejects_empty_allowed_work_types() {
        let result = RtoPolicy::new(3, None, vec![]);
        assert!(matches!(result, Err(ScheduleError::Configuration { .. })));
    }

    #[test]
    fn allows_checks_the_work_type_list() {
        let policy = RtoPolicy::new(3, None, vec![WorkType::Office, WorkType::Remote]).unwrap();
        assert!(policy.allows(WorkType::Office));
        assert!(policy.allows(WorkType::Remote));
        assert!(!policy.allows(WorkType::Flexible));
    }

    #[test]
    fn default_policy_allows_everything() {
        let policy = RtoPolicy::default();
        assert_eq!(policy.required_office_days(), 3);
        assert!(policy.allows(WorkType::Office));
        assert!(policy.allows(WorkType::Remote));
        assert!(policy.allows(WorkType::Flexible));
    }

    #[test]
    fn core_hours_rejects_inverted_window() {
        assert!(CoreHours::new(600, 540).is_err());
        assert!(CoreHours::new(600, 600).is_err());
    }

    #[test]
    fn core_hours_rejects_end_past_midnight() {
        assert!(CoreHours::new(600, 1441).is_err());
    }

    #[test]
    fn core_hours_displays_as_clock_range() {
        let hours = CoreHours::new(9 * 60, 15 * 60 + 30).unwrap();
        assert_eq!(hours.to_string(), "09:00-15:30");
    }

    #[test]
    fn deserializing_an_invalid_policy_fails() {
        let json = r#"{"required_office_days":7,"allowed_work_types":["office"]}"#;
        let result: Result<RtoPolicy, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn policy_round_trips_through_json() {
        let policy = RtoPolicy::new(
            2,
            Some(CoreHours::new(540, 900).unwrap()),
            vec![WorkType::Office, WorkType::Flexible],
        )
        .unwrap();
        let json = serde_json::to_string(&policy).unwrap();
        let restored: RtoPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, policy);
    }
}
