//! Working day calendar port.
//!
//! An opaque predicate over a team's calendar: which dates count as
//! working days. Weekends, public holidays, and company closures all
//! live behind it, so the streak logic never hard-codes a region's
//! calendar.

use crate::domain::foundation::{TeamId, WorkDate};

/// How far `next_working_day_after` scans before giving up. A calendar
/// with a gap this long is misconfigured.
const MAX_CALENDAR_SCAN_DAYS: i64 = 366;

/// Port for a team's working-day calendar.
pub trait WorkingDayCalendar: Send + Sync {
    /// Whether the date is a working day for the team.
    fn is_working_day(&self, team_id: &TeamId, date: WorkDate) -> bool;

    /// The first working day strictly after `date`.
    ///
    /// Returns `None` when no working day shows up within a year of
    /// scanning, which a sane calendar never hits.
    fn next_working_day_after(&self, team_id: &TeamId, date: WorkDate) -> Option<WorkDate> {
        (1..=MAX_CALENDAR_SCAN_DAYS)
            .map(|offset| date.plus_days(offset))
            .find(|candidate| self.is_working_day(team_id, *candidate))
    }
}
