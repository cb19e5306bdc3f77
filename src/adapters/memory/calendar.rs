//! Weekday working-day calendar.

use std::collections::HashSet;

use chrono::Weekday;

use crate::domain::foundation::{TeamId, WorkDate};
use crate::ports::WorkingDayCalendar;

/// Monday-to-Friday calendar with an optional holiday list.
///
/// The same calendar applies to every team; per-team regional calendars
/// would live behind a different adapter.
pub struct WeekdayCalendar {
    holidays: HashSet<WorkDate>,
}

impl WeekdayCalendar {
    /// Plain Monday-to-Friday, no holidays.
    pub fn new() -> Self {
        Self {
            holidays: HashSet::new(),
        }
    }

    /// Monday-to-Friday minus the given holidays.
    pub fn with_holidays(holidays: impl IntoIterator<Item = WorkDate>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }
}

impl Default for WeekdayCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkingDayCalendar for WeekdayCalendar {
    fn is_working_day(&self, _team_id: &TeamId, date: WorkDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.holidays.contains(&date)
    }
}
