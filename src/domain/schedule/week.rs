//! Monday-anchored working week.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::WorkDate;

/// A working week, identified by its Monday.
///
/// Anchor-day consensus and weekly compliance both operate over the five
/// working days Monday through Friday. Serializes as the Monday date;
/// any date deserialized snaps to the week containing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WorkDate", into = "WorkDate")]
pub struct WorkWeek {
    monday: WorkDate,
}

impl WorkWeek {
    /// The week containing the given date (snaps to that week's Monday).
    pub fn containing(date: WorkDate) -> Self {
        Self {
            monday: date.week_monday(),
        }
    }

    /// Monday of this week.
    pub fn monday(&self) -> WorkDate {
        self.monday
    }

    /// Friday of this week.
    pub fn friday(&self) -> WorkDate {
        self.monday.plus_days(4)
    }

    /// The five working days, Monday through Friday in order.
    pub fn working_days(&self) -> [WorkDate; 5] {
        [
            self.monday,
            self.monday.plus_days(1),
            self.monday.plus_days(2),
            self.monday.plus_days(3),
            self.monday.plus_days(4),
        ]
    }

    /// Returns true if the date falls on one of this week's working days.
    pub fn contains(&self, date: &WorkDate) -> bool {
        *date >= self.monday && *date <= self.friday()
    }

    /// The week after this one.
    pub fn next(&self) -> Self {
        Self {
            monday: self.monday.plus_days(7),
        }
    }
}

impl From<WorkDate> for WorkWeek {
    fn from(date: WorkDate) -> Self {
        Self::containing(date)
    }
}

impl From<WorkWeek> for WorkDate {
    fn from(week: WorkWeek) -> Self {
        week.monday
    }
}

impl fmt::Display for WorkWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "week of {}", self.monday)
    }
}
