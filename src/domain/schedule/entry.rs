//! A single day of a member's work schedule.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{UserId, WorkDate};

use super::WorkType;

/// One member's plan (or record) for one day.
///
/// At most one entry exists per `(user, date)`; writing again replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkScheduleEntry {
    pub user_id: UserId,
    pub date: WorkDate,
    pub work_type: WorkType,

    /// Display hint set when the date is one of the team's anchor days.
    /// Consensus computation is authoritative; this flag is derived.
    #[serde(default)]
    pub is_anchor_day: bool,
}

impl WorkScheduleEntry {
    pub fn new(user_id: UserId, date: WorkDate, work_type: WorkType) -> Self {
        Self {
            user_id,
            date,
            work_type,
            is_anchor_day: false,
        }
    }

    /// Marks the entry as falling on a team anchor day.
    pub fn on_anchor_day(mut self) -> Self {
        self.is_anchor_day = true;
        self
    }
}
