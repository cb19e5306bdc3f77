//! Team vote for preferred anchor days within a voting week.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TeamId, UserId, WorkDate};
use crate::domain::schedule::WorkWeek;

/// One member's vote for which days of a week should be anchor days.
///
/// A member casts at most one vote per `(team, week)`; re-submitting
/// replaces the earlier ballot at the store level. Voted days outside
/// the voting week are carried but ignored by the tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamVote {
    pub team_id: TeamId,
    pub user_id: UserId,
    /// The week the ballot applies to, serialized as its Monday.
    pub voting_week: WorkWeek,
    pub voted_days: BTreeSet<WorkDate>,
}

impl TeamVote {
    /// Creates a vote for the given week.
    pub fn new(
        team_id: TeamId,
        user_id: UserId,
        voting_week: WorkWeek,
        voted_days: BTreeSet<WorkDate>,
    ) -> Self {
        Self {
            team_id,
            user_id,
            voting_week,
            voted_days,
        }
    }

    /// Whether this ballot includes the given day.
    pub fn includes(&self, date: WorkDate) -> bool {
        self.voted_days.contains(&date)
    }
}
