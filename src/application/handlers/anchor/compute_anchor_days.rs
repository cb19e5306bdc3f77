//! ComputeAnchorDaysHandler - Query handler for schedule-based consensus.

use std::collections::BTreeSet;
use std::sync::Arc;

use futures::future;

use crate::domain::anchor::compute_anchor_days;
use crate::domain::foundation::{DomainError, ErrorCode, TeamId, UserId, WorkDate};
use crate::domain::schedule::{WorkScheduleEntry, WorkWeek};
use crate::ports::ScheduleStore;

/// Query for the anchor days an entire team's declared schedules imply.
#[derive(Debug, Clone)]
pub struct ComputeAnchorDaysQuery {
    pub team_id: TeamId,
    /// Current roster; its length is the consensus denominator.
    pub member_ids: Vec<UserId>,
    pub week: WorkWeek,
}

/// Result of a schedule-based consensus computation.
#[derive(Debug, Clone)]
pub struct ComputeAnchorDaysResult {
    /// Working days where a strict majority declared office work,
    /// in ascending order.
    pub anchor_days: BTreeSet<WorkDate>,
    pub team_size: u32,
}

/// Handler computing a team's anchor days from declared schedules.
///
/// A working day becomes an anchor day when a strict majority of the
/// roster declared office work for it. Members without an entry count
/// against the majority, so the denominator is the roster, not the
/// respondents.
pub struct ComputeAnchorDaysHandler {
    schedule_store: Arc<dyn ScheduleStore>,
}

impl ComputeAnchorDaysHandler {
    pub fn new(schedule_store: Arc<dyn ScheduleStore>) -> Self {
        Self { schedule_store }
    }

    pub async fn handle(
        &self,
        query: ComputeAnchorDaysQuery,
    ) -> Result<ComputeAnchorDaysResult, DomainError> {
        // 1. Fetch every member's declared week concurrently
        let fetches = query.member_ids.iter().map(|user_id| {
            self.schedule_store.find_by_user_in_range(
                user_id,
                query.week.monday(),
                query.week.friday(),
            )
        });
        let per_member = future::try_join_all(fetches)
            .await
            .map_err(|e| DomainError::new(ErrorCode::StoreFailure, e.to_string()))?;

        let entries: Vec<WorkScheduleEntry> = per_member.into_iter().flatten().collect();

        // 2. Tally office declarations against the roster size
        let team_size = query.member_ids.len() as u32;
        let anchor_days = compute_anchor_days(&entries, team_size, query.week);

        Ok(ComputeAnchorDaysResult {
            anchor_days,
            team_size,
        })
    }
}
