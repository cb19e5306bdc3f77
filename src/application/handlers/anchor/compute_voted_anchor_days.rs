//! ComputeVotedAnchorDaysHandler - Query handler for ballot-based consensus.

use std::sync::Arc;

use crate::domain::anchor::{compute_voted_anchor_days, AnchorDayTally};
use crate::domain::foundation::{DomainError, ErrorCode, TeamId};
use crate::domain::schedule::WorkWeek;
use crate::ports::VoteStore;

/// Query for the per-day vote tallies of one team's week.
#[derive(Debug, Clone)]
pub struct ComputeVotedAnchorDaysQuery {
    pub team_id: TeamId,
    /// Consensus denominator; the roster size, not the ballot count.
    pub team_size: u32,
    pub week: WorkWeek,
}

/// Handler tallying explicit anchor-day ballots for a week.
///
/// Every working day of the week appears in the result, zero-voted days
/// included, so callers can render a full Monday-to-Friday view.
pub struct ComputeVotedAnchorDaysHandler {
    vote_store: Arc<dyn VoteStore>,
}

impl ComputeVotedAnchorDaysHandler {
    pub fn new(vote_store: Arc<dyn VoteStore>) -> Self {
        Self { vote_store }
    }

    pub async fn handle(
        &self,
        query: ComputeVotedAnchorDaysQuery,
    ) -> Result<Vec<AnchorDayTally>, DomainError> {
        let votes = self
            .vote_store
            .find_by_team_and_week(&query.team_id, query.week)
            .await
            .map_err(|e| DomainError::new(ErrorCode::StoreFailure, e.to_string()))?;

        Ok(compute_voted_anchor_days(&votes, query.team_size, query.week))
    }
}
