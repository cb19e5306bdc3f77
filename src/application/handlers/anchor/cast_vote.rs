//! CastVoteHandler - Command handler for anchor-day ballots.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::anchor::TeamVote;
use crate::domain::foundation::{DomainError, ErrorCode, TeamId, UserId, WorkDate};
use crate::domain::schedule::WorkWeek;
use crate::ports::VoteStore;

/// Command to record one member's preferred office days for a week.
#[derive(Debug, Clone)]
pub struct CastVoteCommand {
    pub team_id: TeamId,
    pub user_id: UserId,
    pub voting_week: WorkWeek,
    pub voted_days: BTreeSet<WorkDate>,
}

/// Result of a recorded ballot.
#[derive(Debug, Clone)]
pub struct CastVoteResult {
    pub vote: TeamVote,
}

/// Handler recording anchor-day ballots.
///
/// One ballot per member per week; voting again replaces the earlier
/// ballot. An empty ballot is a valid abstention. Days outside the
/// voting week are rejected outright rather than silently dropped.
pub struct CastVoteHandler {
    vote_store: Arc<dyn VoteStore>,
}

impl CastVoteHandler {
    pub fn new(vote_store: Arc<dyn VoteStore>) -> Self {
        Self { vote_store }
    }

    pub async fn handle(&self, cmd: CastVoteCommand) -> Result<CastVoteResult, DomainError> {
        // 1. Every voted day must fall inside the voting week
        if let Some(outside) = cmd.voted_days.iter().find(|d| !cmd.voting_week.contains(d)) {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                format!(
                    "voted day {} falls outside the week of {}",
                    outside,
                    cmd.voting_week.monday()
                ),
            ));
        }

        // 2. Record the ballot, replacing any earlier one
        let vote = TeamVote::new(cmd.team_id, cmd.user_id, cmd.voting_week, cmd.voted_days);
        self.vote_store
            .upsert(&vote)
            .await
            .map_err(|e| DomainError::new(ErrorCode::StoreFailure, e.to_string()))?;

        Ok(CastVoteResult { vote })
    }
}
