//! Vote store port.
//!
//! Defines the contract for persisting anchor-day ballots.

use async_trait::async_trait;

use crate::domain::anchor::TeamVote;
use crate::domain::foundation::TeamId;
use crate::domain::schedule::WorkWeek;

use super::store_error::StoreError;

/// Store port for TeamVote persistence.
///
/// One ballot per `(team, user, week)`; upsert replaces.
#[async_trait]
pub trait VoteStore: Send + Sync {
    /// Insert or replace the ballot for
    /// `(vote.team_id, vote.user_id, vote.voting_week)`.
    async fn upsert(&self, vote: &TeamVote) -> Result<(), StoreError>;

    /// Load every ballot a team cast for the given week.
    async fn find_by_team_and_week(
        &self,
        team_id: &TeamId,
        week: WorkWeek,
    ) -> Result<Vec<TeamVote>, StoreError>;
}
