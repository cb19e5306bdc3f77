//! In-memory vote store for tests and the demo binary.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::anchor::TeamVote;
use crate::domain::foundation::{TeamId, UserId};
use crate::domain::schedule::WorkWeek;
use crate::ports::{StoreError, VoteStore};

/// In-memory `VoteStore` keyed by `(team, user, week)`.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned. Acceptable for test
/// and demo infrastructure; not a production store.
pub struct InMemoryVoteStore {
    rows: RwLock<HashMap<(TeamId, UserId, WorkWeek), TeamVote>>,
}

impl InMemoryVoteStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryVoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VoteStore for InMemoryVoteStore {
    async fn upsert(&self, vote: &TeamVote) -> Result<(), StoreError> {
        let mut rows = self
            .rows
            .write()
            .expect("InMemoryVoteStore: rows write lock poisoned");

        let key = (
            vote.team_id.clone(),
            vote.user_id.clone(),
            vote.voting_week,
        );
        rows.insert(key, vote.clone());
        Ok(())
    }

    async fn find_by_team_and_week(
        &self,
        team_id: &TeamId,
        week: WorkWeek,
    ) -> Result<Vec<TeamVote>, StoreError> {
        let rows = self
            .rows
            .read()
            .expect("InMemoryVoteStore: rows lock poisoned");

        let mut votes: Vec<TeamVote> = rows
            .values()
            .filter(|v| &v.team_id == team_id && v.voting_week == week)
            .cloned()
            .collect();
        // HashMap iteration order is arbitrary; pin it for callers.
        votes.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        Ok(votes)
    }
}
