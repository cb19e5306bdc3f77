//! In-memory policy store for tests and the demo binary.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::TeamId;
use crate::domain::schedule::RtoPolicy;
use crate::ports::{PolicyStore, StoreError};

/// In-memory `PolicyStore` keyed by team.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned. Acceptable for test
/// and demo infrastructure; not a production store.
pub struct InMemoryPolicyStore {
    rows: RwLock<HashMap<TeamId, RtoPolicy>>,
}

impl InMemoryPolicyStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPolicyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PolicyStore for InMemoryPolicyStore {
    async fn find_by_team(&self, team_id: &TeamId) -> Result<Option<RtoPolicy>, StoreError> {
        let rows = self
            .rows
            .read()
            .expect("InMemoryPolicyStore: rows lock poisoned");

        Ok(rows.get(team_id).cloned())
    }

    async fn put(&self, team_id: &TeamId, policy: &RtoPolicy) -> Result<(), StoreError> {
        let mut rows = self
            .rows
            .write()
            .expect("InMemoryPolicyStore: rows write lock poisoned");

        rows.insert(team_id.clone(), policy.clone());
        Ok(())
    }
}
