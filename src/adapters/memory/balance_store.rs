//! In-memory balance store for tests and the demo binary.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{TeamId, UserId};
use crate::domain::rewards::RewardBalance;
use crate::ports::{BalanceStore, StoreError, Version, VersionedBalance};

/// In-memory `BalanceStore` with real compare-and-set semantics.
///
/// Versions advance exactly as a database row version would, so handler
/// retry loops behave the same against this store as against a real one.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned. Acceptable for test
/// and demo infrastructure; not a production store.
pub struct InMemoryBalanceStore {
    rows: RwLock<HashMap<(UserId, TeamId), (RewardBalance, Version)>>,
}

impl InMemoryBalanceStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryBalanceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BalanceStore for InMemoryBalanceStore {
    async fn load(
        &self,
        user_id: &UserId,
        team_id: &TeamId,
    ) -> Result<Option<VersionedBalance>, StoreError> {
        let rows = self
            .rows
            .read()
            .expect("InMemoryBalanceStore: rows lock poisoned");

        Ok(rows
            .get(&(user_id.clone(), team_id.clone()))
            .map(|(balance, version)| VersionedBalance {
                balance: balance.clone(),
                version: *version,
            }))
    }

    async fn put(
        &self,
        balance: &RewardBalance,
        expected: Option<Version>,
    ) -> Result<Version, StoreError> {
        let mut rows = self
            .rows
            .write()
            .expect("InMemoryBalanceStore: rows write lock poisoned");

        let key = (balance.user_id.clone(), balance.team_id.clone());
        let new_version = match (rows.get(&key), expected) {
            // Create-if-absent.
            (None, None) => Version::INITIAL,
            // Replace-if-version-matches.
            (Some((_, stored)), Some(version)) if *stored == version => version.next(),
            _ => return Err(StoreError::VersionConflict),
        };

        rows.insert(key, (balance.clone(), new_version));
        Ok(new_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rewards::AccrualModel;

    fn balance() -> RewardBalance {
        RewardBalance::new(
            UserId::new("user-1").unwrap(),
            TeamId::new("team-1").unwrap(),
            AccrualModel::SimpleThreeToOne,
        )
    }

    #[tokio::test]
    async fn create_then_load_round_trips() {
        let store = InMemoryBalanceStore::new();
        let balance = balance();

        let version = store.put(&balance, None).await.unwrap();
        assert_eq!(version, Version::INITIAL);

        let loaded = store
            .load(&balance.user_id, &balance.team_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded.balance, balance);
        assert_eq!(loaded.version, Version::INITIAL);
    }

    #[tokio::test]
    async fn load_of_missing_row_is_none() {
        let store = InMemoryBalanceStore::new();

        let loaded = store
            .load(
                &UserId::new("user-x").unwrap(),
                &TeamId::new("team-x").unwrap(),
            )
            .await
            .unwrap();

        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn create_conflicts_when_the_row_exists() {
        let store = InMemoryBalanceStore::new();
        let balance = balance();
        store.put(&balance, None).await.unwrap();

        let err = store.put(&balance, None).await.unwrap_err();
        assert_eq!(err, StoreError::VersionConflict);
    }

    #[tokio::test]
    async fn cas_put_advances_the_version() {
        let store = InMemoryBalanceStore::new();
        let balance = balance();
        let v1 = store.put(&balance, None).await.unwrap();

        let v2 = store.put(&balance, Some(v1)).await.unwrap();
        assert_eq!(v2, v1.next());
    }

    #[tokio::test]
    async fn stale_version_conflicts_and_leaves_the_row_untouched() {
        let store = InMemoryBalanceStore::new();
        let mut balance = balance();
        let v1 = store.put(&balance, None).await.unwrap();
        balance.streak = 4;
        let v2 = store.put(&balance, Some(v1)).await.unwrap();

        // A writer still holding v1 must lose.
        let err = store.put(&balance, Some(v1)).await.unwrap_err();
        assert_eq!(err, StoreError::VersionConflict);

        let loaded = store
            .load(&balance.user_id, &balance.team_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded.version, v2);
        assert_eq!(loaded.balance.streak, 4);
    }

    #[tokio::test]
    async fn cas_against_a_missing_row_conflicts() {
        let store = InMemoryBalanceStore::new();

        let err = store
            .put(&balance(), Some(Version::INITIAL))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::VersionConflict);
    }
}
