//! In-memory schedule store for tests and the demo binary.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{UserId, WorkDate};
use crate::domain::schedule::WorkScheduleEntry;
use crate::ports::{ScheduleStore, StoreError};

/// In-memory `ScheduleStore` keyed by `(user, date)`.
///
/// A `BTreeMap` keeps entries sorted, so range reads come back in date
/// order without an explicit sort.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned. Acceptable for test
/// and demo infrastructure; not a production store.
pub struct InMemoryScheduleStore {
    rows: RwLock<BTreeMap<(UserId, WorkDate), WorkScheduleEntry>>,
}

impl InMemoryScheduleStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemoryScheduleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleStore for InMemoryScheduleStore {
    async fn upsert(&self, entry: &WorkScheduleEntry) -> Result<(), StoreError> {
        let mut rows = self
            .rows
            .write()
            .expect("InMemoryScheduleStore: rows write lock poisoned");

        rows.insert((entry.user_id.clone(), entry.date), entry.clone());
        Ok(())
    }

    async fn find_by_user_in_range(
        &self,
        user_id: &UserId,
        from: WorkDate,
        to: WorkDate,
    ) -> Result<Vec<WorkScheduleEntry>, StoreError> {
        let rows = self
            .rows
            .read()
            .expect("InMemoryScheduleStore: rows lock poisoned");

        Ok(rows
            .range((user_id.clone(), from)..=(user_id.clone(), to))
            .map(|(_, entry)| entry.clone())
            .collect())
    }
}
