//! In-memory request store for tests and the demo binary.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::RequestId;
use crate::domain::rewards::RemoteDayRequest;
use crate::ports::{RequestStore, StoreError};

/// In-memory `RequestStore` keyed by request id.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned. Acceptable for test
/// and demo infrastructure; not a production store.
pub struct InMemoryRequestStore {
    rows: RwLock<HashMap<RequestId, RemoteDayRequest>>,
}

impl InMemoryRequestStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRequestStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RequestStore for InMemoryRequestStore {
    async fn save(&self, request: &RemoteDayRequest) -> Result<(), StoreError> {
        let mut rows = self
            .rows
            .write()
            .expect("InMemoryRequestStore: rows write lock poisoned");

        if rows.contains_key(&request.id) {
            return Err(StoreError::VersionConflict);
        }
        rows.insert(request.id, request.clone());
        Ok(())
    }

    async fn update(&self, request: &RemoteDayRequest) -> Result<(), StoreError> {
        let mut rows = self
            .rows
            .write()
            .expect("InMemoryRequestStore: rows write lock poisoned");

        if !rows.contains_key(&request.id) {
            return Err(StoreError::Backend(format!(
                "request {} does not exist",
                request.id
            )));
        }
        rows.insert(request.id, request.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &RequestId) -> Result<Option<RemoteDayRequest>, StoreError> {
        let rows = self
            .rows
            .read()
            .expect("InMemoryRequestStore: rows lock poisoned");

        Ok(rows.get(id).cloned())
    }
}
