//! Request store port (write side).
//!
//! Defines the contract for persisting RemoteDayRequest aggregates.
//!
//! # Design
//!
//! - **Terminal transitions first**: Handlers write the resolved request
//!   row before touching the balance, so a replayed cancel or resolve
//!   finds the request already terminal and never settles twice

use async_trait::async_trait;

use crate::domain::foundation::RequestId;
use crate::domain::rewards::RemoteDayRequest;

use super::store_error::StoreError;

/// Store port for RemoteDayRequest persistence.
#[async_trait]
pub trait RequestStore: Send + Sync {
    /// Save a new request.
    ///
    /// # Errors
    ///
    /// - `VersionConflict` if a request with this id already exists
    /// - `Backend` on persistence failure
    async fn save(&self, request: &RemoteDayRequest) -> Result<(), StoreError>;

    /// Replace an existing request row.
    ///
    /// # Errors
    ///
    /// - `Backend` if the request does not exist or persistence fails
    async fn update(&self, request: &RemoteDayRequest) -> Result<(), StoreError>;

    /// Find a request by its id. Returns `None` if not found.
    async fn find_by_id(&self, id: &RequestId) -> Result<Option<RemoteDayRequest>, StoreError>;
}
