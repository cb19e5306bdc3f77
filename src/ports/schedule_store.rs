//! Schedule store port.
//!
//! Defines the contract for persisting work schedule entries.
//!
//! # Design
//!
//! - **Upsert semantics**: One entry per `(user, date)`; writing again
//!   for the same key replaces the earlier entry
//! - **Range reads**: Compliance and consensus read a user's entries for
//!   a date window, never the full history

use async_trait::async_trait;

use crate::domain::foundation::{UserId, WorkDate};
use crate::domain::schedule::WorkScheduleEntry;

use super::store_error::StoreError;

/// Store port for WorkScheduleEntry persistence.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Insert or replace the entry for `(entry.user_id, entry.date)`.
    async fn upsert(&self, entry: &WorkScheduleEntry) -> Result<(), StoreError>;

    /// Load a user's entries with `from <= date <= to`, sorted by date
    /// ascending.
    async fn find_by_user_in_range(
        &self,
        user_id: &UserId,
        from: WorkDate,
        to: WorkDate,
    ) -> Result<Vec<WorkScheduleEntry>, StoreError>;
}
