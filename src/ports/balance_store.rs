//! Balance store port (write side).
//!
//! Defines the contract for persisting and retrieving RewardBalance
//! aggregates with optimistic concurrency control.
//!
//! # Design
//!
//! - **Single-row CAS**: Every write names the version it read, so two
//!   concurrent mutations of the same balance cannot both land
//! - **Keyed by (user, team)**: One balance per member per team
//! - **No partial writes**: A balance row is stored whole or not at all
//!
//! # Example
//!
//! ```ignore
//! let Some(versioned) = store.load(&user_id, &team_id).await? else {
//!     return Err(RewardError::store("balance missing"));
//! };
//! let mut balance = versioned.balance;
//! balance.record_office_attendance(today, next_working_day)?;
//! store.put(&balance, Some(versioned.version)).await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TeamId, UserId};
use crate::domain::rewards::RewardBalance;

use super::store_error::StoreError;

/// Monotone version token for optimistic concurrency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version(u64);

impl Version {
    /// Version assigned to a freshly created row.
    pub const INITIAL: Version = Version(1);

    pub fn new(value: u64) -> Self {
        Version(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// The version a successful write on top of this one receives.
    pub fn next(self) -> Version {
        Version(self.0.wrapping_add(1))
    }
}

/// A balance row together with the version it was read at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedBalance {
    pub balance: RewardBalance,
    pub version: Version,
}

/// Store port for RewardBalance persistence.
///
/// Implementations must ensure:
/// - `put` with `expected: None` creates the row only if absent
/// - `put` with `expected: Some(v)` replaces the row only if its stored
///   version is exactly `v`
/// - Either precondition failing surfaces `StoreError::VersionConflict`
///   and leaves the stored row untouched
#[async_trait]
pub trait BalanceStore: Send + Sync {
    /// Load the balance for a member of a team.
    ///
    /// Returns `None` when the member has no balance row yet.
    async fn load(
        &self,
        user_id: &UserId,
        team_id: &TeamId,
    ) -> Result<Option<VersionedBalance>, StoreError>;

    /// Write a balance row, guarded by a version precondition.
    ///
    /// Returns the version the row holds after the write.
    ///
    /// # Errors
    ///
    /// - `VersionConflict` when the precondition fails
    /// - `Backend` on persistence failure
    async fn put(
        &self,
        balance: &RewardBalance,
        expected: Option<Version>,
    ) -> Result<Version, StoreError>;
}
