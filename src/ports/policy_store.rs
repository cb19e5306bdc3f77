//! Policy store port.
//!
//! Defines the contract for per-team RTO policy persistence.

use async_trait::async_trait;

use crate::domain::foundation::TeamId;
use crate::domain::schedule::RtoPolicy;

use super::store_error::StoreError;

/// Store port for per-team RtoPolicy persistence.
///
/// Teams without a stored policy fall back to the configured default;
/// that fallback lives in the handlers, not here.
#[async_trait]
pub trait PolicyStore: Send + Sync {
    /// Load the policy a team has configured, if any.
    async fn find_by_team(&self, team_id: &TeamId) -> Result<Option<RtoPolicy>, StoreError>;

    /// Insert or replace the policy for a team.
    async fn put(&self, team_id: &TeamId, policy: &RtoPolicy) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn policy_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn PolicyStore) {}
    }
}
