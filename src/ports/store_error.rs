//! Store error type shared by the persistence ports.
//!
//! Adapters speak this vocabulary; application handlers translate it
//! into the domain error taxonomy at their boundary.

use thiserror::Error;

/// Failure modes of the persistence ports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A compare-and-set precondition failed: the stored version no
    /// longer matches the expected one.
    #[error("version conflict: stored version does not match the expected version")]
    VersionConflict,

    /// A row could not be encoded or decoded.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The backing store itself failed.
    #[error("store backend failed: {0}")]
    Backend(String),
}

impl StoreError {
    /// Whether retrying the whole read-modify-write cycle can succeed.
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::VersionConflict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_version_conflict_is_a_conflict() {
        assert!(StoreError::VersionConflict.is_conflict());
        assert!(!StoreError::Serialization("bad row".to_string()).is_conflict());
        assert!(!StoreError::Backend("io error".to_string()).is_conflict());
    }

    #[test]
    fn display_names_the_failure() {
        let err = StoreError::Backend("connection refused".to_string());
        assert_eq!(err.to_string(), "store backend failed: connection refused");
    }
}
