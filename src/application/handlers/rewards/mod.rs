//! Reward ledger handlers.
//!
//! Command handlers for the attendance-to-reward ledger:
//!
//! ## Commands
//! - Recording office attendance (accrual + streak)
//! - Submitting remote-day requests (optimistic reservation)
//! - Cancelling pending requests (reservation restore)
//! - Resolving pending requests (approve commits, reject restores)

mod cancel_request;
mod record_attendance;
mod resolve_request;
mod submit_request;

pub use cancel_request::{CancelRemoteDayCommand, CancelRemoteDayHandler, CancelRemoteDayResult};
pub use record_attendance::{
    RecordAttendanceCommand, RecordAttendanceHandler, RecordAttendanceResult,
};
pub use resolve_request::{
    ResolveRemoteDayCommand, ResolveRemoteDayHandler, ResolveRemoteDayResult,
};
pub use submit_request::{
    SubmitRemoteDayCommand, SubmitRemoteDayHandler, SubmitRemoteDayResult,
};

use crate::domain::rewards::RewardError;
use crate::ports::StoreError;

/// Folds port-level store failures into the reward taxonomy.
fn reward_store_error(err: StoreError) -> RewardError {
    match err {
        StoreError::VersionConflict => {
            RewardError::concurrent_modification("stored row changed underneath the write")
        }
        other => RewardError::store(other.to_string()),
    }
}
