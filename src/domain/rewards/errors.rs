//! Reward ledger and request lifecycle error types.

use crate::domain::foundation::{DomainError, ErrorCode, RequestId, ValidationError, WorkDate};

/// Errors raised by the reward ledger, accrual engine, and request
/// lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum RewardError {
    /// Accrual model or policy parameters are invalid (zero ratio, zero
    /// streak threshold). A setup defect, never retried.
    Configuration { message: String },

    /// Malformed request input (e.g. zero days requested). Rejected
    /// synchronously, never persisted.
    InvalidRequest { message: String },

    /// An operation was attempted on a request already in a terminal
    /// state. No mutation occurs.
    InvalidState { current: String, attempted: String },

    /// Attendance recorded out of chronological order for a user.
    /// The caller must replay in date order.
    AttendanceOutOfOrder {
        date: WorkDate,
        last_office_day: WorkDate,
    },

    /// Optimistic-concurrency precondition failed on a ledger write.
    /// The only error kind callers retry routinely.
    ConcurrentModification { message: String },

    /// Request was not found.
    RequestNotFound(RequestId),

    /// The backing store failed.
    Store(String),
}

impl RewardError {
    // Constructor functions for cleaner error creation

    pub fn configuration(message: impl Into<String>) -> Self {
        RewardError::Configuration {
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        RewardError::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn invalid_state(current: impl Into<String>, attempted: impl Into<String>) -> Self {
        RewardError::InvalidState {
            current: current.into(),
            attempted: attempted.into(),
        }
    }

    pub fn attendance_out_of_order(date: WorkDate, last_office_day: WorkDate) -> Self {
        RewardError::AttendanceOutOfOrder {
            date,
            last_office_day,
        }
    }

    pub fn concurrent_modification(message: impl Into<String>) -> Self {
        RewardError::ConcurrentModification {
            message: message.into(),
        }
    }

    pub fn request_not_found(id: RequestId) -> Self {
        RewardError::RequestNotFound(id)
    }

    pub fn store(message: impl Into<String>) -> Self {
        RewardError::Store(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RewardError::Configuration { .. } => ErrorCode::ConfigurationInvalid,
            RewardError::InvalidRequest { .. } => ErrorCode::InvalidRequest,
            RewardError::InvalidState { .. } => ErrorCode::InvalidStateTransition,
            RewardError::AttendanceOutOfOrder { .. } => ErrorCode::AttendanceOutOfOrder,
            RewardError::ConcurrentModification { .. } => ErrorCode::ConcurrentModification,
            RewardError::RequestNotFound(_) => ErrorCode::RequestNotFound,
            RewardError::Store(_) => ErrorCode::StoreFailure,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            RewardError::Configuration { message } => {
                format!("Invalid accrual configuration: {}", message)
            }
            RewardError::InvalidRequest { message } => {
                format!("Invalid request: {}", message)
            }
            RewardError::InvalidState { current, attempted } => {
                format!("Cannot {} a request in {} state", attempted, current)
            }
            RewardError::AttendanceOutOfOrder {
                date,
                last_office_day,
            } => {
                format!(
                    "Attendance for {} is not after the last recorded office day {}",
                    date, last_office_day
                )
            }
            RewardError::ConcurrentModification { message } => {
                format!("Concurrent modification: {}", message)
            }
            RewardError::RequestNotFound(id) => format!("Request not found: {}", id),
            RewardError::Store(msg) => format!("Store error: {}", msg),
        }
    }

    /// Returns true if this error should trigger a retry.
    ///
    /// Only concurrency conflicts qualify; every other kind reports a
    /// defect the caller must fix rather than replay.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RewardError::ConcurrentModification { .. })
    }
}

impl std::fmt::Display for RewardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RewardError {}

impl From<ValidationError> for RewardError {
    fn from(err: ValidationError) -> Self {
        RewardError::InvalidRequest {
            message: err.to_string(),
        }
    }
}

impl From<RewardError> for DomainError {
    fn from(err: RewardError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

/// Cross-context errors (event publishing, foundation plumbing) fold
/// back into the reward taxonomy by code.
impl From<DomainError> for RewardError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ConcurrentModification => {
                RewardError::concurrent_modification(err.message)
            }
            _ => RewardError::store(err.message),
        }
    }
}
