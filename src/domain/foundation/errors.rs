//! Error types shared across the domain layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable machine-readable error codes.
///
/// Codes cross process boundaries (logs, stored rejection reasons, API
/// payloads), so variants are append-only and renders are frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,
    BalanceNotFound,
    RequestNotFound,
    PolicyNotFound,
    InvalidStateTransition,
    AttendanceOutOfOrder,
    ConfigurationInvalid,
    InvalidRequest,
    ConcurrentModification,
    StoreFailure,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::EmptyField => "EMPTY_FIELD",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::BalanceNotFound => "BALANCE_NOT_FOUND",
            Self::RequestNotFound => "REQUEST_NOT_FOUND",
            Self::PolicyNotFound => "POLICY_NOT_FOUND",
            Self::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            Self::AttendanceOutOfOrder => "ATTENDANCE_OUT_OF_ORDER",
            Self::ConfigurationInvalid => "CONFIGURATION_INVALID",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::ConcurrentModification => "CONCURRENT_MODIFICATION",
            Self::StoreFailure => "STORE_FAILURE",
            Self::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{code}")
    }
}

/// A domain error with a stable code, human-readable message, and optional
/// structured details for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for DomainError {}

/// Field-level validation failures raised by value-object constructors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("field '{field}' must not be empty")]
    EmptyField { field: String },

    #[error("field '{field}' must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    #[error("field '{field}' is malformed: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
        }
    }

    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            field: field.into(),
            min,
            max,
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The stable code this validation failure maps to at the boundary.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyField { .. } => ErrorCode::EmptyField,
            Self::OutOfRange { .. } => ErrorCode::OutOfRange,
            Self::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        }
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
