//! Schedule and policy error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised by schedule writes, policy handling, and compliance checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Policy or checker input is misconfigured (e.g. more required office
    /// days than a working week has).
    Configuration { message: String },

    /// A schedule write or value failed validation.
    Validation { field: String, message: String },

    /// The backing store failed.
    Store(String),
}

impl ScheduleError {
    pub fn configuration(message: impl Into<String>) -> Self {
        ScheduleError::Configuration {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ScheduleError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        ScheduleError::Store(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ScheduleError::Configuration { .. } => ErrorCode::ConfigurationInvalid,
            ScheduleError::Validation { .. } => ErrorCode::ValidationFailed,
            ScheduleError::Store(_) => ErrorCode::StoreFailure,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            ScheduleError::Configuration { message } => {
                format!("Invalid policy configuration: {}", message)
            }
            ScheduleError::Validation { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ScheduleError::Store(msg) => format!("Schedule store error: {}", msg),
        }
    }
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ScheduleError {}

impl From<ValidationError> for ScheduleError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field } => field.clone(),
            ValidationError::OutOfRange { field, .. } => field.clone(),
            ValidationError::InvalidFormat { field, .. } => field.clone(),
        };
        ScheduleError::Validation {
            field,
            message: err.to_string(),
        }
    }
}

impl From<ScheduleError> for DomainError {
    fn from(err: ScheduleError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_creates_correctly() {
        let err = ScheduleError::configuration("required_office_days exceeds 5");
        assert!(matches!(err, ScheduleError::Configuration { .. }));
        assert_eq!(err.code(), ErrorCode::ConfigurationInvalid);
    }

    #[test]
    fn validation_creates_correctly() {
        let err = ScheduleError::validation("work_type", "not allowed by team policy");
        assert!(matches!(
            err,
            ScheduleError::Validation { ref field, .. } if field == "work_type"
        ));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn store_creates_correctly() {
        let err = ScheduleError::store("write failed");
        assert_eq!(err.code(), ErrorCode::StoreFailure);
    }

    #[test]
    fn message_names_the_offending_field() {
        let err = ScheduleError::validation("work_type", "not allowed");
        assert!(err.message().contains("work_type"));
    }

    #[test]
    fn converts_from_validation_error() {
        let err: ScheduleError = ValidationError::out_of_range("required_office_days", 0, 5).into();
        assert!(matches!(
            err,
            ScheduleError::Validation { ref field, .. } if field == "required_office_days"
        ));
    }

    #[test]
    fn converts_to_domain_error() {
        let err = ScheduleError::configuration("bad policy");
        let domain_err: DomainError = err.clone().into();
        assert_eq!(domain_err.code, err.code());
    }

    #[test]
    fn display_matches_message() {
        let err = ScheduleError::store("timeout");
        assert_eq!(format!("{}", err), err.message());
    }
}
