//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Accrual ratio must be at least 1")]
    InvalidAccrualRatio,

    #[error("Streak threshold must be at least 1")]
    InvalidStreakThreshold,

    #[error("Write attempts must be at least 1")]
    InvalidWriteAttempts,

    #[error("Required office days cannot exceed the 5-day working week")]
    InvalidOfficeDayRequirement,

    #[error("Core hours start must come before the end, within a single day")]
    InvalidCoreHours,

    #[error("Core hours need both a start and an end minute")]
    IncompleteCoreHours,

    #[error("At least one work type must be allowed")]
    NoWorkTypesAllowed,

    #[error("Invalid holiday date: {0}")]
    InvalidHolidayDate(String),
}
