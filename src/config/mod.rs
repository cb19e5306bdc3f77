//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ANCHORWORK_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use anchorwork::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Default accrual model: {:?}", config.rewards.accrual_model());
//! ```

mod calendar;
mod error;
mod rewards;
mod rto;

pub use calendar::CalendarConfig;
pub use error::{ConfigError, ValidationError};
pub use rewards::{AccrualModelKind, RewardsConfig};
pub use rto::RtoConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the Anchorwork engine.
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Every section has working defaults, so an empty environment is valid.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Reward ledger configuration (accrual model, write retries)
    #[serde(default)]
    pub rewards: RewardsConfig,

    /// Default RTO policy for teams without a stored one
    #[serde(default)]
    pub rto: RtoConfig,

    /// Working calendar configuration (holidays)
    #[serde(default)]
    pub calendar: CalendarConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ANCHORWORK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ANCHORWORK__REWARDS__ACCRUAL_MODEL=streak_based` -> `rewards.accrual_model`
    /// - `ANCHORWORK__RTO__REQUIRED_OFFICE_DAYS=2` -> `rto.required_office_days`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ANCHORWORK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation of configuration:
    /// - Accrual parameters for the selected model
    /// - Office-day requirement against the working week
    /// - Core-hours window shape
    /// - Holiday date formats
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.rewards.validate()?;
        self.rto.validate()?;
        self.calendar.validate()?;
        Ok(())
    }
}
