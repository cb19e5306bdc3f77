//! Reward accrual configuration

use serde::Deserialize;

use crate::domain::rewards::AccrualModel;
use crate::domain::foundation::DayCredits;

use super::error::ValidationError;

/// Reward ledger configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RewardsConfig {
    /// Which accrual model teams run by default
    #[serde(default)]
    pub accrual_model: AccrualModelKind,

    /// Office days per credited day under the ratio model
    #[serde(default = "default_accrual_ratio")]
    pub accrual_ratio: u32,

    /// Consecutive office days per bonus under the streak model
    #[serde(default = "default_streak_threshold")]
    pub streak_threshold: u32,

    /// Whole days awarded when a streak threshold is reached
    #[serde(default = "default_streak_bonus_days")]
    pub streak_bonus_days: u32,

    /// Retries for optimistic ledger writes before giving up
    #[serde(default = "default_write_attempts")]
    pub max_write_attempts: u32,
}

/// Accrual model selector
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccrualModelKind {
    /// One credited day per `accrual_ratio` office days
    RatioBased,

    /// The classic fixed 3:1 ratio
    #[default]
    SimpleThreeToOne,

    /// No per-day credit; whole bonus days on streak thresholds
    StreakBased,
}

impl RewardsConfig {
    /// Builds the domain accrual model these settings describe.
    pub fn accrual_model(&self) -> AccrualModel {
        match self.accrual_model {
            AccrualModelKind::RatioBased => AccrualModel::RatioBased {
                office_to_remote_ratio: self.accrual_ratio,
            },
            AccrualModelKind::SimpleThreeToOne => AccrualModel::SimpleThreeToOne,
            AccrualModelKind::StreakBased => AccrualModel::StreakBased {
                bonus_threshold: self.streak_threshold,
                bonus_amount: DayCredits::whole(self.streak_bonus_days),
            },
        }
    }

    /// Validate rewards configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.accrual_model == AccrualModelKind::RatioBased && self.accrual_ratio == 0 {
            return Err(ValidationError::InvalidAccrualRatio);
        }
        if self.accrual_model == AccrualModelKind::StreakBased && self.streak_threshold == 0 {
            return Err(ValidationError::InvalidStreakThreshold);
        }
        if self.max_write_attempts == 0 {
            return Err(ValidationError::InvalidWriteAttempts);
        }
        Ok(())
    }
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            accrual_model: AccrualModelKind::default(),
            accrual_ratio: default_accrual_ratio(),
            streak_threshold: default_streak_threshold(),
            streak_bonus_days: default_streak_bonus_days(),
            max_write_attempts: default_write_attempts(),
        }
    }
}

fn default_accrual_ratio() -> u32 {
    3
}

fn default_streak_threshold() -> u32 {
    5
}

fn default_streak_bonus_days() -> u32 {
    1
}

fn default_write_attempts() -> u32 {
    3
}
