//! Return-to-office policy configuration

use serde::Deserialize;

use crate::domain::schedule::{CoreHours, RtoPolicy, WorkType};

use super::error::ValidationError;

/// Default RTO policy applied to teams without a stored one
#[derive(Debug, Clone, Deserialize)]
pub struct RtoConfig {
    /// Office days required per working week
    #[serde(default = "default_required_office_days")]
    pub required_office_days: u8,

    /// Start of the required presence window, minutes from midnight
    pub core_hours_start_minute: Option<u16>,

    /// End of the required presence window, minutes from midnight
    pub core_hours_end_minute: Option<u16>,

    /// Whether members may declare remote days
    #[serde(default = "default_true")]
    pub allow_remote: bool,

    /// Whether members may declare flexible days
    #[serde(default = "default_true")]
    pub allow_flexible: bool,
}

impl RtoConfig {
    /// The core-hours window, when both ends are configured.
    pub fn core_hours(&self) -> Result<Option<CoreHours>, ValidationError> {
        match (self.core_hours_start_minute, self.core_hours_end_minute) {
            (None, None) => Ok(None),
            (Some(start), Some(end)) => CoreHours::new(start, end)
                .map(Some)
                .map_err(|_| ValidationError::InvalidCoreHours),
            _ => Err(ValidationError::IncompleteCoreHours),
        }
    }

    /// Work types members may declare. Office is always allowed.
    pub fn allowed_work_types(&self) -> Vec<WorkType> {
        let mut types = vec![WorkType::Office];
        if self.allow_remote {
            types.push(WorkType::Remote);
        }
        if self.allow_flexible {
            types.push(WorkType::Flexible);
        }
        types
    }

    /// Builds the domain policy these settings describe.
    pub fn policy(&self) -> Result<RtoPolicy, ValidationError> {
        RtoPolicy::new(
            self.required_office_days,
            self.core_hours()?,
            self.allowed_work_types(),
        )
        .map_err(|_| ValidationError::InvalidOfficeDayRequirement)
    }

    /// Validate RTO configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.required_office_days > 5 {
            return Err(ValidationError::InvalidOfficeDayRequirement);
        }
        self.core_hours()?;
        Ok(())
    }
}

impl Default for RtoConfig {
    fn default() -> Self {
        Self {
            required_office_days: default_required_office_days(),
            core_hours_start_minute: None,
            core_hours_end_minute: None,
            allow_remote: true,
            allow_flexible: true,
        }
    }
}

fn default_required_office_days() -> u8 {
    3
}

fn default_true() -> bool {
    true
}
