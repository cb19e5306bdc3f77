//! Working calendar configuration

use std::collections::HashSet;

use serde::Deserialize;

use crate::domain::foundation::WorkDate;

use super::error::ValidationError;

/// Working calendar configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CalendarConfig {
    /// Comma-separated holiday dates in `YYYY-MM-DD` form
    pub holidays: Option<String>,
}

impl CalendarConfig {
    /// Parses the configured holidays into dates.
    pub fn holiday_dates(&self) -> Result<HashSet<WorkDate>, ValidationError> {
        let Some(raw) = &self.holidays else {
            return Ok(HashSet::new());
        };

        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<WorkDate>()
                    .map_err(|_| ValidationError::InvalidHolidayDate(s.to_string()))
            })
            .collect()
    }

    /// Validate calendar configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.holiday_dates()?;
        Ok(())
    }
}
