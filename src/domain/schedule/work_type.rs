//! Work type classification for schedule entries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a person plans to work (or worked) on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    /// Present in the office for the day.
    Office,

    /// Working fully remote for the day.
    Remote,

    /// Hybrid/undecided day. Counts as remote for compliance purposes
    /// since presence cannot be assumed.
    Flexible,
}

impl WorkType {
    /// Returns true if this work type counts toward office attendance.
    pub fn counts_as_office(&self) -> bool {
        matches!(self, WorkType::Office)
    }

    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Office => "office",
            WorkType::Remote => "remote",
            WorkType::Flexible => "flexible",
        }
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
