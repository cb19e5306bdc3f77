//! Clock adapters.

use std::sync::RwLock;

use chrono::Utc;

use crate::domain::foundation::{Timestamp, WorkDate};
use crate::ports::Clock;

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    fn today(&self) -> WorkDate {
        WorkDate::from_naive(Utc::now().date_naive())
    }
}

/// A pinned clock for deterministic tests and replays.
///
/// `today()` is always the calendar date of the pinned instant.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned. Acceptable for test
/// and demo infrastructure.
pub struct FixedClock {
    instant: RwLock<Timestamp>,
}

impl FixedClock {
    /// Pins the clock to the given instant.
    pub fn at(instant: Timestamp) -> Self {
        Self {
            instant: RwLock::new(instant),
        }
    }

    /// Pins the clock to midnight UTC of the given date.
    pub fn at_midnight(date: WorkDate) -> Self {
        let midnight = date
            .as_naive()
            .and_hms_opt(0, 0, 0)
            .map(|naive| Timestamp::from_datetime(naive.and_utc()))
            .unwrap_or_else(Timestamp::now);
        Self::at(midnight)
    }

    /// Moves the pinned instant.
    pub fn set(&self, instant: Timestamp) {
        *self
            .instant
            .write()
            .expect("FixedClock: instant write lock poisoned") = instant;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self
            .instant
            .read()
            .expect("FixedClock: instant lock poisoned")
    }

    fn today(&self) -> WorkDate {
        WorkDate::from_naive(self.now().as_datetime().date_naive())
    }
}
