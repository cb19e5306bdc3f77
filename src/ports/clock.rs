//! Clock port - Injected time source.
//!
//! Handlers never read the system clock directly; they take time from
//! this port so tests and replays can pin it.

use crate::domain::foundation::{Timestamp, WorkDate};

/// Port for the current time.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Timestamp;

    /// The current calendar date.
    fn today(&self) -> WorkDate;
}
