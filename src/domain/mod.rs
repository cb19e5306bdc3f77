//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, events)
//! - `schedule` - Work schedules, RTO policy, and compliance checking
//! - `rewards` - Attendance-to-reward ledger and remote-day requests
//! - `anchor` - Anchor day consensus from schedules and ballots

pub mod anchor;
pub mod foundation;
pub mod rewards;
pub mod schedule;
