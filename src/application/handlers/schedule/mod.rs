//! Schedule and policy handlers.
//!
//! Handlers for declaring where members work and checking those
//! declarations against the team's return-to-office policy.

mod check_compliance;
mod upsert_schedule;

pub use check_compliance::{CheckComplianceHandler, CheckComplianceQuery};
pub use upsert_schedule::{UpsertScheduleCommand, UpsertScheduleHandler, UpsertScheduleResult};
