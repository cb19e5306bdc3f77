//! Rewards domain module.
//!
//! Handles the attendance-to-reward ledger: office attendance accrues
//! fractional day credits, streaks award bonuses, and remote-day requests
//! reserve, restore, or commit credits through their lifecycle.
//!
//! # Module Structure
//!
//! - `accrual` - Accrual model variants and per-day credit computation
//! - `balance` - RewardBalance aggregate (the per-user, per-team ledger)
//! - `errors` - Reward context error types
//! - `events` - Domain events emitted by ledger mutations
//! - `request` - RemoteDayRequest aggregate and its status state machine

mod accrual;
mod balance;
mod errors;
mod events;
mod request;

pub use accrual::{AccrualCredit, AccrualModel};
pub use balance::{AttendanceOutcome, RewardBalance};
pub use errors::RewardError;
pub use events::RewardEvent;
pub use request::{RemoteDayRequest, RequestStatus};
