//! Anchor day consensus module.
//!
//! Determines which days a team converges on for shared office presence,
//! either from filed schedules or from explicit ballots.
//!
//! # Module Structure
//!
//! - `consensus` - Strict-majority anchor day calculators
//! - `vote` - TeamVote ballot value object

mod consensus;
mod vote;

pub use consensus::{compute_anchor_days, compute_voted_anchor_days, AnchorDayTally};
pub use vote::TeamVote;
