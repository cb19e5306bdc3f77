//! Anchor-day consensus handlers.
//!
//! Two consensus sources: declared schedules (who said they would be in
//! the office) and explicit ballots (who wants which days). Both use the
//! same strict-majority rule over the roster size.

mod cast_vote;
mod compute_anchor_days;
mod compute_voted_anchor_days;

pub use cast_vote::{CastVoteCommand, CastVoteHandler, CastVoteResult};
pub use compute_anchor_days::{
    ComputeAnchorDaysHandler, ComputeAnchorDaysQuery, ComputeAnchorDaysResult,
};
pub use compute_voted_anchor_days::{ComputeVotedAnchorDaysHandler, ComputeVotedAnchorDaysQuery};
