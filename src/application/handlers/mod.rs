//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod anchor;
pub mod rewards;
pub mod schedule;

pub use anchor::{
    CastVoteCommand, CastVoteHandler, CastVoteResult, ComputeAnchorDaysHandler,
    ComputeAnchorDaysQuery, ComputeAnchorDaysResult, ComputeVotedAnchorDaysHandler,
    ComputeVotedAnchorDaysQuery,
};
pub use rewards::{
    CancelRemoteDayCommand, CancelRemoteDayHandler, CancelRemoteDayResult,
    RecordAttendanceCommand, RecordAttendanceHandler, RecordAttendanceResult,
    ResolveRemoteDayCommand, ResolveRemoteDayHandler, ResolveRemoteDayResult,
    SubmitRemoteDayCommand, SubmitRemoteDayHandler, SubmitRemoteDayResult,
};
pub use schedule::{
    CheckComplianceHandler, CheckComplianceQuery, UpsertScheduleCommand, UpsertScheduleHandler,
    UpsertScheduleResult,
};
