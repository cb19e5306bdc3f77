//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Reward ledger handlers
    RecordAttendanceCommand, RecordAttendanceHandler, RecordAttendanceResult,
    SubmitRemoteDayCommand, SubmitRemoteDayHandler, SubmitRemoteDayResult,
    CancelRemoteDayCommand, CancelRemoteDayHandler, CancelRemoteDayResult,
    ResolveRemoteDayCommand, ResolveRemoteDayHandler, ResolveRemoteDayResult,
    // Schedule handlers
    UpsertScheduleCommand, UpsertScheduleHandler, UpsertScheduleResult,
    CheckComplianceHandler, CheckComplianceQuery,
    // Anchor-day consensus handlers
    CastVoteCommand, CastVoteHandler, CastVoteResult,
    ComputeAnchorDaysHandler, ComputeAnchorDaysQuery, ComputeAnchorDaysResult,
    ComputeVotedAnchorDaysHandler, ComputeVotedAnchorDaysQuery,
};
