//! Remote-day request aggregate and its lifecycle state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{
    DayCredits, RequestId, StateMachine, TeamId, Timestamp, UserId, WorkDate,
};

use super::RewardError;

/// Lifecycle status of a remote-day request.
///
/// Requests are created `Pending` and move exactly once to a terminal
/// state; they are never re-opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Awaiting resolution; the reservation is held.
    Pending,

    /// Granted; the reservation was committed into usage.
    Approved,

    /// Declined; the reservation was restored.
    Rejected,

    /// Withdrawn by the requester; the reservation was restored.
    Cancelled,
}

impl RequestStatus {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StateMachine for RequestStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use RequestStatus::*;
        matches!(
            (self, target),
            (Pending, Approved) | (Pending, Rejected) | (Pending, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use RequestStatus::*;
        match self {
            Pending => vec![Approved, Rejected, Cancelled],
            Approved => vec![],
            Rejected => vec![],
            Cancelled => vec![],
        }
    }
}

/// A member's request to spend reward credit on remote days.
///
/// # Invariants
///
/// - `days_requested >= 1`
/// - `reserved` is exactly the amount debited from the ledger at
///   submission; terminal transitions settle precisely that amount
/// - `resolved_at` is set iff `status` is terminal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteDayRequest {
    /// Unique identifier; the caller's idempotency key.
    pub id: RequestId,

    /// Member who requested the remote days.
    pub user_id: UserId,

    /// Team whose ledger funds the request.
    pub team_id: TeamId,

    /// First remote day being requested.
    pub date: WorkDate,

    /// Number of remote days requested.
    pub days_requested: u32,

    /// Credit actually debited at submission; `min(days_requested,
    /// balance at the time)`.
    pub reserved: DayCredits,

    /// Lifecycle status.
    pub status: RequestStatus,

    /// Requester's optional note.
    pub reason: Option<String>,

    /// When the request was submitted.
    pub created_at: Timestamp,

    /// When the request reached a terminal state.
    pub resolved_at: Option<Timestamp>,

    /// Multi-day requests need an elevated approver.
    pub requires_high_limit_approval: bool,
}

impl RemoteDayRequest {
    /// Creates a pending request recording an already-made reservation.
    ///
    /// `days_requested` was validated (and `reserved` debited) by the
    /// ledger before this is called.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RequestId,
        user_id: UserId,
        team_id: TeamId,
        date: WorkDate,
        days_requested: u32,
        reserved: DayCredits,
        reason: Option<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            team_id,
            date,
            days_requested,
            reserved,
            status: RequestStatus::Pending,
            reason,
            created_at,
            resolved_at: None,
            requires_high_limit_approval: days_requested > 1,
        }
    }

    /// Withdraws a pending request.
    ///
    /// # Errors
    ///
    /// `InvalidState` when the request is already terminal; no mutation
    /// occurs.
    pub fn cancel(&mut self, resolved_at: Timestamp) -> Result<(), RewardError> {
        self.transition_to(RequestStatus::Cancelled, "cancel", resolved_at)
    }

    /// Approves a pending request.
    ///
    /// # Errors
    ///
    /// `InvalidState` when the request is already terminal.
    pub fn approve(&mut self, resolved_at: Timestamp) -> Result<(), RewardError> {
        self.transition_to(RequestStatus::Approved, "approve", resolved_at)
    }

    /// Rejects a pending request.
    ///
    /// # Errors
    ///
    /// `InvalidState` when the request is already terminal.
    pub fn reject(&mut self, resolved_at: Timestamp) -> Result<(), RewardError> {
        self.transition_to(RequestStatus::Rejected, "reject", resolved_at)
    }

    /// Returns true if the request has reached a terminal state.
    pub fn is_resolved(&self) -> bool {
        self.status.is_terminal()
    }

    fn transition_to(
        &mut self,
        target: RequestStatus,
        attempted: &str,
        resolved_at: Timestamp,
    ) -> Result<(), RewardError> {
        self.status = self
            .status
            .transition_to(target)
            .map_err(|_| RewardError::invalid_state(self.status.as_str(), attempted))?;
        self.resolved_at = Some(resolved_at);
        Ok(())
    }
}
