//! Reward ledger domain events.
//!
//! Events emitted by ledger and request-lifecycle mutations. Consumed by
//! the notification fan-out and audit plumbing; delivery lives outside
//! this engine.
//!
//! # Event Naming Convention
//!
//! Events are named in past tense to indicate something that has already
//! happened: `AttendanceRecorded` not `RecordAttendance`.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DayCredits, DomainEvent, EventId, RequestId, TeamId, Timestamp, UserId, WorkDate,
};

/// Events that occur on the reward ledger and request lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardEvent {
    /// A qualifying office day was recorded and credited.
    AttendanceRecorded {
        event_id: EventId,
        user_id: UserId,
        team_id: TeamId,
        date: WorkDate,
        credited: DayCredits,
        streak: u32,
        occurred_at: Timestamp,
    },

    /// A streak bonus fired on top of a recorded office day.
    StreakBonusAwarded {
        event_id: EventId,
        user_id: UserId,
        team_id: TeamId,
        streak: u32,
        bonus: DayCredits,
        occurred_at: Timestamp,
    },

    /// A remote-day request was submitted and its reservation debited.
    RemoteDayRequested {
        event_id: EventId,
        request_id: RequestId,
        user_id: UserId,
        team_id: TeamId,
        date: WorkDate,
        days_requested: u32,
        reserved: DayCredits,
        requires_high_limit_approval: bool,
        occurred_at: Timestamp,
    },

    /// A pending request was withdrawn and its reservation restored.
    RequestCancelled {
        event_id: EventId,
        request_id: RequestId,
        user_id: UserId,
        team_id: TeamId,
        restored: DayCredits,
        occurred_at: Timestamp,
    },

    /// A pending request was approved or rejected.
    ///
    /// Approval commits the reservation into usage; rejection restores it.
    /// `settled` is the reservation amount either way.
    RequestResolved {
        event_id: EventId,
        request_id: RequestId,
        user_id: UserId,
        team_id: TeamId,
        approved: bool,
        settled: DayCredits,
        occurred_at: Timestamp,
    },
}

impl RewardEvent {
    /// Returns the user this event concerns.
    pub fn user_id(&self) -> &UserId {
        match self {
            RewardEvent::AttendanceRecorded { user_id, .. }
            | RewardEvent::StreakBonusAwarded { user_id, .. }
            | RewardEvent::RemoteDayRequested { user_id, .. }
            | RewardEvent::RequestCancelled { user_id, .. }
            | RewardEvent::RequestResolved { user_id, .. } => user_id,
        }
    }

    /// Returns the team context of this event.
    pub fn team_id(&self) -> &TeamId {
        match self {
            RewardEvent::AttendanceRecorded { team_id, .. }
            | RewardEvent::StreakBonusAwarded { team_id, .. }
            | RewardEvent::RemoteDayRequested { team_id, .. }
            | RewardEvent::RequestCancelled { team_id, .. }
            | RewardEvent::RequestResolved { team_id, .. } => team_id,
        }
    }
}

impl DomainEvent for RewardEvent {
    fn event_type(&self) -> &'static str {
        match self {
            RewardEvent::AttendanceRecorded { .. } => "rewards.attendance_recorded.v1",
            RewardEvent::StreakBonusAwarded { .. } => "rewards.streak_bonus_awarded.v1",
            RewardEvent::RemoteDayRequested { .. } => "rewards.remote_day_requested.v1",
            RewardEvent::RequestCancelled { .. } => "rewards.request_cancelled.v1",
            RewardEvent::RequestResolved { .. } => "rewards.request_resolved.v1",
        }
    }

    fn schema_version(&self) -> u32 {
        1
    }

    fn aggregate_id(&self) -> String {
        match self {
            // Ledger events aggregate on the (user, team) balance key.
            RewardEvent::AttendanceRecorded {
                user_id, team_id, ..
            }
            | RewardEvent::StreakBonusAwarded {
                user_id, team_id, ..
            } => format!("{}:{}", user_id, team_id),
            RewardEvent::RemoteDayRequested { request_id, .. }
            | RewardEvent::RequestCancelled { request_id, .. }
            | RewardEvent::RequestResolved { request_id, .. } => request_id.to_string(),
        }
    }

    fn aggregate_type(&self) -> &'static str {
        match self {
            RewardEvent::AttendanceRecorded { .. } | RewardEvent::StreakBonusAwarded { .. } => {
                "RewardBalance"
            }
            RewardEvent::RemoteDayRequested { .. }
            | RewardEvent::RequestCancelled { .. }
            | RewardEvent::RequestResolved { .. } => "RemoteDayRequest",
        }
    }

    fn occurred_at(&self) -> Timestamp {
        match self {
            RewardEvent::AttendanceRecorded { occurred_at, .. }
            | RewardEvent::StreakBonusAwarded { occurred_at, .. }
            | RewardEvent::RemoteDayRequested { occurred_at, .. }
            | RewardEvent::RequestCancelled { occurred_at, .. }
            | RewardEvent::RequestResolved { occurred_at, .. } => *occurred_at,
        }
    }

    fn event_id(&self) -> EventId {
        match self {
            RewardEvent::AttendanceRecorded { event_id, .. }
            | RewardEvent::StreakBonusAwarded { event_id, .. }
            | RewardEvent::RemoteDayRequested { event_id, .. }
            | RewardEvent::RequestCancelled { event_id, .. }
            | RewardEvent::RequestResolved { event_id, .. } => event_id.clone(),
        }
    }
}
