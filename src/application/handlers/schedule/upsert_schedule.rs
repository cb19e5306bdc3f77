//! UpsertScheduleHandler - Command handler for writing schedule entries.

use std::sync::Arc;

use crate::domain::foundation::{TeamId, UserId, WorkDate};
use crate::domain::schedule::{RtoPolicy, ScheduleError, WorkScheduleEntry, WorkType};
use crate::ports::{PolicyStore, ScheduleStore};

/// Command to declare where a member works on a given date.
#[derive(Debug, Clone)]
pub struct UpsertScheduleCommand {
    pub user_id: UserId,
    /// Team whose policy governs the write.
    pub team_id: TeamId,
    pub date: WorkDate,
    pub work_type: WorkType,
    /// Display hint supplied by the caller, typically from a prior
    /// consensus computation.
    pub is_anchor_day: bool,
}

/// Result of a successful schedule write.
#[derive(Debug, Clone)]
pub struct UpsertScheduleResult {
    pub entry: WorkScheduleEntry,
}

/// Handler for writing one member-day schedule entry.
///
/// The team's policy gates which work types may be declared; teams
/// without a stored policy fall back to the handler's default. Writing
/// the same `(user, date)` again replaces the earlier entry.
pub struct UpsertScheduleHandler {
    schedule_store: Arc<dyn ScheduleStore>,
    policy_store: Arc<dyn PolicyStore>,
    default_policy: RtoPolicy,
}

impl UpsertScheduleHandler {
    pub fn new(
        schedule_store: Arc<dyn ScheduleStore>,
        policy_store: Arc<dyn PolicyStore>,
        default_policy: RtoPolicy,
    ) -> Self {
        Self {
            schedule_store,
            policy_store,
            default_policy,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpsertScheduleCommand,
    ) -> Result<UpsertScheduleResult, ScheduleError> {
        // 1. Resolve the governing policy
        let policy = self
            .policy_store
            .find_by_team(&cmd.team_id)
            .await
            .map_err(|e| ScheduleError::store(e.to_string()))?
            .unwrap_or_else(|| self.default_policy.clone());

        // 2. Gate the work type against it
        if !policy.allows(cmd.work_type) {
            return Err(ScheduleError::validation(
                "work_type",
                format!(
                    "{} is not allowed under the team's policy",
                    cmd.work_type.as_str()
                ),
            ));
        }

        // 3. Write the entry
        let mut entry = WorkScheduleEntry::new(cmd.user_id, cmd.date, cmd.work_type);
        if cmd.is_anchor_day {
            entry = entry.on_anchor_day();
        }

        self.schedule_store
            .upsert(&entry)
            .await
            .map_err(|e| ScheduleError::store(e.to_string()))?;

        Ok(UpsertScheduleResult { entry })
    }
}
