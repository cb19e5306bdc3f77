//! CheckComplianceHandler - Query handler for weekly RTO compliance.

use std::sync::Arc;

use crate::domain::foundation::{TeamId, UserId};
use crate::domain::schedule::{check_compliance, ComplianceResult, RtoPolicy, ScheduleError, WorkWeek};
use crate::ports::{PolicyStore, ScheduleStore};

/// Query for one member's compliance over one working week.
#[derive(Debug, Clone)]
pub struct CheckComplianceQuery {
    pub user_id: UserId,
    pub team_id: TeamId,
    pub week: WorkWeek,
}

/// Handler for checking a member's week against the team's office-day
/// requirement.
///
/// Only entries inside Monday through Friday of the queried week are
/// considered; weekend entries never count either way.
pub struct CheckComplianceHandler {
    schedule_store: Arc<dyn ScheduleStore>,
    policy_store: Arc<dyn PolicyStore>,
    default_policy: RtoPolicy,
}

impl CheckComplianceHandler {
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
        query: CheckComplianceQuery,
    ) -> Result<ComplianceResult, ScheduleError> {
        // 1. Resolve the governing policy
        let policy = self
            .policy_store
            .find_by_team(&query.team_id)
            .await
            .map_err(|e| ScheduleError::store(e.to_string()))?
            .unwrap_or_else(|| self.default_policy.clone());

        // 2. Fetch the member's entries for the working week
        let entries = self
            .schedule_store
            .find_by_user_in_range(&query.user_id, query.week.monday(), query.week.friday())
            .await
            .map_err(|e| ScheduleError::store(e.to_string()))?;

        // 3. Evaluate
        check_compliance(&entries, u32::from(policy.required_office_days()))
    }
}
