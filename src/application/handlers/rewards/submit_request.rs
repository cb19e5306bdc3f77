//! SubmitRemoteDayHandler - Command handler for submitting remote-day requests.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{
    DayCredits, EventId, RequestId, SerializableDomainEvent, TeamId, UserId, WorkDate,
};
use crate::domain::rewards::{AccrualModel, RemoteDayRequest, RewardBalance, RewardError, RewardEvent};
use crate::ports::{BalanceStore, Clock, EventPublisher, RequestStore, StoreError};

use super::reward_store_error;

/// Command to request one or more remote days.
#[derive(Debug, Clone)]
pub struct SubmitRemoteDayCommand {
    /// Caller-supplied id for idempotent retries; generated when absent.
    pub request_id: Option<RequestId>,
    pub user_id: UserId,
    pub team_id: TeamId,
    pub date: WorkDate,
    pub days_requested: u32,
    pub reason: Option<String>,
}

/// Result of a successfully submitted request.
#[derive(Debug, Clone)]
pub struct SubmitRemoteDayResult {
    pub request: RemoteDayRequest,
    /// Credits actually debited; less than requested when the balance
    /// could not cover the full amount.
    pub reserved: DayCredits,
}

/// Handler for submitting remote-day requests.
///
/// Reservation is optimistic: the balance is debited by
/// `min(days_requested, current)` and the debited amount is recorded on
/// the request, so whatever resolves the request settles exactly that
/// amount. Requests above one day are flagged for high-limit approval.
pub struct SubmitRemoteDayHandler {
    balance_store: Arc<dyn BalanceStore>,
    request_store: Arc<dyn RequestStore>,
    event_publisher: Arc<dyn EventPublisher>,
    clock: Arc<dyn Clock>,
    default_model: AccrualModel,
    max_write_attempts: u32,
}

impl SubmitRemoteDayHandler {
    pub fn new(
        balance_store: Arc<dyn BalanceStore>,
        request_store: Arc<dyn RequestStore>,
        event_publisher: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
        default_model: AccrualModel,
        max_write_attempts: u32,
    ) -> Self {
        Self {
            balance_store,
            request_store,
            event_publisher,
            clock,
            default_model,
            max_write_attempts,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitRemoteDayCommand,
    ) -> Result<SubmitRemoteDayResult, RewardError> {
        // 1. Reserve credits on the balance (bounded CAS loop)
        let reserved = self.reserve_credits(&cmd).await?;

        // 2. Persist the pending request
        let request = RemoteDayRequest::new(
            cmd.request_id.unwrap_or_default(),
            cmd.user_id.clone(),
            cmd.team_id.clone(),
            cmd.date,
            cmd.days_requested,
            reserved,
            cmd.reason.clone(),
            self.clock.now(),
        );

        if let Err(err) = self.request_store.save(&request).await {
            // The reservation must not outlive a request that never landed.
            self.restore_reservation(&cmd.user_id, &cmd.team_id, reserved)
                .await?;
            return Err(match err {
                StoreError::VersionConflict => RewardError::invalid_request(format!(
                    "request {} was already submitted",
                    request.id
                )),
                other => reward_store_error(other),
            });
        }

        // 3. Publish the submission event
        let event = RewardEvent::RemoteDayRequested {
            event_id: EventId::new(),
            request_id: request.id,
            user_id: cmd.user_id.clone(),
            team_id: cmd.team_id.clone(),
            date: cmd.date,
            days_requested: cmd.days_requested,
            reserved,
            requires_high_limit_approval: request.requires_high_limit_approval,
            occurred_at: self.clock.now(),
        };
        self.event_publisher.publish(event.to_envelope()).await?;

        Ok(SubmitRemoteDayResult { request, reserved })
    }

    /// Debits `min(days_requested, current)` from the balance, creating
    /// a zeroed balance row for members who never attended.
    async fn reserve_credits(&self, cmd: &SubmitRemoteDayCommand) -> Result<DayCredits, RewardError> {
        for attempt in 1..=self.max_write_attempts {
            let (mut balance, expected) = match self
                .balance_store
                .load(&cmd.user_id, &cmd.team_id)
                .await
                .map_err(reward_store_error)?
            {
                Some(versioned) => (versioned.balance, Some(versioned.version)),
                None => (
                    RewardBalance::new(
                        cmd.user_id.clone(),
                        cmd.team_id.clone(),
                        self.default_model.clone(),
                    ),
                    None,
                ),
            };

            let reserved = balance.reserve(cmd.days_requested)?;

            match self.balance_store.put(&balance, expected).await {
                Ok(_) => return Ok(reserved),
                Err(StoreError::VersionConflict) if attempt < self.max_write_attempts => {
                    debug!(
                        user_id = %cmd.user_id,
                        attempt,
                        "Balance version conflict while reserving, retrying"
                    );
                    continue;
                }
                Err(err) => return Err(reward_store_error(err)),
            }
        }

        Err(RewardError::concurrent_modification(
            "reservation write attempts exhausted",
        ))
    }

    /// Puts a reservation back after the request row failed to land.
    async fn restore_reservation(
        &self,
        user_id: &UserId,
        team_id: &TeamId,
        reserved: DayCredits,
    ) -> Result<(), RewardError> {
        for attempt in 1..=self.max_write_attempts {
            let versioned = self
                .balance_store
                .load(user_id, team_id)
                .await
                .map_err(reward_store_error)?
                .ok_or_else(|| {
                    RewardError::store(format!("balance missing for {} in {}", user_id, team_id))
                })?;

            let mut balance = versioned.balance;
            balance.restore_reservation(reserved);

            match self.balance_store.put(&balance, Some(versioned.version)).await {
                Ok(_) => return Ok(()),
                Err(StoreError::VersionConflict) if attempt < self.max_write_attempts => continue,
                Err(err) => return Err(reward_store_error(err)),
            }
        }

        Err(RewardError::concurrent_modification(
            "reservation restore attempts exhausted",
        ))
    }
}
