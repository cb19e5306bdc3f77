//! ResolveRemoteDayHandler - Command handler for approving or rejecting requests.

use std::sync::Arc;

use crate::domain::foundation::{DayCredits, EventId, RequestId, SerializableDomainEvent};
use crate::domain::rewards::{RemoteDayRequest, RewardError, RewardEvent};
use crate::ports::{BalanceStore, Clock, EventPublisher, RequestStore, StoreError};

use super::reward_store_error;

/// Command to resolve a pending remote-day request.
#[derive(Debug, Clone)]
pub struct ResolveRemoteDayCommand {
    pub request_id: RequestId,
    /// Approval commits the reservation into usage; rejection restores it.
    pub approved: bool,
}

/// Result of a successful resolution.
#[derive(Debug, Clone)]
pub struct ResolveRemoteDayResult {
    pub request: RemoteDayRequest,
    pub approved: bool,
    /// The reservation that was committed (approval) or restored
    /// (rejection).
    pub settled: DayCredits,
}

/// Handler for resolving pending remote-day requests.
///
/// The terminal request row is written before the balance settles, so a
/// replayed resolution fails the state transition instead of settling
/// twice. Requests flagged `requires_high_limit_approval` carry no extra
/// machinery here; the flag tells the approving caller what they are
/// signing off on.
pub struct ResolveRemoteDayHandler {
    request_store: Arc<dyn RequestStore>,
    balance_store: Arc<dyn BalanceStore>,
    event_publisher: Arc<dyn EventPublisher>,
    clock: Arc<dyn Clock>,
    max_write_attempts: u32,
}

impl ResolveRemoteDayHandler {
    pub fn new(
        request_store: Arc<dyn RequestStore>,
        balance_store: Arc<dyn BalanceStore>,
        event_publisher: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
        max_write_attempts: u32,
    ) -> Self {
        Self {
            request_store,
            balance_store,
            event_publisher,
            clock,
            max_write_attempts,
        }
    }

    pub async fn handle(
        &self,
        cmd: ResolveRemoteDayCommand,
    ) -> Result<ResolveRemoteDayResult, RewardError> {
        // 1. Load the request
        let mut request = self
            .request_store
            .find_by_id(&cmd.request_id)
            .await
            .map_err(reward_store_error)?
            .ok_or_else(|| RewardError::request_not_found(cmd.request_id))?;

        // 2. Transition to the terminal state (terminal rows reject this)
        let now = self.clock.now();
        if cmd.approved {
            request.approve(now)?;
        } else {
            request.reject(now)?;
        }

        // 3. Persist the terminal row before touching the balance
        self.request_store
            .update(&request)
            .await
            .map_err(reward_store_error)?;

        // 4. Settle the recorded reservation
        let settled = request.reserved;
        if !settled.is_zero() {
            self.settle_balance(&request, cmd.approved, settled).await?;
        }

        // 5. Publish the resolution event
        let event = RewardEvent::RequestResolved {
            event_id: EventId::new(),
            request_id: request.id,
            user_id: request.user_id.clone(),
            team_id: request.team_id.clone(),
            approved: cmd.approved,
            settled,
            occurred_at: self.clock.now(),
        };
        self.event_publisher.publish(event.to_envelope()).await?;

        Ok(ResolveRemoteDayResult {
            request,
            approved: cmd.approved,
            settled,
        })
    }

    async fn settle_balance(
        &self,
        request: &RemoteDayRequest,
        approved: bool,
        settled: DayCredits,
    ) -> Result<(), RewardError> {
        for attempt in 1..=self.max_write_attempts {
            let versioned = self
                .balance_store
                .load(&request.user_id, &request.team_id)
                .await
                .map_err(reward_store_error)?
                .ok_or_else(|| {
                    RewardError::store(format!(
                        "balance missing for {} in {}",
                        request.user_id, request.team_id
                    ))
                })?;

            let mut balance = versioned.balance;
            if approved {
                balance.commit_spend(settled);
            } else {
                balance.restore_reservation(settled);
            }

            match self.balance_store.put(&balance, Some(versioned.version)).await {
                Ok(_) => return Ok(()),
                Err(StoreError::VersionConflict) if attempt < self.max_write_attempts => continue,
                Err(err) => return Err(reward_store_error(err)),
            }
        }

        Err(RewardError::concurrent_modification(
            "settlement write attempts exhausted",
        ))
    }
}
