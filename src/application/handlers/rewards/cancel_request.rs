//! CancelRemoteDayHandler - Command handler for withdrawing pending requests.

use std::sync::Arc;

use crate::domain::foundation::{DayCredits, EventId, RequestId, SerializableDomainEvent};
use crate::domain::rewards::{RemoteDayRequest, RewardError, RewardEvent};
use crate::ports::{BalanceStore, Clock, EventPublisher, RequestStore, StoreError};

use super::reward_store_error;

/// Command to cancel a pending remote-day request.
#[derive(Debug, Clone)]
pub struct CancelRemoteDayCommand {
    pub request_id: RequestId,
}

/// Result of a successful cancellation.
#[derive(Debug, Clone)]
pub struct CancelRemoteDayResult {
    pub request: RemoteDayRequest,
    /// Credits put back on the balance.
    pub restored: DayCredits,
}

/// Handler for cancelling pending remote-day requests.
///
/// The terminal request row is written before the balance restore, so a
/// replayed cancel fails the state transition instead of restoring twice.
pub struct CancelRemoteDayHandler {
    request_store: Arc<dyn RequestStore>,
    balance_store: Arc<dyn BalanceStore>,
    event_publisher: Arc<dyn EventPublisher>,
    clock: Arc<dyn Clock>,
    max_write_attempts: u32,
}

impl CancelRemoteDayHandler {
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
        cmd: CancelRemoteDayCommand,
    ) -> Result<CancelRemoteDayResult, RewardError> {
        // 1. Load the request
        let mut request = self
            .request_store
            .find_by_id(&cmd.request_id)
            .await
            .map_err(reward_store_error)?
            .ok_or_else(|| RewardError::request_not_found(cmd.request_id))?;

        // 2. Transition to Cancelled (terminal rows reject this)
        request.cancel(self.clock.now())?;

        // 3. Persist the terminal row before touching the balance
        self.request_store
            .update(&request)
            .await
            .map_err(reward_store_error)?;

        // 4. Restore the recorded reservation
        let restored = request.reserved;
        if !restored.is_zero() {
            self.restore_reservation(&request, restored).await?;
        }

        // 5. Publish the cancellation event
        let event = RewardEvent::RequestCancelled {
            event_id: EventId::new(),
            request_id: request.id,
            user_id: request.user_id.clone(),
            team_id: request.team_id.clone(),
            restored,
            occurred_at: self.clock.now(),
        };
        self.event_publisher.publish(event.to_envelope()).await?;

        Ok(CancelRemoteDayResult { request, restored })
    }

    async fn restore_reservation(
        &self,
        request: &RemoteDayRequest,
        restored: DayCredits,
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
            balance.restore_reservation(restored);

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::FixedClock;
    use crate::domain::foundation::{DomainError, EventEnvelope, TeamId, UserId, WorkDate};
    use crate::domain::rewards::{AccrualModel, RequestStatus, RewardBalance};
    use crate::ports::{Version, VersionedBalance};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct MockBalanceStore {
        rows: Mutex<HashMap<(UserId, TeamId), (RewardBalance, Version)>>,
    }

    impl MockBalanceStore {
        fn new() -> Self {
            Self {
                rows: Mutex::new(HashMap::new()),
            }
        }

        fn with_balance(balance: RewardBalance) -> Self {
            let store = Self::new();
            store.rows.lock().unwrap().insert(
                (balance.user_id.clone(), balance.team_id.clone()),
                (balance, Version::INITIAL),
            );
            store
        }

        fn stored(&self, user_id: &UserId, team_id: &TeamId) -> Option<RewardBalance> {
            self.rows
                .lock()
                .unwrap()
                .get(&(user_id.clone(), team_id.clone()))
                .map(|(balance, _)| balance.clone())
        }
    }

    #[async_trait]
    impl BalanceStore for MockBalanceStore {
        async fn load(
            &self,
            user_id: &UserId,
            team_id: &TeamId,
        ) -> Result<Option<VersionedBalance>, StoreError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .get(&(user_id.clone(), team_id.clone()))
                .map(|(balance, version)| VersionedBalance {
                    balance: balance.clone(),
                    version: *version,
                }))
        }

        async fn put(
            &self,
            balance: &RewardBalance,
            expected: Option<Version>,
        ) -> Result<Version, StoreError> {
            let mut rows = self.rows.lock().unwrap();
            let key = (balance.user_id.clone(), balance.team_id.clone());
            let new_version = match (rows.get(&key), expected) {
                (None, None) => Version::INITIAL,
                (Some((_, stored)), Some(version)) if *stored == version => version.next(),
                _ => return Err(StoreError::VersionConflict),
            };
            rows.insert(key, (balance.clone(), new_version));
            Ok(new_version)
        }
    }

    struct MockRequestStore {
        rows: Mutex<HashMap<RequestId, RemoteDayRequest>>,
        fail_update: bool,
    }

    impl MockRequestStore {
        fn with_request(request: RemoteDayRequest) -> Self {
            let store = Self {
                rows: Mutex::new(HashMap::new()),
                fail_update: false,
            };
            store.rows.lock().unwrap().insert(request.id, request);
            store
        }

        fn failing_update(request: RemoteDayRequest) -> Self {
            let rows = Mutex::new(HashMap::new());
            rows.lock().unwrap().insert(request.id, request);
            Self {
                rows,
                fail_update: true,
            }
        }

        fn stored(&self, id: &RequestId) -> Option<RemoteDayRequest> {
            self.rows.lock().unwrap().get(id).cloned()
        }
    }

    #[async_trait]
    impl RequestStore for MockRequestStore {
        async fn save(&self, request: &RemoteDayRequest) -> Result<(), StoreError> {
            self.rows.lock().unwrap().insert(request.id, request.clone());
            Ok(())
        }

        async fn update(&self, request: &RemoteDayRequest) -> Result<(), StoreError> {
            if self.fail_update {
                return Err(StoreError::Backend("simulated update failure".into()));
            }
            self.rows.lock().unwrap().insert(request.id, request.clone());
            Ok(())
        }

        async fn find_by_id(
            &self,
            id: &RequestId,
        ) -> Result<Option<RemoteDayRequest>, StoreError> {
            Ok(self.rows.lock().unwrap().get(id).cloned())
        }
    }

    struct MockEventPublisher {
        published_events: Mutex<Vec<EventEnvelope>>,
    }

    impl MockEventPublisher {
        fn new() -> Self {
            Self {
                published_events: Mutex::new(Vec::new()),
            }
        }

        fn published_events(&self) -> Vec<EventEnvelope> {
            self.published_events.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EventPublisher for MockEventPublisher {
        async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
            self.published_events.lock().unwrap().push(event);
            Ok(())
        }

        async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
            self.published_events.lock().unwrap().extend(events);
            Ok(())
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn test_user_id() -> UserId {
        UserId::new("user-test-1").unwrap()
    }

    fn test_team_id() -> TeamId {
        TeamId::new("team-test-1").unwrap()
    }

    fn friday() -> WorkDate {
        WorkDate::new(2025, 3, 21).unwrap()
    }

    fn balance_after_reserving(days: u32, reserve: u32) -> (RewardBalance, DayCredits) {
        let mut balance = RewardBalance::new(
            test_user_id(),
            test_team_id(),
            AccrualModel::SimpleThreeToOne,
        );
        balance.current = DayCredits::whole(days);
        balance.total_earned = DayCredits::whole(days);
        let reserved = balance.reserve(reserve).unwrap();
        (balance, reserved)
    }

    fn pending_request(reserved: DayCredits) -> RemoteDayRequest {
        RemoteDayRequest::new(
            RequestId::new(),
            test_user_id(),
            test_team_id(),
            friday(),
            1,
            reserved,
            None,
            FixedClock::at_midnight(friday()).now(),
        )
    }

    fn handler_with(
        requests: Arc<MockRequestStore>,
        balances: Arc<MockBalanceStore>,
        publisher: Arc<MockEventPublisher>,
    ) -> CancelRemoteDayHandler {
        CancelRemoteDayHandler::new(
            requests,
            balances,
            publisher,
            Arc::new(FixedClock::at_midnight(friday())),
            3,
        )
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn cancelling_restores_the_reservation() {
        let (balance, reserved) = balance_after_reserving(3, 1);
        let request = pending_request(reserved);
        let request_id = request.id;

        let balances = Arc::new(MockBalanceStore::with_balance(balance));
        let requests = Arc::new(MockRequestStore::with_request(request));
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = handler_with(requests.clone(), balances.clone(), publisher);

        let result = handler
            .handle(CancelRemoteDayCommand { request_id })
            .await
            .unwrap();

        assert_eq!(result.restored, DayCredits::ONE_DAY);
        assert_eq!(result.request.status, RequestStatus::Cancelled);
        assert!(result.request.resolved_at.is_some());

        let stored = requests.stored(&request_id).unwrap();
        assert_eq!(stored.status, RequestStatus::Cancelled);

        let balance = balances.stored(&test_user_id(), &test_team_id()).unwrap();
        assert_eq!(balance.current, DayCredits::whole(3));
    }

    #[tokio::test]
    async fn zero_reservations_cancel_without_a_balance_write() {
        let request = pending_request(DayCredits::ZERO);
        let request_id = request.id;

        // No balance row at all; nothing needs restoring.
        let balances = Arc::new(MockBalanceStore::new());
        let requests = Arc::new(MockRequestStore::with_request(request));
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = handler_with(requests, balances.clone(), publisher);

        let result = handler
            .handle(CancelRemoteDayCommand { request_id })
            .await
            .unwrap();

        assert!(result.restored.is_zero());
        assert!(balances.stored(&test_user_id(), &test_team_id()).is_none());
    }

    #[tokio::test]
    async fn publishes_the_cancelled_event() {
        let (balance, reserved) = balance_after_reserving(2, 1);
        let request = pending_request(reserved);
        let request_id = request.id;

        let balances = Arc::new(MockBalanceStore::with_balance(balance));
        let requests = Arc::new(MockRequestStore::with_request(request));
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = handler_with(requests, balances, publisher.clone());

        handler
            .handle(CancelRemoteDayCommand { request_id })
            .await
            .unwrap();

        let events = publisher.published_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "rewards.request_cancelled.v1");
        assert_eq!(events[0].aggregate_id, request_id.to_string());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn fails_when_the_request_does_not_exist() {
        let balances = Arc::new(MockBalanceStore::new());
        let requests = Arc::new(MockRequestStore::with_request(pending_request(
            DayCredits::ZERO,
        )));
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = handler_with(requests, balances, publisher.clone());

        let result = handler
            .handle(CancelRemoteDayCommand {
                request_id: RequestId::new(),
            })
            .await;

        assert!(matches!(result, Err(RewardError::RequestNotFound(_))));
        assert!(publisher.published_events().is_empty());
    }

    #[tokio::test]
    async fn replayed_cancel_does_not_restore_twice() {
        let (balance, reserved) = balance_after_reserving(3, 1);
        let request = pending_request(reserved);
        let request_id = request.id;

        let balances = Arc::new(MockBalanceStore::with_balance(balance));
        let requests = Arc::new(MockRequestStore::with_request(request));
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = handler_with(requests, balances.clone(), publisher.clone());

        handler
            .handle(CancelRemoteDayCommand { request_id })
            .await
            .unwrap();
        let replay = handler.handle(CancelRemoteDayCommand { request_id }).await;

        assert!(matches!(replay, Err(RewardError::InvalidState { .. })));
        assert_eq!(publisher.published_events().len(), 1);

        // The balance holds exactly one restore.
        let balance = balances.stored(&test_user_id(), &test_team_id()).unwrap();
        assert_eq!(balance.current, DayCredits::whole(3));
    }

    #[tokio::test]
    async fn update_failures_leave_the_reservation_held() {
        let (balance, reserved) = balance_after_reserving(3, 1);
        let request = pending_request(reserved);
        let request_id = request.id;

        let balances = Arc::new(MockBalanceStore::with_balance(balance));
        let requests = Arc::new(MockRequestStore::failing_update(request));
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = handler_with(requests.clone(), balances.clone(), publisher.clone());

        let result = handler.handle(CancelRemoteDayCommand { request_id }).await;

        assert!(matches!(result, Err(RewardError::Store(_))));
        assert!(publisher.published_events().is_empty());

        // Neither row moved: the request is still pending, the debit stands.
        let stored = requests.stored(&request_id).unwrap();
        assert_eq!(stored.status, RequestStatus::Pending);
        let balance = balances.stored(&test_user_id(), &test_team_id()).unwrap();
        assert_eq!(balance.current, DayCredits::whole(2));
    }
}
