//! RecordAttendanceHandler - Command handler for recording office attendance.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{
    DayCredits, EventId, SerializableDomainEvent, TeamId, UserId, WorkDate,
};
use crate::domain::rewards::{AccrualModel, RewardBalance, RewardError, RewardEvent};
use crate::ports::{BalanceStore, Clock, EventPublisher, StoreError, WorkingDayCalendar};

use super::reward_store_error;

/// Command to record a qualifying office day.
#[derive(Debug, Clone)]
pub struct RecordAttendanceCommand {
    pub user_id: UserId,
    pub team_id: TeamId,
    pub date: WorkDate,
}

/// Result of successfully recorded attendance.
#[derive(Debug, Clone)]
pub struct RecordAttendanceResult {
    /// Total credit added, streak bonus included.
    pub credited: DayCredits,
    pub streak_bonus: Option<DayCredits>,
    pub streak: u32,
    /// Spendable credits after this attendance landed.
    pub current_balance: DayCredits,
}

/// Handler for recording office attendance.
///
/// Creates the member's balance row on first attendance. Writes go
/// through a bounded compare-and-set retry loop; losing every attempt
/// surfaces `ConcurrentModification`.
pub struct RecordAttendanceHandler {
    balance_store: Arc<dyn BalanceStore>,
    calendar: Arc<dyn WorkingDayCalendar>,
    event_publisher: Arc<dyn EventPublisher>,
    clock: Arc<dyn Clock>,
    default_model: AccrualModel,
    max_write_attempts: u32,
}

impl RecordAttendanceHandler {
    pub fn new(
        balance_store: Arc<dyn BalanceStore>,
        calendar: Arc<dyn WorkingDayCalendar>,
        event_publisher: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
        default_model: AccrualModel,
        max_write_attempts: u32,
    ) -> Self {
        Self {
            balance_store,
            calendar,
            event_publisher,
            clock,
            default_model,
            max_write_attempts,
        }
    }

    pub async fn handle(
        &self,
        cmd: RecordAttendanceCommand,
    ) -> Result<RecordAttendanceResult, RewardError> {
        for attempt in 1..=self.max_write_attempts {
            // 1. Load the balance, or start a fresh one on first attendance
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

            // 2. Ask the calendar which day would extend the streak
            let next_working_day = balance
                .last_office_day
                .and_then(|day| self.calendar.next_working_day_after(&cmd.team_id, day));

            // 3. Apply the attendance (domain logic)
            let outcome = balance.record_office_attendance(cmd.date, next_working_day)?;

            // 4. Persist through the version guard
            match self.balance_store.put(&balance, expected).await {
                Ok(_) => {
                    // 5. Publish the ledger events
                    let occurred_at = self.clock.now();
                    let mut events = vec![RewardEvent::AttendanceRecorded {
                        event_id: EventId::new(),
                        user_id: cmd.user_id.clone(),
                        team_id: cmd.team_id.clone(),
                        date: cmd.date,
                        credited: outcome.credited,
                        streak: outcome.streak,
                        occurred_at,
                    }];
                    if let Some(bonus) = outcome.streak_bonus {
                        events.push(RewardEvent::StreakBonusAwarded {
                            event_id: EventId::new(),
                            user_id: cmd.user_id.clone(),
                            team_id: cmd.team_id.clone(),
                            streak: outcome.streak,
                            bonus,
                            occurred_at,
                        });
                    }
                    let envelopes = events.iter().map(|e| e.to_envelope()).collect();
                    self.event_publisher.publish_all(envelopes).await?;

                    return Ok(RecordAttendanceResult {
                        credited: outcome.credited,
                        streak_bonus: outcome.streak_bonus,
                        streak: outcome.streak,
                        current_balance: balance.current,
                    });
                }
                Err(StoreError::VersionConflict) if attempt < self.max_write_attempts => {
                    debug!(
                        user_id = %cmd.user_id,
                        attempt,
                        "Balance version conflict, retrying"
                    );
                    continue;
                }
                Err(err) => return Err(reward_store_error(err)),
            }
        }

        Err(RewardError::concurrent_modification(
            "balance write attempts exhausted",
        ))
    }
}
