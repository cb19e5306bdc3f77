//! Reward balance aggregate - the ledger of record per (user, team).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DayCredits, TeamId, UserId, WorkDate};

use super::{AccrualModel, RewardError};

/// The reward ledger for one member of one team.
///
/// Only the accrual engine and the request lifecycle mutate a balance;
/// everything else reads it.
///
/// # Invariants
///
/// - `current >= 0` after every operation
/// - `total_earned` and `total_used` never decrease
/// - `current <= total_earned - total_used`, with equality whenever no
///   pending request holds a reservation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardBalance {
    /// Member this ledger belongs to.
    pub user_id: UserId,

    /// Team context; the same user accrues separately per team.
    pub team_id: TeamId,

    /// Spendable credit right now (reservations already deducted).
    pub current: DayCredits,

    /// Lifetime credit earned.
    pub total_earned: DayCredits,

    /// Lifetime credit committed to approved remote days.
    pub total_used: DayCredits,

    /// Consecutive qualifying office days.
    pub streak: u32,

    /// Last office day recorded; attendance must arrive in date order.
    pub last_office_day: Option<WorkDate>,

    /// The accrual model this ledger earns under.
    pub accrual_model: AccrualModel,
}

/// What one recorded office day did to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceOutcome {
    /// Total credit added (per-day credit plus any streak bonus).
    pub credited: DayCredits,

    /// The streak bonus portion, when one fired.
    pub streak_bonus: Option<DayCredits>,

    /// The streak after this day.
    pub streak: u32,
}

impl RewardBalance {
    /// Creates an empty ledger for a member under the given accrual model.
    pub fn new(user_id: UserId, team_id: TeamId, accrual_model: AccrualModel) -> Self {
        Self {
            user_id,
            team_id,
            current: DayCredits::ZERO,
            total_earned: DayCredits::ZERO,
            total_used: DayCredits::ZERO,
            streak: 0,
            last_office_day: None,
            accrual_model,
        }
    }

    /// Records one qualifying office day and credits it per the accrual
    /// model.
    ///
    /// `next_working_day` is the working-day calendar's successor of
    /// `last_office_day` (None when there is no last office day); the
    /// streak continues only when `date` is exactly that day.
    ///
    /// # Errors
    ///
    /// - `AttendanceOutOfOrder` when `date` is not after `last_office_day`
    ///   (same-day duplicates included; the date is the replay key).
    /// - `Configuration` when the accrual model's parameters are invalid.
    ///
    /// On any error the balance is untouched.
    pub fn record_office_attendance(
        &mut self,
        date: WorkDate,
        next_working_day: Option<WorkDate>,
    ) -> Result<AttendanceOutcome, RewardError> {
        if let Some(last) = self.last_office_day {
            if date <= last {
                return Err(RewardError::attendance_out_of_order(date, last));
            }
        }

        let streak = if next_working_day == Some(date) {
            self.streak + 1
        } else {
            1
        };

        let credit = self.accrual_model.credit_for(streak)?;
        let credited = credit.total();

        // All checks passed; commit every field together.
        self.streak = streak;
        self.current = self.current.plus(credited);
        self.total_earned = self.total_earned.plus(credited);
        self.last_office_day = Some(date);

        Ok(AttendanceOutcome {
            credited,
            streak_bonus: credit.bonus,
            streak,
        })
    }

    /// Reserves credit for a remote-day request, optimistically.
    ///
    /// Debits `min(days_requested, current)` and returns the amount
    /// actually debited. The request must record that amount so that
    /// cancellation and rejection restore exactly what was taken.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` when `days_requested` is zero; the balance is
    /// untouched.
    pub fn reserve(&mut self, days_requested: u32) -> Result<DayCredits, RewardError> {
        if days_requested == 0 {
            return Err(RewardError::invalid_request(
                "days_requested must be positive",
            ));
        }

        let reserved = DayCredits::whole(days_requested).min(self.current);
        self.current = self.current.saturating_minus(reserved);
        Ok(reserved)
    }

    /// Returns a reservation to the spendable balance (cancellation and
    /// rejection paths).
    pub fn restore_reservation(&mut self, reserved: DayCredits) {
        self.current = self.current.plus(reserved);
    }

    /// Commits a reservation into usage (approval path). The spendable
    /// balance was already debited at reservation time.
    pub fn commit_spend(&mut self, reserved: DayCredits) {
        self.total_used = self.total_used.plus(reserved);
    }
}
