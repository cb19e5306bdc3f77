//! Property tests for the reward ledger.
//!
//! The ledger's written guarantees are invariants over arbitrary call
//! sequences, not single flows, so they are checked here under randomized
//! interleavings of attendance, reservation, cancellation and approval:
//!
//! - `current` never goes negative
//! - conservation: `current + pending reservations + total_used`
//!   always equals `total_earned`
//! - ratio accrual is exact (no fractional drift over long runs)
//! - the streak counts consecutive working days and resets on gaps

use proptest::prelude::*;

use anchorwork::domain::foundation::{DayCredits, TeamId, UserId, WorkDate};
use anchorwork::domain::rewards::{AccrualModel, RewardBalance};

// ============================================================================
// Operation Model
// ============================================================================

/// One ledger mutation, as the handlers would issue it.
#[derive(Debug, Clone)]
enum LedgerOp {
    /// Record an office day; `consecutive` controls whether it lands on
    /// the working day right after the previous one.
    Attend { consecutive: bool },
    /// Reserve credit for a remote-day request.
    Reserve { days: u32 },
    /// Cancel (or reject) the oldest pending request, restoring its
    /// reservation.
    Restore,
    /// Approve the oldest pending request, committing its reservation
    /// into usage.
    Approve,
}

fn arb_op() -> impl Strategy<Value = LedgerOp> {
    prop_oneof![
        3 => any::<bool>().prop_map(|consecutive| LedgerOp::Attend { consecutive }),
        2 => (1u32..=3).prop_map(|days| LedgerOp::Reserve { days }),
        1 => Just(LedgerOp::Restore),
        1 => Just(LedgerOp::Approve),
    ]
}

fn arb_model() -> impl Strategy<Value = AccrualModel> {
    prop_oneof![
        (1u32..=5).prop_map(|ratio| AccrualModel::RatioBased {
            office_to_remote_ratio: ratio,
        }),
        Just(AccrualModel::SimpleThreeToOne),
        (1u32..=4).prop_map(|threshold| AccrualModel::StreakBased {
            bonus_threshold: threshold,
            bonus_amount: DayCredits::ONE_DAY,
        }),
    ]
}

/// Drives a fresh ledger through the ops, checking the invariants after
/// every step. Returns the pending reservations still outstanding.
fn run_ops(model: AccrualModel, ops: &[LedgerOp]) -> (RewardBalance, Vec<DayCredits>) {
    let mut balance = RewardBalance::new(
        UserId::new("prop-user").unwrap(),
        TeamId::new("prop-team").unwrap(),
        model,
    );
    let mut pending: Vec<DayCredits> = Vec::new();

    // Monday 2025-01-06; dates only move forward.
    let mut cursor = WorkDate::new(2025, 1, 6).unwrap();

    for op in ops {
        match op {
            LedgerOp::Attend { consecutive } => {
                let (date, next_working_day) = if balance.last_office_day.is_none() {
                    (cursor, None)
                } else if *consecutive {
                    // The calendar names this exact date as the successor.
                    let date = cursor.plus_days(1);
                    (date, Some(date))
                } else {
                    // The successor working day was skipped.
                    let skipped = cursor.plus_days(1);
                    (cursor.plus_days(2), Some(skipped))
                };
                balance
                    .record_office_attendance(date, next_working_day)
                    .unwrap();
                cursor = date;
            }
            LedgerOp::Reserve { days } => {
                let reserved = balance.reserve(*days).unwrap();
                pending.push(reserved);
            }
            LedgerOp::Restore => {
                if !pending.is_empty() {
                    let reserved = pending.remove(0);
                    balance.restore_reservation(reserved);
                }
            }
            LedgerOp::Approve => {
                if !pending.is_empty() {
                    let reserved = pending.remove(0);
                    balance.commit_spend(reserved);
                }
            }
        }

        assert_conserved(&balance, &pending);
    }

    (balance, pending)
}

/// `current + Σ pending + total_used == total_earned`, exactly.
fn assert_conserved(balance: &RewardBalance, pending: &[DayCredits]) {
    let outstanding = pending
        .iter()
        .fold(DayCredits::ZERO, |sum, reserved| sum.plus(*reserved));
    assert_eq!(
        balance.current.plus(outstanding).plus(balance.total_used),
        balance.total_earned,
        "conservation violated: current={} pending={} used={} earned={}",
        balance.current,
        outstanding,
        balance.total_used,
        balance.total_earned,
    );
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: conservation holds after every operation, for every
    /// accrual model, under arbitrary op interleavings.
    ///
    /// `run_ops` asserts mid-sequence; this re-checks the final state and
    /// that draining the surviving reservations closes the books exactly.
    #[test]
    fn prop_ledger_conserves_credit(
        model in arb_model(),
        ops in proptest::collection::vec(arb_op(), 1..60),
    ) {
        let (mut balance, pending) = run_ops(model, &ops);

        for reserved in pending {
            balance.restore_reservation(reserved);
        }
        prop_assert_eq!(
            balance.current.plus(balance.total_used),
            balance.total_earned
        );
    }

    /// Property: `current` never exceeds what was earned.
    #[test]
    fn prop_current_never_exceeds_earnings(
        model in arb_model(),
        ops in proptest::collection::vec(arb_op(), 1..60),
    ) {
        let (balance, _) = run_ops(model, &ops);
        prop_assert!(balance.current <= balance.total_earned);
        prop_assert!(balance.total_used <= balance.total_earned);
    }

    /// Property: ratio accrual is exact. `ratio * whole_days` office days
    /// credit exactly `whole_days` full days, with no drift.
    #[test]
    fn prop_ratio_accrual_is_exact(ratio in 1u32..=5, whole_days in 1u32..=4) {
        let ops: Vec<LedgerOp> = (0..ratio * whole_days)
            .map(|_| LedgerOp::Attend { consecutive: true })
            .collect();

        let (balance, _) = run_ops(
            AccrualModel::RatioBased { office_to_remote_ratio: ratio },
            &ops,
        );

        prop_assert_eq!(balance.current, DayCredits::whole(whole_days));
        prop_assert_eq!(balance.total_earned, DayCredits::whole(whole_days));
    }

    /// Property: an unbroken run of consecutive working days produces a
    /// streak of exactly that length; a single gap resets it to one.
    #[test]
    fn prop_streak_counts_consecutive_days(run in 1usize..=10, gap_then in 0usize..=5) {
        let mut ops: Vec<LedgerOp> = (0..run)
            .map(|_| LedgerOp::Attend { consecutive: true })
            .collect();

        let (balance, _) = run_ops(AccrualModel::SimpleThreeToOne, &ops);
        prop_assert_eq!(balance.streak, run as u32);

        // A gap, then another short run: the streak restarts from one.
        ops.push(LedgerOp::Attend { consecutive: false });
        ops.extend((0..gap_then).map(|_| LedgerOp::Attend { consecutive: true }));

        let (balance, _) = run_ops(AccrualModel::SimpleThreeToOne, &ops);
        prop_assert_eq!(balance.streak, gap_then as u32 + 1);
    }

    /// Property: the streak model pays exactly `floor(streak / threshold)`
    /// bonuses over an unbroken run, and nothing else.
    #[test]
    fn prop_streak_bonuses_land_on_threshold_multiples(
        threshold in 1u32..=4,
        run in 1u32..=12,
    ) {
        let ops: Vec<LedgerOp> = (0..run)
            .map(|_| LedgerOp::Attend { consecutive: true })
            .collect();

        let (balance, _) = run_ops(
            AccrualModel::StreakBased {
                bonus_threshold: threshold,
                bonus_amount: DayCredits::ONE_DAY,
            },
            &ops,
        );

        prop_assert_eq!(balance.total_earned, DayCredits::whole(run / threshold));
    }
}
