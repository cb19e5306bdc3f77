//! Anchor day consensus calculators.
//!
//! Two ways a team converges on shared office days: observed consensus
//! from the schedule entries members actually filed, and voted consensus
//! from explicit ballots. Both use the same strict-majority rule.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::WorkDate;
use crate::domain::schedule::{WorkScheduleEntry, WorkWeek};

use super::vote::TeamVote;

/// Per-day ballot tally for a voting week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorDayTally {
    pub date: WorkDate,
    pub votes: u32,
    pub is_anchor_day: bool,
}

/// Strict majority: more than half the team, ties lose.
fn is_majority(count: u32, team_size: u32) -> bool {
    team_size > 0 && u64::from(count) * 2 > u64::from(team_size)
}

/// Computes the anchor days of a week from filed schedule entries.
///
/// A working day becomes an anchor day when a strict majority of the
/// team filed an office entry for it. Entries are expected to be
/// deduplicated per `(user, date)` by the store's upsert; remote and
/// flexible entries, and missing entries, count against the majority.
///
/// # Edge Cases
/// - `team_size == 0`: Returns the empty set
/// - Exactly half the team in office: Not an anchor day
/// - Entries outside the week: Ignored
pub fn compute_anchor_days(
    entries: &[WorkScheduleEntry],
    team_size: u32,
    week: WorkWeek,
) -> BTreeSet<WorkDate> {
    if team_size == 0 {
        return BTreeSet::new();
    }

    week.working_days()
        .into_iter()
        .filter(|day| {
            let office_count = entries
                .iter()
                .filter(|e| e.date == *day && e.work_type.counts_as_office())
                .count() as u32;
            is_majority(office_count, team_size)
        })
        .collect()
}

/// Tallies anchor-day ballots for a voting week.
///
/// Every working day of the week gets a tally row, zero-voted days
/// included, sorted by date ascending. A ballot contributes only when
/// its `voting_week` matches, and only for voted days that fall inside
/// the week. `is_anchor_day` follows the same strict-majority rule as
/// [`compute_anchor_days`].
///
/// # Edge Cases
/// - No matching ballots: Five zero-vote rows, none an anchor day
/// - `team_size == 0`: No day can reach a majority
pub fn compute_voted_anchor_days(
    votes: &[TeamVote],
    team_size: u32,
    week: WorkWeek,
) -> Vec<AnchorDayTally> {
    let mut counts: BTreeMap<WorkDate, u32> =
        week.working_days().into_iter().map(|day| (day, 0)).collect();

    for vote in votes.iter().filter(|v| v.voting_week == week) {
        for day in &vote.voted_days {
            if let Some(count) = counts.get_mut(day) {
                *count += 1;
            }
        }
    }

    counts
        .into_iter()
        .map(|(date, votes)| AnchorDayTally {
            date,
            votes,
            is_anchor_day: is_majority(votes, team_size),
        })
        .collect()
}
