//! Worked time, balance and status of a single day.

use crate::models::daily_balance::{DailyBalance, DayStatus};
use crate::models::day_group::DayGroup;
use crate::models::punch::PunchEvent;

/// Punches a day needs before its balance is considered final.
pub const FULL_DAY_PUNCHES: usize = 4;

/// Sum of (out − in) over consecutive positional pairs.
///
/// A trailing unpaired event adds nothing. A pair with an unreadable
/// timestamp adds nothing. A pair never adds a negative amount.
pub fn worked_minutes(events: &[PunchEvent]) -> i64 {
    events
        .chunks_exact(2)
        .map(|pair| match (pair[0].timestamp, pair[1].timestamp) {
            (Some(start), Some(end)) => (end - start).num_minutes().max(0),
            _ => 0,
        })
        .sum()
}

pub fn classify(event_count: usize, balance_minutes: i64) -> DayStatus {
    if event_count == 0 {
        DayStatus::NoRecord
    } else if event_count < FULL_DAY_PUNCHES {
        DayStatus::Incomplete
    } else if balance_minutes > 0 {
        DayStatus::Positive
    } else if balance_minutes < 0 {
        DayStatus::Negative
    } else {
        DayStatus::Complete
    }
}

pub fn compute_daily_balance(group: &DayGroup, expected_minutes: i64) -> DailyBalance {
    let worked = worked_minutes(&group.events);
    let balance = worked - expected_minutes;

    DailyBalance {
        date: group.date,
        worked_minutes: worked,
        expected_minutes,
        balance_minutes: balance,
        status: classify(group.len(), balance),
    }
}
