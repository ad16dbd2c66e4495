//! Forward schedule of business-day slots that clears a debit.

use crate::errors::{AppError, AppResult};
use crate::models::compensation::CompensationPlanItem;
use crate::utils::date::is_business_day;
use chrono::{NaiveDateTime, NaiveTime};

/// Longest plan accepted: five years of business days.
pub const MAX_PLAN_ITEMS: i64 = 5 * 261;

/// Default time of day of a proposed compensation slot.
pub fn default_slot_time() -> NaiveTime {
    NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default()
}

/// Plan the compensation of `debt_minutes`, starting the day after `now`.
///
/// Each business day takes `min(minutes_per_business_day, remaining)`;
/// Saturdays and Sundays are skipped. A zero debt yields an empty plan.
/// The plan always sums to the debt: a debt needing more than
/// [`MAX_PLAN_ITEMS`] days, or running past the last representable date,
/// is an error.
pub fn plan_compensation(
    debt_minutes: i64,
    minutes_per_business_day: i64,
    now: NaiveDateTime,
    slot_time: NaiveTime,
) -> AppResult<Vec<CompensationPlanItem>> {
    if minutes_per_business_day < 1 {
        return Err(AppError::InvalidCompensationRate(minutes_per_business_day));
    }

    let mut remaining = debt_minutes.max(0);
    let items = remaining / minutes_per_business_day
        + i64::from(remaining % minutes_per_business_day != 0);
    if items > MAX_PLAN_ITEMS {
        return Err(AppError::Unschedulable(format!(
            "{} business days needed, at most {} allowed",
            items, MAX_PLAN_ITEMS
        )));
    }
    let mut plan = Vec::with_capacity(items as usize);

    let business_days = now
        .date()
        .iter_days()
        .skip(1)
        .filter(|d| is_business_day(*d));

    for day in business_days {
        if remaining == 0 {
            break;
        }
        let minutes = minutes_per_business_day.min(remaining);
        plan.push(CompensationPlanItem {
            slot: day.and_time(slot_time),
            minutes,
        });
        remaining -= minutes;
    }

    if remaining > 0 {
        return Err(AppError::Unschedulable(format!(
            "{} minutes left after the last available day",
            remaining
        )));
    }

    Ok(plan)
}
