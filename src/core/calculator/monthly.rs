//! Business-day arithmetic and month-end projection.

use crate::models::monthly_balance::{MonthlyBalance, YearMonth};
use crate::utils::date::{all_days_of_month, is_business_day};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    pub average_per_day: i64,
    pub projected_worked_total: i64,
    pub projected_balance: i64,
}

/// Extrapolate the month from the average of the business days elapsed.
pub fn compute_projection(
    worked_so_far_minutes: i64,
    expected_month_minutes: i64,
    business_days_in_month: i64,
    business_days_elapsed: i64,
) -> Projection {
    let average_per_day = worked_so_far_minutes.div_euclid(business_days_elapsed.max(1));
    let projected_worked_total = average_per_day * business_days_in_month;

    Projection {
        average_per_day,
        projected_worked_total,
        projected_balance: projected_worked_total - expected_month_minutes,
    }
}

/// Mon–Fri count of a month. Invalid months count 0.
pub fn business_days_in_month(year: i32, month: u32) -> i64 {
    all_days_of_month(year, month)
        .into_iter()
        .filter(|d| is_business_day(*d))
        .count() as i64
}

/// Business days of `ym` that have already happened as of `today`.
///
/// Current month: 1st through today inclusive (at least 1).
/// Past month: the whole month. Future month: 1.
pub fn business_days_elapsed(ym: YearMonth, today: NaiveDate) -> i64 {
    match ProjectionMode::for_month(ym, today) {
        ProjectionMode::Current => all_days_of_month(ym.year, ym.month)
            .into_iter()
            .filter(|d| *d <= today && is_business_day(*d))
            .count()
            .max(1) as i64,
        ProjectionMode::Historical => business_days_in_month(ym.year, ym.month).max(1),
        ProjectionMode::Future => 1,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    /// The month is over: report actual totals.
    Historical,
    /// The month is running: extrapolate.
    Current,
    /// Nothing worked yet.
    Future,
}

impl ProjectionMode {
    pub fn for_month(ym: YearMonth, today: NaiveDate) -> Self {
        let current = YearMonth::of(today);
        match ym.cmp(&current) {
            std::cmp::Ordering::Less => ProjectionMode::Historical,
            std::cmp::Ordering::Equal => ProjectionMode::Current,
            std::cmp::Ordering::Greater => ProjectionMode::Future,
        }
    }
}

/// What the month looks like from `today`.
#[derive(Debug, Clone)]
pub struct MonthOutlook {
    pub mode: ProjectionMode,
    pub business_days: i64,
    pub business_days_elapsed: i64,
    /// Only for the current month.
    pub projection: Option<Projection>,
}

/// `expected_month` is the expected total of the whole month, which the
/// projection is compared against.
pub fn month_outlook(
    balance: &MonthlyBalance,
    expected_month: i64,
    today: NaiveDate,
) -> MonthOutlook {
    let ym = balance.year_month;
    let mode = ProjectionMode::for_month(ym, today);
    let business_days = business_days_in_month(ym.year, ym.month);
    let elapsed = business_days_elapsed(ym, today);

    let projection = (mode == ProjectionMode::Current).then(|| {
        compute_projection(
            balance.total_worked_minutes,
            expected_month,
            business_days,
            elapsed,
        )
    });

    MonthOutlook {
        mode,
        business_days,
        business_days_elapsed: elapsed,
        projection,
    }
}

/// Expected minutes of a whole month for a given daily schedule.
pub fn expected_month_minutes(ym: YearMonth, expected_daily_minutes: i64) -> i64 {
    business_days_in_month(ym.year, ym.month) * expected_daily_minutes
}

/// Expected minutes of `ym` accrued as of `today`: the whole month once it
/// is over, the business days through today while it runs, nothing before.
pub fn expected_minutes_to_date(
    ym: YearMonth,
    expected_daily_minutes: i64,
    today: NaiveDate,
) -> i64 {
    let days = match ProjectionMode::for_month(ym, today) {
        ProjectionMode::Historical => business_days_in_month(ym.year, ym.month),
        ProjectionMode::Current => all_days_of_month(ym.year, ym.month)
            .into_iter()
            .filter(|d| *d <= today && is_business_day(*d))
            .count() as i64,
        ProjectionMode::Future => 0,
    };
    days * expected_daily_minutes
}
