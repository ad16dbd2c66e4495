use crate::config::Config;
use crate::core::calculator::daily::compute_daily_balance;
use crate::core::calculator::grouping::group_by_day;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::daily_balance::DailyBalance;
use crate::models::day_group::{DayGroup, RoleMismatch};
use crate::models::punch::PunchEvent;
use crate::ui::messages::warning;
use crate::utils::date::is_business_day;
use chrono::NaiveDate;
use std::path::Path;

/// One line of a period listing.
#[derive(Debug, Clone)]
pub struct DayReport {
    /// `None` for a materialised day without punches.
    pub group: Option<DayGroup>,
    pub balance: DailyBalance,
    pub mismatches: Vec<RoleMismatch>,
}

#[derive(Debug, Clone, Default)]
pub struct PeriodReport {
    pub days: Vec<DayReport>,
    /// Punches dropped because their timestamp was unreadable.
    pub undated: usize,
    pub total_worked: i64,
    pub total_balance: i64,
}

pub struct Core;

impl Core {
    /// Daily balances of one user over `dates`.
    ///
    /// With `fill`, business days up to `today` without punches are listed
    /// as `no-record`; otherwise only days with punches appear.
    pub fn build_period_report(
        events: &[PunchEvent],
        dates: &[NaiveDate],
        expected_minutes: i64,
        fill: bool,
        today: NaiveDate,
    ) -> PeriodReport {
        let grouped = group_by_day(events);
        let mut report = PeriodReport {
            undated: grouped.undated,
            ..Default::default()
        };

        for date in dates {
            let day = match grouped.get(date) {
                Some(group) => DayReport {
                    balance: compute_daily_balance(group, expected_minutes),
                    mismatches: group.role_mismatches(),
                    group: Some(group.clone()),
                },
                None if fill && is_business_day(*date) && *date <= today => DayReport {
                    group: None,
                    balance: DailyBalance::no_record(*date, expected_minutes),
                    mismatches: Vec::new(),
                },
                None => continue,
            };

            report.total_worked += day.balance.worked_minutes;
            report.total_balance += day.balance.balance_minutes;
            report.days.push(day);
        }

        report
    }

    /// Minutes owed for a balance: a credit owes nothing.
    pub fn debt_from_balance(balance_minutes: i64) -> i64 {
        (-balance_minutes).max(0)
    }
}

/// Degrade a failed fetch to the empty state: warn the user, record it in
/// the internal log (when the local database is reachable) and go on.
pub fn fetch_or_default<T: Default>(cfg: &Config, what: &str, result: AppResult<T>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => {
            warning(format!("Could not fetch {}: {}", what, e));
            if Path::new(&cfg.database).exists()
                && let Ok(pool) = DbPool::new(&cfg.database)
                && let Err(log_err) = ttlog(&pool.conn, "fetch_failed", what, &e.to_string())
            {
                eprintln!("⚠️ Failed to write internal log: {}", log_err);
            }
            T::default()
        }
    }
}
