use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayStatus {
    Complete,
    Incomplete,
    Positive,
    Negative,
    NoRecord,
}

/// Balance of one day. Derived on every fetch, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct DailyBalance {
    pub date: NaiveDate,
    pub worked_minutes: i64,
    pub expected_minutes: i64,
    pub balance_minutes: i64,
    pub status: DayStatus,
}

impl DailyBalance {
    /// A day without punches.
    pub fn no_record(date: NaiveDate, expected_minutes: i64) -> Self {
        Self {
            date,
            worked_minutes: 0,
            expected_minutes,
            balance_minutes: -expected_minutes,
            status: DayStatus::NoRecord,
        }
    }
}

/// One row of the pre-aggregated daily saldo (one per employee).
#[derive(Debug, Clone, Serialize)]
pub struct DailySaldo {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub entry: Option<String>,
    pub exit: Option<String>,
    pub balance_minutes: i64,
}
