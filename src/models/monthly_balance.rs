use crate::errors::AppError;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn last_day(&self) -> NaiveDate {
        let (y, m) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(y, m, 1)
            .and_then(|d| d.pred_opt())
            .unwrap_or_default()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = AppError;

    /// `YYYY-MM` or `MM/YYYY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed: Option<(i32, u32)> = if let Some((y, m)) = s.split_once('-') {
            y.parse().ok().zip(m.parse().ok())
        } else if let Some((m, y)) = s.split_once('/') {
            y.parse().ok().zip(m.parse().ok())
        } else {
            None
        };

        parsed
            .and_then(|(y, m)| YearMonth::new(y, m))
            .ok_or_else(|| AppError::InvalidMonth(s.to_string()))
    }
}

/// Monthly aggregate as returned by the backend.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyBalance {
    pub user_id: i64,
    pub name: String,
    pub year_month: YearMonth,
    pub total_worked_minutes: i64,
    pub total_expected_minutes: i64,
    pub balance_minutes: i64,
}
