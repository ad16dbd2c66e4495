//! Data sources of the balance engine.
//!
//! The engine only consumes: punches, pre-aggregated daily and monthly saldos,
//! plus one write (the compensation punch). `HttpBackend` talks to the REST
//! API, `LocalBackend` serves the same data from the SQLite database.

pub mod http;
pub mod local;

use crate::config::{BackendKind, Config};
use crate::errors::AppResult;
use crate::models::daily_balance::DailySaldo;
use crate::models::monthly_balance::{MonthlyBalance, YearMonth};
use crate::models::punch::PunchEvent;
use crate::models::wire::CompensationWriteDto;
use chrono::NaiveDate;

/// Punch-list filter. Dates are inclusive.
#[derive(Debug, Clone, Copy)]
pub struct PunchQuery {
    pub user_id: Option<i64>,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl PunchQuery {
    pub fn day(user_id: Option<i64>, date: NaiveDate) -> Self {
        Self {
            user_id,
            from: date,
            to: date,
        }
    }
}

/// `Sync` so that independent fetches can run on scoped threads.
pub trait Backend: Sync {
    fn fetch_punches(&self, query: &PunchQuery) -> AppResult<Vec<PunchEvent>>;

    /// One row per employee for `date`.
    fn fetch_daily_saldo(&self, date: NaiveDate) -> AppResult<Vec<DailySaldo>>;

    /// `None` when the backend has no aggregate for that user and month.
    fn fetch_monthly_saldo(
        &self,
        user_id: i64,
        month: YearMonth,
    ) -> AppResult<Option<MonthlyBalance>>;

    /// Persist one compensation punch.
    fn write_compensation(&self, write: &CompensationWriteDto) -> AppResult<()>;
}

/// Build the backend selected in the configuration.
pub fn from_config(cfg: &Config) -> AppResult<Box<dyn Backend>> {
    Ok(match cfg.backend {
        BackendKind::Local => Box::new(local::LocalBackend::new(cfg.clone())),
        BackendKind::Http => Box::new(http::HttpBackend::new(
            &cfg.api_base_url,
            cfg.http_timeout_secs,
        )?),
    })
}
