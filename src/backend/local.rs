//! SQLite-backed implementation of [`Backend`]: the aggregates a server would
//! compute are derived here from the stored punches with the same engine.

use super::{Backend, PunchQuery};
use crate::config::Config;
use crate::core::calculator::daily::compute_daily_balance;
use crate::core::calculator::expected::expected_daily_minutes;
use crate::core::calculator::grouping::group_by_day;
use crate::core::calculator::monthly::expected_minutes_to_date;
use crate::db::pool::DbPool;
use crate::db::queries::{COMPENSATION_SOURCE, insert_punch, load_punches};
use crate::errors::{AppError, AppResult};
use crate::models::daily_balance::DailySaldo;
use crate::models::monthly_balance::{MonthlyBalance, YearMonth};
use crate::models::punch::PunchEvent;
use crate::models::wire::CompensationWriteDto;
use crate::utils::date;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// Opens a connection per call, so one instance can serve several threads.
pub struct LocalBackend {
    cfg: Config,
    today: NaiveDate,
}

impl LocalBackend {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            today: date::today(),
        }
    }

    /// Evaluate month-to-date aggregates as of `today`.
    pub fn as_of(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    fn pool(&self) -> AppResult<DbPool> {
        DbPool::open_migrated(&self.cfg.database)
    }

    fn user_name(user_id: i64) -> String {
        format!("#{}", user_id)
    }
}

fn by_user(events: Vec<PunchEvent>) -> BTreeMap<i64, Vec<PunchEvent>> {
    let mut out: BTreeMap<i64, Vec<PunchEvent>> = BTreeMap::new();
    for ev in events {
        out.entry(ev.user_id).or_default().push(ev);
    }
    out
}

impl Backend for LocalBackend {
    fn fetch_punches(&self, query: &PunchQuery) -> AppResult<Vec<PunchEvent>> {
        let pool = self.pool()?;
        load_punches(&pool.conn, query.user_id, query.from, query.to)
    }

    fn fetch_daily_saldo(&self, date: NaiveDate) -> AppResult<Vec<DailySaldo>> {
        let pool = self.pool()?;
        let events = load_punches(&pool.conn, None, date, date)?;

        let mut rows = Vec::new();
        for (user_id, user_events) in by_user(events) {
            let grouped = group_by_day(&user_events);
            let Some(group) = grouped.get(&date) else {
                continue;
            };

            let balance = compute_daily_balance(group, expected_daily_minutes(&self.cfg, user_id));
            let slots = group.slots();

            rows.push(DailySaldo {
                name: Self::user_name(user_id),
                date: Some(date),
                entry: slots.entry.map(|e| e.time_str()),
                exit: slots.exit.map(|e| e.time_str()),
                balance_minutes: balance.balance_minutes,
            });
        }

        Ok(rows)
    }

    fn fetch_monthly_saldo(
        &self,
        user_id: i64,
        month: YearMonth,
    ) -> AppResult<Option<MonthlyBalance>> {
        let pool = self.pool()?;
        let events = load_punches(
            &pool.conn,
            Some(user_id),
            month.first_day(),
            month.last_day(),
        )?;

        let daily_expected = expected_daily_minutes(&self.cfg, user_id);
        let grouped = group_by_day(&events);
        let worked: i64 = grouped
            .days
            .values()
            .map(|g| compute_daily_balance(g, daily_expected).worked_minutes)
            .sum();
        // only the business days that already happened are owed
        let expected = expected_minutes_to_date(month, daily_expected, self.today);

        Ok(Some(MonthlyBalance {
            user_id,
            name: Self::user_name(user_id),
            year_month: month,
            total_worked_minutes: worked,
            total_expected_minutes: expected,
            balance_minutes: worked - expected,
        }))
    }

    fn write_compensation(&self, write: &CompensationWriteDto) -> AppResult<()> {
        let ts = NaiveDateTime::parse_from_str(&write.data_batida, "%Y-%m-%dT%H:%M:%S")
            .map_err(|_| AppError::InvalidDate(write.data_batida.clone()))?;

        let pool = self.pool()?;
        insert_punch(
            &pool.conn,
            write.id_usuario,
            &ts,
            &write.descricao,
            None,
            COMPENSATION_SOURCE,
        )?;
        Ok(())
    }
}
