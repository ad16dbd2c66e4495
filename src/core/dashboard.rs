//! Manager dashboard: today's saldo per employee plus punch health.

use crate::backend::{Backend, PunchQuery};
use crate::config::Config;
use crate::core::calculator::daily::FULL_DAY_PUNCHES;
use crate::core::calculator::grouping::group_by_day;
use crate::core::logic::fetch_or_default;
use crate::errors::{AppError, AppResult};
use crate::models::daily_balance::DailySaldo;
use crate::models::punch::PunchEvent;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::thread;

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub date: NaiveDate,
    pub saldos: Vec<DailySaldo>,
    pub punch_count: usize,
    /// Employees with at least one punch but fewer than a full day.
    pub incomplete_users: Vec<i64>,
    /// Employees whose punches contradict their positional roles.
    pub mismatch_users: Vec<i64>,
    pub total_balance: i64,
}

pub struct DashboardLogic;

impl DashboardLogic {
    /// Fetch today's saldo and punches concurrently, then derive once both
    /// are in. A failed fetch degrades to an empty list.
    pub fn snapshot(cfg: &Config, backend: &dyn Backend, date: NaiveDate) -> Dashboard {
        let (saldos, punches) = thread::scope(|s| {
            let saldo_h = s.spawn(|| backend.fetch_daily_saldo(date));
            let punch_h = s.spawn(|| backend.fetch_punches(&PunchQuery::day(None, date)));
            (join(saldo_h), join(punch_h))
        });

        let saldos = fetch_or_default(cfg, "daily saldo", saldos);
        let punches = fetch_or_default(cfg, "punches", punches);

        Self::derive(date, saldos, &punches)
    }

    pub fn derive(date: NaiveDate, saldos: Vec<DailySaldo>, punches: &[PunchEvent]) -> Dashboard {
        let mut per_user: BTreeMap<i64, Vec<PunchEvent>> = BTreeMap::new();
        for p in punches {
            per_user.entry(p.user_id).or_default().push(p.clone());
        }

        let mut incomplete_users = Vec::new();
        let mut mismatch_users = Vec::new();
        for (user_id, events) in &per_user {
            let grouped = group_by_day(events);
            if let Some(group) = grouped.get(&date) {
                if group.len() < FULL_DAY_PUNCHES {
                    incomplete_users.push(*user_id);
                }
                if !group.role_mismatches().is_empty() {
                    mismatch_users.push(*user_id);
                }
            }
        }

        Dashboard {
            date,
            total_balance: saldos.iter().map(|s| s.balance_minutes).sum(),
            saldos,
            punch_count: punches.len(),
            incomplete_users,
            mismatch_users,
        }
    }
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, AppResult<T>>) -> AppResult<T> {
    handle
        .join()
        .map_err(|_| AppError::Other("fetch thread panicked".into()))?
}
