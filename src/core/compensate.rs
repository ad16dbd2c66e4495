//! Confirmation of compensation plans, journaled item by item.
//!
//! Writes are not atomic: each item is persisted on its own. The journal
//! keeps a per-item status so that a partial failure is visible and a later
//! `resume` picks up from the first item not yet written.

use crate::backend::Backend;
use crate::db::journal;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::models::compensation::{CompensationPlanItem, EntryStatus, JournalEntry, SagaOutcome};
use crate::models::wire::CompensationWriteDto;
use crate::utils::time::format_minutes;
use rusqlite::Connection;

pub struct CompensateLogic;

impl CompensateLogic {
    /// Journal `plan` under a new plan id, then write its items in order.
    pub fn confirm(
        conn: &Connection,
        backend: &dyn Backend,
        user_id: i64,
        debt_minutes: i64,
        minutes_per_day: i64,
        plan: &[CompensationPlanItem],
    ) -> AppResult<SagaOutcome> {
        let plan_id = journal::create_plan(conn, user_id, debt_minutes, minutes_per_day, plan)?;

        ttlog(
            conn,
            "plan_confirmed",
            &format!("plan {}", plan_id),
            &format!(
                "user {} debt {} in {} items",
                user_id,
                format_minutes(debt_minutes),
                plan.len()
            ),
        )?;

        Self::run(conn, backend, plan_id)
    }

    /// Retry every item of `plan_id` that is not written yet.
    pub fn resume(conn: &Connection, backend: &dyn Backend, plan_id: i64) -> AppResult<SagaOutcome> {
        Self::run(conn, backend, plan_id)
    }

    pub fn status(conn: &Connection, plan_id: i64) -> AppResult<Vec<JournalEntry>> {
        journal::load_entries(conn, plan_id)
    }

    /// Write pending/failed items in planned order; stop at the first error.
    fn run(conn: &Connection, backend: &dyn Backend, plan_id: i64) -> AppResult<SagaOutcome> {
        let entries = journal::load_entries(conn, plan_id)?;
        let mut first_error: Option<String> = None;

        for entry in entries.iter().filter(|e| e.status != EntryStatus::Written) {
            let write = CompensationWriteDto::new(entry.user_id, &entry.plan_item());
            let target = format!("plan {} #{}", plan_id, entry.seq);

            match backend.write_compensation(&write) {
                Ok(()) => {
                    journal::mark_written(conn, entry.id)?;
                    ttlog(conn, "compensation_write", &target, &write.data_batida)?;
                }
                Err(e) => {
                    let msg = e.to_string();
                    journal::mark_failed(conn, entry.id, &msg)?;
                    ttlog(conn, "compensation_failed", &target, &msg)?;
                    first_error = Some(msg);
                    break;
                }
            }
        }

        let entries = journal::load_entries(conn, plan_id)?;
        let count = |s: EntryStatus| entries.iter().filter(|e| e.status == s).count();

        Ok(SagaOutcome {
            plan_id,
            written: count(EntryStatus::Written),
            failed: count(EntryStatus::Failed),
            pending: count(EntryStatus::Pending),
            first_error,
        })
    }
}
