//! Persistence of confirmed compensation plans and their per-item status.

use crate::errors::{AppError, AppResult};
use crate::models::compensation::{CompensationPlanItem, EntryStatus, JournalEntry};
use crate::utils::date::format_timestamp;
use chrono::{Local, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_entry(row: &Row) -> rusqlite::Result<JournalEntry> {
    let slot_str: String = row.get("slot")?;
    let status_str: String = row.get("status")?;

    let slot = NaiveDateTime::parse_from_str(&slot_str, "%Y-%m-%dT%H:%M:%S").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let status = EntryStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("Invalid journal status: {}", status_str))),
        )
    })?;

    Ok(JournalEntry {
        id: row.get("id")?,
        plan_id: row.get("plan_id")?,
        user_id: row.get("user_id")?,
        seq: row.get("seq")?,
        slot,
        minutes: row.get("minutes")?,
        status,
        error: row.get("error")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Record a plan and all of its items as `pending`, atomically.
pub fn create_plan(
    conn: &Connection,
    user_id: i64,
    debt_minutes: i64,
    minutes_per_day: i64,
    items: &[CompensationPlanItem],
) -> AppResult<i64> {
    let now = Local::now().to_rfc3339();
    let tx = conn.unchecked_transaction()?;

    tx.execute(
        "INSERT INTO compensation_plans (user_id, debt_minutes, minutes_per_day, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![user_id, debt_minutes, minutes_per_day, now],
    )?;
    let plan_id = tx.last_insert_rowid();

    {
        let mut stmt = tx.prepare(
            "INSERT INTO compensation_journal (plan_id, user_id, seq, slot, minutes, status, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, 'pending', ?6)",
        )?;
        for (seq, item) in items.iter().enumerate() {
            stmt.execute(params![
                plan_id,
                user_id,
                seq as i64 + 1,
                format_timestamp(&item.slot),
                item.minutes,
                now,
            ])?;
        }
    }

    tx.commit()?;
    Ok(plan_id)
}

/// Entries of a plan in planned order.
pub fn load_entries(conn: &Connection, plan_id: i64) -> AppResult<Vec<JournalEntry>> {
    let exists = conn
        .query_row(
            "SELECT 1 FROM compensation_plans WHERE id = ?1",
            [plan_id],
            |_| Ok(()),
        )
        .optional()?
        .is_some();
    if !exists {
        return Err(AppError::PlanNotFound(plan_id));
    }

    let mut stmt = conn.prepare(
        "SELECT id, plan_id, user_id, seq, slot, minutes, status, error, updated_at
         FROM compensation_journal
         WHERE plan_id = ?1
         ORDER BY seq ASC",
    )?;

    let mut out = Vec::new();
    for r in stmt.query_map([plan_id], map_entry)? {
        out.push(r?);
    }
    Ok(out)
}

fn set_status(
    conn: &Connection,
    entry_id: i64,
    status: EntryStatus,
    error: Option<&str>,
) -> AppResult<()> {
    conn.execute(
        "UPDATE compensation_journal SET status = ?1, error = ?2, updated_at = ?3 WHERE id = ?4",
        params![
            status.to_db_str(),
            error,
            Local::now().to_rfc3339(),
            entry_id
        ],
    )?;
    Ok(())
}

pub fn mark_written(conn: &Connection, entry_id: i64) -> AppResult<()> {
    set_status(conn, entry_id, EntryStatus::Written, None)
}

pub fn mark_failed(conn: &Connection, entry_id: i64, error: &str) -> AppResult<()> {
    set_status(conn, entry_id, EntryStatus::Failed, Some(error))
}
