use crate::errors::{AppError, AppResult};
use crate::models::punch::PunchEvent;
use crate::models::punch_role::PunchRole;
use crate::utils::date::{format_timestamp, parse_timestamp};
use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const PUNCH_COLUMNS: &str = "id, user_id, data_batida, descricao, role";

/// `source` of punches written by the compensation journal. They are not
/// clock events and never take part in worked-time pairing.
pub const COMPENSATION_SOURCE: &str = "compensation";

pub fn map_row(row: &Row) -> Result<PunchEvent> {
    let raw_ts: String = row.get("data_batida")?;
    let role_str: Option<String> = row.get("role")?;

    let role = match role_str {
        Some(r) => Some(PunchRole::from_code(&r).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidRole(r.clone())),
            )
        })?),
        None => None,
    };

    Ok(PunchEvent {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        // an unreadable timestamp is kept as "invalid", not rejected
        timestamp: parse_timestamp(&raw_ts),
        label: row.get("descricao")?,
        role,
    })
}

pub fn insert_punch(
    conn: &Connection,
    user_id: i64,
    ts: &NaiveDateTime,
    label: &str,
    role: Option<PunchRole>,
    source: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO punches (user_id, data_batida, descricao, role, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            user_id,
            format_timestamp(ts),
            label,
            role.map(|r| r.as_str()),
            source,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Punches between `from` and `to` (inclusive, by calendar date), optionally
/// for a single user. Ordered by timestamp then id. Compensation punches
/// are left out.
pub fn load_punches(
    conn: &Connection,
    user_id: Option<i64>,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<PunchEvent>> {
    let from_s = from.format("%Y-%m-%d").to_string();
    let to_s = to.format("%Y-%m-%d").to_string();

    let mut out = Vec::new();
    match user_id {
        Some(uid) => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {PUNCH_COLUMNS} FROM punches
                 WHERE user_id = ?1 AND substr(data_batida, 1, 10) BETWEEN ?2 AND ?3
                   AND source != '{COMPENSATION_SOURCE}'
                 ORDER BY data_batida ASC, id ASC"
            ))?;
            for r in stmt.query_map(params![uid, from_s, to_s], map_row)? {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {PUNCH_COLUMNS} FROM punches
                 WHERE substr(data_batida, 1, 10) BETWEEN ?1 AND ?2
                   AND source != '{COMPENSATION_SOURCE}'
                 ORDER BY user_id ASC, data_batida ASC, id ASC"
            ))?;
            for r in stmt.query_map(params![from_s, to_s], map_row)? {
                out.push(r?);
            }
        }
    }
    Ok(out)
}

pub fn load_punch(conn: &Connection, id: i64) -> AppResult<Option<PunchEvent>> {
    let mut stmt = conn.prepare(&format!("SELECT {PUNCH_COLUMNS} FROM punches WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn delete_punch(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM punches WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::PunchNotFound(id));
    }
    Ok(())
}
