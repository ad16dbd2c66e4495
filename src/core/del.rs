use crate::db::log::ttlog;
use crate::db::queries::{delete_punch, load_punch};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::Connection;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(conn: &Connection, id: i64) -> AppResult<()> {
        let punch = load_punch(conn, id)?.ok_or(AppError::PunchNotFound(id))?;

        delete_punch(conn, id)?;

        let msg = format!(
            "Deleted punch {} of user {} ({} '{}')",
            id,
            punch.user_id,
            punch
                .timestamp
                .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "invalid date".into()),
            punch.label
        );

        if let Err(e) = ttlog(conn, "del", &format!("punch {}", id), &msg) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(msg);
        Ok(())
    }
}
