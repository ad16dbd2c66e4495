use crate::db::log::ttlog;
use crate::db::queries::insert_punch;
use crate::errors::AppResult;
use crate::models::punch_role::PunchRole;
use crate::ui::messages::success;
use chrono::NaiveDateTime;
use rusqlite::Connection;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Store one punch in the local database. Returns the new id.
    ///
    /// Without `--label`, the label is derived from the explicit role, so
    /// label keywords and role never disagree on locally captured punches.
    pub fn apply(
        conn: &Connection,
        user_id: i64,
        ts: NaiveDateTime,
        label: Option<&str>,
        role: Option<PunchRole>,
    ) -> AppResult<i64> {
        let label = label
            .map(str::to_string)
            .or_else(|| role.map(|r| r.label().to_string()))
            .unwrap_or_default();

        let id = insert_punch(conn, user_id, &ts, &label, role, "cli")?;

        let when = ts.format("%Y-%m-%d %H:%M").to_string();
        if let Err(e) = ttlog(
            conn,
            "add",
            &format!("punch {}", id),
            &format!("user {} at {} '{}'", user_id, when, label),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!("Punch {} recorded for user {} at {}", id, user_id, when));
        Ok(id)
    }
}
