use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

/// Schema history, oldest first. Never edit an applied entry: append a new one.
const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250901_0001_create_punches",
        description: "Created punches table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS punches (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id      INTEGER NOT NULL,
            data_batida  TEXT NOT NULL,
            descricao    TEXT NOT NULL DEFAULT '',
            source       TEXT NOT NULL DEFAULT 'cli',
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_punches_user_ts ON punches(user_id, data_batida);
        "#,
    },
    Migration {
        version: "20250915_0002_add_punch_role",
        description: "Added explicit role to punches",
        sql: r#"
        ALTER TABLE punches ADD COLUMN role TEXT
            CHECK(role IS NULL OR role IN ('entry','pause','return','exit'));
        "#,
    },
    Migration {
        version: "20251002_0003_create_compensation_journal",
        description: "Created compensation plans and journal",
        sql: r#"
        CREATE TABLE IF NOT EXISTS compensation_plans (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id          INTEGER NOT NULL,
            debt_minutes     INTEGER NOT NULL,
            minutes_per_day  INTEGER NOT NULL,
            created_at       TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS compensation_journal (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            plan_id     INTEGER NOT NULL REFERENCES compensation_plans(id),
            user_id     INTEGER NOT NULL,
            seq         INTEGER NOT NULL,
            slot        TEXT NOT NULL,
            minutes     INTEGER NOT NULL,
            status      TEXT NOT NULL DEFAULT 'pending'
                        CHECK(status IN ('pending','written','failed')),
            error       TEXT,
            updated_at  TEXT NOT NULL,
            UNIQUE(plan_id, seq)
        );
        "#,
    },
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::initialize::init_db() and by `db --migrate`.
/// Returns the number of migrations applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        // schema change + marker in the same transaction
        conn.execute_batch("BEGIN;")?;
        let result = conn.execute_batch(m.sql).and_then(|_| {
            conn.execute(
                "INSERT INTO log (date, operation, target, message)
                 VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
                [m.version, m.description],
            )
        });

        match result {
            Ok(_) => conn.execute_batch("COMMIT;")?,
            Err(e) => {
                conn.execute_batch("ROLLBACK;")?;
                return Err(e);
            }
        }

        success(format!("Migration applied: {} → {}", m.version, m.description));
        applied += 1;
    }

    Ok(applied)
}
