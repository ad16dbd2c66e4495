use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, header, info, success};

/// Maintenance of the local database. Flags run in a fixed order:
/// migrate, info, check, vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    if *migrate {
        let applied = run_pending_migrations(&pool.conn)?;
        if applied == 0 {
            info("Schema is up to date.");
        } else {
            success(format!("{} migration(s) applied.", applied));
        }
    }

    if *show_info {
        run_pending_migrations(&pool.conn)?;
        header(format!("Database {}", cfg.database));
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        let integrity: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        if integrity == "ok" {
            success("Integrity check passed.");
        } else {
            error(format!("Integrity check failed: {}", integrity));
        }
    }

    if *vacuum {
        pool.conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    if !(*migrate || *show_info || *check || *vacuum) {
        info("Nothing to do: use --migrate, --info, --check or --vacuum.");
    }

    Ok(())
}
