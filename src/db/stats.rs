use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL PUNCHES / USERS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM punches", [], |row| row.get(0))?;
    let users: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT user_id) FROM punches",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Total punches:{} {}{}{} ({} users)",
        CYAN, RESET, GREEN, count, RESET, users
    );

    //
    // 3) DATE RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row(
            "SELECT MIN(substr(data_batida, 1, 10)), MAX(substr(data_batida, 1, 10)) FROM punches",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;
    let (first, last) = range.unwrap_or((None, None));

    println!("{}• Date range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    //
    // 4) COMPENSATION JOURNAL
    //
    let plans: i64 =
        pool.conn
            .query_row("SELECT COUNT(*) FROM compensation_plans", [], |row| {
                row.get(0)
            })?;
    let open: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM compensation_journal WHERE status != 'written'",
        [],
        |row| row.get(0),
    )?;
    let open_color = if open > 0 { RED } else { GREEN };
    println!(
        "{}• Compensation plans:{} {} ({}{}{} items not yet written)",
        CYAN, RESET, plans, open_color, open, RESET
    );

    println!();
    Ok(())
}
