use crate::backend;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::{Dashboard, DashboardLogic};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{RESET, color_for_balance, colorize_optional};
use crate::utils::date;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_signed_minutes;
use chrono::Local;
use std::thread;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard {
        once,
        interval,
        date: day,
    } = cmd
    {
        let day = match day {
            Some(d) => Some(date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?),
            None => None,
        };
        let backend = backend::from_config(cfg)?;
        let every = Duration::from_secs(interval.unwrap_or(cfg.poll_interval_secs).max(1));

        // polls run back to back: no overlap, no backoff
        loop {
            let snapshot = DashboardLogic::snapshot(cfg, backend.as_ref(), day.unwrap_or_else(date::today));
            render(&snapshot);

            if *once {
                break;
            }
            thread::sleep(every);
        }
    }
    Ok(())
}

fn render(d: &Dashboard) {
    header(format!(
        "Dashboard {} · refreshed {}",
        d.date,
        Local::now().format("%H:%M:%S")
    ));

    if d.saldos.is_empty() {
        info("No balance available.");
    } else {
        let mut table = Table::new(vec![
            Column::new("EMPLOYEE", 20),
            Column::new("ENTRY", 5),
            Column::new("EXIT", 5),
            Column::new("BALANCE", 7),
        ]);
        for s in &d.saldos {
            table.add_row(vec![
                s.name.clone(),
                colorize_optional(s.entry.as_deref().unwrap_or("--:--")),
                colorize_optional(s.exit.as_deref().unwrap_or("--:--")),
                format!(
                    "{}{}{}",
                    color_for_balance(s.balance_minutes),
                    format_signed_minutes(s.balance_minutes),
                    RESET
                ),
            ]);
        }
        print!("{}", table.render());
        println!(
            "Team balance: {}{}{}",
            color_for_balance(d.total_balance),
            format_signed_minutes(d.total_balance),
            RESET
        );
    }

    println!("Punches today: {}", d.punch_count);
    if !d.incomplete_users.is_empty() {
        warning(format!("Incomplete days: users {:?}", d.incomplete_users));
    }
    if !d.mismatch_users.is_empty() {
        warning(format!("Punch roles out of order: users {:?}", d.mismatch_users));
    }
}
