use crate::backend::{self, PunchQuery};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::expected::expected_daily_minutes;
use crate::core::logic::{Core, DayReport, PeriodReport, fetch_or_default};
use crate::errors::{AppError, AppResult};
use crate::models::punch::PunchEvent;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{color_for_balance, colorize_optional, RESET};
use crate::utils::date;
use crate::utils::formatting::{bold, colorize_status};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_minutes, format_signed_minutes};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day {
        period,
        user,
        details,
        fill,
    } = cmd
    {
        let user_id = user.unwrap_or(cfg.default_user);
        let dates = date::resolve_period(period.as_deref()).map_err(AppError::InvalidDate)?;
        let (Some(&from), Some(&to)) = (dates.first(), dates.last()) else {
            return Err(AppError::InvalidDate(period.clone().unwrap_or_default()));
        };

        let backend = backend::from_config(cfg)?;
        let events = fetch_or_default(
            cfg,
            "punches",
            backend.fetch_punches(&PunchQuery {
                user_id: Some(user_id),
                from,
                to,
            }),
        );

        let expected = expected_daily_minutes(cfg, user_id);
        let report = Core::build_period_report(&events, &dates, expected, *fill, date::today());

        if report.undated > 0 {
            warning(format!(
                "{} punch(es) with an unreadable date were ignored",
                report.undated
            ));
        }

        if report.days.is_empty() {
            info(format!("No punches for user {} between {} and {}", user_id, from, to));
            return Ok(());
        }

        header(format!("User {} · {} → {}", user_id, from, to));
        print_report(&report, *details);
    }
    Ok(())
}

fn slot(ev: Option<&PunchEvent>) -> String {
    colorize_optional(&ev.map(|e| e.time_str()).unwrap_or_else(|| "--:--".into()))
}

fn print_report(report: &PeriodReport, details: bool) {
    let mut table = Table::new(vec![
        Column::new("DATE", 10),
        Column::new("ENTRY", 5),
        Column::new("PAUSE", 5),
        Column::new("RETURN", 6),
        Column::new("EXIT", 5),
        Column::new("WORKED", 6),
        Column::new("EXPECTED", 8),
        Column::new("BALANCE", 7),
        Column::new("STATUS", 10),
    ]);

    for day in &report.days {
        let b = &day.balance;
        let (entry, pause, ret, exit) = match &day.group {
            Some(g) => {
                let s = g.slots();
                (slot(s.entry), slot(s.pause), slot(s.return_), slot(s.exit))
            }
            None => (slot(None), slot(None), slot(None), slot(None)),
        };

        table.add_row(vec![
            b.date.to_string(),
            entry,
            pause,
            ret,
            exit,
            format_minutes(b.worked_minutes),
            format_minutes(b.expected_minutes),
            format!(
                "{}{}{}",
                color_for_balance(b.balance_minutes),
                format_signed_minutes(b.balance_minutes),
                RESET
            ),
            colorize_status(b.status),
        ]);
    }

    print!("{}", table.render());

    println!(
        "\n{} worked {} | balance {}{}{}",
        bold("Total:"),
        format_minutes(report.total_worked),
        color_for_balance(report.total_balance),
        format_signed_minutes(report.total_balance),
        RESET
    );

    if details {
        for day in &report.days {
            print_day_details(day);
        }
    }
}

fn print_day_details(day: &DayReport) {
    let Some(group) = &day.group else {
        return;
    };
    let extra = group.slots().extra;
    if extra.is_empty() && day.mismatches.is_empty() {
        return;
    }

    println!("\n{}", bold(&group.date.to_string()));
    for ev in extra {
        println!("  + extra punch {} at {} '{}'", ev.id, ev.time_str(), ev.label);
    }
    for m in &day.mismatches {
        println!(
            "  ! punch {} is #{} of the day ({}) but declares '{}'",
            m.event_id,
            m.position,
            m.positional.map(|r| r.as_str()).unwrap_or("extra"),
            m.declared.as_str()
        );
    }
}
