//! Formatting utilities used for CLI outputs.

use crate::models::daily_balance::DayStatus;
use crate::utils::colors::{CYAN, GREEN, GREY, MAGENTA, RED, RESET, YELLOW};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        "" // zero has no sign
    };

    if short {
        // +02:25 or -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // +02h 25m or -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Human label and ANSI color for a day status.
pub fn describe_status(status: DayStatus) -> (&'static str, &'static str) {
    match status {
        DayStatus::Complete => ("complete", CYAN),
        DayStatus::Incomplete => ("incomplete", YELLOW),
        DayStatus::Positive => ("positive", GREEN),
        DayStatus::Negative => ("negative", RED),
        DayStatus::NoRecord => ("no-record", GREY),
    }
}

pub fn colorize_status(status: DayStatus) -> String {
    let (label, color) = describe_status(status);
    format!("{color}{label}{RESET}")
}

pub fn highlight(s: &str) -> String {
    format!("{MAGENTA}{s}{RESET}")
}
