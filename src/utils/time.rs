//! Time utilities: parsing HH:MM, duration computations, formatting minutes, etc.

use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

/// `HH:mm` with an optional sign. Hours may exceed two digits (monthly totals).
static HHMM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-]?)(\d{2,}):([0-5]\d)$").unwrap());

/// Strict clock time, used for CLI input.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Strict variant of [`parse_hhmm`]: `None` on malformed input.
pub fn try_parse_hhmm(s: &str) -> Option<i64> {
    HHMM_RE
        .captures(s.trim())
        .filter(|c| c[1].is_empty())
        .map(|c| hhmm_captures_to_minutes(&c))
}

/// Convert an unsigned `HH:mm` string into minutes.
///
/// Malformed or empty input yields 0: callers display balances, they never
/// fail on a bad string coming from the backend.
pub fn parse_hhmm(s: &str) -> i64 {
    try_parse_hhmm(s).unwrap_or(0)
}

/// Like [`parse_hhmm`] but accepts a leading `+` or `-` (saldo strings).
pub fn parse_signed_hhmm(s: &str) -> i64 {
    match HHMM_RE.captures(s.trim()) {
        Some(c) => {
            let m = hhmm_captures_to_minutes(&c);
            if &c[1] == "-" { -m } else { m }
        }
        None => 0,
    }
}

fn hhmm_captures_to_minutes(c: &regex::Captures) -> i64 {
    let h: i64 = c[2].parse().unwrap_or(0);
    let m: i64 = c[3].parse().unwrap_or(0);
    h.saturating_mul(60).saturating_add(m)
}

/// Unsigned `HH:mm`, zero-padded. Negative values are formatted by absolute value.
pub fn format_minutes(mins: i64) -> String {
    let m = mins.unsigned_abs();
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// `+HH:mm` / `-HH:mm` for balances; zero has no sign.
pub fn format_signed_minutes(mins: i64) -> String {
    let sign = match mins.signum() {
        1 => "+",
        -1 => "-",
        _ => "",
    };
    format!("{}{}", sign, format_minutes(mins))
}
