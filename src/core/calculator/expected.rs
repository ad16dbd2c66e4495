use crate::config::Config;
use crate::utils::time::parse_hhmm;

/// Used when neither the user's schedule nor `expected_daily` is readable.
pub const DEFAULT_EXPECTED_MINUTES: i64 = 480;

/// Expected daily minutes for a user: contracted schedule first, then the
/// global `expected_daily`, then 08:00.
pub fn expected_daily_minutes(cfg: &Config, user_id: i64) -> i64 {
    let contracted = cfg
        .schedules
        .get(&user_id)
        .map(|s| parse_hhmm(s))
        .filter(|m| *m > 0);

    contracted
        .or_else(|| Some(parse_hhmm(&cfg.expected_daily)).filter(|m| *m > 0))
        .unwrap_or(DEFAULT_EXPECTED_MINUTES)
}
