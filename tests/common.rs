#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use rtimebank::models::punch::PunchEvent;
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, with HOME/APPDATA pointed at a scratch directory so a real
/// user configuration never leaks into the tests.
pub fn rtb() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rtimebank_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rtimebank");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimebank.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a fresh DB through the CLI.
pub fn init_db(db_path: &str) {
    rtb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Record a full 08:00/12:00/13:00/17:30 day for user 1.
pub fn add_full_day(db_path: &str, date: &str) {
    for (time, role) in [
        ("08:00", "entry"),
        ("12:00", "pause"),
        ("13:00", "return"),
        ("17:30", "exit"),
    ] {
        rtb()
            .args(["--db", db_path, "add", date, time, "--role", role])
            .assert()
            .success();
    }
}

pub fn at(y: i32, m: u32, d: u32, h: u32, mi: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, m, d, h, mi, 0)
        .earliest()
        .expect("valid local time")
}

pub fn punch(id: i64, ts: DateTime<Local>, label: &str) -> PunchEvent {
    PunchEvent::new(id, 1, ts, label)
}

/// Four punches at the given times on 2025-09-01.
pub fn day_of(times: &[(u32, u32)]) -> Vec<PunchEvent> {
    times
        .iter()
        .enumerate()
        .map(|(i, (h, m))| punch(i as i64 + 1, at(2025, 9, 1, *h, *m), ""))
        .collect()
}
