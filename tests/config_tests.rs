mod common;
use common::rtb;
use predicates::prelude::*;
use rtimebank::config::migrate::fill_missing_fields;
use rtimebank::config::{BackendKind, Config};
use std::env;
use std::fs;

#[test]
fn test_fill_missing_fields_keeps_existing_values() {
    let mut path = env::temp_dir();
    path.push("rtimebank_fill_missing.conf");
    fs::write(&path, "database: /tmp/custom.sqlite\nexpected_daily: \"06:00\"\n").unwrap();

    let added = fill_missing_fields(&path).unwrap();
    assert!(added.contains(&"backend".to_string()));
    assert!(added.contains(&"compensation_minutes_per_day".to_string()));
    assert!(!added.contains(&"expected_daily".to_string()));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("/tmp/custom.sqlite"));
    assert!(content.contains("06:00"));
    assert!(content.contains("# backend options:"));

    let cfg: Config = serde_yaml::from_str(&content).unwrap();
    assert_eq!(cfg.backend, BackendKind::Local);
    assert_eq!(cfg.compensation_minutes_per_day, 30);

    // second pass has nothing to add
    assert!(fill_missing_fields(&path).unwrap().is_empty());
    fs::remove_file(&path).ok();
}

#[test]
fn test_partial_config_uses_defaults() {
    let cfg: Config = serde_yaml::from_str("database: x.sqlite\nbackend: http\n").unwrap();
    assert_eq!(cfg.backend, BackendKind::Http);
    assert_eq!(cfg.api_base_url, "http://localhost:3000");
    assert_eq!(cfg.default_user, 1);
    assert_eq!(cfg.expected_daily, "08:00");
    assert_eq!(cfg.compensation_time, "18:00");
    assert_eq!(cfg.poll_interval_secs, 30);
    assert!(cfg.schedules.is_empty());
}

#[test]
fn test_schedules_by_user_id() {
    let cfg: Config =
        serde_yaml::from_str("database: x.sqlite\nschedules:\n  7: \"06:00\"\n").unwrap();
    assert_eq!(cfg.schedules.get(&7).map(String::as_str), Some("06:00"));
}

#[test]
fn test_config_print_shows_overrides() {
    rtb()
        .args(["--db", "/tmp/printed.sqlite", "--backend", "http", "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("database: /tmp/printed.sqlite"))
        .stdout(predicate::str::contains("backend: http"))
        .stdout(predicate::str::contains("expected_daily"));
}
