mod common;
use chrono::{Datelike, NaiveDate, NaiveTime};
use common::{rtb, setup_test_db};
use predicates::prelude::*;
use rtimebank::backend::Backend;
use rtimebank::backend::local::LocalBackend;
use rtimebank::config::Config;
use rtimebank::core::logic::Core;
use rtimebank::db::pool::DbPool;
use rtimebank::db::queries::insert_punch;
use rtimebank::models::monthly_balance::YearMonth;
use rtimebank::utils::date::{all_days_of_month, is_business_day, today};

fn config_for(db_path: &str) -> Config {
    let mut cfg = Config::default();
    cfg.database = db_path.to_string();
    cfg
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// Record punches at `times` on `day` for user 1.
fn record(pool: &DbPool, day: NaiveDate, times: &[(u32, u32)]) {
    for (h, m) in times {
        insert_punch(&pool.conn, 1, &day.and_time(hm(*h, *m)), "", None, "cli").unwrap();
    }
}

/// An 8h day for every business day of the month up to `until`.
fn record_full_days(pool: &DbPool, until: NaiveDate) -> i64 {
    let mut days = 0;
    for day in all_days_of_month(until.year(), until.month()) {
        if day <= until && is_business_day(day) {
            record(pool, day, &[(8, 0), (12, 0), (13, 0), (17, 0)]);
            days += 1;
        }
    }
    days
}

#[test]
fn test_current_month_saldo_counts_only_elapsed_days() {
    let db_path = setup_test_db("local_month_to_date");
    let pool = DbPool::open_migrated(&db_path).unwrap();
    let as_of = NaiveDate::from_ymd_opt(2025, 9, 10).unwrap();
    let days = record_full_days(&pool, as_of);
    assert_eq!(days, 8);

    let backend = LocalBackend::new(config_for(&db_path)).as_of(as_of);
    let b = backend
        .fetch_monthly_saldo(1, YearMonth::of(as_of))
        .unwrap()
        .unwrap();

    assert_eq!(b.total_worked_minutes, 8 * 480);
    assert_eq!(b.total_expected_minutes, 8 * 480);
    assert_eq!(b.balance_minutes, 0);
    assert_eq!(Core::debt_from_balance(b.balance_minutes), 0);
}

#[test]
fn test_closed_month_saldo_counts_whole_month() {
    let db_path = setup_test_db("local_month_closed");
    let pool = DbPool::open_migrated(&db_path).unwrap();
    record(&pool, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(), &[(8, 0), (12, 0), (13, 0), (17, 0)]);

    let backend = LocalBackend::new(config_for(&db_path))
        .as_of(NaiveDate::from_ymd_opt(2025, 10, 2).unwrap());
    let b = backend
        .fetch_monthly_saldo(1, YearMonth::new(2025, 9).unwrap())
        .unwrap()
        .unwrap();

    assert_eq!(b.total_expected_minutes, 22 * 480);
    assert_eq!(b.balance_minutes, 480 - 22 * 480);
}

#[test]
fn test_default_plan_debit_ignores_days_to_come() {
    let db_path = setup_test_db("local_plan_default_debit");
    rtb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    {
        let pool = DbPool::open_migrated(&db_path).unwrap();
        record_full_days(&pool, today());
    }

    rtb()
        .args(["--db", &db_path, "plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has nothing to compensate"));
}

#[test]
fn test_daily_saldo_exit_is_the_fourth_punch() {
    let db_path = setup_test_db("local_daily_exit");
    let pool = DbPool::open_migrated(&db_path).unwrap();
    let day = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    let backend = LocalBackend::new(config_for(&db_path));

    // out for lunch only: no exit yet
    record(&pool, day, &[(8, 0), (12, 0)]);
    let rows = backend.fetch_daily_saldo(day).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].entry.as_deref(), Some("08:00"));
    assert!(rows[0].exit.is_none());

    record(&pool, day, &[(13, 0), (17, 15)]);
    let rows = backend.fetch_daily_saldo(day).unwrap();
    assert_eq!(rows[0].exit.as_deref(), Some("17:15"));
    assert_eq!(rows[0].balance_minutes, 15);
}
