mod common;
use common::{add_full_day, init_db, rtb, setup_test_db};
use predicates::prelude::*;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    rtb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_daily_balance() {
    let db_path = setup_test_db("add_and_daily_balance");
    init_db(&db_path);
    add_full_day(&db_path, "2025-09-01");

    rtb()
        .args(["--db", &db_path, "day", "--period", "2025-09-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-09-01"))
        .stdout(predicate::str::contains("08:00"))
        .stdout(predicate::str::contains("17:30"))
        .stdout(predicate::str::contains("08:30"))
        .stdout(predicate::str::contains("+00:30"))
        .stdout(predicate::str::contains("positive"));
}

#[test]
fn test_add_rejects_unknown_role() {
    let db_path = setup_test_db("add_rejects_unknown_role");
    init_db(&db_path);

    rtb()
        .args(["--db", &db_path, "add", "2025-09-01", "08:00", "--role", "coffee"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid punch role"));
}

#[test]
fn test_add_rejects_bad_time() {
    let db_path = setup_test_db("add_rejects_bad_time");
    init_db(&db_path);

    rtb()
        .args(["--db", &db_path, "add", "2025-09-01", "8h"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time format"));
}

#[test]
fn test_day_incomplete_after_delete() {
    let db_path = setup_test_db("day_incomplete_after_delete");
    init_db(&db_path);
    add_full_day(&db_path, "2025-09-01");

    rtb()
        .args(["--db", &db_path, "del", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted punch 4"));

    rtb()
        .args(["--db", &db_path, "day", "--period", "2025-09-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("incomplete"));

    rtb()
        .args(["--db", &db_path, "del", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Punch not found: 4"));
}

#[test]
fn test_day_without_punches() {
    let db_path = setup_test_db("day_without_punches");
    init_db(&db_path);

    rtb()
        .args(["--db", &db_path, "day", "--period", "2025-09-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No punches for user 1"));
}

#[test]
fn test_day_fill_lists_missing_business_days() {
    let db_path = setup_test_db("day_fill");
    init_db(&db_path);
    add_full_day(&db_path, "2025-09-01");

    rtb()
        .args(["--db", &db_path, "day", "--period", "2025-09-01:2025-09-07", "--fill"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-09-05"))
        .stdout(predicate::str::contains("no-record"))
        .stdout(predicate::str::contains("2025-09-06").not());
}

#[test]
fn test_day_details_shows_role_mismatch() {
    let db_path = setup_test_db("day_details_mismatch");
    init_db(&db_path);

    rtb()
        .args(["--db", &db_path, "add", "2025-09-01", "08:00", "--role", "entry"])
        .assert()
        .success();
    rtb()
        .args(["--db", &db_path, "add", "2025-09-01", "08:05", "--role", "entry"])
        .assert()
        .success();

    rtb()
        .args(["--db", &db_path, "day", "--period", "2025-09-01", "--details"])
        .assert()
        .success()
        .stdout(predicate::str::contains("punch 2 is #2 of the day (pause) but declares 'entry'"));
}

#[test]
fn test_month_of_closed_month() {
    let db_path = setup_test_db("month_closed");
    init_db(&db_path);
    add_full_day(&db_path, "2025-09-01");

    rtb()
        .args(["--db", &db_path, "month", "2025-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Worked   : 08:30"))
        .stdout(predicate::str::contains("Expected : 176:00"))
        .stdout(predicate::str::contains("-167:30"))
        .stdout(predicate::str::contains("22 elapsed of 22"))
        .stdout(predicate::str::contains("Closed month"));
}

#[test]
fn test_month_rejects_bad_month() {
    let db_path = setup_test_db("month_bad");
    init_db(&db_path);

    rtb()
        .args(["--db", &db_path, "month", "2025-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month"));
}

#[test]
fn test_plan_preview_does_not_write() {
    let db_path = setup_test_db("plan_preview");
    init_db(&db_path);

    rtb()
        .args(["--db", &db_path, "plan", "--debt", "01:40", "--per-day", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("debit 01:40"))
        .stdout(predicate::str::contains("00:30"))
        .stdout(predicate::str::contains("00:10"))
        .stdout(predicate::str::contains("18:00"))
        .stdout(predicate::str::contains("Preview only"));

    rtb()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("compensation_write").not());
}

#[test]
fn test_plan_zero_debt() {
    let db_path = setup_test_db("plan_zero_debt");
    init_db(&db_path);

    rtb()
        .args(["--db", &db_path, "plan", "--debt", "00:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to compensate"));
}

#[test]
fn test_plan_rejects_zero_rate() {
    let db_path = setup_test_db("plan_zero_rate");
    init_db(&db_path);

    rtb()
        .args(["--db", &db_path, "plan", "--debt", "01:00", "--per-day", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1 minute"));
}

#[test]
fn test_plan_rejects_debt_too_long_to_schedule() {
    let db_path = setup_test_db("plan_too_long");
    init_db(&db_path);

    rtb()
        .args(["--db", &db_path, "plan", "--debt", "100000:00", "--per-day", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be scheduled"));
}

#[test]
fn test_plan_confirm_writes_and_journals() {
    let db_path = setup_test_db("plan_confirm");
    init_db(&db_path);

    rtb()
        .args([
            "--db", &db_path, "plan", "--debt", "01:40", "--per-day", "30", "--confirm",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan 1: 4 compensation punch(es) written"));

    rtb()
        .args(["--db", &db_path, "compensate", "--status", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("written"))
        .stdout(predicate::str::contains("pending").not());

    rtb()
        .args(["--db", &db_path, "compensate", "--resume", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 compensation punch(es) written"));

    rtb()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plan_confirmed"))
        .stdout(predicate::str::contains("compensation_write"));
}

#[test]
fn test_compensate_unknown_plan() {
    let db_path = setup_test_db("compensate_unknown");
    init_db(&db_path);

    rtb()
        .args(["--db", &db_path, "compensate", "--status", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Compensation plan not found: 99"));
}

#[test]
fn test_dashboard_once() {
    let db_path = setup_test_db("dashboard_once");
    init_db(&db_path);
    add_full_day(&db_path, "2025-09-01");
    rtb()
        .args(["--db", &db_path, "add", "2025-09-01", "09:00", "--user", "2"])
        .assert()
        .success();

    rtb()
        .args(["--db", &db_path, "dashboard", "--once", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1"))
        .stdout(predicate::str::contains("#2"))
        .stdout(predicate::str::contains("+00:30"))
        .stdout(predicate::str::contains("Punches today: 5"))
        .stderr(predicate::str::contains("Incomplete days: users [2]"));
}

#[test]
fn test_unreachable_http_backend_degrades_to_empty() {
    let db_path = setup_test_db("http_unreachable");
    init_db(&db_path);

    rtb()
        .args([
            "--db",
            &db_path,
            "--backend",
            "http",
            "--api",
            "http://127.0.0.1:9",
            "day",
            "--period",
            "2025-09-01",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not fetch punches"))
        .stdout(predicate::str::contains("No punches for user 1"));

    rtb()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fetch_failed"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records");
    init_db(&db_path);
    add_full_day(&db_path, "2025-09-01");

    rtb()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("migration_applied"))
        .stdout(predicate::str::contains("add"));
}

#[test]
fn test_db_info() {
    let db_path = setup_test_db("db_info");
    init_db(&db_path);
    add_full_day(&db_path, "2025-09-01");

    rtb()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("punches"));
}
