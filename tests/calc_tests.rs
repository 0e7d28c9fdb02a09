use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{fresh_home, init_db, logged_operations, rlo, rlo_in};

#[test]
fn test_calc_half_hour_left() {
    let db_path = init_db("calc_half_hour");

    rlo()
        .args(["--db", &db_path, "calc", "--completed", "08:00", "--break", "12:00"])
        .assert()
        .success()
        .stdout(contains("12:30 PM"))
        .stdout(contains("00h 30m"));
}

#[test]
fn test_calc_borrows_minutes() {
    let db_path = init_db("calc_borrow");

    rlo()
        .args(["--db", &db_path, "calc", "--completed", "07:45", "--break", "12:00"])
        .assert()
        .success()
        .stdout(contains("12:45 PM"))
        .stdout(contains("00h 45m"));
}

#[test]
fn test_calc_full_day_ahead() {
    let db_path = init_db("calc_full_day");

    rlo()
        .args(["--db", &db_path, "calc", "--completed", "00:00", "--break", "09:00"])
        .assert()
        .success()
        .stdout(contains("17:30 PM"));
}

#[test]
fn test_calc_missing_completed_fails() {
    let db_path = init_db("calc_missing_completed");

    rlo()
        .args(["--db", &db_path, "calc", "--break", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Please provide both completed time and last break time"))
        .stdout(contains("Logout time").not());

    assert_eq!(logged_operations(&db_path), vec!["init", "invalid"]);
}

#[test]
fn test_calc_missing_both_fails() {
    let db_path = init_db("calc_missing_both");

    rlo()
        .args(["--db", &db_path, "calc"])
        .assert()
        .failure()
        .stderr(contains("Please provide both completed time and last break time."));
}

#[test]
fn test_calc_invalid_time_is_rejected() {
    let db_path = init_db("calc_invalid_time");

    rlo()
        .args(["--db", &db_path, "calc", "--completed", "8:99", "--break", "12:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 8:99"));
}

#[test]
fn test_calc_over_completion_warns() {
    let db_path = init_db("calc_over_completion");

    rlo()
        .args(["--db", &db_path, "calc", "--completed", "09:00", "--break", "09:00"])
        .assert()
        .success()
        .stdout(contains("08:30 PM"))
        .stderr(contains("exceeds the 8h30m policy"));
}

#[test]
fn test_calc_wrap_and_suffix_options() {
    let db_path = init_db("calc_wrap");

    rlo()
        .args(["--db", &db_path, "calc", "--completed", "00:00", "--break", "20:00"])
        .assert()
        .success()
        .stdout(contains("28:30 PM"))
        .stderr(contains("04:30"));

    rlo()
        .args([
            "--db",
            &db_path,
            "calc",
            "--completed",
            "00:00",
            "--break",
            "20:00",
            "--wrap",
            "--no-suffix",
        ])
        .assert()
        .success()
        .stdout(contains("04:30").and(contains("PM").not()));

    rlo()
        .args([
            "--db",
            &db_path,
            "calc",
            "--completed",
            "08:00",
            "--break",
            "12:00",
            "--suffix",
            "h",
        ])
        .assert()
        .success()
        .stdout(contains("12:30 h"));
}

#[test]
fn test_calc_custom_policy() {
    let db_path = init_db("calc_policy");

    rlo()
        .args([
            "--db",
            &db_path,
            "calc",
            "--completed",
            "03:00",
            "--break",
            "13:00",
            "--policy",
            "7h36m",
        ])
        .assert()
        .success()
        .stdout(contains("17:36"))
        .stdout(contains("7h36m"));

    rlo()
        .args([
            "--db", &db_path, "calc", "--completed", "03:00", "--break", "13:00", "--policy",
            "soon",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid work duration"));
}

#[test]
fn test_calc_json_output() {
    let db_path = init_db("calc_json");

    let out = rlo()
        .args([
            "--db",
            &db_path,
            "calc",
            "--completed",
            "07:45",
            "--break",
            "12:00",
            "--json",
        ])
        .output()
        .expect("failed to run calc --json");
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid json");
    assert_eq!(v["completed"], "07:45");
    assert_eq!(v["last_break"], "12:00");
    assert_eq!(v["policy"], "8h30m");
    assert_eq!(v["remaining"], "00h 45m");
    assert_eq!(v["remaining_minutes"], 45);
    assert_eq!(v["logout"], "12:45");
    assert_eq!(v["logout_wrapped"], "12:45");
    assert_eq!(v["over_completed"], false);
}

#[test]
fn test_calc_is_logged() {
    let db_path = init_db("calc_logged");

    rlo()
        .args(["--db", &db_path, "calc", "--completed", "08:00", "--break", "12:00"])
        .assert()
        .success();

    assert_eq!(logged_operations(&db_path), vec!["init", "calc"]);

    rlo()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("08:00 / 12:00"))
        .stdout(contains("logout 12:30"));
}

#[test]
fn test_calc_json_over_completed_matches_text() {
    let db_path = init_db("calc_json_over");

    let out = rlo()
        .args([
            "--db",
            &db_path,
            "calc",
            "--completed",
            "09:00",
            "--break",
            "09:00",
            "--json",
        ])
        .output()
        .expect("failed to run calc --json");
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid json");
    assert_eq!(v["remaining"], "-00h 30m");
    assert_eq!(v["remaining_minutes"], -30);
    assert_eq!(v["logout"], "08:30");
    assert_eq!(v["over_completed"], true);

    rlo()
        .args(["--db", &db_path, "calc", "--completed", "09:00", "--break", "09:00"])
        .assert()
        .success()
        .stdout(contains("-00h 30m"));
}

#[test]
fn test_calc_rejects_policy_longer_than_a_day() {
    let db_path = init_db("calc_huge_policy");

    rlo()
        .args([
            "--db",
            &db_path,
            "calc",
            "--completed",
            "00:00",
            "--break",
            "09:00",
            "--policy",
            "40000000h",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid work duration: 40000000h"))
        .stderr(contains("panicked").not());
}

#[test]
fn test_calc_on_fresh_install_is_quiet() {
    let home = fresh_home("calc_first_run");

    rlo_in(&home)
        .args(["calc", "--completed", "08:00", "--break", "12:00"])
        .assert()
        .success()
        .stdout(contains("12:30 PM"))
        .stderr("");

    let db = home.join(".rlogout").join("rlogout.sqlite");
    assert!(db.exists());
    assert_eq!(logged_operations(&db.to_string_lossy()), vec!["calc"]);
}

#[test]
fn test_relative_db_is_resolved_in_config_dir() {
    let home = fresh_home("relative_db");

    rlo_in(&home)
        .args(["--db", "custom.sqlite", "--test", "init"])
        .assert()
        .success();

    rlo_in(&home)
        .args(["--db", "custom.sqlite", "calc", "--completed", "08:00", "--break", "12:00"])
        .assert()
        .success();

    let db = home.join(".rlogout").join("custom.sqlite");
    assert_eq!(logged_operations(&db.to_string_lossy()), vec!["init", "calc"]);
}
