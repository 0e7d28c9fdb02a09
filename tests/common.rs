#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// The binary under test, with HOME pointed at a scratch directory so a
/// real user configuration never leaks into the tests.
pub fn rlo() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rlogout_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rlogout");
    cmd.env("HOME", &home);
    cmd.env("APPDATA", &home);
    cmd
}

/// A brand new, empty HOME directory for first-run scenarios
pub fn fresh_home(name: &str) -> PathBuf {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_rlogout_home", name));
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).expect("create home");
    home
}

/// The binary under test running with the given HOME
pub fn rlo_in(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rlogout");
    cmd.env("HOME", home);
    cmd.env("APPDATA", home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rlogout.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a fresh DB in test mode (no config file written)
pub fn init_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    rlo()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

/// Operations recorded in the log table, migration markers excluded
pub fn logged_operations(db_path: &str) -> Vec<String> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    let mut stmt = conn
        .prepare("SELECT operation FROM log WHERE operation <> 'migration_applied' ORDER BY id")
        .expect("prepare");
    let ops: Vec<String> = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .expect("query")
        .map(|r| r.expect("row"))
        .collect();
    ops
}
