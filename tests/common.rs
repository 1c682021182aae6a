#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn lapkes() -> Command {
    cargo_bin_cmd!("lapkes")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lapkes.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run `lapkes --db <db> --test <args...>`
pub fn run(db_path: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    lapkes()
        .args(["--db", db_path, "--test"])
        .args(args)
        .assert()
}

/// Initialize the DB with the sample school and open an admin session
pub fn init_and_login(db_path: &str) {
    run(db_path, &["init", "--demo"]).success();
    run(db_path, &["login", "-u", "admin", "-p", "password123"]).success();
}

/// Initialize an empty DB and open an admin session
pub fn init_empty_and_login(db_path: &str) {
    run(db_path, &["init"]).success();
    run(db_path, &["login", "-u", "admin", "-p", "password123"]).success();
}
