#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use movielist::db::{DbPool, create_schema};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary with a clean, deterministic environment: dates render in UTC
/// and the working directory holds no `.env` file.
pub fn mvl() -> Command {
    let mut cmd = cargo_bin_cmd!("movielist");
    cmd.env("TZ", "UTC")
        .env_remove("DATABASE_URL")
        .current_dir(env::temp_dir());
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_movielist.sqlite", name));
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

/// Fresh in-memory database with the schema in place.
pub fn memory_pool() -> DbPool {
    let pool = DbPool::open_in_memory().expect("open in-memory db");
    create_schema(&pool.conn).expect("create schema");
    pool
}

/// Join menu selections and answers into a stdin script.
pub fn script(lines: &[&str]) -> String {
    let mut s = lines.join("\n");
    s.push('\n');
    s
}

/// Seed a database file through the CLI: two users, a past and a future movie.
pub fn init_db_with_data(db_path: &str) {
    mvl().args(["--db", db_path, "init"]).assert().success();

    mvl()
        .args(["--db", db_path, "add-movie", "Inception", "16-07-2010"])
        .assert()
        .success();

    mvl()
        .args(["--db", db_path, "add-movie", "Far Future", "01-01-2999"])
        .assert()
        .success();

    for user in ["alice", "bob"] {
        mvl()
            .args(["--db", db_path, "add-user", user])
            .assert()
            .success();
    }
}
