//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("pinboard").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SERVER_PORT"))
        .stdout(predicate::str::contains("UNSPLASH_ACCESS_KEY"))
        .stdout(predicate::str::contains("--memory"));
}

#[test]
fn test_init_db_help() {
    let mut cmd = Command::cargo_bin("pinboard").unwrap();
    cmd.arg("init-db").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bundled schema"))
        .stdout(predicate::str::contains("PG_HOST"));
}

#[test]
fn test_init_db_missing_script_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("pinboard").unwrap();
    cmd.current_dir(dir.path())
        .arg("init-db")
        .arg("--file")
        .arg(dir.path().join("nope.sql"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("nope.sql"));
}

#[test]
fn test_init_db_unreachable_database_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("pinboard").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("PG_HOST")
        .arg("init-db")
        .arg("--pg-host")
        .arg("127.0.0.1")
        .arg("--pg-port")
        .arg("1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Schema bootstrap failed"));
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("pinboard").unwrap();
    cmd.arg("frobnicate");

    cmd.assert().failure();
}
