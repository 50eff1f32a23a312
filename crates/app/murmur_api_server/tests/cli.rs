//! Startup checks for the server binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn server() -> Command {
    let mut cmd = Command::cargo_bin("murmur_api_server").expect("binary built");
    cmd.env_remove("MURMUR_REPLIES")
        .env_remove("BIND_ADDR")
        .env_remove("PORT")
        .env_remove("HOST");
    cmd
}

#[test]
fn help_lists_options() {
    server()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--replies"));
}

#[test]
fn empty_replies_file_aborts_startup() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"[]").expect("write");

    server()
        .args(["--port", "0", "--replies"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("NoCandidates"));
}

#[test]
fn missing_replies_file_aborts_startup() {
    let dir = tempfile::tempdir().expect("temp dir");

    server()
        .args(["--port", "0", "--replies"])
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidReplies"));
}

#[test]
fn replies_file_is_read_from_environment() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"[]").expect("write");

    server()
        .env("MURMUR_REPLIES", file.path())
        .env("BIND_ADDR", "127.0.0.1:0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NoCandidates"));
}
