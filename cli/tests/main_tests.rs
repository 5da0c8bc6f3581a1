//! # CareerBot CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//!
//! Top-level behaviour of the `careerbot` binary: standard flags and
//! argument errors.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    careerbot_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("chat")
                .and(predicate::str::contains("ask"))
                .and(predicate::str::contains("topics")),
        );
}

#[test]
fn test_version_flag() {
    careerbot_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand_fails() {
    careerbot_cmd().assert().failure();
}

#[test]
fn test_invalid_config_reports_error() {
    let sandbox = Sandbox::with_config(
        "[chat]\ntyping_delay_min_ms = 900\ntyping_delay_max_ms = 100\n",
    );
    sandbox
        .cmd()
        .args(["ask", "hello"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid typing delay"));
}

#[test]
fn test_unknown_config_key_reports_error() {
    let sandbox = Sandbox::with_config("[chat]\nmood = \"cheerful\"\n");
    sandbox
        .cmd()
        .args(["topics"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML"));
}
