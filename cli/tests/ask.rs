//! # CareerBot CLI Ask Integration Tests
//!
//! File: cli/tests/ask.rs
//! Author: Christi Mahu
//!
//! Integration tests for `careerbot ask`.
//!

mod common;
use careerbot::chat::{Catalogue, FALLBACK_RESPONSES};
use common::*;
use predicates::prelude::*;

#[test]
fn test_ask_matches_by_ratio_not_order() {
    // greeting scores 1/7, resume 1/6.
    Sandbox::new()
        .cmd()
        .args(["ask", "--seed", "1", "hi, can you help me with my resume?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Topic: resume (17%)"));
}

#[test]
fn test_ask_reply_comes_from_topic() {
    let output = Sandbox::new()
        .cmd()
        .args(["ask", "--seed", "8", "any", "internship", "openings?"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Topic: internships"));

    let catalogue = Catalogue::builtin().unwrap();
    let replies = &catalogue.get("internships").unwrap().responses;
    assert!(replies
        .iter()
        .any(|reply| stdout.contains(&format!("CareerBot: {}", reply))));
}

#[test]
fn test_ask_unknown_uses_fallback() {
    let output = Sandbox::new()
        .cmd()
        .args(["ask", "--seed", "3", "qwerty"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Topic: unknown (0%)"));
    assert!(FALLBACK_RESPONSES.iter().any(|reply| stdout.contains(reply)));
}

#[test]
fn test_ask_same_seed_same_output() {
    let sandbox = Sandbox::new();
    let run = || {
        sandbox
            .cmd()
            .args(["ask", "--seed", "42", "career path ideas"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_ask_explain_prints_scores() {
    Sandbox::new()
        .cmd()
        .args(["ask", "--explain", "hi, can you help me with my resume?"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Topic")
                .and(predicate::str::contains(" 1/7 "))
                .and(predicate::str::contains(" 1/6 ")),
        );
}

#[test]
fn test_ask_with_custom_catalogue() {
    let sandbox = Sandbox::new();
    let path = sandbox.write("weather.toml", WEATHER_CATALOGUE);
    sandbox
        .cmd()
        .args(["ask", "--catalogue"])
        .arg(&path)
        .arg("will it rain?")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Topic: weather (50%)")
                .and(predicate::str::contains("Bring an umbrella.")),
        );
}

#[test]
fn test_ask_uses_configured_bot_name_and_catalogue() {
    let sandbox = Sandbox::new();
    let path = sandbox.write("weather.toml", WEATHER_CATALOGUE);
    let config = format!(
        "[chat]\nbot_name = \"Forecaster\"\n\n[catalogue]\npath = {:?}\n",
        path.to_string_lossy()
    );
    sandbox.write("config.toml", &config);
    sandbox
        .cmd()
        .args(["ask", "sun and rain"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Topic: weather (100%)")
                .and(predicate::str::contains("Forecaster: Bring an umbrella.")),
        );
}

#[test]
fn test_ask_rejects_invalid_catalogue() {
    let sandbox = Sandbox::new();
    let path = sandbox.write(
        "bad.toml",
        "welcome = \"hi\"\n[[topics]]\nname = \"greeting\"\nkeywords = [\"Hello\"]\nresponses = [\"Hi\"]\n",
    );
    sandbox
        .cmd()
        .args(["ask", "--catalogue"])
        .arg(&path)
        .arg("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not lowercase"));
}

#[test]
fn test_ask_rejects_topic_named_unknown() {
    let sandbox = Sandbox::new();
    let path = sandbox.write(
        "reserved.toml",
        "welcome = \"hi\"\n\
         [[topics]]\nname = \"greeting\"\nkeywords = [\"hello\"]\nresponses = [\"Hi\"]\n\
         [[topics]]\nname = \"unknown\"\nkeywords = [\"zebra\"]\nresponses = [\"Zebra reply.\"]\n",
    );
    sandbox
        .cmd()
        .args(["ask", "--catalogue"])
        .arg(&path)
        .arg("what's the weather like?")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved for unmatched input"));
}
