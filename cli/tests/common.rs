//! # CareerBot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every test runs
//! the binary inside a `Sandbox`: a temporary working directory with its own
//! config file, so the developer's real `~/.config/careerbot` or a stray
//! `.careerbot.toml` never leaks into a test run.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

/// A `careerbot` command pointing at the binary built for this test run.
pub fn careerbot_cmd() -> Command {
    Command::cargo_bin("careerbot").expect("Failed to find careerbot binary for testing")
}

/// Isolated working directory plus config file for one test.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    /// Sandbox with an empty (all defaults) config.
    pub fn new() -> Self {
        Self::with_config("")
    }

    pub fn with_config(config_toml: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create sandbox dir");
        fs::write(dir.path().join("config.toml"), config_toml).expect("Failed to write config");
        Self { dir }
    }

    /// Writes `content` to `name` inside the sandbox and returns its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write sandbox file");
        path
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = careerbot_cmd();
        cmd.current_dir(self.dir.path())
            .env("CAREERBOT_CONFIG", self.dir.path().join("config.toml"))
            .env_remove("CAREERBOT_CATALOGUE")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// A small catalogue with a greeting and one weather topic.
pub const WEATHER_CATALOGUE: &str = r#"
welcome = "Welcome to the weather desk."

[[topics]]
name = "greeting"
keywords = ["hi", "hello"]
responses = ["Hello from the weather desk!"]

[[topics]]
name = "weather"
keywords = ["rain", "sun"]
responses = ["Bring an umbrella."]
"#;
