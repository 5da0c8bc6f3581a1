//! # CareerBot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the subcommands of the `careerbot` binary and the
//! helpers they share: resolving which catalogue to load, and rendering
//! transcript messages for the terminal.
//!
//! ## Commands
//!
//! - `chat`: Interactive conversation on stdin/stdout
//! - `ask`: One-shot match and reply, optionally with a score breakdown
//! - `topics`: List the topics in the active catalogue
//!
use careerbot::chat::{Catalogue, Message, Sender};
use careerbot::core::{config::Config, error::Result};
use chrono::Local;
use clap::Args;
use std::path::{Path, PathBuf};

/// Handler and arguments for `careerbot ask`.
pub mod ask;
/// Handler and arguments for `careerbot chat`.
pub mod chat;
/// Handler and arguments for `careerbot topics`.
pub mod topics;

/// Catalogue selection shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogueArgs {
    /// Path to a TOML topic catalogue. Overrides `catalogue.path` in the config.
    #[arg(long, value_name = "PATH", env = "CAREERBOT_CATALOGUE")]
    pub catalogue: Option<PathBuf>,
}

/// Loads the catalogue chosen by the command line, then the config, then the built-in one.
pub fn load_catalogue(config: &Config, args: &CatalogueArgs) -> Result<Catalogue> {
    let path = args
        .catalogue
        .as_deref()
        .or_else(|| config.catalogue.path.as_deref().map(Path::new));
    Catalogue::load(path)
}

/// Renders a confidence ratio as a whole percentage.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}

/// Renders one transcript line, e.g. `[14:02] CareerBot [resume 17%]: ...`.
/// The time is shown in the local time zone.
pub fn format_message(message: &Message, bot_name: &str) -> String {
    let time = message.timestamp.with_timezone(&Local).format("%H:%M");
    match message.sender {
        Sender::User => format!("[{}] You: {}", time, message.text),
        Sender::Bot => {
            let annotation = match (&message.topic, message.confidence) {
                (Some(topic), Some(confidence)) => {
                    format!(" [{} {}]", topic, format_confidence(confidence))
                }
                _ => String::new(),
            };
            format!("[{}] {}{}: {}", time, bot_name, annotation, message.text)
        }
    }
}
