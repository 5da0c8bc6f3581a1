//! # CareerBot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements configuration loading for CareerBot. Settings are
//! merged from a user-level file, a project-level file, and the defaults
//! defined in code, then expanded and validated before use.
//!
//! Configuration sources (in order of precedence):
//! 1. `$CAREERBOT_CONFIG`, if set (used exclusively; no merging)
//! 2. Project-specific `.careerbot.toml` in current directory or ancestors
//! 3. User-specific `<config dir>/careerbot/config.toml`
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [chat]
//! bot_name = "Guide"
//! typing_delay_min_ms = 200
//! typing_delay_max_ms = 400
//! seed = 7
//!
//! [catalogue]
//! path = "~/careerbot/topics.toml"
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config()?;
//! let delay = cfg.chat.typing_delay();
//! ```
//!
use crate::core::error::{CareerbotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    ops::RangeInclusive,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub catalogue: CatalogueConfig,
}

/// Conversation behaviour (`careerbot chat` / `careerbot ask`).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Name shown in front of bot replies.
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
    /// Lower bound of the simulated typing delay, in milliseconds.
    #[serde(default = "default_typing_delay_min_ms")]
    pub typing_delay_min_ms: u64,
    /// Upper bound of the simulated typing delay, in milliseconds.
    #[serde(default = "default_typing_delay_max_ms")]
    pub typing_delay_max_ms: u64,
    /// Fixed seed for response selection. Unset means seed from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            typing_delay_min_ms: default_typing_delay_min_ms(),
            typing_delay_max_ms: default_typing_delay_max_ms(),
            seed: None,
        }
    }
}

impl ChatConfig {
    /// The configured delay window as an inclusive millisecond range.
    pub fn typing_delay(&self) -> RangeInclusive<u64> {
        self.typing_delay_min_ms..=self.typing_delay_max_ms
    }
}

/// Where to load the topic catalogue from.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CatalogueConfig {
    /// Path to a TOML catalogue (can use ~). `None` selects the built-in one.
    pub path: Option<String>,
}

fn default_bot_name() -> String {
    "CareerBot".to_string()
}
fn default_typing_delay_min_ms() -> u64 {
    1000
}
fn default_typing_delay_max_ms() -> u64 {
    2000
}

const PROJECT_CONFIG_FILENAME: &str = ".careerbot.toml";
/// Environment variable naming a config file that replaces all other sources.
pub const CONFIG_ENV_VAR: &str = "CAREERBOT_CONFIG";

pub fn load_config() -> Result<Config> {
    let mut config = match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => {
            let path = PathBuf::from(path);
            info!(
                "Loading configuration from ${}: {}",
                CONFIG_ENV_VAR,
                path.display()
            );
            load_config_from_path(&path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    expand_config_paths(&mut config).context("Failed to expand paths in configuration")?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "CareerBot", "careerbot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.careerbot.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Ok(Some(project_config));
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.chat.bot_name = if project_cfg.chat.bot_name != default_bot_name() {
        project_cfg.chat.bot_name
    } else {
        user.chat.bot_name
    };
    merged.chat.typing_delay_min_ms =
        if project_cfg.chat.typing_delay_min_ms != default_typing_delay_min_ms() {
            project_cfg.chat.typing_delay_min_ms
        } else {
            user.chat.typing_delay_min_ms
        };
    merged.chat.typing_delay_max_ms =
        if project_cfg.chat.typing_delay_max_ms != default_typing_delay_max_ms() {
            project_cfg.chat.typing_delay_max_ms
        } else {
            user.chat.typing_delay_max_ms
        };
    merged.chat.seed = project_cfg.chat.seed.or(user.chat.seed);
    merged.catalogue.path = project_cfg.catalogue.path.or(user.catalogue.path);
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(path) = config.catalogue.path.as_mut() {
        *path = shellexpand::tilde(path).into_owned();
        debug!("Expanded catalogue path: {}", path);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.chat.bot_name.trim().is_empty() {
        return Err(anyhow!(CareerbotError::Config(
            "chat.bot_name cannot be empty.".to_string()
        )));
    }
    if config.chat.typing_delay_min_ms > config.chat.typing_delay_max_ms {
        return Err(anyhow!(CareerbotError::Config(format!(
            "Invalid typing delay: min {}ms is greater than max {}ms.",
            config.chat.typing_delay_min_ms, config.chat.typing_delay_max_ms
        ))));
    }
    if let Some(path) = &config.catalogue.path {
        let path = Path::new(path);
        if !path.is_file() {
            return Err(anyhow!(CareerbotError::Config(format!(
                "Configured catalogue '{}' does not exist or is not a file.",
                path.display()
            ))));
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}
