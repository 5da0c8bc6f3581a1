//! # Topic Catalogue
//!
//! File: cli/src/chat/catalogue.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The catalogue is the static table the matcher scores against: an ordered
//! list of topics, each with lowercase trigger keywords and the canned
//! responses the responder picks from. It also carries the welcome text used
//! to seed a fresh conversation.
//!
//! A catalogue is loaded once (either the built-in career catalogue compiled
//! into the binary, or a TOML file named in the configuration) and is never
//! mutated afterwards. Validation runs on every load, so a `Catalogue` value
//! always satisfies:
//! - at least one topic, with unique names, none of them `unknown`
//! - every topic has at least one keyword and one non-blank response
//! - every keyword is already lowercase
//! - a `greeting` topic exists
//!
//! ## File Format
//!
//! ```toml
//! welcome = "Hi! Ask me about careers."
//!
//! [[topics]]
//! name = "greeting"
//! keywords = ["hi", "hello"]
//! responses = ["Hello there!"]
//! ```
//!
use crate::chat::matcher::UNKNOWN_TOPIC;
use crate::core::error::{CareerbotError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::{collections::HashSet, fs, path::Path};
use tracing::{debug, info};

/// Name of the topic the welcome message is attributed to.
pub const GREETING_TOPIC: &str = "greeting";

const BUILTIN_CATALOGUE: &str = include_str!("../../catalogue/career.toml");

/// One named topic with its trigger keywords and candidate responses.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TopicEntry {
    pub name: String,
    pub keywords: Vec<String>,
    pub responses: Vec<String>,
}

impl TopicEntry {
    pub fn new<N, K, R>(name: N, keywords: K, responses: R) -> Self
    where
        N: Into<String>,
        K: IntoIterator,
        K::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct CatalogueFile {
    welcome: String,
    topics: Vec<TopicEntry>,
}

/// Validated, immutable topic table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    welcome: String,
    topics: Vec<TopicEntry>,
}

impl Catalogue {
    /// Builds a catalogue from topics already in memory, validating them.
    pub fn new(welcome: impl Into<String>, topics: Vec<TopicEntry>) -> Result<Self> {
        let catalogue = Self {
            welcome: welcome.into(),
            topics,
        };
        catalogue.validate()?;
        Ok(catalogue)
    }

    /// The career guidance catalogue shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOGUE).context("Built-in catalogue is invalid")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogueFile =
            toml::from_str(content).context("Failed to parse catalogue TOML")?;
        Self::new(file.welcome, file.topics)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        info!("Loading catalogue from: {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalogue file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid catalogue file: {}", path.display()))
    }

    /// Loads the catalogue at `path`, or the built-in one when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                debug!("Using built-in catalogue.");
                Self::builtin()
            }
        }
    }

    pub fn welcome(&self) -> &str {
        &self.welcome
    }

    pub fn topics(&self) -> &[TopicEntry] {
        &self.topics
    }

    pub fn get(&self, name: &str) -> Option<&TopicEntry> {
        self.topics.iter().find(|topic| topic.name == name)
    }

    fn validate(&self) -> Result<()> {
        if self.topics.is_empty() {
            return Err(CareerbotError::Catalogue("no topics defined".into()).into());
        }
        if self.welcome.trim().is_empty() {
            return Err(CareerbotError::Catalogue("welcome message is empty".into()).into());
        }
        let mut seen = HashSet::new();
        for topic in &self.topics {
            // Reserved for unmatched input, which must always get a fallback reply.
            if topic.name == UNKNOWN_TOPIC {
                return Err(CareerbotError::ReservedTopic {
                    name: topic.name.clone(),
                }
                .into());
            }
            if !seen.insert(topic.name.as_str()) {
                return Err(CareerbotError::DuplicateTopic {
                    name: topic.name.clone(),
                }
                .into());
            }
            if topic.keywords.is_empty() {
                return Err(CareerbotError::EmptyTopic {
                    name: topic.name.clone(),
                    field: "keywords",
                }
                .into());
            }
            if topic.responses.iter().all(|r| r.trim().is_empty()) {
                return Err(CareerbotError::EmptyTopic {
                    name: topic.name.clone(),
                    field: "responses",
                }
                .into());
            }
            if topic.responses.iter().any(|r| r.trim().is_empty()) {
                return Err(CareerbotError::Catalogue(format!(
                    "topic '{}' has a blank response",
                    topic.name
                ))
                .into());
            }
            // An empty keyword would be a substring of every input.
            if topic.keywords.iter().any(|k| k.is_empty()) {
                return Err(CareerbotError::Catalogue(format!(
                    "topic '{}' has an empty keyword",
                    topic.name
                ))
                .into());
            }
            if let Some(keyword) = topic.keywords.iter().find(|k| k.to_lowercase() != **k) {
                return Err(CareerbotError::UppercaseKeyword {
                    topic: topic.name.clone(),
                    keyword: keyword.clone(),
                }
                .into());
            }
        }
        if !seen.contains(GREETING_TOPIC) {
            return Err(CareerbotError::MissingGreeting.into());
        }
        debug!("Catalogue validated: {} topics.", self.topics.len());
        Ok(())
    }
}
