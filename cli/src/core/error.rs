//! # CareerBot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used by the ambient layers of CareerBot:
//! configuration loading and catalogue loading/validation. The matching core
//! itself (`chat::matcher`, `chat::responder`) is total and never returns an
//! error; unmatched input is handled by the fallback path, not by this module.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `CareerbotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if catalogue.topics().is_empty() {
//!     return Err(CareerbotError::Catalogue("no topics defined".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read catalogue file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the CareerBot application.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CareerbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalogue error: {0}")]
    Catalogue(String),

    #[error("Topic '{name}' is defined more than once.")]
    DuplicateTopic { name: String },

    #[error("Topic '{name}' has no {field}.")]
    EmptyTopic { name: String, field: &'static str },

    #[error("Topic '{topic}' has keyword '{keyword}' which is not lowercase.")]
    UppercaseKeyword { topic: String, keyword: String },

    #[error("Topic name '{name}' is reserved for unmatched input.")]
    ReservedTopic { name: String },

    #[error("Catalogue has no 'greeting' topic for the welcome message.")]
    MissingGreeting,
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
