//! # CareerBot Chat Core
//!
//! File: cli/src/chat/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The chat core is a short pipeline:
//!
//! ```text
//! Catalogue ──> matcher ──> responder ──> Session / Conversation
//! ```
//!
//! - `catalogue`: the static topic table (built in, or loaded from TOML)
//! - `matcher`: keyword hit-ratio scoring, picks the best topic or "unknown"
//! - `responder`: random pick among a topic's replies, or a fallback reply
//! - `session`: the transcript state object (welcome, submit, complete, clear)
//! - `conversation`: async driver adding the seeded RNG and typing delay
//!
//! `matcher` and `responder` are pure apart from the single random draw the
//! responder makes, so they can be tested without any front end.
//!
pub mod catalogue;
pub mod conversation;
pub mod matcher;
pub mod responder;
pub mod session;

pub use catalogue::{Catalogue, TopicEntry};
pub use conversation::{Conversation, ConversationOptions};
pub use matcher::{match_topic, score_topics, MatchResult, TopicScore, UNKNOWN_TOPIC};
pub use responder::{respond, FALLBACK_RESPONSES};
pub use session::{Message, PendingReply, Sender, Session};
