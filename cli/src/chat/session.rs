//! # Conversation Session
//!
//! File: cli/src/chat/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A `Session` owns one conversation transcript. It is a plain state object:
//! front ends call into it and read the transcript back out, and nothing else
//! holds on to the messages.
//!
//! ## Lifecycle
//!
//! 1. A new session holds a single bot-authored welcome message attributed to
//!    the `greeting` topic with confidence 1.0.
//! 2. [`Session::submit`] appends the user's message immediately, raises the
//!    typing flag and hands back a [`PendingReply`]. Blank input is ignored.
//! 3. [`Session::complete`] matches the pending text, picks a response and
//!    appends it as a bot message annotated with topic and confidence.
//! 4. [`Session::clear`] drops the transcript and reseeds the welcome message.
//!
//! The transcript is append-only between clears.
//!
use crate::chat::{
    catalogue::{Catalogue, GREETING_TOPIC},
    matcher::{match_topic, MatchResult},
    responder::respond,
};
use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, info};

/// Id used for the welcome message.
pub const WELCOME_ID: &str = "welcome";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    /// Matched topic, bot messages only.
    pub topic: Option<String>,
    /// Hit ratio of `topic`, bot messages only.
    pub confidence: Option<f64>,
}

/// A user message that still needs a bot reply.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending reply does nothing until passed to Session::complete"]
pub struct PendingReply {
    text: String,
}

impl PendingReply {
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    messages: Vec<Message>,
    typing: bool,
    next_id: u64,
}

impl Session {
    pub fn new(catalogue: &Catalogue) -> Self {
        let mut session = Self {
            messages: Vec::new(),
            typing: false,
            next_id: 1,
        };
        session.push_welcome(catalogue);
        session
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// True while a reply is pending.
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Appends a user message. Returns `None` for blank input.
    pub fn submit(&mut self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            debug!("Ignoring blank input.");
            return None;
        }
        let id = self.allocate_id();
        self.messages.push(Message {
            id,
            text: text.to_string(),
            sender: Sender::User,
            timestamp: Utc::now(),
            topic: None,
            confidence: None,
        });
        self.typing = true;
        Some(PendingReply {
            text: text.to_string(),
        })
    }

    /// Matches and answers a pending reply, appending the bot message.
    pub fn complete<R: Rng>(
        &mut self,
        pending: PendingReply,
        catalogue: &Catalogue,
        rng: &mut R,
    ) -> &Message {
        let MatchResult { topic, confidence } = match_topic(&pending.text, catalogue);
        let text = respond(&topic, catalogue, rng).to_string();
        info!("Replying with topic '{}' ({:.2})", topic, confidence);
        let id = self.allocate_id();
        self.typing = false;
        self.push(Message {
            id,
            text,
            sender: Sender::Bot,
            timestamp: Utc::now(),
            topic: Some(topic),
            confidence: Some(confidence),
        })
    }

    /// Discards the transcript and reseeds the welcome message.
    pub fn clear(&mut self, catalogue: &Catalogue) {
        info!("Clearing conversation ({} messages).", self.messages.len());
        self.messages.clear();
        self.typing = false;
        self.push_welcome(catalogue);
    }

    fn push_welcome(&mut self, catalogue: &Catalogue) {
        self.messages.push(Message {
            id: WELCOME_ID.to_string(),
            text: catalogue.welcome().to_string(),
            sender: Sender::Bot,
            timestamp: Utc::now(),
            topic: Some(GREETING_TOPIC.to_string()),
            confidence: Some(1.0),
        });
    }

    fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    fn allocate_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }
}
