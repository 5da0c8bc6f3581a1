//! # Conversation Driver
//!
//! File: cli/src/chat/conversation.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `Conversation` bundles the pieces a front end needs for one chat: the
//! catalogue, a [`Session`], the random source, and the simulated typing
//! delay. `send` appends the user message, waits out the delay, then appends
//! the bot reply.
//!
//! `send` borrows the conversation mutably for its whole duration, so a
//! conversation never has more than one reply pending and replies always land
//! in the order the messages were sent.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use careerbot::chat::{Catalogue, Conversation, ConversationOptions};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let mut chat = Conversation::new(Catalogue::builtin()?, ConversationOptions::default());
//! if let Some(reply) = chat.send("How do I find an internship?").await {
//!     println!("{}", reply.text);
//! }
//! # Ok(())
//! # }
//! ```
//!
use crate::chat::{
    catalogue::Catalogue,
    session::{Message, Session},
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{ops::RangeInclusive, time::Duration};
use tracing::debug;

/// Settings for a [`Conversation`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationOptions {
    /// Seed for the random source. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Reply delay window in milliseconds. `None` replies immediately.
    pub typing_delay_ms: Option<RangeInclusive<u64>>,
}

pub struct Conversation {
    catalogue: Catalogue,
    session: Session,
    rng: StdRng,
    typing_delay_ms: Option<RangeInclusive<u64>>,
}

impl Conversation {
    pub fn new(catalogue: Catalogue, options: ConversationOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let session = Session::new(&catalogue);
        Self {
            catalogue,
            session,
            rng,
            typing_delay_ms: options.typing_delay_ms,
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Sends `text` and waits for the bot's reply. Blank input yields `None`
    /// and leaves the transcript untouched.
    pub async fn send(&mut self, text: &str) -> Option<&Message> {
        let pending = self.session.submit(text)?;
        if let Some(delay) = self.next_delay() {
            debug!("Simulating typing for {:?}", delay);
            tokio::time::sleep(delay).await;
        }
        Some(self.session.complete(pending, &self.catalogue, &mut self.rng))
    }

    pub fn clear(&mut self) {
        self.session.clear(&self.catalogue);
    }

    fn next_delay(&mut self) -> Option<Duration> {
        let window = self.typing_delay_ms.clone()?;
        if window.is_empty() {
            return None;
        }
        Some(Duration::from_millis(self.rng.gen_range(window)))
    }
}
