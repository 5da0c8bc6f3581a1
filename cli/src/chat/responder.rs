//! # Responder
//!
//! File: cli/src/chat/responder.rs
//! Author: Christi Mahu
//!
//! Turns a matched topic into reply text. Known topics get one of their own
//! responses; anything else (including [`UNKNOWN_TOPIC`](crate::chat::matcher::UNKNOWN_TOPIC))
//! gets one of [`FALLBACK_RESPONSES`]. Each call consumes exactly one draw
//! from the supplied random source.
//!
use crate::chat::catalogue::Catalogue;
use rand::{seq::SliceRandom, Rng};

/// Replies for input that matched no topic.
pub const FALLBACK_RESPONSES: [&str; 3] = [
    "That's an interesting question! 🤔 While I specialize in career guidance, I'd love to help you with:\n\n• Career exploration and planning\n• Internship and job search strategies\n• Resume and portfolio building\n• College application guidance\n• Academic success tips\n• Project ideas for skill development\n\nWhat specific career topic can I assist you with?",
    "I'm here to help with your career journey! 🎯 I might not have the exact answer to that, but I can definitely help you with career-related topics like job searching, skill development, or academic planning. What career challenge are you facing?",
    "Great question! 💭 While that's outside my expertise area, I'm excellent at helping with career guidance. Whether you need advice on internships, college applications, resume building, or career planning, I'm here to help. What career topic interests you most?",
];

/// Picks a reply for `topic` uniformly at random.
pub fn respond<'a, R: Rng>(topic: &str, catalogue: &'a Catalogue, rng: &mut R) -> &'a str {
    let picked = catalogue
        .get(topic)
        .and_then(|entry| entry.responses.choose(rng));
    match picked {
        Some(reply) => reply.as_str(),
        None => FALLBACK_RESPONSES
            .choose(rng)
            .copied()
            .unwrap_or(FALLBACK_RESPONSES[0]),
    }
}
