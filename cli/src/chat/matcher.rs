//! # Keyword Matcher
//!
//! File: cli/src/chat/matcher.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Scores free text against every catalogue topic and picks the best one.
//! A topic's score is the fraction of its keywords that occur anywhere in the
//! lowercased input:
//!
//! ```text
//! score = hits / keywords.len()
//! ```
//!
//! Keywords are matched as plain substrings, not whole words: `"cv"` hits
//! inside `"cvs"`, `"job"` inside `"jobless"`. This is a known precision
//! limitation and is kept as is.
//!
//! The highest score wins. A later topic only replaces the current best when
//! its score is strictly greater, so exact ties go to the topic listed first.
//! When nothing scores above zero the result is [`UNKNOWN_TOPIC`] with a
//! confidence of `0.0`.
//!
//! Matching is a pure, total function: any string, including the empty
//! string, produces a result.
//!
use crate::chat::catalogue::Catalogue;
use tracing::debug;

/// Topic name reported when no catalogue entry matched.
pub const UNKNOWN_TOPIC: &str = "unknown";

/// Winning topic and its hit ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub topic: String,
    /// `hits / keywords` for the winning topic, in `[0, 1]`. Not a probability.
    pub confidence: f64,
}

impl MatchResult {
    pub fn unknown() -> Self {
        Self {
            topic: UNKNOWN_TOPIC.to_string(),
            confidence: 0.0,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.topic == UNKNOWN_TOPIC
    }
}

/// Per-topic breakdown, as computed by [`score_topics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicScore<'a> {
    pub topic: &'a str,
    pub hits: usize,
    pub total: usize,
}

impl TopicScore<'_> {
    pub fn score(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.hits as f64 / self.total as f64
        }
    }
}

/// Scores every topic against `text`, in catalogue order.
pub fn score_topics<'a>(text: &str, catalogue: &'a Catalogue) -> Vec<TopicScore<'a>> {
    let lowered = text.to_lowercase();
    catalogue
        .topics()
        .iter()
        .map(|topic| TopicScore {
            topic: &topic.name,
            hits: topic
                .keywords
                .iter()
                .filter(|keyword| lowered.contains(keyword.as_str()))
                .count(),
            total: topic.keywords.len(),
        })
        .collect()
}

/// Picks the best-scoring topic for `text`, or [`UNKNOWN_TOPIC`].
pub fn match_topic(text: &str, catalogue: &Catalogue) -> MatchResult {
    let mut best = MatchResult::unknown();
    for scored in score_topics(text, catalogue) {
        let score = scored.score();
        if score > best.confidence {
            best = MatchResult {
                topic: scored.topic.to_string(),
                confidence: score,
            };
        }
    }
    debug!("Matched {:?} -> {} ({:.3})", text, best.topic, best.confidence);
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::catalogue::TopicEntry;

    fn catalogue(topics: Vec<TopicEntry>) -> Catalogue {
        let mut all = vec![TopicEntry::new(
            "greeting",
            ["hi", "hello", "hey", "good morning"],
            ["Hello!"],
        )];
        all.extend(topics);
        Catalogue::new("Welcome!", all).expect("test catalogue must be valid")
    }

    #[test]
    fn empty_input_is_unknown() {
        let cat = Catalogue::builtin().unwrap();
        assert_eq!(match_topic("", &cat), MatchResult::unknown());
    }

    #[test]
    fn no_keyword_is_unknown() {
        let cat = catalogue(vec![TopicEntry::new("resume", ["resume", "cv"], ["R"])]);
        let result = match_topic("zzz qqq", &cat);
        assert!(result.is_unknown());
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn all_keywords_of_one_topic_gives_full_confidence() {
        let cat = catalogue(vec![
            TopicEntry::new("resume", ["resume", "cv"], ["R"]),
            TopicEntry::new("sports", ["football", "tennis"], ["S"]),
        ]);
        let result = match_topic("Is a CV the same as a RESUME?", &cat);
        assert_eq!(result.topic, "resume");
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn ratio_beats_textual_order() {
        // Greeting has four keywords, resume two. One hit each: 1/4 vs 1/2.
        let cat = catalogue(vec![TopicEntry::new("resume", ["resume", "cv"], ["R"])]);
        let result = match_topic("hi, can you help me with my resume?", &cat);
        assert_eq!(result.topic, "resume");
        assert_eq!(result.confidence, 0.5);

        let scores = score_topics("hi, can you help me with my resume?", &cat);
        assert_eq!(scores[0].hits, 1);
        assert_eq!(scores[0].score(), 0.25);
    }

    #[test]
    fn ratio_beats_textual_order_with_builtin_catalogue() {
        // greeting: 1 of 7 keywords, resume: 1 of 6.
        let cat = Catalogue::builtin().unwrap();
        let result = match_topic("hi, can you help me with my resume?", &cat);
        assert_eq!(result.topic, "resume");
        assert_eq!(result.confidence, 1.0 / 6.0);
    }

    #[test]
    fn ties_go_to_the_earlier_topic() {
        let a = TopicEntry::new("alpha", ["foo", "bar"], ["A"]);
        let b = TopicEntry::new("beta", ["baz", "qux"], ["B"]);

        let cat = catalogue(vec![a.clone(), b.clone()]);
        let result = match_topic("foo and baz", &cat);
        assert_eq!(result.topic, "alpha");
        assert_eq!(result.confidence, 0.5);

        let cat = catalogue(vec![b, a]);
        assert_eq!(match_topic("foo and baz", &cat).topic, "beta");
    }

    #[test]
    fn keywords_match_inside_other_words() {
        let cat = catalogue(vec![
            TopicEntry::new("resume", ["resume", "cv"], ["R"]),
            TopicEntry::new("jobs", ["job"], ["J"]),
        ]);
        let result = match_topic("Meet me at the CVS pharmacy", &cat);
        assert_eq!(result.topic, "resume");
        assert_eq!(result.confidence, 0.5);

        assert_eq!(match_topic("feeling jobless", &cat).topic, "jobs");
    }

    #[test]
    fn multi_word_keywords_match_as_phrases() {
        let cat = catalogue(Vec::new());
        let result = match_topic("GOOD MORNING everyone", &cat);
        assert_eq!(result.topic, "greeting");
        assert_eq!(result.confidence, 0.25);
        assert!(match_topic("good day, morning", &cat).is_unknown());
    }

    #[test]
    fn matching_is_pure() {
        let cat = Catalogue::builtin().unwrap();
        let text = "Any internship or summer job openings?";
        let first = match_topic(text, &cat);
        for _ in 0..10 {
            assert_eq!(match_topic(text, &cat), first);
        }
    }

    #[test]
    fn result_is_always_a_known_topic_or_unknown() {
        let cat = Catalogue::builtin().unwrap();
        let inputs = [
            "",
            "   ",
            "What GPA do I need for university admission?",
            "I want to build a coding project for my portfolio",
            "¿Dónde está la biblioteca?",
            "hiring hiring hiring",
        ];
        for input in inputs {
            let result = match_topic(input, &cat);
            assert!(result.is_unknown() || cat.get(&result.topic).is_some());
            assert!((0.0..=1.0).contains(&result.confidence));
        }
    }
}
