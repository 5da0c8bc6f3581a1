//! # CareerBot Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `careerbot ask <TEXT>...`: match a single question, print the
//! winning topic with its confidence, then the reply. No typing delay is
//! simulated.
//!
//! With `--explain` the per-topic hit counts are printed before the reply,
//! which is handy when tuning a custom catalogue.
//!
//! ```bash
//! careerbot ask "hi, can you help me with my resume?"
//! careerbot ask --seed 7 --explain how do I write a cv
//! ```
//!
use super::{format_confidence, load_catalogue, CatalogueArgs};
use anyhow::Context;
use careerbot::chat::{match_topic, respond, score_topics, Catalogue};
use careerbot::core::{config, error::Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::fmt::Write as _;
use tracing::{debug, info};

/// Arguments for `careerbot ask`.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Seed for response selection (overrides `chat.seed`).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the per-topic keyword hits before the reply.
    #[arg(long)]
    pub explain: bool,

    #[command(flatten)]
    pub catalogue: CatalogueArgs,
}

pub async fn handle_ask(args: AskArgs) -> Result<()> {
    info!("Handling ask command...");
    let cfg = config::load_config().context("Failed to load CareerBot configuration")?;
    let catalogue = load_catalogue(&cfg, &args.catalogue)?;
    let text = args.text.join(" ");
    debug!("Question: {:?}", text);

    let mut rng = match args.seed.or(cfg.chat.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if args.explain {
        print!("{}", render_scores(&text, &catalogue)?);
    }
    let result = match_topic(&text, &catalogue);
    println!(
        "Topic: {} ({})",
        result.topic,
        format_confidence(result.confidence)
    );
    println!("{}: {}", cfg.chat.bot_name, respond(&result.topic, &catalogue, &mut rng));
    Ok(())
}

fn render_scores(text: &str, catalogue: &Catalogue) -> Result<String> {
    let scores = score_topics(text, catalogue);
    let name_width = scores
        .iter()
        .map(|s| s.topic.len())
        .max()
        .unwrap_or(10)
        .clamp(10, 30);

    let mut out = String::new();
    writeln!(out, "{:<width$} | Hits  | Score", "Topic", width = name_width)?;
    writeln!(out, "{:-<width$}-+-------+------", "", width = name_width)?;
    for score in &scores {
        writeln!(
            out,
            "{:<width$} | {:>2}/{:<2} | {:>5}",
            score.topic,
            score.hits,
            score.total,
            format_confidence(score.score()),
            width = name_width
        )?;
    }
    out.push('\n');
    Ok(out)
}
