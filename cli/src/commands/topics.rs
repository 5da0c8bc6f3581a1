//! # CareerBot Topics Command
//!
//! File: cli/src/commands/topics.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `careerbot topics`, which lists the topics of the active
//! catalogue with their keyword and response counts, so users can see what
//! the assistant knows about.
//!
//! Example output:
//!
//! ```text
//! Topics (9):
//!
//! Name               | Keywords | Responses | Sample keywords
//! -------------------+----------+-----------+--------------------------------
//! greeting           |        7 |         4 | hi, hello, hey
//! internships        |        6 |         3 | internship, intern, summer job
//! ```
//!
use super::{load_catalogue, CatalogueArgs};
use anyhow::Context;
use careerbot::chat::Catalogue;
use careerbot::core::{config, error::Result};
use clap::Parser;
use std::fmt::Write as _;
use tracing::info;

/// Arguments for `careerbot topics`.
#[derive(Parser, Debug)]
pub struct TopicsArgs {
    #[command(flatten)]
    pub catalogue: CatalogueArgs,
}

pub async fn handle_topics(args: TopicsArgs) -> Result<()> {
    info!("Handling topics command...");
    let cfg = config::load_config().context("Failed to load CareerBot configuration")?;
    let catalogue = load_catalogue(&cfg, &args.catalogue)?;
    print!("{}", render_topic_table(&catalogue)?);
    Ok(())
}

const SAMPLE_KEYWORDS: usize = 3;

fn render_topic_table(catalogue: &Catalogue) -> Result<String> {
    let topics = catalogue.topics();
    let name_width = topics
        .iter()
        .map(|t| t.name.len())
        .max()
        .unwrap_or(10)
        .clamp(10, 30);

    let mut out = String::new();
    writeln!(out, "Topics ({}):\n", topics.len())?;
    writeln!(
        out,
        "{:<width$} | Keywords | Responses | Sample keywords",
        "Name",
        width = name_width
    )?;
    writeln!(
        out,
        "{:-<width$}-+----------+-----------+-{:-<30}",
        "",
        "",
        width = name_width
    )?;
    for topic in topics {
        let sample: Vec<&str> = topic
            .keywords
            .iter()
            .take(SAMPLE_KEYWORDS)
            .map(String::as_str)
            .collect();
        writeln!(
            out,
            "{:<width$} | {:>8} | {:>9} | {}",
            topic.name,
            topic.keywords.len(),
            topic.responses.len(),
            sample.join(", "),
            width = name_width
        )?;
    }
    writeln!(
        out,
        "\nUse 'careerbot ask \"<question>\"' or 'careerbot chat' to talk to the assistant."
    )?;
    Ok(out)
}
