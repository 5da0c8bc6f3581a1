//! # CareerBot Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `careerbot chat`, an interactive conversation on stdin/stdout.
//! Each line the user types is sent to a [`Conversation`]; the reply is
//! printed with its matched topic and confidence once the simulated typing
//! delay has passed.
//!
//! ## In-chat commands
//!
//! - `/clear`: drop the transcript and start over from the welcome message
//! - `/quit`, `bye`: leave the chat (end of input does the same)
//!
//! ```bash
//! careerbot chat
//! careerbot chat --no-delay --seed 42
//! ```
//!
use super::{format_message, load_catalogue, CatalogueArgs};
use anyhow::Context;
use careerbot::chat::{Conversation, ConversationOptions};
use careerbot::core::{config, error::Result};
use clap::Parser;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// Arguments for `careerbot chat`.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Seed for response selection (overrides `chat.seed`).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Reply immediately instead of simulating typing.
    #[arg(long)]
    pub no_delay: bool,

    #[command(flatten)]
    pub catalogue: CatalogueArgs,
}

/// What a line of input asks the REPL to do.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Clear,
    Say(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("/quit") || trimmed.eq_ignore_ascii_case("bye") {
        Input::Quit
    } else if trimmed.eq_ignore_ascii_case("/clear") {
        Input::Clear
    } else {
        Input::Say(trimmed)
    }
}

pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Handling chat command...");
    let cfg = config::load_config().context("Failed to load CareerBot configuration")?;
    let catalogue = load_catalogue(&cfg, &args.catalogue)?;
    let bot_name = cfg.chat.bot_name.clone();

    let options = ConversationOptions {
        seed: args.seed.or(cfg.chat.seed),
        typing_delay_ms: (!args.no_delay).then(|| cfg.chat.typing_delay()),
    };
    debug!("Conversation options: {:?}", options);
    let typing = options.typing_delay_ms.is_some();
    let mut chat = Conversation::new(catalogue, options);

    println!("Chat with {}! Type '/clear' to start over or 'bye' to quit.\n", bot_name);
    for message in chat.session().messages() {
        println!("{}\n", format_message(message, &bot_name));
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("You: ");
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read from stdin")?
        else {
            debug!("End of input, leaving chat.");
            println!();
            break;
        };

        match parse_input(&line) {
            Input::Quit => {
                println!("{}: Goodbye! Good luck with your career journey.", bot_name);
                break;
            }
            Input::Clear => {
                chat.clear();
                println!("\nConversation cleared.\n");
                for message in chat.session().messages() {
                    println!("{}\n", format_message(message, &bot_name));
                }
            }
            Input::Say(text) => {
                if typing && !text.is_empty() {
                    eprintln!("{} is typing...", bot_name);
                }
                if let Some(reply) = chat.send(text).await {
                    println!("{}\n", format_message(reply, &bot_name));
                }
            }
        }
    }
    Ok(())
}
