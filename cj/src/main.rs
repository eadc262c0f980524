use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use chatjournal::cli::{Cli, Command};
use chatjournal::config::Config;
use chatjournal::{ConversationStore, list_identities};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("chatjournal starting");

    match cli.command {
        Command::Show { identity, limit } => {
            let store = ConversationStore::open(&config.journal_dir, &identity)?;
            if store.is_empty() {
                println!("No turns recorded for {}", identity.cyan());
            } else {
                let limit = limit.unwrap_or(store.len());
                for turn in store.recent(limit) {
                    println!("{}", turn.timestamp.dimmed());
                    println!("  {} {}", "User:".green(), turn.user_input);
                    println!("  {} {}", "Scrum Master:".blue(), turn.ai_response);
                }
                println!();
                println!("{} of {} turns", limit.min(store.len()), store.len());
            }
        }
        Command::List => {
            let identities = list_identities(&config.journal_dir)?;
            if identities.is_empty() {
                println!("No journals found in {}", config.journal_dir.display());
            } else {
                for identity in identities {
                    println!("{}", identity);
                }
            }
        }
        Command::Clear { identity } => {
            chatjournal::delete_journal(&config.journal_dir, &identity)?;
            println!("{} Cleared journal for: {}", "✓".green(), identity);
        }
    }

    Ok(())
}
