//! ScrumMate - AI scrum master assistant
//!
//! CLI entry point: chat sessions, the meeting-recording placeholder, and
//! journal history.

use std::fs;
use std::io::Write;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use chatjournal::ConversationStore;
use scrummate::chat;
use scrummate::cli::{Cli, Command, get_log_path};
use scrummate::config::Config;

fn setup_logging(verbose: bool) -> Result<()> {
    let log_path = get_log_path();
    let log_dir = log_path.parent().unwrap_or_else(|| std::path::Path::new("."));

    fs::create_dir_all(log_dir).context("Failed to create log directory")?;

    // Write to the log file, not stdout/stderr - the terminal belongs to the
    // conversation
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Missing credentials are fatal at startup
    config.validate()?;

    info!(
        "ScrumMate loaded config: provider={}, model={}",
        config.llm.provider, config.llm.model
    );

    match cli.command {
        Some(Command::Chat { message }) => chat::run_chat(&config, message).await,
        Some(Command::Record) => cmd_record(),
        Some(Command::History { identity, limit }) => cmd_history(&config, identity, limit),
        None => run_menu(&config).await,
    }
}

/// Interactive menu shown when no subcommand is given
async fn run_menu(config: &Config) -> Result<()> {
    println!();
    println!("{}", "ScrumMate".bright_cyan().bold());
    println!("{} Environment configured successfully", "✓".green());

    loop {
        println!();
        println!("What would you like to do today?");
        println!("  1. Chat with the scrum master");
        println!("  2. Record a meeting");
        println!("  3. Exit");
        print!("\nEnter your choice (1-3): ");
        std::io::stdout().flush()?;

        let mut choice = String::new();
        let bytes_read = std::io::stdin().read_line(&mut choice)?;
        if bytes_read == 0 {
            // EOF
            println!();
            return Ok(());
        }

        match choice.trim() {
            "1" => chat::run_chat(config, None).await?,
            "2" => cmd_record()?,
            "3" => {
                println!("\nGoodbye!");
                return Ok(());
            }
            "" => continue,
            other => println!("\nInvalid choice: {}. Please try again.", other),
        }
    }
}

/// Meeting recording placeholder
fn cmd_record() -> Result<()> {
    println!("Meeting recording is not implemented yet.");
    Ok(())
}

/// Print recent conversation history for an identity
fn cmd_history(config: &Config, identity: Option<String>, limit: usize) -> Result<()> {
    let identity = identity.unwrap_or_else(|| config.storage.identity.clone());

    let store = ConversationStore::open(&config.storage.journal_dir, &identity)?;
    println!("{}", store.context_summary(limit));
    Ok(())
}
