//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ScrumMate - AI scrum master assistant
#[derive(Parser)]
#[command(
    name = "sm",
    about = "AI scrum master that chats, classifies meetings, and files notes to Notion",
    version,
    after_help = "Logs are written to: ~/.local/share/scrummate/logs/scrummate.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Chat with the scrum master
    Chat {
        /// Optional first message to send
        message: Option<String>,
    },

    /// Record a meeting (not implemented yet)
    Record,

    /// Print recent conversation history
    History {
        /// Identity whose journal to print (default: from config)
        #[arg(short, long)]
        identity: Option<String>,

        /// Number of turns to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}

/// Path of the log file the binary writes to
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scrummate")
        .join("logs")
        .join("scrummate.log")
}
