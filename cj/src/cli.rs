//! CLI argument parsing for chatjournal

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cj")]
#[command(author, version, about = "Per-identity conversation journal", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print recent turns for an identity
    Show {
        /// Identity whose journal to print
        #[arg(required = true)]
        identity: String,

        /// Maximum turns to print (default: all)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List identities that have a journal
    List,

    /// Delete an identity's journal
    Clear {
        /// Identity whose journal to delete
        #[arg(required = true)]
        identity: String,
    },
}
