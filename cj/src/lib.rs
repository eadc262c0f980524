//! ChatJournal - per-identity conversation journal
//!
//! Stores each user/assistant exchange as a timestamped record so later
//! sessions can be given prior context. One JSON array file per identity:
//!
//! ```text
//! {journal_dir}/
//! ├── alice_journal.json
//! └── team_journal.json
//! ```
//!
//! The file is rewritten wholesale on every append, through a temp-file
//! rename, so a reader never observes a partial serialization of the
//! in-memory history.
//!
//! # Example
//!
//! ```ignore
//! use chatjournal::ConversationStore;
//!
//! let mut store = ConversationStore::open(".journal", "alice")?;
//! store.append("how do I run a retro?", "Start with what went well...");
//! let context = store.context_summary(5);
//! ```

pub mod cli;
pub mod config;
mod store;

pub use store::{ConversationStore, Turn, delete_journal, list_identities};

/// Default number of turns included in a context summary
pub const DEFAULT_CONTEXT_TURNS: usize = 5;
