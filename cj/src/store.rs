//! Core ConversationStore implementation

use chrono::Local;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// One user/assistant exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// ISO-8601-like local timestamp
    pub timestamp: String,
    /// What the user typed
    pub user_input: String,
    /// What the assistant answered
    pub ai_response: String,
}

/// Append-only journal of conversation turns for one identity
///
/// Turns are immutable once appended; insertion order is chronological
/// order. Every append persists the full sequence.
pub struct ConversationStore {
    identity: String,
    file_path: PathBuf,
    turns: Vec<Turn>,
}

impl ConversationStore {
    /// Open the journal for an identity, loading any persisted history
    ///
    /// A missing or unparseable journal file yields an empty history;
    /// construction only fails if the journal directory cannot be created.
    pub fn open(journal_dir: impl AsRef<Path>, identity: &str) -> Result<Self> {
        let journal_dir = journal_dir.as_ref();
        fs::create_dir_all(journal_dir).context("Failed to create journal directory")?;

        let file_path = journal_dir.join(format!("{}_journal.json", identity));
        let turns = load_turns(&file_path);
        debug!(identity, turn_count = turns.len(), "Opened conversation journal");

        Ok(Self {
            identity: identity.to_string(),
            file_path,
            turns,
        })
    }

    /// Record one exchange, stamped with the current local time
    ///
    /// The in-memory append always succeeds; a persistence failure is
    /// logged and the session carries on with its in-memory history.
    pub fn append(&mut self, user_text: &str, agent_text: &str) {
        let turn = Turn {
            timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            user_input: user_text.to_string(),
            ai_response: agent_text.to_string(),
        };
        self.turns.push(turn);

        if let Err(e) = self.persist() {
            error!(identity = %self.identity, error = %e, "Failed to persist journal; keeping history in memory");
        }
    }

    /// Rewrite the full journal file via temp file + rename
    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.turns).context("Failed to serialize journal")?;
        let tmp_path = self.file_path.with_extension("json.tmp");
        fs::write(&tmp_path, json).context("Failed to write journal temp file")?;
        fs::rename(&tmp_path, &self.file_path).context("Failed to replace journal file")?;
        Ok(())
    }

    /// Last `limit` turns in chronological order (fewer if the store holds less)
    pub fn recent(&self, limit: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(limit);
        &self.turns[start..]
    }

    /// Render recent history as a transcript for LLM context
    pub fn context_summary(&self, limit: usize) -> String {
        let recent = self.recent(limit);
        if recent.is_empty() {
            return "No previous conversation history.".to_string();
        }

        let mut context = String::from("Recent conversation history:\n\n");
        for turn in recent {
            context.push_str(&format!("Time: {}\n", turn.timestamp));
            context.push_str(&format!("User: {}\n", turn.user_input));
            context.push_str(&format!("Scrum Master: {}\n\n", turn.ai_response));
        }
        context
    }

    /// Identity this journal belongs to
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Number of recorded turns
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the journal holds no turns
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Path of the backing journal file
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

/// Read the persisted turn sequence, falling back to empty on any failure
fn load_turns(path: &Path) -> Vec<Turn> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Vec::new(), // no journal yet
    };

    match serde_json::from_str(&content) {
        Ok(turns) => turns,
        Err(e) => {
            error!(path = %path.display(), error = %e, "Unparseable journal file; starting with empty history");
            Vec::new()
        }
    }
}

/// List identities that have a journal in the given directory
pub fn list_identities(journal_dir: impl AsRef<Path>) -> Result<Vec<String>> {
    let mut identities = Vec::new();

    let entries = match fs::read_dir(journal_dir.as_ref()) {
        Ok(entries) => entries,
        Err(_) => return Ok(identities), // no journal directory yet
    };

    for entry in entries {
        let entry = entry?;
        if let Some(name) = entry.file_name().to_str()
            && let Some(identity) = name.strip_suffix("_journal.json")
        {
            identities.push(identity.to_string());
        }
    }

    identities.sort();
    Ok(identities)
}

/// Delete an identity's journal file
pub fn delete_journal(journal_dir: impl AsRef<Path>, identity: &str) -> Result<()> {
    let path = journal_dir.as_ref().join(format!("{}_journal.json", identity));
    if path.exists() {
        fs::remove_file(&path).context(format!("Failed to delete journal for {}", identity))?;
        info!(identity, "Deleted journal");
    }
    Ok(())
}
