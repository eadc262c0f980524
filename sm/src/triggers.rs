//! Save-intent detection
//!
//! Flags phrases that signal an intent to persist output to Notion. The
//! detector only flags; the chat session still requires an explicit y/n
//! confirmation before anything is published.

use tracing::debug;

/// Which side of the exchange signaled save intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveTrigger {
    /// The user asked for the output to be saved
    User,
    /// The assistant offered or announced saving
    Agent,
}

const USER_INTENT_PHRASES: &[&str] = &[
    "save to notion",
    "save it in notion",
    "save in notion",
    "post to notion",
    "add to notion",
    "put in notion",
    "paste to notion",
    "save this",
];

const AGENT_INTENT_PHRASES: &[&str] = &[
    "saving",
    "save these",
    "save this",
    "saving to notion",
    "save to notion",
    "saving into notion",
    "adding to notion",
    "append to notion",
];

fn contains_any(text: &str, phrases: &[&str]) -> bool {
    let text = text.to_lowercase();
    phrases.iter().any(|p| text.contains(p))
}

/// Detect save intent in one exchange
///
/// Case-insensitive substring match over fixed phrase sets; the user check
/// takes priority when both sides match.
pub fn detect(user_text: &str, agent_text: &str) -> Option<SaveTrigger> {
    let trigger = if contains_any(user_text, USER_INTENT_PHRASES) {
        Some(SaveTrigger::User)
    } else if contains_any(agent_text, AGENT_INTENT_PHRASES) {
        Some(SaveTrigger::Agent)
    } else {
        None
    };

    debug!(?trigger, "detect: done");
    trigger
}
