//! Session-scoped state
//!
//! One [`SessionState`] value is owned by the chat session and threaded
//! through each turn - meeting type and turn log are never module-level
//! globals. The turn log is volatile and distinct from the durable journal:
//! it exists only to drive publish selection.

use tracing::debug;

use crate::meeting::{self, MeetingType};

/// Who produced a turn-log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One role-tagged entry in the session's turn log
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub role: Role,
    pub text: String,
}

/// Per-session mutable state
#[derive(Debug, Default)]
pub struct SessionState {
    /// Meeting type, pinned from the first classifiable user input
    pub meeting_type: Option<MeetingType>,

    /// Role-tagged log of the session's exchanges, in order
    pub turn_log: Vec<LogEntry>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify and pin the meeting type from user input
    ///
    /// Runs only while the type is still unset; once pinned it is frozen for
    /// the session's lifetime regardless of later input.
    pub fn observe_user_input(&mut self, text: &str) {
        if self.meeting_type.is_none() {
            self.meeting_type = meeting::classify(text);
            if let Some(meeting) = self.meeting_type {
                debug!(%meeting, "Pinned session meeting type");
            }
        }
    }

    /// Record what the user said
    pub fn log_user(&mut self, text: &str) {
        self.turn_log.push(LogEntry {
            role: Role::User,
            text: text.to_string(),
        });
    }

    /// Record what the assistant answered
    pub fn log_assistant(&mut self, text: &str) {
        self.turn_log.push(LogEntry {
            role: Role::Assistant,
            text: text.to_string(),
        });
    }

    /// Assistant texts in insertion order, for publish selection
    pub fn assistant_texts(&self) -> Vec<&str> {
        self.turn_log
            .iter()
            .filter(|e| e.role == Role::Assistant)
            .map(|e| e.text.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_type_pinned_once() {
        let mut state = SessionState::new();

        state.observe_user_input("hello");
        assert_eq!(state.meeting_type, None);

        state.observe_user_input("time for standup");
        assert_eq!(state.meeting_type, Some(MeetingType::Standup));

        // Later retro keywords must not reassign
        state.observe_user_input("let's do a retrospective instead");
        assert_eq!(state.meeting_type, Some(MeetingType::Standup));
    }

    #[test]
    fn test_turn_log_roles() {
        let mut state = SessionState::new();
        state.log_user("question");
        state.log_assistant("answer one");
        state.log_user("follow-up");
        state.log_assistant("answer two");

        assert_eq!(state.turn_log.len(), 4);
        assert_eq!(state.assistant_texts(), vec!["answer one", "answer two"]);
    }
}
