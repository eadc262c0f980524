//! Meeting-type classification
//!
//! A session is pinned to one meeting type from the first user input that
//! matches a keyword set; see [`crate::session::SessionState`].

use std::fmt;
use tracing::debug;

/// Recognized meeting categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingType {
    SprintPlanning,
    Standup,
    Retrospective,
}

impl MeetingType {
    /// Human-readable label used in document titles
    pub fn label(&self) -> &'static str {
        match self {
            MeetingType::SprintPlanning => "Sprint Planning",
            MeetingType::Standup => "Daily Standup",
            MeetingType::Retrospective => "Sprint Retrospective",
        }
    }
}

impl fmt::Display for MeetingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const SPRINT_PLANNING_KEYWORDS: &[&str] = &["sprint planning", "plan sprint", "planning", "epics", "user stories"];

const STANDUP_KEYWORDS: &[&str] = &["standup", "stand-up", "daily", "status update"];

const RETROSPECTIVE_KEYWORDS: &[&str] = &["retro", "retrospective", "went well", "didn't go well"];

/// Classify user input by meeting-type keywords
///
/// Case-insensitive substring match. Evaluation order is fixed - sprint
/// planning, then standup, then retrospective - so input matching several
/// sets lands in the earliest category.
pub fn classify(text: &str) -> Option<MeetingType> {
    let text = text.to_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().any(|k| text.contains(k));

    let meeting = if matches(SPRINT_PLANNING_KEYWORDS) {
        Some(MeetingType::SprintPlanning)
    } else if matches(STANDUP_KEYWORDS) {
        Some(MeetingType::Standup)
    } else if matches(RETROSPECTIVE_KEYWORDS) {
        Some(MeetingType::Retrospective)
    } else {
        None
    };

    debug!(?meeting, "classify: done");
    meeting
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_sprint_planning() {
        assert_eq!(classify("let's do sprint planning"), Some(MeetingType::SprintPlanning));
        assert_eq!(classify("help me plan sprint 12"), Some(MeetingType::SprintPlanning));
        assert_eq!(classify("I need USER STORIES for this"), Some(MeetingType::SprintPlanning));
    }

    #[test]
    fn test_classify_standup() {
        assert_eq!(classify("time for standup"), Some(MeetingType::Standup));
        assert_eq!(classify("our daily stand-up"), Some(MeetingType::Standup));
        assert_eq!(classify("quick status update"), Some(MeetingType::Standup));
    }

    #[test]
    fn test_classify_retrospective() {
        assert_eq!(classify("let's run a retro"), Some(MeetingType::Retrospective));
        assert_eq!(classify("what went well this sprint?"), Some(MeetingType::Retrospective));
        assert_eq!(classify("things that didn't go well"), Some(MeetingType::Retrospective));
    }

    #[test]
    fn test_classify_none() {
        assert_eq!(classify("hello there"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_tie_break_prefers_sprint_planning() {
        // Matches both "planning" and "standup"; earlier-listed category wins
        assert_eq!(
            classify("planning our standup format"),
            Some(MeetingType::SprintPlanning)
        );
    }

    #[test]
    fn test_tie_break_standup_over_retrospective() {
        assert_eq!(classify("daily retro check-in"), Some(MeetingType::Standup));
    }
}
