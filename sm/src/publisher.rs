//! Publish selection and page append
//!
//! Decides which historical model output to persist, formats it for the
//! session's meeting type, and drives the document-append call.

use chrono::Local;
use thiserror::Error;
use tracing::{debug, info};

use crate::format::{format_document, generic_wrap};
use crate::notion::{NotionError, PageStore};
use crate::session::SessionState;

/// Why a publish attempt failed
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Nothing to save - no assistant output recorded in this session")]
    NothingToSave,

    #[error("Failed to append to Notion: {0}")]
    Page(#[from] NotionError),
}

/// Publishes selected session content to a Notion page
pub struct Publisher<'a> {
    page: &'a dyn PageStore,
    page_id: &'a str,
}

impl<'a> Publisher<'a> {
    pub fn new(page: &'a dyn PageStore, page_id: &'a str) -> Self {
        Self { page, page_id }
    }

    /// Pick the assistant output to persist
    ///
    /// The most recent assistant message is typically the save-confirmation
    /// question rather than the substantive content, so with two or more
    /// messages the second-to-last one is selected.
    pub fn select_content(state: &SessionState) -> Result<&str, PublishError> {
        let assistant = state.assistant_texts();
        debug!(assistant_count = assistant.len(), "select_content: called");
        match assistant.len() {
            0 => Err(PublishError::NothingToSave),
            1 => Ok(assistant[0]),
            n => Ok(assistant[n - 2]),
        }
    }

    /// Select, format, and append to the destination page
    ///
    /// A recognized meeting type gets the full section formatter; an unset
    /// type gets the generic wrap. No retry on failure.
    pub async fn publish(&self, state: &SessionState) -> Result<(), PublishError> {
        let content = Self::select_content(state)?;
        let timestamp = Local::now().format("%Y-%m-%d %H:%M").to_string();

        let document = match state.meeting_type {
            Some(meeting) => format_document(content, meeting, &timestamp),
            None => generic_wrap(content, &timestamp),
        };

        self.page.append(self.page_id, &document).await?;
        info!(page_id = %self.page_id, chars = document.len(), "Published to Notion");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meeting::MeetingType;
    use crate::notion::client::mock::MockPageStore;

    fn state_with_assistant_texts(texts: &[&str]) -> SessionState {
        let mut state = SessionState::new();
        for text in texts {
            state.log_user("input");
            state.log_assistant(text);
        }
        state
    }

    #[test]
    fn test_select_second_to_last_of_many() {
        let state = state_with_assistant_texts(&["A", "B"]);
        assert_eq!(Publisher::select_content(&state).unwrap(), "A");

        let state = state_with_assistant_texts(&["A", "B", "C"]);
        assert_eq!(Publisher::select_content(&state).unwrap(), "B");
    }

    #[test]
    fn test_select_single() {
        let state = state_with_assistant_texts(&["only"]);
        assert_eq!(Publisher::select_content(&state).unwrap(), "only");
    }

    #[test]
    fn test_select_empty_is_nothing_to_save() {
        let state = SessionState::new();
        assert!(matches!(
            Publisher::select_content(&state),
            Err(PublishError::NothingToSave)
        ));
    }

    #[tokio::test]
    async fn test_publish_nothing_to_save_makes_no_external_call() {
        let page = MockPageStore::new();
        let publisher = Publisher::new(&page, "page-1");

        let result = publisher.publish(&SessionState::new()).await;

        assert!(matches!(result, Err(PublishError::NothingToSave)));
        assert_eq!(page.append_count(), 0);
    }

    #[tokio::test]
    async fn test_publish_formats_for_pinned_meeting_type() {
        let page = MockPageStore::new();
        let publisher = Publisher::new(&page, "page-1");

        let mut state = state_with_assistant_texts(&["Done:\n- Fixed bug A", "Shall I save this?"]);
        state.meeting_type = Some(MeetingType::Standup);

        publisher.publish(&state).await.unwrap();

        let content = page.last_content().unwrap();
        assert!(content.contains("Daily Standup"));
        assert!(content.contains("Done:\n- Fixed bug A"));
    }

    #[tokio::test]
    async fn test_publish_generic_wrap_when_type_unset() {
        let page = MockPageStore::new();
        let publisher = Publisher::new(&page, "page-1");

        let state = state_with_assistant_texts(&["free-form notes", "Shall I save this?"]);
        publisher.publish(&state).await.unwrap();

        let content = page.last_content().unwrap();
        assert!(content.contains("Meeting Notes"));
        assert!(content.contains("free-form notes"));
    }

    #[tokio::test]
    async fn test_publish_surfaces_page_failure() {
        let page = MockPageStore::failing(503);
        let publisher = Publisher::new(&page, "page-1");

        let state = state_with_assistant_texts(&["content"]);
        let result = publisher.publish(&state).await;

        assert!(matches!(result, Err(PublishError::Page(_))));
    }
}
