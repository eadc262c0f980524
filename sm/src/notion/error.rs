//! Notion API error types

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur talking to the Notion API
#[derive(Debug, Error)]
pub enum NotionError {
    #[error("Notion API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NotionError {
    /// Classify a reqwest failure, surfacing timeouts distinctly
    pub fn from_reqwest(e: reqwest::Error, timeout: Duration) -> Self {
        if e.is_timeout() {
            NotionError::Timeout(timeout)
        } else {
            NotionError::Network(e)
        }
    }
}
