//! Notion page append/read client

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::NotionError;
use crate::config::NotionConfig;

/// Destination for published meeting documents
///
/// Models the Notion contract at the interface boundary: append content to a
/// page, optionally read it back. Failures are reported to the caller and
/// never retried automatically.
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Append plain text to the page as a paragraph block
    async fn append(&self, page_id: &str, content: &str) -> Result<(), NotionError>;

    /// Read the page's child blocks
    async fn read(&self, page_id: &str) -> Result<serde_json::Value, NotionError>;
}

/// Notion API client
pub struct NotionClient {
    api_key: String,
    base_url: String,
    version: String,
    http: Client,
    timeout: Duration,
}

impl NotionClient {
    /// Create a new client from configuration
    ///
    /// Reads the integration token from the environment variable named in
    /// config.
    pub fn from_config(config: &NotionConfig) -> Result<Self, NotionError> {
        debug!(base_url = %config.base_url, "from_config: called");
        let api_key = config
            .get_api_key()
            .map_err(|e| NotionError::InvalidResponse(e.to_string()))?;

        let timeout = Duration::from_millis(config.timeout_ms);

        let http = Client::builder().timeout(timeout).build().map_err(NotionError::Network)?;

        Ok(Self {
            api_key,
            base_url: config.base_url.clone(),
            version: config.version.clone(),
            http,
            timeout,
        })
    }

    /// Encode content as a single paragraph block
    fn paragraph_blocks(content: &str) -> serde_json::Value {
        serde_json::json!([
            {
                "object": "block",
                "type": "paragraph",
                "paragraph": {
                    "rich_text": [
                        {
                            "type": "text",
                            "text": { "content": content }
                        }
                    ]
                }
            }
        ])
    }
}

#[async_trait]
impl PageStore for NotionClient {
    async fn append(&self, page_id: &str, content: &str) -> Result<(), NotionError> {
        debug!(page_id, content_len = content.len(), "append: called");
        let url = format!("{}/v1/blocks/{}/children", self.base_url, page_id);
        let body = serde_json::json!({ "children": Self::paragraph_blocks(content) });

        let response = self
            .http
            .patch(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Notion-Version", self.version.clone())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| NotionError::from_reqwest(e, self.timeout))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            debug!(%status, "append: API error");
            let text = response.text().await.unwrap_or_default();
            return Err(NotionError::ApiError { status, message: text });
        }

        debug!("append: success");
        Ok(())
    }

    async fn read(&self, page_id: &str) -> Result<serde_json::Value, NotionError> {
        debug!(page_id, "read: called");
        let url = format!("{}/v1/blocks/{}/children?page_size=100", self.base_url, page_id);

        let response = self
            .http
            .get(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Notion-Version", self.version.clone())
            .send()
            .await
            .map_err(|e| NotionError::from_reqwest(e, self.timeout))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            debug!(%status, "read: API error");
            let text = response.text().await.unwrap_or_default();
            return Err(NotionError::ApiError { status, message: text });
        }

        response
            .json()
            .await
            .map_err(|e| NotionError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Recording PageStore for unit tests
    #[derive(Default)]
    pub struct MockPageStore {
        appended: Mutex<Vec<(String, String)>>,
        pub fail_with_status: Option<u16>,
    }

    impl MockPageStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing(status: u16) -> Self {
            Self {
                appended: Mutex::new(Vec::new()),
                fail_with_status: Some(status),
            }
        }

        pub fn append_count(&self) -> usize {
            self.appended.lock().unwrap().len()
        }

        pub fn last_content(&self) -> Option<String> {
            self.appended.lock().unwrap().last().map(|(_, c)| c.clone())
        }
    }

    #[async_trait]
    impl PageStore for MockPageStore {
        async fn append(&self, page_id: &str, content: &str) -> Result<(), NotionError> {
            if let Some(status) = self.fail_with_status {
                return Err(NotionError::ApiError {
                    status,
                    message: "mock failure".to_string(),
                });
            }
            self.appended
                .lock()
                .unwrap()
                .push((page_id.to_string(), content.to_string()));
            Ok(())
        }

        async fn read(&self, _page_id: &str) -> Result<serde_json::Value, NotionError> {
            Ok(serde_json::json!({ "results": [] }))
        }
    }
}
