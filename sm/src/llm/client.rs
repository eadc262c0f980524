//! LlmClient trait definition

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResponse, LlmError};

/// Stateless LLM client - each call is independent
///
/// This is the core abstraction for interacting with language models. No
/// conversation state is maintained between calls; the caller supplies prior
/// context in the request. A failed call is reported, never retried silently,
/// so a timed-out turn surfaces to the user instead of hanging the session.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single completion request (blocking until complete)
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::debug;

    /// Mock LLM client for unit tests
    ///
    /// Plays back a scripted sequence of outcomes, one per call.
    pub struct MockLlmClient {
        outcomes: Mutex<VecDeque<Result<CompletionResponse, LlmError>>>,
        call_count: AtomicUsize,
    }

    impl MockLlmClient {
        pub fn new(outcomes: Vec<Result<CompletionResponse, LlmError>>) -> Self {
            debug!(outcome_count = %outcomes.len(), "MockLlmClient::new: called");
            Self {
                outcomes: Mutex::new(outcomes.into()),
                call_count: AtomicUsize::new(0),
            }
        }

        /// Script a sequence of plain-text replies
        pub fn replies(texts: &[&str]) -> Self {
            Self::new(
                texts
                    .iter()
                    .map(|t| {
                        Ok(CompletionResponse {
                            content: t.to_string(),
                            usage: Default::default(),
                        })
                    })
                    .collect(),
            )
        }

        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmClient for MockLlmClient {
        async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
            debug!("MockLlmClient::complete: called");
            self.call_count.fetch_add(1, Ordering::SeqCst);
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(LlmError::InvalidResponse("No more mock outcomes".to_string())))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_client_plays_back_outcomes() {
            let client = MockLlmClient::replies(&["Response 1", "Response 2"]);

            let req = CompletionRequest {
                system_prompt: "Test".to_string(),
                context: None,
                messages: vec![],
                max_tokens: 100,
            };

            let resp1 = client.complete(req.clone()).await.unwrap();
            assert_eq!(resp1.content, "Response 1");

            let resp2 = client.complete(req.clone()).await.unwrap();
            assert_eq!(resp2.content, "Response 2");

            assert_eq!(client.call_count(), 2);
        }

        #[tokio::test]
        async fn test_mock_client_errors_when_exhausted() {
            let client = MockLlmClient::new(vec![]);

            let req = CompletionRequest {
                system_prompt: "Test".to_string(),
                context: None,
                messages: vec![],
                max_tokens: 100,
            };

            assert!(client.complete(req).await.is_err());
        }
    }
}
