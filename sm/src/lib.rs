//! ScrumMate - AI scrum master assistant
//!
//! Chats with a user through an LLM completion endpoint, classifies the
//! session by meeting type (sprint planning, standup, retrospective), and on
//! request formats the model's meeting summary into a sectioned document
//! appended to a Notion page. Every exchange is journaled locally via
//! [`chatjournal`] so later turns carry prior context.
//!
//! # Core Flow
//!
//! Each turn: classify (once per session) → model call → save-trigger
//! detection → on confirmed trigger, select + format + publish → journal the
//! exchange. A failed model call journals nothing and the session continues.
//!
//! # Modules
//!
//! - [`llm`] - LLM client trait and Anthropic/OpenAI implementations
//! - [`notion`] - Notion page append/read client
//! - [`agent`] - scrum master prompt and response generation
//! - [`meeting`] - meeting-type classification
//! - [`triggers`] - save-intent detection
//! - [`format`] - section extraction and document rendering
//! - [`publisher`] - content selection and page append
//! - [`session`] - session-scoped state
//! - [`chat`] - interactive chat session
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod agent;
pub mod chat;
pub mod cli;
pub mod config;
pub mod format;
pub mod llm;
pub mod meeting;
pub mod notion;
pub mod publisher;
pub mod session;
pub mod triggers;

// Re-export commonly used types
pub use config::{Config, LlmConfig, NotionConfig, StorageConfig};
pub use format::{NO_ITEMS_PLACEHOLDER, format_document, generic_wrap};
pub use llm::{AnthropicClient, CompletionRequest, CompletionResponse, LlmClient, LlmError, OpenAIClient};
pub use meeting::MeetingType;
pub use notion::{NotionClient, NotionError, PageStore};
pub use publisher::{PublishError, Publisher};
pub use session::{LogEntry, Role, SessionState};
pub use triggers::SaveTrigger;
