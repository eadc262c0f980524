//! Notion integration for ScrumMate
//!
//! Implements the document-append and document-read contracts against the
//! Notion blocks API. The [`PageStore`] trait is the seam the publisher
//! works through, so tests can substitute a recording implementation.

pub mod client;
mod error;

pub use client::{NotionClient, PageStore};
pub use error::NotionError;
