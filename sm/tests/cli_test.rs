//! CLI-level tests for the sm binary
//!
//! Configuration errors must be fatal at startup with a diagnostic message
//! and non-zero exit; everything else is exercised through the library.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_missing_llm_credential_is_fatal() {
    let mut cmd = Command::cargo_bin("sm").unwrap();
    cmd.env_remove("ANTHROPIC_API_KEY")
        .arg("record")
        .assert()
        .failure()
        .stderr(predicate::str::contains("LLM API key not found"));
}

#[test]
fn test_missing_notion_credential_is_fatal() {
    let mut cmd = Command::cargo_bin("sm").unwrap();
    cmd.env("ANTHROPIC_API_KEY", "test-key")
        .env_remove("NOTION_API_KEY")
        .arg("record")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Notion API key not found"));
}

#[test]
fn test_missing_page_id_is_fatal() {
    let mut cmd = Command::cargo_bin("sm").unwrap();
    cmd.env("ANTHROPIC_API_KEY", "test-key")
        .env("NOTION_API_KEY", "test-key")
        .env_remove("NOTION_PAGE_ID")
        .arg("record")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Notion page id not found"));
}

#[test]
fn test_record_is_a_placeholder() {
    let mut cmd = Command::cargo_bin("sm").unwrap();
    cmd.env("ANTHROPIC_API_KEY", "test-key")
        .env("NOTION_API_KEY", "test-key")
        .env("NOTION_PAGE_ID", "page-1")
        .arg("record")
        .assert()
        .success()
        .stdout(predicate::str::contains("not implemented yet"));
}

#[test]
fn test_help_shows_subcommands() {
    let mut cmd = Command::cargo_bin("sm").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chat with the scrum master"));
}
