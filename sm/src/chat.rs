//! Interactive chat session
//!
//! One user turn is fully processed - classification check, model call,
//! trigger detection, optional confirmed publish, journal append - before the
//! next input is read. Turn processing returns a Result matched at the loop
//! boundary: only a successful turn reaches the journal, and any failure is
//! displayed and logged while the session keeps accepting input.

use std::sync::Arc;

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{error, info};
use uuid::Uuid;

use chatjournal::ConversationStore;

use crate::agent;
use crate::config::Config;
use crate::llm::{self, LlmClient};
use crate::notion::{NotionClient, PageStore};
use crate::publisher::Publisher;
use crate::session::SessionState;
use crate::triggers::{self, SaveTrigger};

/// What a successful turn produced
#[derive(Debug)]
pub struct TurnReport {
    /// The assistant's reply, already journaled
    pub reply: String,
    /// Save intent detected in this exchange, if any
    pub trigger: Option<SaveTrigger>,
}

/// Interactive scrum master chat session
pub struct ChatSession {
    llm: Arc<dyn LlmClient>,
    page: Arc<dyn PageStore>,
    journal: ConversationStore,
    state: SessionState,
    page_id: String,
    context_turns: usize,
    max_tokens: u32,
}

impl ChatSession {
    pub fn new(
        llm: Arc<dyn LlmClient>,
        page: Arc<dyn PageStore>,
        journal: ConversationStore,
        page_id: String,
        context_turns: usize,
        max_tokens: u32,
    ) -> Self {
        Self {
            llm,
            page,
            journal,
            state: SessionState::new(),
            page_id,
            context_turns,
            max_tokens,
        }
    }

    /// Session state, for publish selection and inspection
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Run the chat main loop
    pub async fn run(&mut self, initial_message: Option<String>) -> Result<()> {
        self.print_welcome();

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        if let Some(message) = initial_message {
            println!("{} {}", "You:".bright_green(), message);
            if !self.handle_input(&mut rl, &message).await? {
                println!("Goodbye!");
                return Ok(());
            }
        }

        loop {
            let readline = rl.readline(&format!("{} ", "You:".bright_green()));

            match readline {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(input);

                    // Sentinel to leave chat
                    if input.eq_ignore_ascii_case("exit") {
                        break;
                    }

                    if !self.handle_input(&mut rl, input).await? {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "ScrumMate Chat".bright_cyan().bold());
        println!(
            "Type {} to leave the chat. Ask to {} when you want notes filed.",
            "exit".yellow(),
            "save to Notion".yellow()
        );
        println!();
    }

    /// Handle one user input; returns false when the session should end
    async fn handle_input(&mut self, rl: &mut DefaultEditor, input: &str) -> Result<bool> {
        match self.process_turn(input).await {
            Ok(report) => {
                println!();
                println!("{} {}", "Scrum Master:".bright_blue(), report.reply);
                println!();

                if report.trigger.is_some() {
                    // The detector only flags intent; publishing still needs
                    // explicit confirmation
                    if confirm(rl, "Save this to Notion? [y/n] ")? {
                        match self.publish().await {
                            Ok(()) => {
                                println!("{} Saved to Notion", "✓".green());
                                if !confirm(rl, "Keep chatting? [y/n] ")? {
                                    return Ok(false);
                                }
                            }
                            Err(e) => {
                                println!("{} {}", "✗".red(), e);
                            }
                        }
                    }
                }
                Ok(true)
            }
            Err(e) => {
                // Nothing was journaled for this exchange; report and keep
                // accepting input
                error!(error = %e, "Turn failed");
                println!("{} {}", "✗".red(), e);
                Ok(true)
            }
        }
    }

    /// Process one turn: classify, call the model, journal, detect triggers
    ///
    /// A failed model call returns Err without touching the journal or the
    /// session turn log.
    pub async fn process_turn(&mut self, input: &str) -> Result<TurnReport> {
        // Classification runs only while the meeting type is unset
        self.state.observe_user_input(input);

        let context = self.journal.context_summary(self.context_turns);
        let response = agent::respond(self.llm.as_ref(), input, &context, self.max_tokens)
            .await
            .map_err(|e| eyre::eyre!("No answer this turn: {}", e))?;

        let reply = response.content;

        self.state.log_user(input);
        self.state.log_assistant(&reply);

        // The journal records the exchange regardless of what publishing does
        self.journal.append(input, &reply);

        let trigger = triggers::detect(input, &reply);
        Ok(TurnReport { reply, trigger })
    }

    /// Publish the selected session content to the configured page
    pub async fn publish(&self) -> Result<(), crate::publisher::PublishError> {
        Publisher::new(self.page.as_ref(), &self.page_id).publish(&self.state).await
    }
}

/// Ask a y/n question; Ctrl+C/Ctrl+D count as "no"
fn confirm(rl: &mut DefaultEditor, prompt: &str) -> Result<bool> {
    loop {
        match rl.readline(prompt) {
            Ok(answer) => match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => println!("Please answer y or n."),
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(false),
            Err(err) => return Err(eyre::eyre!("Readline error: {}", err)),
        }
    }
}

/// Run the interactive chat
///
/// This is the main entry point for `sm chat`.
pub async fn run_chat(config: &Config, initial_message: Option<String>) -> Result<()> {
    let llm = llm::create_client(&config.llm).map_err(|e| eyre::eyre!("Failed to create LLM client: {}", e))?;

    let page: Arc<dyn PageStore> = Arc::new(
        NotionClient::from_config(&config.notion).map_err(|e| eyre::eyre!("Failed to create Notion client: {}", e))?,
    );

    let page_id = config.notion.resolve_page_id()?;

    let journal = ConversationStore::open(&config.storage.journal_dir, &config.storage.identity)?;

    let session_id = Uuid::now_v7();
    info!(%session_id, identity = %config.storage.identity, "Chat session starting");

    let mut session = ChatSession::new(
        llm,
        page,
        journal,
        page_id,
        config.storage.context_turns,
        config.llm.max_tokens,
    );
    session.run(initial_message).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LlmError;
    use crate::llm::client::mock::MockLlmClient;
    use crate::meeting::MeetingType;
    use crate::notion::client::mock::MockPageStore;
    use std::time::Duration;
    use tempfile::TempDir;

    fn session_with(llm: MockLlmClient, dir: &TempDir) -> ChatSession {
        let journal = ConversationStore::open(dir.path(), "test").unwrap();
        ChatSession::new(
            Arc::new(llm),
            Arc::new(MockPageStore::new()),
            journal,
            "page-1".to_string(),
            5,
            1024,
        )
    }

    #[tokio::test]
    async fn test_failed_model_call_journals_nothing_and_session_continues() {
        let dir = TempDir::new().unwrap();
        let llm = MockLlmClient::new(vec![
            Err(LlmError::Timeout(Duration::from_secs(60))),
            Ok(crate::llm::CompletionResponse {
                content: "recovered".to_string(),
                usage: Default::default(),
            }),
        ]);
        let mut session = session_with(llm, &dir);

        // Timed-out turn: no journal entry, no turn-log entries
        assert!(session.process_turn("hello").await.is_err());
        assert!(session.state().turn_log.is_empty());
        assert!(ConversationStore::open(dir.path(), "test").unwrap().is_empty());

        // Next turn succeeds and is journaled
        let report = session.process_turn("hello again").await.unwrap();
        assert_eq!(report.reply, "recovered");
        assert_eq!(ConversationStore::open(dir.path(), "test").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_meeting_type_pinned_from_first_classifiable_input() {
        let dir = TempDir::new().unwrap();
        let llm = MockLlmClient::replies(&["reply one", "reply two", "reply three"]);
        let mut session = session_with(llm, &dir);

        session.process_turn("good morning").await.unwrap();
        assert_eq!(session.state().meeting_type, None);

        session.process_turn("let's do our standup").await.unwrap();
        assert_eq!(session.state().meeting_type, Some(MeetingType::Standup));

        session.process_turn("actually plan the sprint").await.unwrap();
        assert_eq!(session.state().meeting_type, Some(MeetingType::Standup));
    }

    #[tokio::test]
    async fn test_trigger_detected_from_either_side() {
        let dir = TempDir::new().unwrap();
        let llm = MockLlmClient::replies(&["plain reply", "I'm saving this now"]);
        let mut session = session_with(llm, &dir);

        let report = session.process_turn("post to notion please").await.unwrap();
        assert_eq!(report.trigger, Some(SaveTrigger::User));

        let report = session.process_turn("thanks").await.unwrap();
        assert_eq!(report.trigger, Some(SaveTrigger::Agent));
    }

    #[tokio::test]
    async fn test_publish_uses_second_to_last_assistant_reply() {
        let dir = TempDir::new().unwrap();
        let llm = MockLlmClient::replies(&["Done:\n- Fixed bug A", "Shall I save this to Notion?"]);
        let page = Arc::new(MockPageStore::new());
        let journal = ConversationStore::open(dir.path(), "test").unwrap();
        let mut session = ChatSession::new(
            Arc::new(llm),
            page.clone(),
            journal,
            "page-1".to_string(),
            5,
            1024,
        );

        session.process_turn("standup time").await.unwrap();
        session.process_turn("save this please").await.unwrap();

        session.publish().await.unwrap();

        assert_eq!(page.append_count(), 1);
        let content = page.last_content().unwrap();
        // The substantive summary, not the confirmation question
        assert!(content.contains("Fixed bug A"));
        assert!(!content.contains("Shall I save this"));
    }
}
