//! Scrum master agent prompt and response generation

use tracing::debug;

use crate::llm::{CompletionRequest, CompletionResponse, LlmClient, LlmError, Message};

/// System prompt establishing the scrum master role
///
/// The closing instruction matters: ending structured summaries with a save
/// offer is what makes the publisher's second-to-last selection pick the
/// summary instead of the offer.
pub const SYSTEM_PROMPT: &str = "\
You are an expert Agile Scrum Master assistant.

Your role is to help the team with:
1. Sprint planning
2. Daily standups
3. Sprint reviews
4. Sprint retrospectives
5. Backlog refinement

Provide helpful, concise responses based on Agile best practices.
Format your responses appropriately based on the type of meeting or request.
When you have produced a structured meeting summary, finish by asking whether
you should save it to Notion.";

/// Get one scrum master reply for the user's input
///
/// Prior conversation rides along as a context transcript; an empty context
/// is omitted from the request entirely.
pub async fn respond(
    llm: &dyn LlmClient,
    user_input: &str,
    context: &str,
    max_tokens: u32,
) -> Result<CompletionResponse, LlmError> {
    debug!(input_len = user_input.len(), context_len = context.len(), "respond: called");

    let request = CompletionRequest {
        system_prompt: SYSTEM_PROMPT.to_string(),
        context: if context.is_empty() { None } else { Some(context.to_string()) },
        messages: vec![Message::user(user_input)],
        max_tokens,
    };

    let response = llm.complete(request).await?;
    debug!(
        input_tokens = response.usage.input_tokens,
        output_tokens = response.usage.output_tokens,
        "respond: success"
    );
    Ok(response)
}
