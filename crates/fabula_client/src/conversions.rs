//! Type conversions between Fabula and wire formats.

use crate::dto::{ChatMessage, ChatRequest, ChatResponse};
use fabula_core::{GenerateRequest, GenerateResponse, Role};
use fabula_error::{StoryClientError, StoryClientErrorKind};

/// Converts a GenerateRequest to the chat-completion wire format.
pub fn to_chat_request(req: &GenerateRequest) -> Result<ChatRequest, StoryClientError> {
    let messages = req
        .messages()
        .iter()
        .map(|msg| {
            let role = match msg.role() {
                Role::System => "system",
                Role::User => "user",
                Role::Assistant => "assistant",
            };
            ChatMessage {
                role: role.to_string(),
                content: msg.content().clone(),
            }
        })
        .collect::<Vec<_>>();

    let mut builder = ChatRequest::builder();
    builder.messages(messages);

    if let Some(temperature) = req.temperature() {
        builder.temperature(Some(*temperature));
    }

    if let Some(top_p) = req.top_p() {
        builder.top_p(Some(*top_p));
    }

    if let Some(max_tokens) = req.max_tokens() {
        builder.max_tokens(Some(*max_tokens));
    }

    builder.build().map_err(|e| {
        StoryClientError::new(StoryClientErrorKind::Builder(format!(
            "Failed to build request: {}",
            e
        )))
    })
}

/// Converts a chat-completion response to a GenerateResponse.
///
/// Takes the first completion's message content; an empty choice list is
/// an error.
pub fn from_chat_response(response: &ChatResponse) -> Result<GenerateResponse, StoryClientError> {
    let content = response
        .choices
        .first()
        .map(|choice| choice.message.content.clone())
        .ok_or_else(|| StoryClientError::new(StoryClientErrorKind::MissingContent))?;

    Ok(GenerateResponse::new(content))
}
