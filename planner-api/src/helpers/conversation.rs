use anyhow::Context;
use serde::Deserialize;
use shared_types::{ChatMessage, ChatRequest};

/// Accepted shapes for a conversation read from a file or stdin
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ConversationInput {
    Request(ChatRequest),
    Messages(Vec<ChatMessage>),
}

/// Parse either a `{"messages": [...]}` request body or a bare message array
pub fn parse_conversation(input: &str) -> anyhow::Result<Vec<ChatMessage>> {
    let parsed: ConversationInput = serde_json::from_str(input)
        .context("expected a JSON array of messages or an object with a \"messages\" field")?;

    Ok(match parsed {
        ConversationInput::Request(request) => request.messages,
        ConversationInput::Messages(messages) => messages,
    })
}
