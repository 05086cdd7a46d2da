use crate::error::PlannerError;
use crate::prompts::CHAT_SYSTEM_PROMPT;
use crate::requester::call_model;
use crate::service::PlannerSettings;
use planner_llm_sdk::client::LlmClient;
use planner_llm_sdk::types::{CompletionRequest, Message};
use shared_types::ChatMessage;

/// Map wire messages to model messages; unknown roles are sent as user turns
pub fn to_model_messages(messages: &[ChatMessage]) -> Vec<Message> {
    messages
        .iter()
        .map(|m| match m.role.as_str() {
            "assistant" => Message::assistant(m.content.clone()),
            _ => Message::user(m.content.clone()),
        })
        .collect()
}

pub fn chat_request(settings: &PlannerSettings, messages: &[ChatMessage]) -> CompletionRequest {
    CompletionRequest {
        messages: to_model_messages(messages),
        max_tokens: settings.chat_max_tokens,
        model: settings.model.clone(),
        system: Some(CHAT_SYSTEM_PROMPT.to_string()),
        temperature: Some(settings.chat_temperature),
        top_p: None,
        stop_sequences: None,
    }
}

/// One stateless clarifying-question turn; the reply is returned unchanged
pub async fn chat_turn(
    client: &dyn LlmClient,
    settings: &PlannerSettings,
    messages: &[ChatMessage],
) -> Result<String, PlannerError> {
    call_model(client, chat_request(settings, messages), settings.chat_timeout).await
}
