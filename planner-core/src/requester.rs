use crate::error::PlannerError;
use crate::facts::ExtractedFacts;
use crate::prompts::{plan_user_prompt, PLAN_SYSTEM_PROMPT};
use crate::service::PlannerSettings;
use planner_llm_sdk::client::LlmClient;
use planner_llm_sdk::types::{CompletionRequest, Message};
use std::time::Duration;
use tracing::{debug, error};

/// Send one request and return the reply text, bounded by `timeout`.
/// Failures are returned as is; nothing is retried.
pub async fn call_model(
    client: &dyn LlmClient,
    request: CompletionRequest,
    timeout: Duration,
) -> Result<String, PlannerError> {
    match tokio::time::timeout(timeout, client.complete(request)).await {
        Ok(Ok(response)) => Ok(response.text()),
        Ok(Err(e)) => {
            error!(error = %e, provider = client.provider_name(), "Model request failed");
            Err(PlannerError::Transport { source: e })
        }
        Err(_) => {
            error!(timeout_secs = timeout.as_secs(), "Model request timed out");
            Err(PlannerError::Timeout {
                seconds: timeout.as_secs(),
            })
        }
    }
}

pub fn plan_request(settings: &PlannerSettings, facts: &ExtractedFacts) -> CompletionRequest {
    CompletionRequest {
        messages: vec![Message::user(plan_user_prompt(facts))],
        max_tokens: settings.plan_max_tokens,
        model: settings.model.clone(),
        system: Some(PLAN_SYSTEM_PROMPT.to_string()),
        temperature: Some(settings.plan_temperature),
        top_p: None,
        stop_sequences: None,
    }
}

/// Ask the model for a plan and return its raw, unverified reply
pub async fn request_plan(
    client: &dyn LlmClient,
    settings: &PlannerSettings,
    facts: &ExtractedFacts,
) -> Result<String, PlannerError> {
    debug!(goal = %facts.goal, duration = ?facts.duration, team_size = ?facts.team_size, "Requesting plan");
    call_model(client, plan_request(settings, facts), settings.plan_timeout).await
}
