use crate::chat::chat_turn;
use crate::error::PlannerError;
use crate::facts::ExtractedFacts;
use crate::materializer::{materialize, Anchor};
use crate::raw::RawPlan;
use crate::requester::request_plan;
use crate::sanitizer::parse_plan_reply;
use planner_llm_sdk::client::LlmClient;
use planner_llm_sdk::models;
use shared_types::{ChatMessage, ProjectPlan};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Model parameters for the two operations
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerSettings {
    pub model: String,
    pub chat_temperature: f32,
    pub chat_max_tokens: u32,
    pub chat_timeout: Duration,
    pub plan_temperature: f32,
    pub plan_max_tokens: u32,
    pub plan_timeout: Duration,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            model: models::groq::DEFAULT_MODEL.to_string(),
            chat_temperature: 0.5,
            chat_max_tokens: 200,
            chat_timeout: Duration::from_secs(20),
            plan_temperature: 0.7,
            plan_max_tokens: 3000,
            plan_timeout: Duration::from_secs(25),
        }
    }
}

/// Entry point shared by every adapter.
///
/// Built once at startup with the model client (or `None` when no credential
/// is configured) and shared read-only between requests.
#[derive(Clone)]
pub struct PlannerService {
    client: Option<Arc<dyn LlmClient>>,
    settings: PlannerSettings,
}

impl PlannerService {
    pub fn new(client: Option<Arc<dyn LlmClient>>, settings: PlannerSettings) -> Self {
        Self { client, settings }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    fn client(&self) -> Result<&dyn LlmClient, PlannerError> {
        self.client
            .as_deref()
            .ok_or_else(PlannerError::missing_credential)
    }

    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<String, PlannerError> {
        let client = self.client()?;
        info!(messages = messages.len(), "Handling chat turn");
        chat_turn(client, &self.settings, messages).await
    }

    pub async fn generate_plan(&self, messages: &[ChatMessage]) -> Result<ProjectPlan, PlannerError> {
        self.generate_plan_at(messages, Anchor::now()).await
    }

    /// Full pipeline with an explicit anchor for day 0 and the project id
    pub async fn generate_plan_at(
        &self,
        messages: &[ChatMessage],
        anchor: Anchor,
    ) -> Result<ProjectPlan, PlannerError> {
        let client = self.client()?;
        info!(messages = messages.len(), "Generating project plan");

        let facts = ExtractedFacts::from_messages(messages);
        let reply = request_plan(client, &self.settings, &facts).await?;

        let object = parse_plan_reply(&reply)?;

        let raw = RawPlan::from_json(&object);
        let plan = materialize(&raw, anchor);

        info!(
            project_id = %plan.project_id,
            project_name = %plan.project_name,
            tasks = plan.tasks.len(),
            "Project plan generated"
        );
        Ok(plan)
    }
}
