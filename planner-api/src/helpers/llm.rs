use crate::config::ApiConfig;
use planner_core::PlannerService;
use planner_llm_sdk::client::LlmClient;
use planner_llm_sdk::groq::GroqClient;
use std::sync::Arc;
use tracing::{info, warn};

/// Groq client for the configured credential, or `None` when there is none
pub fn create_llm_client(config: &ApiConfig) -> anyhow::Result<Option<Arc<dyn LlmClient>>> {
    let Some(api_key) = config.groq_api_key() else {
        warn!("GROQ_API_KEY not set; chat and plan generation will fail until it is configured");
        return Ok(None);
    };

    let client = GroqClient::new(api_key)?
        .with_base_url(&config.llm.base_url)
        .with_default_model(&config.llm.model);

    info!(
        provider = client.provider_name(),
        model = client.model_name(),
        "LLM client created"
    );

    Ok(Some(Arc::new(client)))
}

pub fn create_planner_service(config: &ApiConfig) -> anyhow::Result<PlannerService> {
    let client = create_llm_client(config)?;
    Ok(PlannerService::new(client, config.planner_settings()))
}
