use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::{
    client::LlmClient,
    error::LlmError,
    groq::{
        builder::GroqMessageBuilder,
        types::{
            GroqChatCompletionRequest, GroqChatCompletionResponse, GroqErrorResponse,
            GroqMessage, GroqRole,
        },
    },
    models, providers,
    types::{CompletionRequest, CompletionResponse, ContentBlock, Role, Usage},
};

const DEFAULT_BASE_URL: &str = "https://api.groq.com";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Groq client speaking the OpenAI-compatible chat completions API
pub struct GroqClient {
    api_key: String,
    base_url: String,
    default_model: String,
    http_client: reqwest::Client,
}

impl GroqClient {
    /// Create a new Groq client with the given API key
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::authentication("API key cannot be empty"));
        }

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            default_model: models::groq::DEFAULT_MODEL.to_string(),
            http_client: build_http_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS))?,
        })
    }

    /// Set a custom base URL for the API
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the model reported by [`LlmClient::model_name`]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start building a chat completion request
    pub fn message_builder(&self) -> GroqMessageBuilder<'_> {
        GroqMessageBuilder::new(self)
    }

    /// Create a chat completion using the Groq Chat Completions API
    pub async fn create_chat_completion(
        &self,
        request: GroqChatCompletionRequest,
    ) -> Result<GroqChatCompletionResponse, LlmError> {
        let url = format!("{}/openai/v1/chat/completions", self.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|_| LlmError::authentication("Invalid API key format"))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        tracing::debug!(model = %request.model, messages = request.messages.len(), "Sending Groq chat completion");

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let groq_response: GroqChatCompletionResponse = response
                .json()
                .await
                .map_err(|e| LlmError::internal(format!("Failed to parse response: {}", e)))?;
            return Ok(groq_response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        // Prefer the structured message, fall back to the raw body
        let message = serde_json::from_str::<GroqErrorResponse>(&error_text)
            .map(|e| e.error.message)
            .unwrap_or(error_text);

        Err(error_for_status(status, message))
    }
}

fn build_http_client(timeout: Duration) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LlmError::Network { source: e })
}

fn error_for_status(status: reqwest::StatusCode, message: String) -> LlmError {
    match status {
        reqwest::StatusCode::BAD_REQUEST => {
            if message.to_lowercase().contains("api key") {
                LlmError::authentication(message)
            } else {
                LlmError::invalid_request(message)
            }
        }
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
            LlmError::authentication(message)
        }
        reqwest::StatusCode::PAYLOAD_TOO_LARGE => LlmError::invalid_request("Request too large"),
        reqwest::StatusCode::TOO_MANY_REQUESTS => LlmError::rate_limit(message, None),
        _ => LlmError::api_error(status.as_u16(), message),
    }
}

fn to_groq_role(role: &Role) -> GroqRole {
    match role {
        Role::User => GroqRole::User,
        Role::Assistant => GroqRole::Assistant,
        Role::System => GroqRole::System,
    }
}

#[async_trait]
impl LlmClient for GroqClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        if let Some(system) = request.system {
            messages.push(GroqMessage::system(system));
        }
        for msg in request.messages {
            let content: String = msg
                .content
                .into_iter()
                .map(|block| match block {
                    ContentBlock::Text { text } => text,
                })
                .collect::<Vec<_>>()
                .join("");
            messages.push(GroqMessage::new(to_groq_role(&msg.role), content));
        }

        let groq_request = GroqChatCompletionRequest {
            model: request.model,
            messages,
            max_tokens: Some(request.max_tokens),
            temperature: request.temperature,
            top_p: request.top_p,
            stop: request.stop_sequences,
        };

        let groq_response = self.create_chat_completion(groq_request).await?;

        let choice = groq_response
            .choices
            .first()
            .ok_or_else(|| LlmError::internal("No completion choices returned"))?;

        Ok(CompletionResponse {
            content: vec![ContentBlock::Text {
                text: choice.message.content.clone().unwrap_or_default(),
            }],
            role: match choice.message.role {
                GroqRole::User => Role::User,
                GroqRole::Assistant => Role::Assistant,
                GroqRole::System => Role::System,
            },
            usage: groq_response
                .usage
                .as_ref()
                .map(|u| Usage {
                    input_tokens: u.prompt_tokens,
                    output_tokens: u.completion_tokens,
                })
                .unwrap_or_default(),
            stop_reason: choice.finish_reason.clone(),
        })
    }

    fn provider_name(&self) -> &str {
        providers::GROQ
    }

    fn model_name(&self) -> &str {
        &self.default_model
    }
}
