#![allow(dead_code)]

use actix_web::{test, web, App};
use planner_core::{PlannerService, PlannerSettings};
use planner_llm_sdk::client::LlmClient;
use planner_llm_sdk::error::LlmError;
use planner_llm_sdk::types::{CompletionRequest, CompletionResponse, ContentBlock, Role, Usage};
use std::sync::{Arc, Mutex};

pub struct TestApp<S> {
    pub mock_llm_client: Arc<MockLlmClient>,
    pub app: S,
}

/// Replays queued replies in order and records every request it receives
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<Result<CompletionResponse, LlmError>>>>,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        MockLlmClient {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push_text(&self, text: &str) {
        self.push_response(Ok(create_completion_response_with_text(text)));
    }

    pub fn push_response(&self, response: Result<CompletionResponse, LlmError>) {
        self.responses.lock().unwrap().push(response);
    }

    pub fn get_call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request);

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(create_completion_response_with_text("How long do you have?"))
        } else {
            responses.remove(0)
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

pub fn create_completion_response_with_text(text: &str) -> CompletionResponse {
    CompletionResponse {
        content: vec![ContentBlock::Text {
            text: text.to_string(),
        }],
        role: Role::Assistant,
        usage: Usage {
            input_tokens: 10,
            output_tokens: 20,
        },
        stop_reason: Some("stop".to_string()),
    }
}

pub async fn setup_test_app() -> TestApp<
    impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
> {
    let mock_llm_client = Arc::new(MockLlmClient::new());
    let llm_client = mock_llm_client.clone() as Arc<dyn LlmClient>;
    let planner = PlannerService::new(Some(llm_client), PlannerSettings::default());

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(planner))
            .configure(planner_api::configure),
    )
    .await;

    TestApp {
        mock_llm_client,
        app,
    }
}

/// Application with no credential configured
pub async fn setup_unconfigured_app() -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let planner = PlannerService::new(None, PlannerSettings::default());
    test::init_service(
        App::new()
            .app_data(web::Data::new(planner))
            .configure(planner_api::configure),
    )
    .await
}

pub fn conversation() -> serde_json::Value {
    serde_json::json!({
        "messages": [
            {"role": "user", "content": "I want to build a website for my bakery"},
            {"role": "assistant", "content": "How long do you have?"},
            {"role": "user", "content": "2 weeks, team of 3"}
        ]
    })
}
