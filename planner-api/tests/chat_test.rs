mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use actix_web::test::TestRequest;
use common::{conversation, setup_test_app, setup_unconfigured_app};
use planner_llm_sdk::error::LlmError;
use planner_llm_sdk::types::{ContentBlock, Role};

#[actix_rt::test]
async fn test_chat_returns_model_reply() -> anyhow::Result<()> {
    let test_app = setup_test_app().await;
    test_app
        .mock_llm_client
        .push_text("Great! So: bakery website, 2 weeks, 3 people. Is this correct?");

    let req = TestRequest::post()
        .uri("/api/chat")
        .set_json(conversation())
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await)?;
    assert_eq!(
        body["response"],
        "Great! So: bakery website, 2 weeks, 3 people. Is this correct?"
    );

    assert_eq!(test_app.mock_llm_client.get_call_count(), 1);
    let request = test_app
        .mock_llm_client
        .last_request()
        .ok_or_else(|| anyhow::anyhow!("no request recorded"))?;
    assert!(request.system.is_some());
    assert_eq!(request.max_tokens, 200);
    assert_eq!(request.temperature, Some(0.5));
    assert_eq!(request.messages.len(), 3);
    assert_eq!(request.messages[1].role, Role::Assistant);
    let ContentBlock::Text { text } = &request.messages[2].content[0];
    assert_eq!(text, "2 weeks, team of 3");

    Ok(())
}

#[actix_rt::test]
async fn test_chat_without_credential_is_configuration_error() -> anyhow::Result<()> {
    let app = setup_unconfigured_app().await;

    let req = TestRequest::post()
        .uri("/api/chat")
        .set_json(conversation())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await)?;
    assert_eq!(body["error"], "GROQ_API_KEY not configured");
    assert_eq!(body["kind"], "configuration");

    Ok(())
}

#[actix_rt::test]
async fn test_chat_upstream_failure_is_bad_gateway() -> anyhow::Result<()> {
    let test_app = setup_test_app().await;
    test_app
        .mock_llm_client
        .push_response(Err(LlmError::rate_limit("slow down", None)));

    let req = TestRequest::post()
        .uri("/api/chat")
        .set_json(conversation())
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await)?;
    assert_eq!(body["kind"], "transport");
    assert!(body["error"].as_str().unwrap_or_default().starts_with("Chat error: "));
    assert_eq!(test_app.mock_llm_client.get_call_count(), 1);

    Ok(())
}

#[actix_rt::test]
async fn test_chat_rejects_malformed_body() -> anyhow::Result<()> {
    let test_app = setup_test_app().await;

    let req = TestRequest::post()
        .uri("/api/chat")
        .set_json(serde_json::json!({"prompt": "hello"}))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await)?;
    assert_eq!(body["kind"], "invalid_request");
    assert_eq!(test_app.mock_llm_client.get_call_count(), 0);

    Ok(())
}
