mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use actix_web::test::TestRequest;
use common::setup_test_app;
use serde_json::json;

fn task(progress: u32) -> serde_json::Value {
    json!({
        "id": "task-2",
        "name": "Build storefront",
        "description": "Product pages and checkout",
        "assignee": "Frontend Developer",
        "start_date": "2025-06-06",
        "end_date": "2025-06-13",
        "duration_days": 8,
        "dependencies": ["task-1"],
        "progress": progress,
        "priority": "high",
        "status": "in_progress"
    })
}

#[actix_rt::test]
async fn test_update_task_echoes_task() -> anyhow::Result<()> {
    let test_app = setup_test_app().await;

    let req = TestRequest::put()
        .uri("/api/projects/proj-1748822400/tasks/task-2")
        .set_json(task(40))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await)?;
    assert_eq!(body["message"], "Task updated");
    assert_eq!(body["task"], task(40));
    assert_eq!(test_app.mock_llm_client.get_call_count(), 0);

    Ok(())
}

#[actix_rt::test]
async fn test_update_task_rejects_progress_over_100() -> anyhow::Result<()> {
    let test_app = setup_test_app().await;

    let req = TestRequest::put()
        .uri("/api/projects/proj-1/tasks/task-2")
        .set_json(task(150))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await)?;
    assert_eq!(body["kind"], "invalid_request");

    Ok(())
}

#[actix_rt::test]
async fn test_update_task_rejects_unknown_status() -> anyhow::Result<()> {
    let test_app = setup_test_app().await;

    let mut body = task(10);
    body["status"] = json!("blocked");

    let req = TestRequest::put()
        .uri("/api/projects/proj-1/tasks/task-2")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
