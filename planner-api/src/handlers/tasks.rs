use crate::models::ErrorResponse;
use actix_web::{put, web, HttpResponse, Result};
use shared_types::{Task, UpdateTaskResponse};
use tracing::{info, warn};

/// Plans are not stored; the submitted task is validated and echoed back
#[put("/api/projects/{project_id}/tasks/{task_id}")]
pub async fn update_task(
    path: web::Path<(String, String)>,
    task: web::Json<Task>,
) -> Result<HttpResponse> {
    let (project_id, task_id) = path.into_inner();
    let task = task.into_inner();

    if task.progress > 100 {
        warn!(%project_id, %task_id, progress = task.progress, "Rejected task update");
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::invalid_request(format!(
            "progress must be between 0 and 100, got {}",
            task.progress
        ))));
    }

    if task.id != task_id {
        warn!(%project_id, %task_id, body_id = %task.id, "Task id in body differs from path");
    }

    info!(%project_id, %task_id, status = %task.status, "Task updated");
    Ok(HttpResponse::Ok().json(UpdateTaskResponse {
        message: "Task updated".to_string(),
        task,
    }))
}
