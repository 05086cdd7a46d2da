use actix_web::{get, HttpResponse, Result};
use shared_types::{HealthResponse, ServiceEndpoints, ServiceInfo};

pub const SERVICE_NAME: &str = "AI Project Planner API";
pub const SERVICE_VERSION: &str = "2.0";

#[get("/")]
pub async fn root() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ServiceInfo {
        status: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
        endpoints: ServiceEndpoints {
            chat: "/api/chat".to_string(),
            generate_plan: "/api/generate-plan".to_string(),
            update_task: "/api/projects/{project_id}/tasks/{task_id}".to_string(),
        },
    }))
}

#[get("/health")]
pub async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    }))
}
