use super::planner_error;
use actix_web::{post, web, HttpResponse, Result};
use planner_core::PlannerService;
use shared_types::{ChatRequest, ChatResponse};
use tracing::{error, info};

#[post("/api/chat")]
pub async fn chat(
    request: web::Json<ChatRequest>,
    planner: web::Data<PlannerService>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    info!(messages = request.messages.len(), "Received chat request");

    match planner.chat(&request.messages).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ChatResponse { response })),
        Err(e) => {
            error!(error = %e, kind = e.kind().as_str(), "Chat turn failed");
            Ok(planner_error(&e, "Chat error"))
        }
    }
}
