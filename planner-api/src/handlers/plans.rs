use super::planner_error;
use actix_web::{post, web, HttpResponse, Result};
use planner_core::{ErrorKind, PlannerService};
use shared_types::ChatRequest;
use tracing::{error, info};

#[post("/api/generate-plan")]
pub async fn generate_plan(
    request: web::Json<ChatRequest>,
    planner: web::Data<PlannerService>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    info!(messages = request.messages.len(), "Received plan generation request");

    match planner.generate_plan(&request.messages).await {
        Ok(plan) => Ok(HttpResponse::Ok().json(plan)),
        Err(e) => {
            error!(error = %e, kind = e.kind().as_str(), "Plan generation failed");
            let context = match e.kind() {
                ErrorKind::Format => "Failed to parse AI response",
                _ => "Error generating plan",
            };
            Ok(planner_error(&e, context))
        }
    }
}
