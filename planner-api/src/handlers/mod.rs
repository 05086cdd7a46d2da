pub mod chat;
pub mod plans;
pub mod service_info;
pub mod tasks;

use crate::models::planner_error_response;
use actix_web::HttpResponse;
use planner_core::PlannerError;

pub(crate) fn planner_error(err: &PlannerError, context: &str) -> HttpResponse {
    let (status, body) = planner_error_response(err, context);
    HttpResponse::build(status).json(body)
}
