//! HTTP adapter for the project planner.
//!
//! Routes are registered through [`configure`] so the server binary and the
//! integration tests build the same application.

pub mod config;
pub mod handlers;
pub mod helpers;
pub mod models;

use actix_cors::Cors;
use actix_web::{error::InternalError, web, HttpResponse};
use models::ErrorResponse;

const CORS_MAX_AGE_SECS: usize = 3600;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(handlers::service_info::root)
        .service(handlers::service_info::health)
        .service(handlers::chat::chat)
        .service(handlers::plans::generate_plan)
        .service(handlers::tasks::update_task);
}

/// Malformed request bodies get the same error shape as every other failure
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = ErrorResponse::invalid_request(format!("Invalid request body: {}", err));
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// `*` anywhere in the list allows every origin
pub fn build_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.iter().any(|origin| origin == "*") {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allow_any_method()
        .allow_any_header()
        .max_age(CORS_MAX_AGE_SECS)
}
