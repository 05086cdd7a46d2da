use actix_web::http::StatusCode;
use planner_core::{ErrorKind, PlannerError};
use serde::{Deserialize, Serialize};

pub const INVALID_REQUEST_KIND: &str = "invalid_request";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

impl ErrorResponse {
    pub fn invalid_request(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            kind: INVALID_REQUEST_KIND.to_string(),
        }
    }
}

/// Status code and body for a failed planner call. `context` prefixes every
/// message except the missing-credential one, which is returned as is.
pub fn planner_error_response(err: &PlannerError, context: &str) -> (StatusCode, ErrorResponse) {
    let kind = err.kind();
    let (status, error) = match kind {
        ErrorKind::Configuration => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        ErrorKind::Transport | ErrorKind::Format => {
            (StatusCode::BAD_GATEWAY, format!("{}: {}", context, err))
        }
    };

    (
        status,
        ErrorResponse {
            error,
            kind: kind.as_str().to_string(),
        },
    )
}
