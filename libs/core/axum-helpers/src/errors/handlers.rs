use super::{ErrorResponse, messages};
use axum::{Json, http::StatusCode, response::IntoResponse};

/// Fallback handler for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    let body = ErrorResponse {
        error: "NotFound".to_string(),
        message: messages::NOT_FOUND_RESOURCE.to_string(),
        details: None,
        code: Some(messages::CODE_NOT_FOUND.to_string()),
    };

    (StatusCode::NOT_FOUND, Json(body))
}
