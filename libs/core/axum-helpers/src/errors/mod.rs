pub mod handlers;
pub mod responses;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error messages and codes for consistent API responses
pub mod messages {
    pub const INTERNAL_ERROR: &str = "An internal server error occurred";
    pub const VALIDATION_FAILED: &str = "Request validation failed";
    pub const NOT_FOUND_RESOURCE: &str = "Resource not found";

    // Error codes for client parsing
    pub const CODE_INTERNAL: &str = "INTERNAL_ERROR";
    pub const CODE_VALIDATION: &str = "VALIDATION_ERROR";
    pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
    pub const CODE_CONFLICT: &str = "CONFLICT";
    pub const CODE_BAD_REQUEST: &str = "BAD_REQUEST";
    pub const CODE_UNAVAILABLE: &str = "SERVICE_UNAVAILABLE";
}

/// Standard error response structure.
///
/// This structure is returned for all error responses, providing consistent
/// error information to clients:
/// - `error`: Machine-readable error identifier (e.g., "Conflict")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details (e.g., validation errors)
/// - `code`: Optional stable code for client parsing (e.g., "VALIDATION_ERROR")
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "Conflict",
///   "message": "El correo electrónico ya está registrado",
///   "code": "CONFLICT"
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Optional stable code for client parsing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain error enums convert into this via `From` so every crate renders
/// the same response body.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON parsing error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Convert validator errors to a field → messages JSON map.
fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    let details = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let error_messages: Vec<serde_json::Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::json!(error_messages))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(details)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message, details, code) = match self {
            AppError::SerdeJson(e) => {
                tracing::error!("JSON parsing error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    messages::INTERNAL_ERROR.to_string(),
                    None,
                    messages::CODE_INTERNAL,
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    messages::INTERNAL_ERROR.to_string(),
                    None,
                    messages::CODE_INTERNAL,
                )
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    messages::INTERNAL_ERROR.to_string(),
                    None,
                    messages::CODE_INTERNAL,
                )
            }
            AppError::JsonExtractorRejection(rejection) => (
                StatusCode::BAD_REQUEST,
                "BadRequest",
                rejection.body_text(),
                None,
                messages::CODE_BAD_REQUEST,
            ),
            AppError::ValidationError(errors) => (
                StatusCode::BAD_REQUEST,
                "BadRequest",
                messages::VALIDATION_FAILED.to_string(),
                Some(validation_details(&errors)),
                messages::CODE_VALIDATION,
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "BadRequest",
                msg,
                None,
                messages::CODE_BAD_REQUEST,
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                "NotFound",
                msg,
                None,
                messages::CODE_NOT_FOUND,
            ),
            AppError::Conflict(msg) => (
                StatusCode::CONFLICT,
                "Conflict",
                msg,
                None,
                messages::CODE_CONFLICT,
            ),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    messages::INTERNAL_ERROR.to_string(),
                    None,
                    messages::CODE_INTERNAL,
                )
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::error!("Service unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "ServiceUnavailable",
                    msg,
                    None,
                    messages::CODE_UNAVAILABLE,
                )
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
            details,
            code: Some(code.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_conflict_maps_to_409() {
        let response = AppError::Conflict("already exists".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_internal_error_hides_message() {
        let response =
            AppError::InternalServerError("secret db detail".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
