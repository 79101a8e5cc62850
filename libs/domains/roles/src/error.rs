use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RolError {
    #[error("No se encontraron datos para el ID proporcionado: {0}")]
    NotFound(i32),

    #[error("{0}")]
    Repository(String),
}

pub type RolResult<T> = Result<T, RolError>;

/// Convert RolError to AppError for standardized error responses
impl From<RolError> for AppError {
    fn from(err: RolError) -> Self {
        match err {
            RolError::NotFound(id) => AppError::NotFound(format!(
                "No se encontraron datos para el ID proporcionado: {}",
                id
            )),
            RolError::Repository(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for RolError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
