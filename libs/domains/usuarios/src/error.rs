use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsuarioError {
    /// Business rule: the email is already registered (message carries the
    /// save vs update wording)
    #[error("{0}")]
    EmailAlreadyExists(String),

    /// Business rule: the identity document is already registered
    #[error("{0}")]
    DocumentoAlreadyExists(String),

    /// Single-resource lookup with no match, raised at the HTTP boundary only
    #[error("No se encontraron datos para el ID proporcionado: {0}")]
    NotFound(i32),

    /// Field-level validation failure, first failure wins
    #[error("{message}")]
    Validation { field: &'static str, message: String },

    /// Storage-layer failure wrapped by the persistence adapter
    #[error("{0}")]
    Repository(String),
}

pub type UsuarioResult<T> = Result<T, UsuarioError>;

impl UsuarioError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        UsuarioError::Validation {
            field,
            message: message.into(),
        }
    }
}

/// Convert UsuarioError to AppError for standardized error responses
impl From<UsuarioError> for AppError {
    fn from(err: UsuarioError) -> Self {
        match err {
            UsuarioError::EmailAlreadyExists(msg) => AppError::Conflict(msg),
            UsuarioError::DocumentoAlreadyExists(msg) => AppError::Conflict(msg),
            UsuarioError::NotFound(id) => AppError::NotFound(format!(
                "No se encontraron datos para el ID proporcionado: {}",
                id
            )),
            UsuarioError::Validation { message, .. } => AppError::BadRequest(message),
            UsuarioError::Repository(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UsuarioError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
