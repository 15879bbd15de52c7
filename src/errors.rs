use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Model error: {0}")]
    ModelError(String),

    /// The model replied, but nothing usable could be parsed out of it.
    /// Distinct from `ModelError` so callers can tell "empty content"
    /// apart from a lower-level failure.
    #[error("No usable content: {0}")]
    EmptyGeneration(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::ModelError(_) => "MODEL_ERROR",
            AppError::EmptyGeneration(_) => "EMPTY_GENERATION",
            AppError::RenderError(_) => "RENDER_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ModelError(_) => StatusCode::BAD_GATEWAY,
            AppError::EmptyGeneration(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::RenderError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::ModelError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("JSON serialization error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::NotFound("test".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ModelError("test".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::EmptyGeneration("test".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::EmptyGeneration("quiz".into());
        assert_eq!(err.to_string(), "No usable content: quiz");
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            AppError::NotFound("x".into()),
            AppError::ValidationError("x".into()),
            AppError::ModelError("x".into()),
            AppError::EmptyGeneration("x".into()),
            AppError::RenderError("x".into()),
            AppError::InternalError("x".into()),
        ];

        let mut codes: Vec<&str> = errors.iter().map(|e| e.error_code()).collect();
        let original = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), original);
    }
}
