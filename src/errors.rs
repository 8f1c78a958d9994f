use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::ValidationErrors;

/// A relay attempt that never produced a response: DNS failure, refused
/// connection, timeout. Status codes are not errors; they are never seen.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("relay request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("lead form is incomplete")]
    Invalid(ValidationErrors),

    #[error("a submission is already in flight")]
    InFlight,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("lead form is incomplete")]
    Validation(ValidationErrors),

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("render error: {0}")]
    Render(String),
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Invalid(errors) => AppError::Validation(errors),
            SubmitError::InFlight => AppError::SubmissionInFlight,
        }
    }
}

impl From<horrorshow::Error> for AppError {
    fn from(err: horrorshow::Error) -> Self {
        AppError::Render(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::SubmissionInFlight => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            AppError::Validation(errors) => serde_json::json!({
                "error": self.to_string(),
                "fields": errors,
            }),
            _ => serde_json::json!({ "error": self.to_string() }),
        };
        (status, axum::Json(body)).into_response()
    }
}
