use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The three public failure classes map to the response contract: input
/// errors are 400 and made before any model call; upstream model failures
/// and content-validation failures are both 500 but stay distinct variants
/// so their messages differ.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Invalid HTML format: {0}")]
    InvalidHtml(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Model(msg) => {
                tracing::error!("Model error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Resume generation failed: {msg}"),
                )
            }
            AppError::InvalidHtml(detail) => {
                tracing::error!("Generated document failed validation: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Invalid HTML format: {detail}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        // Public contract: a flat `error` string alongside the status code.
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
