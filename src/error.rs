use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Unified error type for the short-link service.
///
/// `BadRequest` and `NotFound` are expected, caller-recoverable conditions.
/// Everything else is an internal failure surfaced as a 500 with a generic
/// body; the underlying cause is logged, never returned to the client.
#[derive(Error, Debug)]
pub enum LinkError {
    /// Missing or invalid caller input.
    #[error("{0}")]
    BadRequest(String),

    /// Token has no matching record.
    #[error("Url not found")]
    NotFound,

    /// Short token generation failed.
    #[error("Failed to generate short token: {0}")]
    TokenGeneration(String),

    /// Storage failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for LinkError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            LinkError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            LinkError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            LinkError::TokenGeneration(_) | LinkError::Database(_) => {
                tracing::error!("Internal error: {:?}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".into())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

/// Convenience Result type for the short-link service.
pub type Result<T> = std::result::Result<T, LinkError>;
