//! Gateway error type. Every failure renders as `{"success": false, "error": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use eco_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    /// Rejected by core validation (empty message) or config.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Body was not a JSON object we understand.
    #[error("Invalid request body: {0}")]
    BadRequest(String),
}

impl ChatError {
    fn status(&self) -> StatusCode {
        match self {
            ChatError::Core(CoreError::Validation(_)) | ChatError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ChatError::Core(CoreError::Config(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(target: "eco::chat", "Chat error: {}", self);
        } else {
            tracing::warn!(target: "eco::chat", "Chat request rejected: {}", self);
        }
        let body = serde_json::json!({
            "success": false,
            "error": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
