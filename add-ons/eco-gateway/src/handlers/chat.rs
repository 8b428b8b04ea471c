//! Chat handlers: validate the widget's message, hand it to the shared responder,
//! and wrap the answer in the `{success, response}` envelope the widget expects.
//!
//! The body is parsed as JSON whatever the `Content-Type` header says.

use crate::error::ChatError;
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use eco_core::{validate_message, CLEARED_MESSAGE};
use serde::{Deserialize, Serialize};

/// Chat request from the site widget. A missing `message` counts as empty.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
}

/// POST /chat
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ChatError> {
    let req: ChatRequest =
        serde_json::from_slice(&body).map_err(|e| ChatError::BadRequest(e.to_string()))?;
    let message = validate_message(&req.message)?;

    let correlation_id = uuid::Uuid::new_v4();
    let response = state.responder.generate_response(message);

    tracing::info!(target: "eco::chat", %correlation_id, "User: {}", message);
    tracing::info!(target: "eco::chat", %correlation_id, "Bot: {}", response);

    Ok(Json(ChatResponse {
        success: true,
        response,
    }))
}

/// POST /clear. The gateway keeps no history, so this only resets the widget.
pub async fn clear() -> Json<ChatResponse> {
    tracing::info!(target: "eco::chat", "Conversation cleared by user.");
    Json(ChatResponse {
        success: true,
        response: CLEARED_MESSAGE.to_string(),
    })
}
