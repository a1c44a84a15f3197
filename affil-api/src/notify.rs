use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use affil_core::CoreError;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NotifyRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub message: Option<String>,
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct NotifyResponse {
    success: bool,
    message: &'static str,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/notify", post(notify))
}

/// POST /notify
async fn notify(
    State(state): State<AppState>,
    Json(req): Json<NotifyRequest>,
) -> Result<Json<NotifyResponse>, ApiError> {
    let message = req
        .message
        .as_deref()
        .filter(|m| !m.is_empty())
        .ok_or_else(|| CoreError::Validation("Missing required field: message".to_string()))?;

    state
        .notifier
        .notify(req.kind.as_deref(), message, req.data.as_ref())
        .await?;

    Ok(Json(NotifyResponse {
        success: true,
        message: "Notification sent",
    }))
}
