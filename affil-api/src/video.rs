use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use affil_core::generation::GenerationStatus;
use affil_core::CoreError;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct VideoGenerateRequest {
    pub product: Option<serde_json::Value>,
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
struct VideoGenerateResponse {
    success: bool,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    script: Option<String>,
    video_id: String,
    status: GenerationStatus,
    estimated_time: &'static str,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/video-generate", post(generate_video))
}

/// POST /video-generate
async fn generate_video(
    State(state): State<AppState>,
    Json(req): Json<VideoGenerateRequest>,
) -> Result<Json<VideoGenerateResponse>, ApiError> {
    let product = req
        .product
        .ok_or_else(|| CoreError::Validation("Missing required field: product".to_string()))?;

    let result = state
        .generator
        .generate_script(&product, req.template.as_deref())
        .await?;

    let (message, estimated_time) = match result.status {
        GenerationStatus::Ready => ("Video script generated", "0s"),
        GenerationStatus::Processing => ("Video generation simulated", "60s"),
    };

    Ok(Json(VideoGenerateResponse {
        success: true,
        message,
        script: result.script,
        video_id: result.video_id,
        status: result.status,
        estimated_time,
    }))
}
