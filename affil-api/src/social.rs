use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use affil_connect::social::simulated_confirmation;
use affil_core::CoreError;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TwitterPostRequest {
    pub text: Option<String>,
    pub product: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct PinterestPinRequest {
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TikTokPostRequest {
    pub video_url: Option<String>,
    pub caption: Option<String>,
}

#[derive(Debug, Serialize)]
struct PostResponse {
    success: bool,
    message: &'static str,
    post: Value,
}

#[derive(Debug, Serialize)]
struct PinResponse {
    success: bool,
    message: &'static str,
    pin: Value,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/social/twitter/post", post(post_tweet))
        .route("/social/pinterest/pin", post(create_pin))
        .route("/social/tiktok/post", post(post_tiktok))
}

fn required(field: Option<String>, name: &str) -> Result<String, CoreError> {
    field
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CoreError::Validation(format!("Missing required field: {name}")))
}

/// POST /social/twitter/post
async fn post_tweet(Json(req): Json<TwitterPostRequest>) -> Result<Json<PostResponse>, ApiError> {
    let mut fields = serde_json::Map::new();
    if let Some(text) = req.text {
        fields.insert("text".to_string(), Value::String(text));
    }
    if let Some(product) = req.product {
        fields.insert("product".to_string(), product);
    }

    Ok(Json(PostResponse {
        success: true,
        message: "Tweet simulated",
        post: simulated_confirmation("twitter", Value::Object(fields)),
    }))
}

/// POST /social/pinterest/pin
async fn create_pin(Json(req): Json<PinterestPinRequest>) -> Result<Json<PinResponse>, ApiError> {
    let image_url = required(req.image_url, "image_url")?;
    let description = required(req.description, "description")?;
    let link = required(req.link, "link")?;

    let fields = json!({
        "image_url": image_url,
        "description": description,
        "link": link,
    });

    Ok(Json(PinResponse {
        success: true,
        message: "Pin simulated",
        pin: simulated_confirmation("pinterest", fields),
    }))
}

/// POST /social/tiktok/post
async fn post_tiktok(Json(req): Json<TikTokPostRequest>) -> Result<Json<PostResponse>, ApiError> {
    let video_url = required(req.video_url, "video_url")?;
    let caption = required(req.caption, "caption")?;

    let fields = json!({
        "video_url": video_url,
        "caption": caption,
    });

    Ok(Json(PostResponse {
        success: true,
        message: "TikTok post simulated",
        post: simulated_confirmation("tiktok", fields),
    }))
}
