use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct RemoteProductResponse {
    success: bool,
    product: serde_json::Value,
    timestamp: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/clickbank/random-product", get(random_product))
}

/// GET /clickbank/random-product
async fn random_product(
    State(state): State<AppState>,
) -> Result<Json<RemoteProductResponse>, ApiError> {
    let product = state.clickbank.fetch_random_product().await?;

    Ok(Json(RemoteProductResponse {
        success: true,
        product,
        timestamp: Utc::now().to_rfc3339(),
    }))
}
