use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use affil_catalog::Product;
use affil_core::CoreError;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct RandomProductResponse {
    success: bool,
    product: Product,
    timestamp: String,
}

#[derive(Debug, Serialize)]
struct ProductListResponse {
    success: bool,
    products: Vec<Product>,
    count: usize,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/amazon/random-product", get(random_product))
        .route("/amazon/products", get(list_products))
}

/// GET /amazon/random-product
async fn random_product(
    State(state): State<AppState>,
) -> Result<Json<RandomProductResponse>, ApiError> {
    let product = state
        .amazon_catalog
        .pick_random()
        .map_err(|e| CoreError::Configuration(e.to_string()))?;

    Ok(Json(RandomProductResponse {
        success: true,
        product: product.clone(),
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// GET /amazon/products
async fn list_products(State(state): State<AppState>) -> Json<ProductListResponse> {
    let products = state.amazon_catalog.list_all().to_vec();
    let count = products.len();

    Json(ProductListResponse {
        success: true,
        products,
        count,
    })
}
