use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod amazon;
pub mod clickbank;
pub mod error;
pub mod health;
pub mod notify;
pub mod social;
pub mod state;
pub mod video;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // CORS Middleware
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    Router::new()
        .merge(health::routes())
        .merge(amazon::routes())
        .merge(clickbank::routes())
        .merge(video::routes())
        .merge(notify::routes())
        .merge(social::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
