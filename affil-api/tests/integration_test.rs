use std::sync::{Arc, Mutex};

use affil_api::{app, AppState};
use affil_catalog::StaticCatalog;
use affil_connect::{MockCatalogSource, SimulatedScriptGenerator};
use affil_core::adapter::{CatalogSource, Notifier};
use affil_core::{CoreError, CoreResult};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Notifier stub that records every delivered message.
#[derive(Clone, Default)]
struct RecordingNotifier {
    sent: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(
        &self,
        _kind: Option<&str>,
        message: &str,
        data: Option<&Value>,
    ) -> CoreResult<()> {
        let mut entry = message.to_string();
        if let Some(data) = data {
            entry.push(' ');
            entry.push_str(&data.to_string());
        }
        self.sent.lock().unwrap().push(entry);
        Ok(())
    }
}

/// Catalog source that always fails, standing in for a dead upstream.
struct FailingCatalogSource;

#[async_trait]
impl CatalogSource for FailingCatalogSource {
    async fn fetch_random_product(&self) -> CoreResult<Value> {
        Err(CoreError::RemoteFetch(
            "Catalog request failed: connection refused".to_string(),
        ))
    }
}

fn test_app() -> Router {
    test_app_with(RecordingNotifier::default())
}

fn test_app_with(notifier: RecordingNotifier) -> Router {
    app(AppState {
        amazon_catalog: Arc::new(StaticCatalog::amazon()),
        clickbank: Arc::new(MockCatalogSource::new(StaticCatalog::clickbank())),
        generator: Arc::new(SimulatedScriptGenerator),
        notifier: Arc::new(notifier),
    })
}

async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn post(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_health_reports_ok() {
    let app = test_app();
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "affiliate-apis");

    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_amazon_products_returns_fixed_catalog() {
    let app = test_app();
    let (status, body) = get(&app, "/amazon/products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(body["count"], 3);
    for product in products {
        assert!(!product["title"].as_str().unwrap().is_empty());
        assert!(!product["price"].as_str().unwrap().is_empty());
        assert!(!product["affiliate_link"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_amazon_random_product_is_catalog_member() {
    let app = test_app();

    for _ in 0..10 {
        let (status, body) = get(&app, "/amazon/random-product").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let id = body["product"]["id"].as_u64().unwrap();
        assert!((1..=3).contains(&id));
        assert!(body["timestamp"].as_str().is_some());
    }
}

#[tokio::test]
async fn test_clickbank_random_product_from_mock_source() {
    let app = test_app();
    let (status, body) = get(&app, "/clickbank/random-product").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let title = body["product"]["title"].as_str().unwrap();
    assert!(["Digital Marketing Course", "Weight Loss Program"].contains(&title));
}

#[tokio::test]
async fn test_clickbank_failure_maps_to_error_envelope() {
    let app = app(AppState {
        amazon_catalog: Arc::new(StaticCatalog::amazon()),
        clickbank: Arc::new(FailingCatalogSource),
        generator: Arc::new(SimulatedScriptGenerator),
        notifier: Arc::new(RecordingNotifier::default()),
    });

    let (status, body) = get(&app, "/clickbank/random-product").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_video_generate_requires_product() {
    let app = test_app();
    let (status, body) = post(&app, "/video-generate", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("product"));
}

#[tokio::test]
async fn test_video_generate_mints_unique_ids() {
    let app = test_app();
    let request = json!({"product": {"title": "Smart Watch Fitness Tracker"}});

    let (status, first) = post(&app, "/video-generate", request.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["success"], true);
    assert_eq!(first["status"], "processing");
    assert_eq!(first["estimated_time"], "60s");
    assert!(first.get("script").is_none());

    let (_, second) = post(&app, "/video-generate", request).await;
    assert_ne!(first["video_id"], second["video_id"]);
}

#[tokio::test]
async fn test_notify_records_exactly_one_call() {
    let notifier = RecordingNotifier::default();
    let app = test_app_with(notifier.clone());

    let (status, body) = post(
        &app,
        "/notify",
        json!({"message": "test", "data": {"a": 1}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(!body["message"].as_str().unwrap().is_empty());

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains("test"));
}

#[tokio::test]
async fn test_notify_requires_message() {
    let notifier = RecordingNotifier::default();
    let app = test_app_with(notifier.clone());

    let (status, body) = post(&app, "/notify", json!({"type": "alert"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(notifier.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_twitter_post_echoes_payload() {
    let app = test_app();
    let (status, body) = post(
        &app,
        "/social/twitter/post",
        json!({"text": "Big discount today", "product": {"id": 2}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["post"]["text"], "Big discount today");
    assert_eq!(body["post"]["product"]["id"], 2);
    assert_eq!(body["post"]["simulated"], true);
}

#[tokio::test]
async fn test_pinterest_pin_requires_all_fields() {
    let app = test_app();
    let (status, body) = post(
        &app,
        "/social/pinterest/pin",
        json!({"image_url": "https://example.com/pin.jpg", "description": "A pin"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("link"));
}

#[tokio::test]
async fn test_tiktok_post_returns_confirmation() {
    let app = test_app();
    let (status, body) = post(
        &app,
        "/social/tiktok/post",
        json!({"video_url": "https://example.com/clip.mp4", "caption": "Watch this"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["post"]["caption"], "Watch this");

    let posted_at = body["post"]["posted_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(posted_at).is_ok());
}
