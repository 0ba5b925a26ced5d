//! Integration tests for the Instruments API routes
//!
//! Drives the full router over the in-memory store, covering the CRUD
//! contract: welcome text, required-field validation with stable messages,
//! zero-price creation, store-status propagation, and sanitization of
//! unknown fields.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use bandstand::adapters::memory::MemoryStore;
use bandstand::http::{router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    router(AppState {
        store: Arc::new(MemoryStore::new()),
    })
}

fn full_instrument() -> Value {
    json!({
        "name": "Guitar",
        "category": "String",
        "group": "Acoustic",
        "retailPrice": 299.99,
        "manufacturer": "Acme"
    })
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn send_empty(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn welcome_route_returns_greeting() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Welcome to the Instruments api.");
}

#[tokio::test]
async fn create_returns_created_record() {
    let app = app();
    let (status, body) = send_json(&app, "POST", "/instruments", full_instrument()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], json!("Guitar"));
    assert_eq!(body["type"], json!("instrument"));
    assert!(body["_id"].as_str().unwrap().starts_with("instrument_"));
    assert!(body["_rev"].is_string());
}

#[tokio::test]
async fn create_accepts_zero_retail_price() {
    let app = app();
    let mut instrument = full_instrument();
    instrument["retailPrice"] = json!(0);

    let (status, body) = send_json(&app, "POST", "/instruments", instrument).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["retailPrice"], json!(0));
}

#[tokio::test]
async fn create_rejects_empty_body() {
    let app = app();
    let (status, body) = send_json(&app, "POST", "/instruments", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], json!(400));
    assert_eq!(body["message"], json!("missing instrument in body."));
}

#[tokio::test]
async fn create_rejects_missing_body() {
    let app = app();
    let (status, body) = send_empty(&app, "POST", "/instruments").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("missing instrument in body."));
}

#[tokio::test]
async fn create_lists_missing_fields_in_order() {
    let app = app();
    let (status, body) = send_json(&app, "POST", "/instruments", json!({"name": "Guitar"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        json!("missing required field(s): category, group, retailPrice, manufacturer")
    );
}

#[tokio::test]
async fn create_treats_empty_string_as_missing() {
    let app = app();
    let mut instrument = full_instrument();
    instrument["category"] = json!("");

    let (status, body) = send_json(&app, "POST", "/instruments", instrument).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("missing required field(s): category"));
}

#[tokio::test]
async fn create_drops_unknown_fields() {
    let app = app();
    let mut instrument = full_instrument();
    instrument["color"] = json!("sunburst");

    let (status, created) = send_json(&app, "POST", "/instruments", instrument).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created.get("color").is_none());

    let id = created["_id"].as_str().unwrap();
    let (status, fetched) = send_empty(&app, "GET", &format!("/instruments/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(fetched.get("color").is_none());
    assert_eq!(fetched["name"], json!("Guitar"));
}

#[tokio::test]
async fn get_missing_returns_store_status() {
    let app = app();
    let (status, body) = send_empty(&app, "GET", "/instruments/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], json!(404));
    assert_eq!(body["message"], json!("missing"));
}

#[tokio::test]
async fn update_requires_identity_fields() {
    let app = app();
    let (status, body) =
        send_json(&app, "PUT", "/instruments/123", json!({"_id": "123"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("missing required field(s): _rev, type"));
}

#[tokio::test]
async fn update_rejects_empty_body() {
    let app = app();
    let (status, body) = send_empty(&app, "PUT", "/instruments/123").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        json!("missing required field(s): _id, _rev, type")
    );
}

#[tokio::test]
async fn update_round_trip() {
    let app = app();
    let (_, mut created) = send_json(&app, "POST", "/instruments", full_instrument()).await;

    created["name"] = json!("Twelve-string");
    let id = created["_id"].as_str().unwrap().to_string();

    let (status, updated) =
        send_json(&app, "PUT", &format!("/instruments/{id}"), created).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(updated["name"], json!("Twelve-string"));
    assert!(updated["_rev"].as_str().unwrap().starts_with("2-"));

    let (status, fetched) = send_empty(&app, "GET", &format!("/instruments/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], json!("Twelve-string"));
}

#[tokio::test]
async fn update_with_stale_rev_conflicts() {
    let app = app();
    let (_, mut created) = send_json(&app, "POST", "/instruments", full_instrument()).await;

    created["_rev"] = json!("1-stale");
    let id = created["_id"].as_str().unwrap().to_string();

    let (status, body) =
        send_json(&app, "PUT", &format!("/instruments/{id}"), created).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], json!(409));
}

#[tokio::test]
async fn delete_returns_deletion_result() {
    let app = app();
    let (_, created) = send_json(&app, "POST", "/instruments", full_instrument()).await;
    let id = created["_id"].as_str().unwrap();

    let (status, ack) = send_empty(&app, "DELETE", &format!("/instruments/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack["ok"], json!(true));
    assert_eq!(ack["id"].as_str(), Some(id));

    let (status, _) = send_empty(&app, "GET", &format!("/instruments/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_propagates_store_status() {
    let app = app();
    let (status, body) = send_empty(&app, "DELETE", "/instruments/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("missing"));
}
