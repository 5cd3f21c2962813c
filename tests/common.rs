// tests/common.rs

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use mock_server::web::{create_router_with_state, AppState};
use mock_server::{SeededRandom, ServerConfig};
use serde_json::Value;
use std::process::Command;
use std::sync::Arc;
use tower::util::ServiceExt;

// Helper function to get the binary command
#[allow(dead_code)] // Only the CLI tests spawn the binary.
pub fn mock_server_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("mock-server"))
}

/// Router on the default config with a seeded random source.
#[allow(dead_code)]
pub fn seeded_app(seed: u64) -> Router {
    app_with_config(&ServerConfig::default(), seed)
}

#[allow(dead_code)]
pub fn app_with_config(config: &ServerConfig, seed: u64) -> Router {
    let state = AppState::new(config, Arc::new(SeededRandom::new(seed)));
    create_router_with_state(config, state)
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

/// Sends one request and decodes the body as JSON (`Null` if it is not JSON).
#[allow(dead_code)]
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

/// POSTs `body` to `/get-products` and returns the envelope's `data`.
#[allow(dead_code)]
pub async fn fetch_products(app: Router, body: &str) -> Value {
    let (status, json) = send(app, post_json("/get-products", body.to_string())).await;
    assert_eq!(status, StatusCode::OK, "unexpected status for body {:?}", body);
    assert_eq!(json["code"], "0");
    assert_eq!(json["message"], "success");
    json["data"].clone()
}

#[allow(dead_code)]
pub fn product_names(data: &Value) -> Vec<String> {
    data["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}
