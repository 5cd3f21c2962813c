mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{app_with_config, post_json, seeded_app, send};
use http_body_util::BodyExt;
use mock_server::ConfigBuilder;
use std::fs;
use tempfile::tempdir;
use tower::util::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, json) = send(seeded_app(1), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], "0");
    assert_eq!(json["data"]["status"], "ok");
    assert!(json["data"]["timestamp"].as_u64().unwrap() > 1_600_000_000_000);
}

#[tokio::test]
async fn test_banners() {
    let (status, json) = send(seeded_app(1), post_json("/get-banners", "")).await;

    assert_eq!(status, StatusCode::OK);
    let banners = json["data"].as_array().unwrap();
    assert_eq!(banners.len(), 5);
    assert_eq!(banners[0]["id"], "1");
    assert_eq!(
        banners[0]["image"],
        "http://localhost:3000/assets/images/banners/banner1.jpg"
    );
}

#[tokio::test]
async fn test_urls_follow_public_url() {
    let config = ConfigBuilder::new()
        .public_url("https://mock.test")
        .build()
        .unwrap();
    let app = app_with_config(&config, 1);

    let (_, banners) = send(app.clone(), post_json("/get-banners", "")).await;
    assert_eq!(
        banners["data"][2]["image"],
        "https://mock.test/assets/images/banners/banner3.jpg"
    );

    let (_, products) = send(app, post_json("/get-products", r#"{"limit": 1}"#)).await;
    assert_eq!(
        products["data"]["products"][0]["image"],
        "https://mock.test/assets/images/products/product.jpg"
    );
}

#[tokio::test]
async fn test_unknown_route_returns_error_envelope() {
    let request = Request::builder()
        .uri("/does-not-exist")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(seeded_app(1), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "-1");
    assert_eq!(json["message"], "Route GET /does-not-exist not found");
}

#[tokio::test]
async fn test_endpoints_reject_wrong_methods() {
    for (method, uri) in [
        ("GET", "/get-products"),
        ("GET", "/get-banners"),
        ("GET", "/login"),
        ("POST", "/"),
    ] {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, json) = send(seeded_app(1), request).await;

        assert_eq!(
            status,
            StatusCode::METHOD_NOT_ALLOWED,
            "{} {}",
            method,
            uri
        );
        assert_eq!(json["code"], "-1", "{} {}", method, uri);
        assert_eq!(
            json["message"],
            format!("Method {} not allowed on {}", method, uri)
        );
        assert!(json.get("data").is_none());
    }
}

#[tokio::test]
async fn test_banners_malformed_body_returns_error_envelope() {
    let request = post_json("/get-banners", "{not json");
    let (status, json) = send(seeded_app(1), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "-1");
    assert_eq!(json["message"], "Internal server error");
}

#[tokio::test]
async fn test_banners_accept_any_valid_json_body() {
    let request = post_json("/get-banners", r#"{"page": 1}"#);
    let (status, json) = send(seeded_app(1), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("images/banners")).unwrap();
    fs::write(temp.path().join("images/banners/banner1.jpg"), b"fake-jpeg").unwrap();

    let config = ConfigBuilder::new().assets_dir(temp.path()).build().unwrap();
    let app = app_with_config(&config, 1);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/assets/images/banners/banner1.jpg")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "image/jpeg"
    );
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"fake-jpeg");
}

#[tokio::test]
async fn test_missing_static_asset_is_404() {
    let temp = tempdir().unwrap();
    let config = ConfigBuilder::new().assets_dir(temp.path()).build().unwrap();

    let response = app_with_config(&config, 1)
        .oneshot(
            Request::builder()
                .uri("/assets/images/missing.jpg")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_static_mount_blocks_traversal() {
    let temp = tempdir().unwrap();
    let assets = temp.path().join("assets");
    fs::create_dir_all(&assets).unwrap();
    fs::write(temp.path().join("secret.txt"), "secret").unwrap();

    let config = ConfigBuilder::new().assets_dir(&assets).build().unwrap();
    let response = app_with_config(&config, 1)
        .oneshot(
            Request::builder()
                .uri("/assets/../secret.txt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_ne!(response.status(), StatusCode::OK);
}
