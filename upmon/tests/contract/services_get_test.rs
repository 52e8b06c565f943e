//! Contract Test: GET /api/services

use crate::support::{build_app, get_json, send};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// GET /api/services - 空のレジストリは空配列
#[tokio::test]
async fn test_list_services_empty() {
    let test = build_app();

    let (status, body) = get_json(&test.app, "/api/services").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

/// GET /api/services - スイープ結果のstatusが反映される
#[tokio::test]
async fn test_list_services_reflects_sweep() {
    let healthy = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&healthy)
        .await;
    let broken = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&broken)
        .await;

    let test = build_app();
    test.registry.add("Healthy", healthy.uri()).await;
    test.registry.add("Broken", broken.uri()).await;

    let (status, body) = get_json(&test.app, "/api/services").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"name": "Healthy", "url": healthy.uri(), "status": true},
            {"name": "Broken", "url": broken.uri(), "status": false}
        ])
    );
}

/// GET /api/services - スイープのstatusはファイルへ書き出されない
#[tokio::test]
async fn test_list_services_does_not_persist_status() {
    let healthy = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&healthy)
        .await;

    let test = build_app();
    test.registry.add("Healthy", healthy.uri()).await;

    let (_, body) = get_json(&test.app, "/api/services").await;
    assert_eq!(body[0]["status"], true);

    let persisted: serde_json::Value =
        serde_json::from_slice(&std::fs::read(test.registry.path()).unwrap()).unwrap();
    assert_eq!(persisted[0]["status"], false);
}

/// POST /api/services - 405 Method Not Allowed
#[tokio::test]
async fn test_list_services_wrong_method() {
    let test = build_app();

    let (status, _) = send(
        &test.app,
        Request::builder()
            .method("POST")
            .uri("/api/services")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
