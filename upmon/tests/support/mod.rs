//! テスト共通ユーティリティ

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;
use upmon::config::HealthCheckConfig;
use upmon::registry::ServiceRegistry;
use upmon::{api, AppState};

/// テスト用アプリケーション
///
/// 一時ディレクトリはこの構造体が生きている間だけ保持される。
#[allow(dead_code)]
pub struct TestApp {
    pub app: Router,
    pub registry: ServiceRegistry,
    pub dir: TempDir,
}

/// 空のレジストリでアプリを組み立てる
#[allow(dead_code)]
pub fn build_app() -> TestApp {
    let dir = tempfile::tempdir().expect("create temp dir");
    let registry = ServiceRegistry::new(dir.path().join("services.json"));
    let config = HealthCheckConfig {
        timeout: Duration::from_secs(2),
    };
    let app = api::create_app(AppState::new(registry.clone(), config));
    TestApp { app, registry, dir }
}

/// リクエストを1回送信し、ステータスとボディを返す
#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body")
        .to_vec();
    (status, body)
}

/// JSONボディでPOSTし、JSONレスポンスを返す
#[allow(dead_code)]
pub async fn post_json(app: &Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .expect("build request");
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).expect("json body"))
}

/// GETしてJSONレスポンスを返す
#[allow(dead_code)]
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).expect("json body"))
}
