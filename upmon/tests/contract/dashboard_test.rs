//! Contract Test: GET /

use crate::support::{build_app, send};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};

/// GET / - ダッシュボードHTMLを返す
#[tokio::test]
async fn test_dashboard_served() {
    let test = build_app();

    let response = tower::ServiceExt::oneshot(
        test.app.clone(),
        Request::builder().uri("/").body(Body::empty()).unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let (_, body) = send(
        &test.app,
        Request::builder().uri("/").body(Body::empty()).unwrap(),
    )
    .await;
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("/api/services"));
    assert!(html.contains("/api/add"));
    assert!(html.contains("/api/remove"));
}
