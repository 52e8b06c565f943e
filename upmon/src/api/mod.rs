//! REST APIハンドラー
//!
//! サービス一覧の取得・追加・削除API、およびダッシュボードHTML

pub mod dashboard;
pub mod error;
pub mod services;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// APIルーターを作成
///
/// 各ルートは単一メソッドのみ受け付け、それ以外は405を返す。
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/api/services", get(services::list_services))
        .route("/api/add", post(services::add_service))
        .route("/api/remove", post(services::remove_service))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
