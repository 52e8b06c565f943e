//! ダッシュボード
//!
//! サービス一覧の表示・追加・削除を行う単一ページのHTML

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET / - ダッシュボードHTML
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
