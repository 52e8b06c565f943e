//! APIエラーレスポンス型
//!
//! 追加・削除APIの検証エラーはHTTP 200の`{"success": false, "error": ...}`で返す

use crate::common::protocol::ApiResult;
use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

/// 追加・削除APIの検証エラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// リクエストボディがJSONとして解釈できない
    #[error("invalid data format")]
    InvalidPayload(#[source] serde_json::Error),

    /// 名前またはURLが空
    #[error("name and url are required")]
    MissingFields,

    /// 削除対象のインデックスが範囲外
    #[error("invalid service index")]
    InvalidIndex(i64),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            ApiError::InvalidPayload(e) => {
                tracing::debug!(error = %e, "Rejected malformed request body")
            }
            ApiError::MissingFields => tracing::debug!("Rejected service without name or url"),
            ApiError::InvalidIndex(index) => {
                tracing::debug!(index, "Rejected out-of-range service index")
            }
        }

        (StatusCode::OK, Json(ApiResult::failure(self.to_string()))).into_response()
    }
}
