//! サービス管理APIハンドラー

use super::error::ApiError;
use crate::common::protocol::{AddServiceRequest, ApiResult, RemoveServiceRequest};
use crate::common::types::Service;
use crate::AppState;
use axum::{body::Bytes, extract::State, Json};
use serde::de::DeserializeOwned;

/// GET /api/services - 全サービスをチェックしてから一覧を返す
pub async fn list_services(State(state): State<AppState>) -> Json<Vec<Service>> {
    state.health_checker.sweep().await;
    Json(state.registry.snapshot().await)
}

/// POST /api/add - サービスを末尾に追加
pub async fn add_service(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResult>, ApiError> {
    let req: AddServiceRequest = parse_body(&body)?;

    if req.name.is_empty() || req.url.is_empty() {
        return Err(ApiError::MissingFields);
    }

    state.registry.add(req.name, req.url).await;
    Ok(Json(ApiResult::ok()))
}

/// POST /api/remove - 指定位置のサービスを削除
///
/// インデックスは削除のたびにずれるため、クライアントは一覧を取り直してから
/// 次の削除を行う必要がある。
pub async fn remove_service(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResult>, ApiError> {
    let req: RemoveServiceRequest = parse_body(&body)?;

    let removed = match usize::try_from(req.index) {
        Ok(index) => state.registry.remove(index).await,
        Err(_) => false,
    };

    if removed {
        Ok(Json(ApiResult::ok()))
    } else {
        Err(ApiError::InvalidIndex(req.index))
    }
}

// Content-Typeに関わらずボディをJSONとして解釈する
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(ApiError::InvalidPayload)
}
