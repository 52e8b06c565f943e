//! API通信プロトコル定義

use serde::{Deserialize, Serialize};

/// サービス追加リクエスト
///
/// フィールド欠落は空文字列として扱い、検証で弾く。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddServiceRequest {
    /// 表示名
    #[serde(default)]
    pub name: String,
    /// チェック対象URL
    #[serde(default)]
    pub url: String,
}

/// サービス削除リクエスト
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveServiceRequest {
    /// 削除対象の位置（0始まり）
    pub index: i64,
}

/// 追加・削除APIの結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResult {
    /// 成功したか
    pub success: bool,
    /// 失敗理由
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResult {
    /// 成功レスポンス
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// 失敗レスポンス
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}
