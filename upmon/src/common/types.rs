//! 監視対象サービスの型定義

use serde::{Deserialize, Serialize};

/// 監視対象サービス
///
/// 永続化ファイルとAPIレスポンスの両方で同じフィールド名を使う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// 表示名（一意である必要はない）
    pub name: String,
    /// チェック対象URL
    pub url: String,
    /// 直近のスイープで得た稼働状況（true = 200応答あり）
    #[serde(default)]
    pub status: bool,
}

impl Service {
    /// 未チェック状態（status=false）のサービスを作成
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            status: false,
        }
    }
}

/// 永続化データがない場合に投入する初期サービス
pub fn default_services() -> Vec<Service> {
    vec![
        Service::new("Google", "https://www.google.com"),
        Service::new("GitHub", "https://github.com"),
    ]
}
