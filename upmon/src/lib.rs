//! Uptime monitor server
//!
//! 監視対象のHTTP(S)エンドポイント一覧を管理し、到達性をチェックするサーバー

#![warn(missing_docs)]

/// 共通型定義
pub mod common;

/// サーバー初期化ロジック
pub mod bootstrap;

/// REST APIハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ヘルスチェック
pub mod health;

/// ロギング初期化ユーティリティ
pub mod logging;

/// サービス登録管理
pub mod registry;

/// axumサーバー起動
pub mod server;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// サービスレジストリ
    pub registry: registry::ServiceRegistry,
    /// ヘルスチェッカー（同じレジストリを参照）
    pub health_checker: health::ServiceHealthChecker,
}

impl AppState {
    /// レジストリとヘルスチェック設定から状態を組み立てる
    pub fn new(registry: registry::ServiceRegistry, config: config::HealthCheckConfig) -> Self {
        let health_checker = health::ServiceHealthChecker::with_config(registry.clone(), config);
        Self {
            registry,
            health_checker,
        }
    }
}
