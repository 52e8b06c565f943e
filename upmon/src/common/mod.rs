//! 共通型定義
//!
//! レジストリ・ヘルスチェッカー・APIで共有する型

/// エラー型
pub mod error;

/// API通信プロトコル（リクエスト/レスポンス）
pub mod protocol;

/// 監視対象サービスの型
pub mod types;
