//! ロギング初期化ユーティリティ

use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

/// フィルタ指定に使う環境変数
pub const LOG_LEVEL_ENV: &str = "UPMON_LOG_LEVEL";

/// tracingサブスクライバを初期化
///
/// 既に初期化済みの場合はエラーを返す（呼び出し側で無視してよい）。
pub fn init() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter_from_env())
        .try_init()
}

/// `UPMON_LOG_LEVEL` → `RUST_LOG` → `info` の順でフィルタを決定
pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
