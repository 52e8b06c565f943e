//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to legacy variable names with warning logs, plus the data file location and
//! health check settings derived from them.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// 永続化ファイル名
pub const SERVICES_FILE_NAME: &str = "services.json";

/// コンテナ実行時のデータディレクトリ
pub const CONTAINER_DATA_DIR: &str = "/app/data";

/// Get an environment variable with fallback to a legacy name
///
/// If the new variable name is set, returns its value.
/// If only the legacy variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use upmon::config::get_env_with_fallback;
///
/// let dir = get_env_with_fallback("UPMON_DATA_DIR", "DATA_DIR");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Returns `default` if neither variable is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// サービス一覧の保存先を決定
///
/// 優先順位:
/// 1. `UPMON_DATA_DIR`（旧: `DATA_DIR`）が設定されていればその配下
/// 2. `/app/data` が存在すればその配下（コンテナ実行）
/// 3. カレントディレクトリ
pub fn services_file_path() -> PathBuf {
    if let Some(dir) = get_env_with_fallback("UPMON_DATA_DIR", "DATA_DIR") {
        return PathBuf::from(dir).join(SERVICES_FILE_NAME);
    }
    resolve_services_file(Path::new(CONTAINER_DATA_DIR))
}

fn resolve_services_file(container_dir: &Path) -> PathBuf {
    if container_dir.is_dir() {
        container_dir.join(SERVICES_FILE_NAME)
    } else {
        PathBuf::from(SERVICES_FILE_NAME)
    }
}

/// ヘルスチェック設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthCheckConfig {
    /// 1回のチェックのタイムアウト
    pub timeout: Duration,
}

impl HealthCheckConfig {
    /// デフォルトのタイムアウト（秒）
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// 環境変数 `UPMON_CHECK_TIMEOUT_SECS`（旧: `CHECK_TIMEOUT_SECS`）から読み込む
    ///
    /// 0は全チェックが即時タイムアウトになるため無効とし、デフォルトを使う。
    pub fn from_env() -> Self {
        let secs = match get_env_with_fallback_parse(
            "UPMON_CHECK_TIMEOUT_SECS",
            "CHECK_TIMEOUT_SECS",
            Self::DEFAULT_TIMEOUT_SECS,
        ) {
            0 => {
                tracing::warn!(
                    "UPMON_CHECK_TIMEOUT_SECS must be greater than 0, using {}",
                    Self::DEFAULT_TIMEOUT_SECS
                );
                Self::DEFAULT_TIMEOUT_SECS
            }
            secs => secs,
        };
        Self {
            timeout: Duration::from_secs(secs),
        }
    }
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }
}
