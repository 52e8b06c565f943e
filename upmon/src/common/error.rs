//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use std::path::PathBuf;
use thiserror::Error;

/// レジストリの読み込み・永続化エラー
#[derive(Debug, Error)]
pub enum RegistryError {
    /// ファイルの読み書きに失敗
    #[error("I/O error on {path}: {source}")]
    Io {
        /// 対象ファイル
        path: PathBuf,
        /// 元のエラー
        #[source]
        source: std::io::Error,
    },

    /// 永続化ファイルの内容がサービス一覧として解釈できない
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// 対象ファイル
        path: PathBuf,
        /// 元のエラー
        #[source]
        source: serde_json::Error,
    },

    /// サービス一覧のシリアライズに失敗
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// レジストリ操作の結果型
pub type RegistryResult<T> = Result<T, RegistryError>;
