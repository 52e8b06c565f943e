//! サーバー初期化ロジック
//!
//! レジストリの読み込みと初期サービスの投入を担当する。

use crate::common::error::RegistryError;
use crate::registry::ServiceRegistry;
use tracing::{error, info};

/// レジストリ初期化の結果
#[derive(Debug)]
pub struct BootstrapReport {
    /// ファイルから読み込んだ件数
    pub loaded: usize,
    /// 読み込みエラー（ログ出力済み、起動は継続）
    pub load_error: Option<RegistryError>,
    /// 初期サービスを投入したか
    pub seeded: bool,
}

/// ファイルから一覧を読み込み、空なら初期サービスを投入する
///
/// 読み込みに失敗しても空の一覧で続行する。その後の投入で
/// 読めなかったファイルは上書きされる。
pub async fn prepare_registry(registry: &ServiceRegistry) -> BootstrapReport {
    let (loaded, load_error) = match registry.load().await {
        Ok(count) => (count, None),
        Err(e) => {
            error!(
                error = %e,
                path = %registry.path().display(),
                "Failed to load services, continuing with an empty list"
            );
            (0, Some(e))
        }
    };

    let seeded = registry.seed_defaults_if_empty().await;

    info!(
        loaded,
        seeded,
        count = registry.len().await,
        "Service registry ready"
    );

    BootstrapReport {
        loaded,
        load_error,
        seeded,
    }
}
