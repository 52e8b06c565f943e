//! サービスレジストリ
//!
//! サービス一覧を挿入順に保持し、追加・削除のたびにJSONファイルへ書き出す。
//! 読み取りは共有ロック、変更とスイープは排他ロックで行う。

use crate::common::error::{RegistryError, RegistryResult};
use crate::common::types::{default_services, Service};
use async_trait::async_trait;
use futures::future::join_all;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// URL単位の到達性チェック
///
/// レジストリはこのトレイト越しにチェックを呼び出すため、
/// HTTPクライアントの実装には依存しない。
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    /// `url`が稼働中ならtrue
    async fn check(&self, url: &str) -> bool;
}

/// スイープ結果の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// チェックしたサービス数
    pub total: usize,
    /// 稼働中だったサービス数
    pub up: usize,
}

impl SweepSummary {
    /// 停止中だったサービス数
    pub fn down(&self) -> usize {
        self.total - self.up
    }
}

/// サービスレジストリ
///
/// 位置（インデックス）が削除APIの識別子になるため、順序は永続化を跨いで保たれる。
/// インデックスは削除のたびにずれるので、呼び出し側は削除前に一覧を取り直すこと。
#[derive(Clone)]
pub struct ServiceRegistry {
    /// サービス一覧（挿入順）
    services: Arc<RwLock<Vec<Service>>>,
    /// 永続化ファイルのパス
    path: Arc<PathBuf>,
}

impl ServiceRegistry {
    /// 空のレジストリを作成（ファイルは読み込まない）
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            services: Arc::new(RwLock::new(Vec::new())),
            path: Arc::new(path.into()),
        }
    }

    /// 永続化ファイルのパス
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイルからサービス一覧を読み込み、メモリ内の一覧を置き換える
    ///
    /// ファイルが存在しない場合はエラーにせず、一覧をそのままにする。
    /// 読み込んだ件数を返す。
    pub async fn load(&self) -> RegistryResult<usize> {
        let mut services = self.services.write().await;

        let data = match tokio::fs::read(self.path.as_path()).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    path = %self.path.display(),
                    "Services file not found, starting with an empty list"
                );
                return Ok(services.len());
            }
            Err(source) => {
                return Err(RegistryError::Io {
                    path: self.path.to_path_buf(),
                    source,
                })
            }
        };

        *services = parse_services(&self.path, &data)?;

        info!(
            count = services.len(),
            path = %self.path.display(),
            "Loaded services from file"
        );

        Ok(services.len())
    }

    /// サービスを末尾に追加し、ファイルへ書き出す
    ///
    /// 書き込み失敗はログに残すのみで、メモリ上の追加は取り消さない。
    pub async fn add(&self, name: impl Into<String>, url: impl Into<String>) {
        let mut services = self.services.write().await;
        let service = Service::new(name, url);

        info!(name = %service.name, url = %service.url, "Adding service");
        services.push(service);

        if let Err(e) = self.persist_locked(&services).await {
            error!(error = %e, "Failed to persist services after add");
        }
    }

    /// 指定位置のサービスを削除し、ファイルへ書き出す
    ///
    /// 範囲外なら何も変更せず（ファイルにも触れず）falseを返す。
    pub async fn remove(&self, index: usize) -> bool {
        let mut services = self.services.write().await;

        if index >= services.len() {
            debug!(
                index,
                count = services.len(),
                "Remove requested for out-of-range index"
            );
            return false;
        }

        let removed = services.remove(index);
        info!(index, name = %removed.name, "Removed service");

        if let Err(e) = self.persist_locked(&services).await {
            error!(error = %e, "Failed to persist services after remove");
        }

        true
    }

    /// 現在の一覧のコピーを取得
    pub async fn snapshot(&self) -> Vec<Service> {
        self.services.read().await.clone()
    }

    /// 登録件数
    pub async fn len(&self) -> usize {
        self.services.read().await.len()
    }

    /// 一覧が空か
    pub async fn is_empty(&self) -> bool {
        self.services.read().await.is_empty()
    }

    /// 一覧が空なら初期サービスを投入する
    ///
    /// 投入は通常の追加と同じくファイルへ書き出される。投入した場合にtrueを返す。
    pub async fn seed_defaults_if_empty(&self) -> bool {
        let mut services = self.services.write().await;
        if !services.is_empty() {
            return false;
        }

        services.extend(default_services());
        info!(count = services.len(), "Seeded default services");

        if let Err(e) = self.persist_locked(&services).await {
            error!(error = %e, "Failed to persist seeded services");
        }

        true
    }

    /// 全サービスの稼働状況を更新する
    ///
    /// 排他ロックを保持したまま全URLをチェックするため、読み取り側が
    /// 更新途中の一覧を見ることはない。statusはファイルへは書き出さない。
    pub async fn sweep_with<P>(&self, probe: &P) -> SweepSummary
    where
        P: ReachabilityProbe + ?Sized,
    {
        let mut services = self.services.write().await;

        let results = join_all(services.iter().map(|s| probe.check(&s.url))).await;

        let mut summary = SweepSummary {
            total: services.len(),
            up: 0,
        };
        for (service, up) in services.iter_mut().zip(results) {
            service.status = up;
            if up {
                summary.up += 1;
            }
        }

        summary
    }

    /// 一覧全体をファイルへ上書き保存（ロック保持中に呼ぶ）
    async fn persist_locked(&self, services: &[Service]) -> RegistryResult<()> {
        let data = serde_json::to_vec_pretty(services)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|source| RegistryError::Io {
                        path: parent.to_path_buf(),
                        source,
                    })?;
            }
        }

        tokio::fs::write(self.path.as_path(), data)
            .await
            .map_err(|source| RegistryError::Io {
                path: self.path.to_path_buf(),
                source,
            })?;

        debug!(
            count = services.len(),
            path = %self.path.display(),
            "Persisted services"
        );

        Ok(())
    }
}

/// ファイル内容をサービス一覧として解釈する
///
/// 空白のみのファイルと`null`は空の一覧として扱う。
fn parse_services(path: &Path, data: &[u8]) -> RegistryResult<Vec<Service>> {
    if data.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    serde_json::from_slice::<Option<Vec<Service>>>(data)
        .map(Option::unwrap_or_default)
        .map_err(|source| RegistryError::Parse {
            path: path.to_path_buf(),
            source,
        })
}
