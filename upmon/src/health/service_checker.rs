//! サービスヘルスチェッカー
//!
//! 単一URLの到達性チェックと、レジストリ全体のスイープを提供する

use crate::config::HealthCheckConfig;
use crate::registry::{ReachabilityProbe, ServiceRegistry, SweepSummary};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// サービスヘルスチェッカー
///
/// タイムアウト付きのHTTPクライアントを共有し、チェック結果を真偽値に畳み込む。
#[derive(Clone)]
pub struct ServiceHealthChecker {
    /// サービスレジストリ
    registry: ServiceRegistry,
    /// HTTPクライアント
    client: Client,
    /// チェックのタイムアウト
    timeout: Duration,
}

impl ServiceHealthChecker {
    /// デフォルト設定（タイムアウト10秒）でヘルスチェッカーを作成
    pub fn new(registry: ServiceRegistry) -> Self {
        Self::with_config(registry, HealthCheckConfig::default())
    }

    /// 設定を指定してヘルスチェッカーを作成
    pub fn with_config(registry: ServiceRegistry, config: HealthCheckConfig) -> Self {
        Self {
            registry,
            client: build_client(config.timeout),
            timeout: config.timeout,
        }
    }

    /// タイムアウトを変更
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_client(timeout);
        self.timeout = timeout;
        self
    }

    /// 設定済みのタイムアウト
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 単一URLのヘルスチェック
    ///
    /// ステータス200の応答を受け取った場合のみtrue。接続失敗・タイムアウト・
    /// TLS/DNSエラー・200以外のステータスはすべてfalseになる。
    pub async fn check_one(&self, url: &str) -> bool {
        let start = Instant::now();

        match self.client.get(url).timeout(self.timeout).send().await {
            Ok(response) => {
                let status = response.status();
                debug!(
                    url = %url,
                    status = status.as_u16(),
                    latency_ms = start.elapsed().as_millis() as u64,
                    "Health check responded"
                );
                status == StatusCode::OK
            }
            Err(e) => {
                debug!(
                    url = %url,
                    error = %e,
                    timeout = e.is_timeout(),
                    "Health check failed"
                );
                false
            }
        }
    }

    /// レジストリ内の全サービスをチェックし、statusを上書きする
    ///
    /// スイープ中はレジストリの排他ロックが保持される。
    pub async fn sweep(&self) -> SweepSummary {
        let start = Instant::now();
        let summary = self.registry.sweep_with(self).await;

        info!(
            total = summary.total,
            up = summary.up,
            down = summary.down(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Health check sweep completed"
        );

        summary
    }
}

#[async_trait]
impl ReachabilityProbe for ServiceHealthChecker {
    async fn check(&self, url: &str) -> bool {
        self.check_one(url).await
    }
}

/// タイムアウト付きHTTPクライアントを作成
///
/// ビルダーが失敗した場合は既定クライアントにフォールバックする。
/// タイムアウトは`check_one`でリクエスト単位にも設定される。
fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to build HTTP client, using defaults");
            Client::new()
        })
}
