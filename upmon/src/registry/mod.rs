//! サービス登録管理
//!
//! 監視対象サービスの一覧をメモリ内で管理し、JSONファイルと同期

pub mod services;

pub use services::{ReachabilityProbe, ServiceRegistry, SweepSummary};
