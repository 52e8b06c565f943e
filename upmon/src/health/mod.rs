//! ヘルスチェック
//!
//! 監視対象URLへGETを送り、200応答があれば稼働中とみなす。
//! 定期実行のスケジューラは持たず、サービス一覧の取得要求ごとにスイープする。

pub mod service_checker;

pub use service_checker::ServiceHealthChecker;
