// サービス層 - 機能別の具象実装
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod discovery;
pub mod monitoring;
pub mod processing;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::DefaultProcessingConfig;
pub use discovery::WalkDirDiscovery;
pub use monitoring::{ConsoleProgressReporter, NoOpProgressReporter};
pub use processing::process_single_file;
