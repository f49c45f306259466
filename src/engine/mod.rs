// エンジン層 - 並列処理とオーケストレーション
// サービス層を組み合わせて高レベルな処理を提供

pub mod aggregator;
pub mod api;
pub mod consumer;
pub mod pipeline;
pub mod processing_engine;

// 公開API - 主要エンジンクラス
pub use aggregator::aggregate;
pub use api::{create_default_file_processor, create_quiet_file_processor};
pub use pipeline::{ProcessingPipeline, ScheduledRun};
pub use processing_engine::FileProcessor;
