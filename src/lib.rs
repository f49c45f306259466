pub mod cli;
pub mod core;
pub mod engine;
pub mod services;
pub mod strategy;
pub mod text;

pub use crate::core::{
    AggregatedResult, ProcessRequest, ProcessingError, ProcessingResult, ProcessorStats,
    RunReport, SentenceMatch, WordFrequencies,
};
pub use engine::{create_default_file_processor, create_quiet_file_processor, FileProcessor};
pub use strategy::StrategyKind;

/// デフォルトの協調オブジェクトでリクエストを処理する
///
/// 設定は環境変数と `.env` ファイルから読み込む。進捗は出力せず、集計結果のみを返す。
pub async fn process(
    request: &ProcessRequest,
    strategy: StrategyKind,
) -> ProcessingResult<AggregatedResult> {
    create_quiet_file_processor(strategy)?.process(request).await
}

/// `process` と同じ処理を行い、実行統計も合わせて返す
pub async fn process_with_stats(
    request: &ProcessRequest,
    strategy: StrategyKind,
) -> ProcessingResult<RunReport> {
    create_quiet_file_processor(strategy)?
        .process_with_stats(request)
        .await
}
