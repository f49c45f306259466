// Pipeline - 同時実行数を制限したスケジューラ
// 全ファイル分のワーカーを起動し、全ての完了を待ってから結果を返す

use super::consumer::spawn_file_workers;
use crate::{
    core::{
        FileOutcome, ProcessingConfig, ProcessingError, ProcessingResult, ProcessorStats,
        ProgressReporter, RunContext,
    },
    services::config::implementations::validate_config,
    strategy::StrategyKind,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::info;

/// スケジューラの出力
///
/// `outcomes` は完了順に並ぶ。
#[derive(Debug)]
pub struct ScheduledRun {
    pub outcomes: Vec<FileOutcome>,
    pub stats: ProcessorStats,
}

/// ストラテジー記述子を保持するパイプライン
pub struct ProcessingPipeline {
    kind: Arc<StrategyKind>,
}

impl ProcessingPipeline {
    pub fn new(kind: Arc<StrategyKind>) -> Self {
        Self { kind }
    }

    /// ファイルリストを処理
    pub async fn execute<C, R>(
        &self,
        files: Vec<PathBuf>,
        config: &C,
        reporter: Arc<R>,
    ) -> ProcessingResult<ScheduledRun>
    where
        C: ProcessingConfig + ?Sized,
        R: ProgressReporter + ?Sized + 'static,
    {
        validate_config(config)?;

        let start_time = Instant::now();
        let total_files = files.len();
        let report_progress = config.enable_progress_reporting();

        let context = Arc::new(
            RunContext::new(
                config.max_concurrent_tasks(),
                config.chunk_size(),
                config.encoding(),
                total_files,
            )
            .with_progress_reporting(report_progress),
        );

        info!(
            "Processing {total_files} files with strategy {} (limit {}, chunk size {})",
            self.kind.name(),
            config.max_concurrent_tasks(),
            config.chunk_size()
        );
        if report_progress {
            reporter.report_started(total_files).await;
        }

        // 全ワーカーが送信を終えても詰まらないよう、ファイル数分のバッファを確保
        let (result_tx, mut result_rx) = mpsc::channel(total_files.max(1));
        let handles = spawn_file_workers(
            files,
            Arc::clone(&self.kind),
            Arc::clone(&context),
            Arc::clone(&reporter),
            result_tx,
        );

        let mut outcomes = Vec::with_capacity(total_files);
        while let Some(outcome) = result_rx.recv().await {
            outcomes.push(outcome);
        }

        for handle in handles {
            handle.await.map_err(ProcessingError::task)?;
        }

        let stats = ProcessorStats {
            total_files,
            processed_files: context.processed_files(),
            failed_files: context.failed_files(),
            peak_concurrency: context.gate.peak(),
            elapsed_time: start_time.elapsed(),
        };

        if report_progress {
            reporter
                .report_completed(stats.processed_files, stats.failed_files)
                .await;
        }
        info!(
            "Processed {}/{} files ({} failed) in {:.3}s",
            stats.processed_files,
            stats.total_files,
            stats.failed_files,
            stats.elapsed_time.as_secs_f64()
        );

        Ok(ScheduledRun { outcomes, stats })
    }
}
