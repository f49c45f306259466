// Consumer - ファイルごとのワーカータスク起動

use crate::{
    core::{FileOutcome, ProgressReporter, RunContext},
    services::processing::process_single_file,
    strategy::StrategyKind,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

/// 単一ファイルワーカー
///
/// タスクは即座に起動されるが、I/Oの前にアドミッションゲートで待機する。
/// 結果は完了した順に `result_tx` へ送られる。
pub fn spawn_file_worker<R>(
    file_path: PathBuf,
    kind: Arc<StrategyKind>,
    context: Arc<RunContext>,
    reporter: Arc<R>,
    result_tx: mpsc::Sender<FileOutcome>,
) -> tokio::task::JoinHandle<()>
where
    R: ProgressReporter + ?Sized + 'static,
{
    tokio::spawn(async move {
        let outcome =
            process_single_file(&file_path, kind.as_ref(), context.as_ref(), reporter.as_ref())
                .await;

        // 受信側が閉じられた場合は結果を捨てて終了
        let _ = result_tx.send(outcome).await;
    })
}

/// 全ファイル分のワーカーを一括起動
pub fn spawn_file_workers<R>(
    files: Vec<PathBuf>,
    kind: Arc<StrategyKind>,
    context: Arc<RunContext>,
    reporter: Arc<R>,
    result_tx: mpsc::Sender<FileOutcome>,
) -> Vec<tokio::task::JoinHandle<()>>
where
    R: ProgressReporter + ?Sized + 'static,
{
    files
        .into_iter()
        .map(|file_path| {
            spawn_file_worker(
                file_path,
                Arc::clone(&kind),
                Arc::clone(&context),
                Arc::clone(&reporter),
                result_tx.clone(),
            )
        })
        .collect()
}
