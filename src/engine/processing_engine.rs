// FileProcessor - 依存性注入によるファイル処理エンジン
// リクエスト検証、ファイル発見、スケジューリング、集計を1つの入口にまとめる

use super::{aggregator::aggregate, pipeline::ProcessingPipeline};
use crate::{
    core::{
        AggregatedResult, FileDiscovery, ProcessRequest, ProcessingConfig, ProcessingError,
        ProcessingResult, ProgressReporter, RunReport,
    },
    strategy::StrategyKind,
};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// 依存性注入によるファイル処理エンジン
///
/// 設定・進捗報告・ファイル発見をコンストラクタで注入する。
/// ストラテジーは記述子として保持し、ファイルごとに新しいインスタンスを作る。
pub struct FileProcessor<C, R, D> {
    kind: Arc<StrategyKind>,
    config: Arc<C>,
    reporter: Arc<R>,
    discovery: Arc<D>,
}

impl<C, R, D> FileProcessor<C, R, D>
where
    C: ProcessingConfig,
    R: ProgressReporter + 'static,
    D: FileDiscovery + 'static,
{
    /// 新しい処理エンジンを作成
    pub fn new(kind: StrategyKind, config: C, reporter: R, discovery: D) -> Self {
        Self {
            kind: Arc::new(kind),
            config: Arc::new(config),
            reporter: Arc::new(reporter),
            discovery: Arc::new(discovery),
        }
    }

    /// リクエストを処理して集計結果のみを返す
    pub async fn process(&self, request: &ProcessRequest) -> ProcessingResult<AggregatedResult> {
        Ok(self.process_with_stats(request).await?.result)
    }

    /// リクエストを処理して統計付きの結果を返す
    ///
    /// 経過時間はファイル発見を含む実行全体の時間。
    pub async fn process_with_stats(&self, request: &ProcessRequest) -> ProcessingResult<RunReport> {
        let start_time = Instant::now();

        let files = self.collect_files(request).await?;
        let mut report = self.process_files(files).await?;

        report.stats.elapsed_time = start_time.elapsed();
        Ok(report)
    }

    /// 検証済みのファイルリストを直接処理
    pub async fn process_files(&self, files: Vec<PathBuf>) -> ProcessingResult<RunReport> {
        let pipeline = ProcessingPipeline::new(Arc::clone(&self.kind));
        let run = pipeline
            .execute(files, self.config.as_ref(), Arc::clone(&self.reporter))
            .await?;

        let result = aggregate(&self.kind, run.outcomes.iter().map(|o| &o.result))?;

        Ok(RunReport {
            stats: run.stats,
            result,
        })
    }

    /// リクエストを検証し、処理対象のファイルを重複なく列挙する
    ///
    /// `directory` が存在しない場合や通常ファイルを指す場合は、空の実行にせず設定エラーとする。
    pub async fn collect_files(&self, request: &ProcessRequest) -> ProcessingResult<Vec<PathBuf>> {
        if request.is_empty() {
            return Err(ProcessingError::configuration(
                "ディレクトリまたはファイルのいずれかを指定してください",
            ));
        }

        let mut all_files: BTreeSet<PathBuf> = request.explicit_files.clone();

        if let Some(directory) = request
            .directory
            .as_ref()
            .filter(|dir| !dir.as_os_str().is_empty())
        {
            let metadata = tokio::fs::metadata(directory).await.map_err(|_| {
                ProcessingError::configuration(format!(
                    "ディレクトリが存在しません: {}",
                    directory.display()
                ))
            })?;
            if !metadata.is_dir() {
                return Err(ProcessingError::configuration(format!(
                    "ディレクトリではありません: {}",
                    directory.display()
                )));
            }

            // walkdirはブロッキングI/Oのため専用スレッドで実行
            let discovery = Arc::clone(&self.discovery);
            let root = directory.clone();
            let discovered = tokio::task::spawn_blocking(move || discovery.discover(&root))
                .await
                .map_err(ProcessingError::task)?
                .map_err(|e| ProcessingError::file_discovery(directory, e))?;

            debug!(
                "Discovered {} files under {}",
                discovered.len(),
                directory.display()
            );
            all_files.extend(discovered);
        }

        Ok(all_files.into_iter().collect())
    }

    pub fn strategy(&self) -> &StrategyKind {
        &self.kind
    }

    /// 設定への参照を取得（読み取り専用アクセス）
    pub fn config(&self) -> &C {
        &self.config
    }

    /// レポーターへの参照を取得
    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
