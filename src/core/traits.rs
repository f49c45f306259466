// ファイル処理パイプラインのトレイト定義
// 外部協力者（設定・進捗報告・ファイル発見）の抽象化インターフェース

use crate::text::TextEncoding;
use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::path::{Path, PathBuf};

/// 処理設定を抽象化するトレイト
#[automock]
pub trait ProcessingConfig: Send + Sync {
    /// アドミッションゲートの容量（同時処理ファイル数の上限）
    fn max_concurrent_tasks(&self) -> usize;

    /// 1回の読み込みで読むバイト数
    fn chunk_size(&self) -> usize;

    /// ファイル内容のデコード方式
    fn encoding(&self) -> TextEncoding;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

// ProcessingConfig for Box<dyn ProcessingConfig>
impl ProcessingConfig for Box<dyn ProcessingConfig> {
    fn max_concurrent_tasks(&self) -> usize {
        self.as_ref().max_concurrent_tasks()
    }

    fn chunk_size(&self) -> usize {
        self.as_ref().chunk_size()
    }

    fn encoding(&self) -> TextEncoding {
        self.as_ref().encoding()
    }

    fn enable_progress_reporting(&self) -> bool {
        self.as_ref().enable_progress_reporting()
    }
}

/// 進捗報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, total_files: usize);

    /// 1ファイル完了時の報告（失敗したファイルも含む）
    async fn report_progress(&self, file_path: &Path, completed: usize, total: usize);

    /// エラー発生時の報告
    async fn report_error(&self, file_path: &Path, error: &str);

    /// 処理完了時の報告
    async fn report_completed(&self, total_processed: usize, total_errors: usize);
}

// ProgressReporter for Box<dyn ProgressReporter>
#[async_trait]
impl ProgressReporter for Box<dyn ProgressReporter> {
    async fn report_started(&self, total_files: usize) {
        self.as_ref().report_started(total_files).await
    }

    async fn report_progress(&self, file_path: &Path, completed: usize, total: usize) {
        self.as_ref()
            .report_progress(file_path, completed, total)
            .await
    }

    async fn report_error(&self, file_path: &Path, error: &str) {
        self.as_ref().report_error(file_path, error).await
    }

    async fn report_completed(&self, total_processed: usize, total_errors: usize) {
        self.as_ref()
            .report_completed(total_processed, total_errors)
            .await
    }
}

/// ファイル発見の抽象化トレイト
///
/// ディレクトリ配下（ネストしたサブディレクトリを含む）の全ファイルパスを返す。
#[automock]
pub trait FileDiscovery: Send + Sync {
    fn discover(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

// FileDiscovery for Box<dyn FileDiscovery>
impl FileDiscovery for Box<dyn FileDiscovery> {
    fn discover(&self, root: &Path) -> Result<Vec<PathBuf>> {
        self.as_ref().discover(root)
    }
}
