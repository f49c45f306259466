// 進捗監視の具象実装

use crate::core::ProgressReporter;
use async_trait::async_trait;
use std::path::Path;

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, total_files: usize) {
        if !self.quiet {
            println!("🚀 Starting processing {total_files} files...");
        }
    }

    async fn report_progress(&self, file_path: &Path, completed: usize, total: usize) {
        if !self.quiet {
            println!(
                "📄 Processing {} finished. ({completed}/{total})",
                file_path.display()
            );
        }
    }

    async fn report_error(&self, file_path: &Path, error: &str) {
        if !self.quiet {
            eprintln!("❌ Failed to process {}: {error}", file_path.display());
        }
    }

    async fn report_completed(&self, total_processed: usize, total_errors: usize) {
        if !self.quiet {
            println!("✅ Completed! Processed: {total_processed}, Errors: {total_errors}");
        }
    }
}

/// 何もしない進捗報告実装（テスト・ライブラリ組み込み用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _total_files: usize) {}

    async fn report_progress(&self, _file_path: &Path, _completed: usize, _total: usize) {}

    async fn report_error(&self, _file_path: &Path, _error: &str) {}

    async fn report_completed(&self, _total_processed: usize, _total_errors: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_console_progress_reporter() {
        // 出力キャプチャは複雑なため、基本的な呼び出しテストのみ
        let reporter = ConsoleProgressReporter::quiet();

        reporter.report_started(100).await;
        reporter.report_progress(Path::new("/test.txt"), 50, 100).await;
        reporter.report_error(Path::new("/test.txt"), "test error").await;
        reporter.report_completed(99, 1).await;
    }

    #[test]
    fn test_console_progress_reporter_creation() {
        assert!(!ConsoleProgressReporter::new().quiet);
        assert!(ConsoleProgressReporter::quiet().quiet);
    }

    #[tokio::test]
    async fn test_noop_progress_reporter() {
        let reporter = NoOpProgressReporter::new();

        reporter.report_started(100).await;
        reporter.report_progress(Path::new("/test.txt"), 50, 100).await;
        reporter.report_error(Path::new("/test.txt"), "test error").await;
        reporter.report_completed(99, 1).await;
    }
}
