// 実行コンテキスト - スケジューラが所有し、各ワーカーへ明示的に渡す共有状態
// 同期プリミティブ - Semaphoreとアトミックカウンター

use super::error::{ProcessingError, ProcessingResult};
use crate::text::TextEncoding;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{Semaphore, SemaphorePermit};

/// 同時に読み込み・処理中のファイル数を制限するアドミッションゲート
///
/// ゲートを通過中のワーカー数と、その最大値を記録する。
#[derive(Debug)]
pub struct AdmissionGate {
    semaphore: Semaphore,
    capacity: usize,
    active: AtomicUsize,
    peak: AtomicUsize,
}

impl AdmissionGate {
    pub fn new(capacity: usize) -> Self {
        Self {
            semaphore: Semaphore::new(capacity),
            capacity,
            active: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    /// 許可が得られるまで待機する
    pub async fn acquire(&self) -> ProcessingResult<GatePermit<'_>> {
        let permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|e| ProcessingError::parallel_execution(format!("Semaphore error: {e}")))?;

        let now_active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now_active, Ordering::SeqCst);

        Ok(GatePermit {
            _permit: permit,
            active: &self.active,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 現在ゲートを通過中のワーカー数
    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// 同時通過数の最大値
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

/// ゲート通過の許可。ドロップ時に解放される。
#[derive(Debug)]
pub struct GatePermit<'a> {
    _permit: SemaphorePermit<'a>,
    active: &'a AtomicUsize,
}

impl Drop for GatePermit<'_> {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}

/// 1回の実行の共有状態
#[derive(Debug)]
pub struct RunContext {
    pub gate: AdmissionGate,
    pub chunk_size: usize,
    pub encoding: TextEncoding,
    pub total_files: usize,
    pub report_progress: bool,
    processed_files: AtomicUsize,
    failed_files: AtomicUsize,
}

impl RunContext {
    pub fn new(
        concurrent_limit: usize,
        chunk_size: usize,
        encoding: TextEncoding,
        total_files: usize,
    ) -> Self {
        Self {
            gate: AdmissionGate::new(concurrent_limit),
            chunk_size,
            encoding,
            total_files,
            report_progress: true,
            processed_files: AtomicUsize::new(0),
            failed_files: AtomicUsize::new(0),
        }
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.report_progress = enable;
        self
    }

    /// ワーカー完了の記録（ワーカーごとに1回だけ呼ぶ）
    ///
    /// 更新後の完了ファイル数を返す。
    pub fn record_completion(&self, failed: bool) -> usize {
        if failed {
            self.failed_files.fetch_add(1, Ordering::SeqCst);
        }
        self.processed_files.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn processed_files(&self) -> usize {
        self.processed_files.load(Ordering::SeqCst)
    }

    pub fn failed_files(&self) -> usize {
        self.failed_files.load(Ordering::SeqCst)
    }
}
