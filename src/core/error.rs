// ファイル処理パイプラインのエラー型定義
// 設定エラーのみがスケジューラ境界を越え、ファイル単位のエラーはワーカー内で吸収される

use std::path::{Path, PathBuf};
use thiserror::Error;

/// ファイル処理パイプライン固有のエラー型
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("ファイル発見エラー: {} - {source}", path.display())]
    FileDiscoveryError {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("ファイル読み込みエラー: {} - {source}", path.display())]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("並列処理エラー: {message}")]
    ParallelExecutionError { message: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl ProcessingError {
    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// ファイル発見エラーの作成
    pub fn file_discovery(path: impl AsRef<Path>, source: anyhow::Error) -> Self {
        Self::FileDiscoveryError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// ファイル読み込みエラーの作成
    pub fn file_read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::FileReadError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// 並列実行エラーの作成
    pub fn parallel_execution(message: impl Into<String>) -> Self {
        Self::ParallelExecutionError {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// 回復可能なエラーは集計結果を劣化させるだけで、実行全体は継続する。
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::FileReadError { .. } => true,
            Self::ConfigurationError { .. }
            | Self::FileDiscoveryError { .. }
            | Self::ParallelExecutionError { .. }
            | Self::TaskError { .. } => false,
        }
    }
}

/// ファイル処理の結果型
pub type ProcessingResult<T> = std::result::Result<T, ProcessingError>;
