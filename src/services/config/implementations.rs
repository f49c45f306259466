// 設定管理の具象実装

use crate::core::{ProcessingConfig, ProcessingError, ProcessingResult};
use crate::text::TextEncoding;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::Semaphore;

pub const DEFAULT_CONCURRENT_LIMIT: usize = 10;
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

pub const ENV_CONCURRENT_LIMIT: &str = "CONCURRENT_LIMIT";
pub const ENV_CHUNK_SIZE: &str = "CHUNK_SIZE";
pub const ENV_ENCODING: &str = "ENCODING";

/// デフォルト設定実装
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultProcessingConfig {
    concurrent_limit: usize,
    chunk_size: usize,
    encoding: TextEncoding,
    enable_progress: bool,
}

impl DefaultProcessingConfig {
    pub fn new(concurrent_limit: usize, chunk_size: usize) -> Self {
        Self {
            concurrent_limit,
            chunk_size,
            ..Self::default()
        }
    }

    pub fn with_max_concurrent(mut self, concurrent_limit: usize) -> Self {
        self.concurrent_limit = concurrent_limit;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }

    /// 設定値の検証
    pub fn validate(&self) -> ProcessingResult<()> {
        validate_config(self)
    }

    /// 環境変数と `.env` ファイルから設定を読み込む
    ///
    /// カレントディレクトリから親へ向かって `.env` を探す。見つからなければ環境変数のみを使う。
    /// 同じキーが両方にある場合は環境変数が優先される。
    pub fn from_env() -> ProcessingResult<Self> {
        let file_values = match dotenvy::dotenv_iter() {
            Ok(entries) => collect_env_file(entries)?,
            Err(error) if error.not_found() => HashMap::new(),
            Err(error) => {
                return Err(ProcessingError::configuration(format!(
                    ".env ファイルを読み込めません: {error}"
                )))
            }
        };
        Self::from_process_env_and(file_values)
    }

    /// 指定した `.env` ファイルと環境変数から設定を読み込む
    pub fn from_env_file(path: impl AsRef<Path>) -> ProcessingResult<Self> {
        let path = path.as_ref();
        let entries = dotenvy::from_path_iter(path).map_err(|error| {
            ProcessingError::configuration(format!(
                ".env ファイルを読み込めません: {} - {error}",
                path.display()
            ))
        })?;
        Self::from_process_env_and(collect_env_file(entries)?)
    }

    /// キーから値を引く関数で設定を構築
    ///
    /// 未設定のキーはデフォルト値のまま。値が解釈できない場合は設定エラー。
    pub fn from_lookup<F>(lookup: F) -> ProcessingResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_CONCURRENT_LIMIT) {
            config.concurrent_limit = parse_count(ENV_CONCURRENT_LIMIT, &value)?;
        }
        if let Some(value) = lookup(ENV_CHUNK_SIZE) {
            config.chunk_size = parse_count(ENV_CHUNK_SIZE, &value)?;
        }
        if let Some(value) = lookup(ENV_ENCODING) {
            config.encoding = value.trim().parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    fn from_process_env_and(file_values: HashMap<String, String>) -> ProcessingResult<Self> {
        Self::from_lookup(|key| {
            std::env::var(key)
                .ok()
                .or_else(|| file_values.get(key).cloned())
        })
    }
}

fn collect_env_file<I>(entries: I) -> ProcessingResult<HashMap<String, String>>
where
    I: Iterator<Item = dotenvy::Result<(String, String)>>,
{
    entries
        .map(|entry| {
            entry.map_err(|error| {
                ProcessingError::configuration(format!(".env ファイルの解析に失敗しました: {error}"))
            })
        })
        .collect()
}

fn parse_count(key: &str, value: &str) -> ProcessingResult<usize> {
    value.trim().parse().map_err(|_| {
        ProcessingError::configuration(format!("環境変数 {key} の値が不正です: {value}"))
    })
}

impl Default for DefaultProcessingConfig {
    fn default() -> Self {
        Self {
            concurrent_limit: DEFAULT_CONCURRENT_LIMIT,
            chunk_size: DEFAULT_CHUNK_SIZE,
            encoding: TextEncoding::Utf8,
            enable_progress: true,
        }
    }
}

impl ProcessingConfig for DefaultProcessingConfig {
    fn max_concurrent_tasks(&self) -> usize {
        self.concurrent_limit
    }

    fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}

/// 任意の `ProcessingConfig` 実装に対する検証
pub fn validate_config<C: ProcessingConfig + ?Sized>(config: &C) -> ProcessingResult<()> {
    if config.max_concurrent_tasks() == 0 {
        return Err(ProcessingError::configuration(
            "並列タスク数は1以上である必要があります",
        ));
    }

    if config.max_concurrent_tasks() > Semaphore::MAX_PERMITS {
        return Err(ProcessingError::configuration(format!(
            "並列タスク数は{}以下である必要があります",
            Semaphore::MAX_PERMITS
        )));
    }

    if config.chunk_size() == 0 {
        return Err(ProcessingError::configuration(
            "チャンクサイズは1以上である必要があります",
        ));
    }

    Ok(())
}
