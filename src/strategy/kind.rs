// ストラテジー記述子とファイル単位のインスタンス
// 生きたインスタンスを複製せず、軽量な記述子から1ファイルごとに新しく構築する

use super::{SentenceSearchStrategy, TextProcessingStrategy, WordFrequencyStrategy};
use crate::core::PerFileResult;
use std::path::Path;

/// ストラテジーの種類と構築パラメータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyKind {
    WordFrequency,
    SentenceSearch { query: String, case_sensitive: bool },
}

impl StrategyKind {
    pub fn sentence_search(query: impl Into<String>, case_sensitive: bool) -> Self {
        Self::SentenceSearch {
            query: query.into(),
            case_sensitive,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::WordFrequency => "word_freq",
            Self::SentenceSearch { .. } => "sentence_search",
        }
    }

    /// 1ファイル専用の新しいインスタンスを作成
    pub fn instantiate(&self) -> FileStrategy {
        match self {
            Self::WordFrequency => FileStrategy::WordFrequency(WordFrequencyStrategy::new()),
            Self::SentenceSearch {
                query,
                case_sensitive,
            } => FileStrategy::SentenceSearch(SentenceSearchStrategy::new(
                query.clone(),
                *case_sensitive,
            )),
        }
    }
}

/// ファイルワーカーが排他的に所有するストラテジーインスタンス
#[derive(Debug)]
pub enum FileStrategy {
    WordFrequency(WordFrequencyStrategy),
    SentenceSearch(SentenceSearchStrategy),
}

impl FileStrategy {
    pub fn set_current_file(&mut self, file: &Path) {
        match self {
            Self::WordFrequency(strategy) => strategy.set_current_file(file),
            Self::SentenceSearch(strategy) => strategy.set_current_file(file),
        }
    }

    /// 1チャンクを処理し、その部分結果を即座に累積する
    pub fn feed(&mut self, chunk: &str) {
        match self {
            Self::WordFrequency(strategy) => {
                let partial = strategy.process_chunk(chunk);
                strategy.merge_partials(vec![partial]);
            }
            Self::SentenceSearch(strategy) => {
                let partial = strategy.process_chunk(chunk);
                strategy.merge_partials(vec![partial]);
            }
        }
    }

    pub fn finalize(self) -> PerFileResult {
        match self {
            Self::WordFrequency(strategy) => PerFileResult::WordFrequency(strategy.finalize()),
            Self::SentenceSearch(strategy) => PerFileResult::SentenceSearch(strategy.finalize()),
        }
    }
}
