// 処理に関連するデータ型定義

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 1回の実行に対する入力
///
/// `directory` と `explicit_files` の少なくとも一方が必要。
/// 発見されたパスと明示パスはパス単位で重複排除される。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessRequest {
    pub directory: Option<PathBuf>,
    pub explicit_files: BTreeSet<PathBuf>,
}

impl ProcessRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// ディレクトリを再帰的に走査するリクエスト
    pub fn from_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: Some(directory.into()),
            explicit_files: BTreeSet::new(),
        }
    }

    /// 明示的なファイル集合のみのリクエスト
    pub fn from_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            directory: None,
            explicit_files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.explicit_files.insert(file.into());
        self
    }

    /// ディレクトリもファイルも指定されていないか
    pub fn is_empty(&self) -> bool {
        let no_directory = self
            .directory
            .as_ref()
            .map_or(true, |dir| dir.as_os_str().is_empty());
        no_directory && self.explicit_files.is_empty()
    }
}

/// 文検索でヒットした1文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceMatch {
    /// `set_current_file` が呼ばれていない場合は `None`
    pub file: Option<PathBuf>,
    pub sentence: String,
}

impl SentenceMatch {
    pub fn new(file: Option<&Path>, sentence: impl Into<String>) -> Self {
        Self {
            file: file.map(Path::to_path_buf),
            sentence: sentence.into(),
        }
    }
}

/// 単語 → 出現回数
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordFrequencies(HashMap<String, usize>);

impl WordFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// 単語を `count` 回分加算
    pub fn add(&mut self, word: impl Into<String>, count: usize) {
        *self.0.entry(word.into()).or_insert(0) += count;
    }

    /// キーごとの単純加算でマージ
    pub fn merge(&mut self, other: &WordFrequencies) {
        for (word, count) in &other.0 {
            self.add(word.clone(), *count);
        }
    }

    pub fn get(&self, word: &str) -> usize {
        self.0.get(word).copied().unwrap_or(0)
    }

    pub fn unique_words(&self) -> usize {
        self.0.len()
    }

    pub fn total_words(&self) -> usize {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// 出現回数の多い順に上位 `n` 件（同数は単語の辞書順）
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }

    pub fn into_inner(self) -> HashMap<String, usize> {
        self.0
    }
}

impl From<HashMap<String, usize>> for WordFrequencies {
    fn from(map: HashMap<String, usize>) -> Self {
        Self(map)
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for WordFrequencies {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut frequencies = Self::new();
        for (word, count) in iter {
            frequencies.add(word, count);
        }
        frequencies
    }
}

/// 1ファイル分のストラテジーを最後まで処理した結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerFileResult {
    WordFrequency(WordFrequencies),
    SentenceSearch(Vec<SentenceMatch>),
}

impl PerFileResult {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::WordFrequency(frequencies) => frequencies.is_empty(),
            Self::SentenceSearch(matches) => matches.is_empty(),
        }
    }
}

/// 全ファイルの結果をマージした最終結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregatedResult {
    WordFrequency(WordFrequencies),
    SentenceSearch(Vec<SentenceMatch>),
}

impl AggregatedResult {
    pub fn word_frequencies(&self) -> Option<&WordFrequencies> {
        match self {
            Self::WordFrequency(frequencies) => Some(frequencies),
            Self::SentenceSearch(_) => None,
        }
    }

    pub fn sentence_matches(&self) -> Option<&[SentenceMatch]> {
        match self {
            Self::WordFrequency(_) => None,
            Self::SentenceSearch(matches) => Some(matches),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::WordFrequency(frequencies) => frequencies.is_empty(),
            Self::SentenceSearch(matches) => matches.is_empty(),
        }
    }
}

/// ワーカー1件分の出力
///
/// 読み込みに失敗した場合でも、それまでのチャンクから得られた結果を持つ。
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: PerFileResult,
    pub bytes_read: u64,
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// 実行全体の統計
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessorStats {
    /// 処理対象として選ばれたファイル数
    pub total_files: usize,
    /// 完了したファイル数（失敗を含む）
    pub processed_files: usize,
    /// 読み込みに失敗したファイル数
    pub failed_files: usize,
    /// アドミッションゲートを同時に通過していたワーカー数の最大値
    pub peak_concurrency: usize,
    pub elapsed_time: Duration,
}

/// 統計付きの実行結果
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub stats: ProcessorStats,
    pub result: AggregatedResult,
}
