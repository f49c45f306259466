// ストラテジー層 - チャンク単位で与えられるテキストの解析アルゴリズム
//
// インスタンスは1ファイルにつき1つだけ生成され、ファイル間でもワーカー間でも共有されない。

pub mod kind;
pub mod sentence_search;
pub mod word_frequency;

pub use kind::{FileStrategy, StrategyKind};
pub use sentence_search::SentenceSearchStrategy;
pub use word_frequency::WordFrequencyStrategy;

use std::path::Path;

/// チャンク単位のテキスト解析ストラテジー
pub trait TextProcessingStrategy: Send {
    /// 1チャンク分の部分結果
    type Partial;
    /// ファイル全体の最終結果
    type Output;

    /// 結果にファイルを記録するストラテジーのみが使用する
    fn set_current_file(&mut self, _file: &Path) {}

    /// 1チャンクを処理して部分結果を返す
    fn process_chunk(&mut self, chunk: &str) -> Self::Partial;

    /// 部分結果を到着順に累積する
    fn merge_partials(&mut self, partials: Vec<Self::Partial>);

    /// ファイル終端に達した後の最終結果
    fn finalize(self) -> Self::Output;
}
