// ファイル処理機能
// 単一ファイルのチャンク読み込み、デコード、ストラテジーへの供給

pub mod worker;

// 公開API
pub use worker::process_single_file;
