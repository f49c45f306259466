// 設定管理機能
// 同時処理数、チャンクサイズ、エンコーディング

pub mod implementations;

// 公開API
pub use implementations::DefaultProcessingConfig;
