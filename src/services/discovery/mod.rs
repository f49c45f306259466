// ファイル発見機能
// ディレクトリツリーの再帰的な走査

pub mod walkdir_discovery;

// 公開API
pub use walkdir_discovery::WalkDirDiscovery;
