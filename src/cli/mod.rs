// CLI層 - コマンドライン引数の定義と結果表示
// ユーザーインターフェースとアプリケーションロジックの橋渡し

pub mod args;
pub mod output;

// 公開API
pub use args::{Cli, StrategyArg};
pub use output::render_report;
