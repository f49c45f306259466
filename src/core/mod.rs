// コアレイヤー - 基盤となるトレイト、型、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod context;
pub mod error;
pub mod traits;
pub mod types;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use context::{AdmissionGate, GatePermit, RunContext};
pub use error::{ProcessingError, ProcessingResult};
pub use traits::{FileDiscovery, ProcessingConfig, ProgressReporter};
pub use types::{
    AggregatedResult, FileOutcome, PerFileResult, ProcessRequest, ProcessorStats, RunReport,
    SentenceMatch, WordFrequencies,
};
