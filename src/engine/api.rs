// 高レベル公開API
// FileProcessorを簡単に使用できるようにするための便利な関数

use super::FileProcessor;
use crate::{
    core::ProcessingResult,
    services::{
        ConsoleProgressReporter, DefaultProcessingConfig, NoOpProgressReporter, WalkDirDiscovery,
    },
    strategy::StrategyKind,
};

/// FileProcessor作成のヘルパー関数
///
/// 設定は環境変数と `.env` ファイルから読み込む
pub fn create_default_file_processor(
    kind: StrategyKind,
) -> ProcessingResult<FileProcessor<DefaultProcessingConfig, ConsoleProgressReporter, WalkDirDiscovery>>
{
    Ok(FileProcessor::new(
        kind,
        DefaultProcessingConfig::from_env()?,
        ConsoleProgressReporter::new(),
        WalkDirDiscovery::new(),
    ))
}

/// FileProcessor作成のヘルパー関数（静音版）
///
/// テストやライブラリ組み込み用の静音エンジン作成
pub fn create_quiet_file_processor(
    kind: StrategyKind,
) -> ProcessingResult<FileProcessor<DefaultProcessingConfig, NoOpProgressReporter, WalkDirDiscovery>>
{
    Ok(FileProcessor::new(
        kind,
        DefaultProcessingConfig::from_env()?,
        NoOpProgressReporter::new(),
        WalkDirDiscovery::new(),
    ))
}
