// Worker - 単一ファイル処理機能

use crate::core::{
    FileOutcome, ProcessingError, ProcessingResult, ProgressReporter, RunContext,
};
use crate::strategy::{FileStrategy, StrategyKind};
use crate::text::{ChunkDecoder, TextEncoding};
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::{debug, warn};

/// 単一ファイルの処理
///
/// ゲートの許可を得てから読み込みを開始し、読み込みに失敗しても
/// それまでのチャンクから得られた結果を返す。完了数は成否にかかわらず1回だけ加算する。
pub async fn process_single_file<R>(
    file_path: &Path,
    kind: &StrategyKind,
    context: &RunContext,
    reporter: &R,
) -> FileOutcome
where
    R: ProgressReporter + ?Sized,
{
    let admission = context.gate.acquire().await;

    let mut strategy = kind.instantiate();
    strategy.set_current_file(file_path);

    let mut bytes_read = 0u64;
    let (permit, read_result) = match admission {
        Ok(permit) => {
            let read_result = stream_chunks(
                file_path,
                &mut strategy,
                context.chunk_size,
                context.encoding,
                &mut bytes_read,
            )
            .await;
            (Some(permit), read_result)
        }
        Err(error) => (None, Err(error)),
    };

    let result = strategy.finalize();
    drop(permit);

    let error = read_result.err().map(|e| e.to_string());
    let completed = context.record_completion(error.is_some());

    match &error {
        Some(message) => {
            warn!("Failed to process {}: {message}", file_path.display());
            if context.report_progress {
                reporter.report_error(file_path, message).await;
            }
        }
        None => debug!("Processing {} finished.", file_path.display()),
    }

    if context.report_progress {
        reporter
            .report_progress(file_path, completed, context.total_files)
            .await;
    }

    FileOutcome {
        path: file_path.to_path_buf(),
        result,
        bytes_read,
        error,
    }
}

/// ファイルを `chunk_size` バイトずつ読み、デコードしてストラテジーへ渡す
async fn stream_chunks(
    file_path: &Path,
    strategy: &mut FileStrategy,
    chunk_size: usize,
    encoding: TextEncoding,
    bytes_read: &mut u64,
) -> ProcessingResult<()> {
    let mut file = tokio::fs::File::open(file_path)
        .await
        .map_err(|e| ProcessingError::file_read(file_path, e))?;

    let mut decoder = ChunkDecoder::new(encoding);
    let mut buffer = vec![0u8; chunk_size];

    loop {
        let read = file
            .read(&mut buffer)
            .await
            .map_err(|e| ProcessingError::file_read(file_path, e))?;
        if read == 0 {
            break;
        }
        *bytes_read += read as u64;

        let text = decoder.decode(&buffer[..read]);
        if !text.is_empty() {
            strategy.feed(&text);
        }

        // チャンクごとに他のワーカーへ実行を譲る
        tokio::task::yield_now().await;
    }

    let dropped = decoder.finish();
    if dropped > 0 {
        debug!(
            "Ignored {dropped} trailing undecodable bytes in {}",
            file_path.display()
        );
    }

    Ok(())
}
