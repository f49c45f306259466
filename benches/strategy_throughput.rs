//! チャンクサイズごとのストラテジー処理スループット比較ベンチマーク
//!
//! メモリ上のテキストとファイル経由のパイプライン全体の両方を測定

use chunkwise::{
    services::{DefaultProcessingConfig, NoOpProgressReporter, WalkDirDiscovery},
    strategy::StrategyKind,
    text::{ChunkDecoder, TextEncoding},
    FileProcessor, ProcessRequest,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;
use tempfile::TempDir;

const CHUNK_SIZES: [usize; 4] = [64, 1024, 8192, 65536];

fn sample_text() -> String {
    "The quick brown fox jumps over the lazy dog. Rust makes systems programming safe! \
     Does chunked reading keep up? "
        .repeat(2000)
}

/// デコードとストラテジー適用のみを測定
fn benchmark_strategy_chunks(c: &mut Criterion) {
    let text = sample_text();
    let bytes = text.as_bytes();

    let kinds = [
        StrategyKind::WordFrequency,
        StrategyKind::sentence_search("rust", false),
    ];

    for kind in kinds {
        let mut group = c.benchmark_group(format!("Strategy {}", kind.name()));
        group.measurement_time(Duration::from_secs(5));
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        for chunk_size in CHUNK_SIZES {
            group.bench_with_input(
                BenchmarkId::from_parameter(chunk_size),
                &chunk_size,
                |b, &chunk_size| {
                    b.iter(|| {
                        let mut strategy = kind.instantiate();
                        let mut decoder = ChunkDecoder::new(TextEncoding::Utf8);
                        for chunk in bytes.chunks(chunk_size) {
                            strategy.feed(&decoder.decode(chunk));
                        }
                        std::hint::black_box(strategy.finalize())
                    })
                },
            );
        }

        group.finish();
    }
}

/// ファイル読み込みを含むパイプライン全体を測定
fn benchmark_pipeline(c: &mut Criterion) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let text = sample_text();
    for i in 0..16 {
        std::fs::write(temp_dir.path().join(format!("doc{i}.txt")), &text)
            .expect("Failed to write file");
    }

    let runtime = tokio::runtime::Runtime::new().expect("Failed to build runtime");
    let request = ProcessRequest::from_directory(temp_dir.path());

    let mut group = c.benchmark_group("Pipeline word_freq");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    for chunk_size in CHUNK_SIZES {
        let processor = FileProcessor::new(
            StrategyKind::WordFrequency,
            DefaultProcessingConfig::new(4, chunk_size),
            NoOpProgressReporter::new(),
            WalkDirDiscovery::new(),
        );

        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_size),
            &chunk_size,
            |b, _| {
                b.iter(|| {
                    let result = runtime
                        .block_on(processor.process(&request))
                        .expect("Processing failed");
                    std::hint::black_box(result)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_strategy_chunks, benchmark_pipeline);
criterion_main!(benches);
