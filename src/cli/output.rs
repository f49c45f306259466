// 実行結果の表示用フォーマット

use crate::core::{AggregatedResult, RunReport, SentenceMatch, WordFrequencies};
use std::fmt::Write;

const TOP_WORDS: usize = 10;
const MAX_MATCHES: usize = 10;

/// 実行結果を人間向けのサマリー文字列に変換
pub fn render_report(report: &RunReport) -> String {
    let stats = &report.stats;
    let mut out = String::new();

    let _ = writeln!(out, "📊 処理結果:");
    let _ = writeln!(out, "   - 対象ファイル数: {}", stats.total_files);
    let _ = writeln!(out, "   - 処理済みファイル数: {}", stats.processed_files);
    let _ = writeln!(out, "   - エラー数: {}", stats.failed_files);
    let _ = writeln!(out, "   - 最大同時実行数: {}", stats.peak_concurrency);
    let _ = writeln!(
        out,
        "   - 総処理時間: {:.2}秒",
        stats.elapsed_time.as_secs_f64()
    );

    match &report.result {
        AggregatedResult::WordFrequency(counts) => render_word_counts(&mut out, counts),
        AggregatedResult::SentenceSearch(matches) => render_matches(&mut out, matches),
    }

    out
}

fn render_word_counts(out: &mut String, counts: &WordFrequencies) {
    let _ = writeln!(out, "\n🔤 Top {TOP_WORDS} words:");
    for (word, count) in counts.most_common(TOP_WORDS) {
        let _ = writeln!(out, "   {word}: {count}");
    }
    let _ = writeln!(out, "Unique words: {}", counts.unique_words());
}

fn render_matches(out: &mut String, matches: &[SentenceMatch]) {
    let _ = writeln!(out, "\n🔍 Found {} matching sentences:", matches.len());
    for found in matches.iter().take(MAX_MATCHES) {
        match &found.file {
            Some(file) => {
                let _ = writeln!(out, "   [{}] {}", file.display(), found.sentence);
            }
            None => {
                let _ = writeln!(out, "   {}", found.sentence);
            }
        }
    }
    if matches.len() > MAX_MATCHES {
        let _ = writeln!(
            out,
            "   ... and {} more matches",
            matches.len() - MAX_MATCHES
        );
    }
}
