// Aggregator - ファイル単位の結果を1つの最終結果へマージ

use crate::core::{
    AggregatedResult, PerFileResult, ProcessingError, ProcessingResult, WordFrequencies,
};
use crate::strategy::StrategyKind;

/// ストラテジーの種類に応じて全ファイルの結果をマージする
///
/// 単語頻度はキーごとの合計、文検索は受け取った順の連結。
/// 入力は借用のみで、同じ入力に対して何度呼んでも同じ結果になる。
pub fn aggregate<'a, I>(kind: &StrategyKind, results: I) -> ProcessingResult<AggregatedResult>
where
    I: IntoIterator<Item = &'a PerFileResult>,
{
    match kind {
        StrategyKind::WordFrequency => {
            let mut total = WordFrequencies::new();
            for result in results {
                match result {
                    PerFileResult::WordFrequency(counts) => total.merge(counts),
                    PerFileResult::SentenceSearch(_) => return Err(kind_mismatch(kind)),
                }
            }
            Ok(AggregatedResult::WordFrequency(total))
        }
        StrategyKind::SentenceSearch { .. } => {
            let mut all_matches = Vec::new();
            for result in results {
                match result {
                    PerFileResult::SentenceSearch(matches) => {
                        all_matches.extend(matches.iter().cloned())
                    }
                    PerFileResult::WordFrequency(_) => return Err(kind_mismatch(kind)),
                }
            }
            Ok(AggregatedResult::SentenceSearch(all_matches))
        }
    }
}

fn kind_mismatch(kind: &StrategyKind) -> ProcessingError {
    ProcessingError::configuration(format!(
        "ストラテジー {} に対応しない結果が含まれています",
        kind.name()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SentenceMatch;
    use std::path::Path;

    fn counts(pairs: &[(&str, usize)]) -> PerFileResult {
        PerFileResult::WordFrequency(pairs.iter().map(|(w, c)| (*w, *c)).collect())
    }

    #[test]
    fn test_word_counts_are_summed() {
        let results = vec![counts(&[("a", 2)]), counts(&[("a", 1), ("b", 3)])];

        let aggregated = aggregate(&StrategyKind::WordFrequency, &results).unwrap();
        let total = aggregated.word_frequencies().unwrap();

        assert_eq!(total.get("a"), 3);
        assert_eq!(total.get("b"), 3);
        assert_eq!(total.unique_words(), 2);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let results = vec![counts(&[("x", 1)]), counts(&[("x", 4), ("y", 1)])];

        let first = aggregate(&StrategyKind::WordFrequency, &results).unwrap();
        let second = aggregate(&StrategyKind::WordFrequency, &results).unwrap();
        assert_eq!(first, second);

        let kind = StrategyKind::sentence_search("q", false);
        let matches = vec![PerFileResult::SentenceSearch(vec![SentenceMatch::new(
            Some(Path::new("a.txt")),
            "q.",
        )])];
        assert_eq!(
            aggregate(&kind, &matches).unwrap(),
            aggregate(&kind, &matches).unwrap()
        );
    }

    #[test]
    fn test_sentence_matches_are_concatenated_in_input_order() {
        let a = Path::new("a.txt");
        let b = Path::new("b.txt");
        let results = vec![
            PerFileResult::SentenceSearch(vec![
                SentenceMatch::new(Some(b), "b1."),
                SentenceMatch::new(Some(b), "b2."),
            ]),
            PerFileResult::SentenceSearch(vec![]),
            PerFileResult::SentenceSearch(vec![SentenceMatch::new(Some(a), "a1.")]),
        ];

        let aggregated = aggregate(&StrategyKind::sentence_search("x", true), &results).unwrap();
        let sentences: Vec<&str> = aggregated
            .sentence_matches()
            .unwrap()
            .iter()
            .map(|m| m.sentence.as_str())
            .collect();

        assert_eq!(sentences, vec!["b1.", "b2.", "a1."]);
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let empty: Vec<PerFileResult> = Vec::new();
        assert!(aggregate(&StrategyKind::WordFrequency, &empty)
            .unwrap()
            .is_empty());
        assert!(aggregate(&StrategyKind::sentence_search("q", false), &empty)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_mismatched_result_kind_is_configuration_error() {
        let results = vec![counts(&[("a", 1)])];
        let error = aggregate(&StrategyKind::sentence_search("a", false), &results).unwrap_err();

        assert!(matches!(error, ProcessingError::ConfigurationError { .. }));
        assert!(error.to_string().contains("sentence_search"));
    }
}
