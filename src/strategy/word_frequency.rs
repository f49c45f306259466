use super::TextProcessingStrategy;
use crate::core::WordFrequencies;
use crate::text::clean_text;

/// 単語の出現回数を数えるストラテジー
///
/// チャンク境界で分断された単語は2つの短いトークンとして数えられる。
#[derive(Debug, Default)]
pub struct WordFrequencyStrategy {
    counter: WordFrequencies,
}

impl WordFrequencyStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextProcessingStrategy for WordFrequencyStrategy {
    type Partial = WordFrequencies;
    type Output = WordFrequencies;

    fn process_chunk(&mut self, chunk: &str) -> WordFrequencies {
        clean_text(chunk).into_iter().map(|word| (word, 1)).collect()
    }

    fn merge_partials(&mut self, partials: Vec<WordFrequencies>) {
        for partial in &partials {
            self.counter.merge(partial);
        }
    }

    fn finalize(self) -> WordFrequencies {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_in_chunks(text: &str, chunk_size: usize) -> WordFrequencies {
        let mut strategy = WordFrequencyStrategy::new();
        let chars: Vec<char> = text.chars().collect();
        for chunk in chars.chunks(chunk_size) {
            let chunk: String = chunk.iter().collect();
            let partial = strategy.process_chunk(&chunk);
            strategy.merge_partials(vec![partial]);
        }
        strategy.finalize()
    }

    #[test]
    fn test_process_chunk_counts_only_that_chunk() {
        let mut strategy = WordFrequencyStrategy::new();
        let partial = strategy.process_chunk("The cat and the hat");

        assert_eq!(partial.get("the"), 2);
        assert_eq!(partial.get("cat"), 1);
        assert!(strategy.finalize().is_empty());
    }

    #[test]
    fn test_counts_agree_across_chunk_sizes() {
        for chunk_size in [1, 2, 1024] {
            let result = count_in_chunks("a a b", chunk_size);
            assert_eq!(result.get("a"), 2, "chunk_size={chunk_size}");
            assert_eq!(result.get("b"), 1, "chunk_size={chunk_size}");
            assert_eq!(result.unique_words(), 2, "chunk_size={chunk_size}");
        }
    }

    #[test]
    fn test_word_split_at_chunk_boundary_counts_as_two_tokens() {
        let result = count_in_chunks("abcd", 2);
        assert_eq!(result.get("ab"), 1);
        assert_eq!(result.get("cd"), 1);
        assert_eq!(result.get("abcd"), 0);
    }

    #[test]
    fn test_merge_partials_sums_per_key() {
        let mut strategy = WordFrequencyStrategy::new();
        strategy.merge_partials(vec![
            [("a", 2)].into_iter().collect(),
            [("a", 1), ("b", 3)].into_iter().collect(),
        ]);

        let result = strategy.finalize();
        assert_eq!(result.get("a"), 3);
        assert_eq!(result.get("b"), 3);
    }
}
