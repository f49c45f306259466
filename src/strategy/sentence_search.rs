use super::TextProcessingStrategy;
use crate::core::SentenceMatch;
use std::path::{Path, PathBuf};

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// クエリ文字列を含む文を探すストラテジー
///
/// 終端記号で閉じていない末尾のテキストは持ち越しバッファに保持し、
/// 次のチャンクの先頭に連結してから文に分割する。
#[derive(Debug)]
pub struct SentenceSearchStrategy {
    query: String,
    case_sensitive: bool,
    matched_sentences: Vec<SentenceMatch>,
    current_file: Option<PathBuf>,
    buffer: String,
}

impl SentenceSearchStrategy {
    /// 大文字小文字を区別しない場合、クエリはここで一度だけ小文字化する
    pub fn new(query: impl Into<String>, case_sensitive: bool) -> Self {
        let query = query.into();
        Self {
            query: if case_sensitive {
                query
            } else {
                query.to_lowercase()
            },
            case_sensitive,
            matched_sentences: Vec::new(),
            current_file: None,
            buffer: String::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// 持ち越し中の未完了テキスト
    pub fn carry_over(&self) -> &str {
        &self.buffer
    }

    fn matches(&self, sentence: &str) -> bool {
        if self.case_sensitive {
            sentence.contains(&self.query)
        } else {
            sentence.to_lowercase().contains(&self.query)
        }
    }

    fn record(&self, sentence: &str) -> SentenceMatch {
        SentenceMatch::new(self.current_file.as_deref(), sentence)
    }
}

impl TextProcessingStrategy for SentenceSearchStrategy {
    type Partial = Vec<SentenceMatch>;
    type Output = Vec<SentenceMatch>;

    fn set_current_file(&mut self, file: &Path) {
        self.current_file = Some(file.to_path_buf());
    }

    fn process_chunk(&mut self, chunk: &str) -> Vec<SentenceMatch> {
        // 前回の持ち越しは combined に含まれるので、バッファは置き換える
        let mut combined = std::mem::take(&mut self.buffer);
        combined.push_str(chunk);

        let mut sentences = Vec::new();
        let mut current_sentence = String::new();
        for c in combined.chars() {
            current_sentence.push(c);
            if SENTENCE_TERMINATORS.contains(&c) {
                sentences.push(current_sentence.trim().to_string());
                current_sentence.clear();
            }
        }

        if !current_sentence.trim().is_empty() {
            self.buffer = current_sentence;
        }

        sentences
            .iter()
            .filter(|sentence| self.matches(sentence))
            .map(|sentence| self.record(sentence))
            .collect()
    }

    fn merge_partials(&mut self, partials: Vec<Vec<SentenceMatch>>) {
        for partial in partials {
            self.matched_sentences.extend(partial);
        }
    }

    fn finalize(mut self) -> Vec<SentenceMatch> {
        let remainder = self.buffer.trim();
        if !remainder.is_empty() && self.matches(remainder) {
            let tail = self.record(remainder);
            self.matched_sentences.push(tail);
        }
        self.matched_sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_in_two_chunks(text: &str, split_at: usize, query: &str) -> Vec<SentenceMatch> {
        let mut strategy = SentenceSearchStrategy::new(query, false);
        strategy.set_current_file(Path::new("doc.txt"));
        for chunk in [&text[..split_at], &text[split_at..]] {
            let partial = strategy.process_chunk(chunk);
            strategy.merge_partials(vec![partial]);
        }
        strategy.finalize()
    }

    #[test]
    fn test_query_is_lowercased_when_case_insensitive() {
        assert_eq!(SentenceSearchStrategy::new("Strategy", false).query(), "strategy");
        assert_eq!(SentenceSearchStrategy::new("Strategy", true).query(), "Strategy");
    }

    #[test]
    fn test_sentence_spanning_chunks_matches_once_for_every_split() {
        let text = "Hello world. This is a strategy test.";
        for split_at in 0..=text.len() {
            let matches = search_in_two_chunks(text, split_at, "strategy");
            assert_eq!(matches.len(), 1, "split_at={split_at}");
            assert_eq!(matches[0].sentence, "This is a strategy test.");
            assert_eq!(matches[0].file.as_deref(), Some(Path::new("doc.txt")));
        }
    }

    #[test]
    fn test_unterminated_final_sentence_is_flushed_on_finalize() {
        let mut strategy = SentenceSearchStrategy::new("period", false);
        let partial = strategy.process_chunk("First one. And no period at end");
        assert!(partial.is_empty());
        assert_eq!(strategy.carry_over(), " And no period at end");
        strategy.merge_partials(vec![partial]);

        let matches = strategy.finalize();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].sentence, "And no period at end");
    }

    #[test]
    fn test_case_sensitive_search() {
        let mut strategy = SentenceSearchStrategy::new("Strategy", true);
        let partial = strategy.process_chunk("A Strategy here. a strategy there! Why Strategy?");
        strategy.merge_partials(vec![partial]);

        let sentences: Vec<String> = strategy
            .finalize()
            .into_iter()
            .map(|m| m.sentence)
            .collect();
        assert_eq!(sentences, vec!["A Strategy here.", "Why Strategy?"]);
    }

    #[test]
    fn test_matches_keep_discovery_order_across_chunks() {
        let mut strategy = SentenceSearchStrategy::new("x", false);
        for chunk in ["x one. x tw", "o. no. x thr", "ee"] {
            let partial = strategy.process_chunk(chunk);
            strategy.merge_partials(vec![partial]);
        }

        let sentences: Vec<String> = strategy
            .finalize()
            .into_iter()
            .map(|m| m.sentence)
            .collect();
        assert_eq!(sentences, vec!["x one.", "x two.", "x three"]);
    }

    #[test]
    fn test_file_is_none_without_set_current_file() {
        let mut strategy = SentenceSearchStrategy::new("hit", false);
        let partial = strategy.process_chunk("A hit.");

        assert_eq!(partial, vec![SentenceMatch::new(None, "A hit.")]);
    }

    #[test]
    fn test_whitespace_only_tail_is_not_carried() {
        let mut strategy = SentenceSearchStrategy::new("a", false);
        strategy.process_chunk("Done.   \n");
        assert_eq!(strategy.carry_over(), "");
        assert!(strategy.finalize().is_empty());
    }
}
