use once_cell::sync::Lazy;
use regex::Regex;

// Unicodeの単語文字クラス（アンダースコアを含む）の連続を1単語とみなす
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w+\b").expect("word pattern is a valid regex"));

/// テキストを小文字の単語トークン列に変換する
pub fn clean_text(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_lowercases_and_splits() {
        assert_eq!(
            clean_text("Hello, World! hello-world"),
            vec!["hello", "world", "hello", "world"]
        );
    }

    #[test]
    fn test_clean_text_keeps_underscores_and_digits() {
        assert_eq!(
            clean_text("snake_case x2 __init__"),
            vec!["snake_case", "x2", "__init__"]
        );
    }

    #[test]
    fn test_clean_text_unicode_words() {
        assert_eq!(clean_text("Größe café"), vec!["größe", "café"]);
    }

    #[test]
    fn test_clean_text_empty_and_punctuation_only() {
        assert!(clean_text("").is_empty());
        assert!(clean_text("... !!! ???").is_empty());
    }
}
