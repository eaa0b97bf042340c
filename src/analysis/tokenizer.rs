// Regex word tokenizer.
//
// Splits on runs of anything that is not a word character. Word characters
// are ASCII letters, digits, underscore, Latin-1/Latin Extended letters and
// Cyrillic. regex-lite has no Unicode classes, so the ranges are spelled out.

use regex_lite::Regex;

use super::traits::Tokenizer;

const WORD_SEPARATORS: &str = r"[^A-Za-z0-9_\x{00C0}-\x{024F}\x{0400}-\x{04FF}]+";
const WORD_SEPARATORS_KEEP_APOSTROPHES: &str =
    r"[^A-Za-z0-9_'\x{00C0}-\x{024F}\x{0400}-\x{04FF}]+";

#[derive(Debug, Clone)]
pub struct WordTokenizer {
    separators: Regex,
    lowercase: bool,
    keep_apostrophes: bool,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTokenizer {
    /// Case-preserving tokenizer that treats apostrophes as separators.
    pub fn new() -> Self {
        Self::build(false, false)
    }

    /// Lowercasing tokenizer that keeps contractions ("don't") intact.
    /// This is what the lexicon scorer uses.
    pub fn for_sentiment() -> Self {
        Self::build(true, true)
    }

    fn build(lowercase: bool, keep_apostrophes: bool) -> Self {
        let pattern = if keep_apostrophes {
            WORD_SEPARATORS_KEEP_APOSTROPHES
        } else {
            WORD_SEPARATORS
        };
        Self {
            separators: Regex::new(pattern).expect("valid separator pattern"),
            lowercase,
            keep_apostrophes,
        }
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        self.separators
            .split(&text)
            .map(|token| {
                if self.keep_apostrophes {
                    token.trim_matches('\'')
                } else {
                    token
                }
            })
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_punctuation_and_whitespace() {
        let tokens = WordTokenizer::new().tokenize("Hello, world! It's  fine.");
        assert_eq!(tokens, vec!["Hello", "world", "It", "s", "fine"]);
    }

    #[test]
    fn test_sentiment_tokenizer_lowercases_and_keeps_contractions() {
        let tokens = WordTokenizer::for_sentiment().tokenize("I DON'T like 'this'");
        assert_eq!(tokens, vec!["i", "don't", "like", "this"]);
    }

    #[test]
    fn test_keeps_accented_and_cyrillic_letters() {
        let tokens = WordTokenizer::new().tokenize("café привет");
        assert_eq!(tokens, vec!["café", "привет"]);
    }

    #[test]
    fn test_empty_text_has_no_tokens() {
        assert!(WordTokenizer::new().tokenize("  ...  ").is_empty());
    }
}
