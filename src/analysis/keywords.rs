// Keyword and sentiment primitives over a single message.
//
// Keyword matching is case-insensitive substring matching. This is the one
// keyword semantic used across the crate, including by MessageFilter, so a
// message that `has_keyword` also passes the filter's keyword gate.

use std::sync::LazyLock;

use super::lexicon::AfinnScorer;
use super::traits::SentimentScorer;
use crate::error::Result;
use crate::message::Message;

static DEFAULT_SCORER: LazyLock<AfinnScorer> = LazyLock::new(AfinnScorer::new);

/// True if any keyword occurs anywhere in the message content, ignoring case.
/// No word boundaries: "hell" matches "hello". An empty keyword list never matches.
pub fn has_keyword<K: AsRef<str>>(message: &Message, keywords: &[K]) -> bool {
    let content = message.content.to_lowercase();
    keywords
        .iter()
        .any(|keyword| content.contains(&keyword.as_ref().to_lowercase()))
}

/// The listed words that occur in the message, in list order.
/// Matches like `has_keyword` (case-insensitive substring), except that empty
/// entries are skipped instead of matching every message.
pub fn list_inappropriate_words<'w, K: AsRef<str>>(
    message: &Message,
    words: &'w [K],
) -> Vec<&'w str> {
    let content = message.content.to_lowercase();
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| !word.is_empty() && content.contains(&word.to_lowercase()))
        .collect()
}

/// Sentiment score of the message content from the built-in lexicon scorer.
pub fn get_sentiment(message: &Message) -> f64 {
    DEFAULT_SCORER.analyze(&message.content).score
}

/// Sentiment score from a caller-supplied scorer.
pub fn get_sentiment_with(message: &Message, scorer: &dyn SentimentScorer) -> Result<f64> {
    Ok(scorer.score(&message.content)?.score)
}

/// Inclusive range check shared by every sentiment gate.
pub(crate) fn within_range(score: f64, min: f64, max: f64) -> bool {
    score >= min && score <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_keyword_ignores_case() {
        let msg = Message::new("Hello World");
        assert!(has_keyword(&msg, &["hello"]));
        assert!(has_keyword(&msg, &["WORLD"]));
    }

    #[test]
    fn test_has_keyword_is_substring_match() {
        assert!(has_keyword(&Message::new("say hello"), &["hell"]));
    }

    #[test]
    fn test_has_keyword_empty_list() {
        let none: [&str; 0] = [];
        assert!(!has_keyword(&Message::new("anything"), &none));
    }

    #[test]
    fn test_list_inappropriate_words_keeps_list_order() {
        let msg = Message::new("darn it, heck");
        let words = ["heck", "nope", "darn"];
        assert_eq!(list_inappropriate_words(&msg, &words), vec!["heck", "darn"]);
    }

    #[test]
    fn test_list_inappropriate_words_skips_empty_entries() {
        let words = ["", "x"];
        assert!(list_inappropriate_words(&Message::new("abc"), &words).is_empty());
    }

    #[test]
    fn test_get_sentiment_sign() {
        assert!(get_sentiment(&Message::new("I love this")) > 0.0);
        assert!(get_sentiment(&Message::new("I hate this")) < 0.0);
        assert_eq!(get_sentiment(&Message::new("hello world")), 0.0);
    }

    #[test]
    fn test_within_range_is_inclusive() {
        assert!(within_range(0.0, 0.0, 10.0));
        assert!(within_range(10.0, 0.0, 10.0));
        assert!(!within_range(-1.0, 0.0, 10.0));
        assert!(!within_range(f64::NAN, 0.0, 10.0));
    }
}
