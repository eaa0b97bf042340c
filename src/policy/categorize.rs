// Named bucketing policies built on `categorize_messages`.

use std::fmt;

use crate::analysis::keywords::{get_sentiment, has_keyword, list_inappropriate_words};
use crate::collection::{categorize_messages, Categories};
use crate::message::Message;

pub const CONTAINS_KEYWORD: &str = "contains keyword";
pub const NO_KEYWORD: &str = "does not contain keyword";
pub const CONTAINS_INAPPROPRIATE: &str = "contains inappropriate words";
pub const NO_INAPPROPRIATE: &str = "does not contain inappropriate words";

/// Sentiment bucket, decided by the sign of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

impl SentimentLabel {
    /// NaN is neither below nor above zero, so it lands in Neutral.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s < 0.0 => SentimentLabel::Negative,
            s if s > 0.0 => SentimentLabel::Positive,
            _ => SentimentLabel::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Positive => "positive",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn categorize_messages_by_sentiment(messages: &[Message]) -> Categories<'_> {
    categorize_messages(messages, |message| {
        SentimentLabel::from_score(get_sentiment(message)).as_str()
    })
}

pub fn categorize_messages_by_keyword<'a, K: AsRef<str>>(
    messages: &'a [Message],
    keywords: &[K],
) -> Categories<'a> {
    categorize_messages(messages, |message| {
        if has_keyword(message, keywords) {
            CONTAINS_KEYWORD
        } else {
            NO_KEYWORD
        }
    })
}

pub fn categorize_messages_by_inappropriate_words<'a, K: AsRef<str>>(
    messages: &'a [Message],
    words: &[K],
) -> Categories<'a> {
    categorize_messages(messages, |message| {
        if list_inappropriate_words(message, words).is_empty() {
            NO_INAPPROPRIATE
        } else {
            CONTAINS_INAPPROPRIATE
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_score() {
        assert_eq!(SentimentLabel::from_score(-0.5), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(2.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(f64::NAN), SentimentLabel::Neutral);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(SentimentLabel::Positive.to_string(), "positive");
    }
}
