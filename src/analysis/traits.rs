// Tokenizer and sentiment scorer traits — the swap-ready abstractions.
//
// The filtering core only needs "split this text into tokens" and "give me a
// signed sentiment score for this text". The default implementations are a
// regex word tokenizer and an AFINN-style lexicon scorer, but anything that
// implements these traits can be plugged into a MessageFilter.

use serde::Serialize;

use crate::error::Result;

/// The result of scoring a single piece of text for sentiment.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SentimentResult {
    /// Signed score: negative < 0 < positive. No bounds are guaranteed.
    pub score: f64,
    /// Score divided by the number of tokens (0.0 for empty text)
    pub comparative: f64,
    /// Tokens that pushed the score up
    pub positive: Vec<String>,
    /// Tokens that pushed the score down
    pub negative: Vec<String>,
}

/// Trait for splitting text into comparable tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Trait for scoring text sentiment.
///
/// Fallible so that scorers backed by a model or a remote service can report
/// failures as `SieveError::Analysis` instead of inventing a score.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<SentimentResult>;
}
