// Text analysis — tokenization, sentiment scoring, keyword detection.
//
// The Tokenizer and SentimentScorer traits are the seams for external
// analyzers; the regex tokenizer and lexicon scorer are the defaults.

pub mod denylist;
pub mod keywords;
pub mod lexicon;
pub mod tokenizer;
pub mod traits;
