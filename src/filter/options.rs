// Filter options — keyword list and inclusive sentiment bounds.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SieveError};

/// Configuration for a MessageFilter.
///
/// Defaults accept neutral-to-positive messages (score 0 through 10) and,
/// with no keywords configured, reject everything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Keywords, matched case-insensitively as substrings. Kept in insertion order.
    pub keywords: Vec<String>,
    /// Lowest accepted sentiment score (inclusive)
    pub min_sentiment: f64,
    /// Highest accepted sentiment score (inclusive)
    pub max_sentiment: f64,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            min_sentiment: 0.0,
            max_sentiment: 10.0,
        }
    }
}

impl FilterOptions {
    pub fn validate(&self) -> Result<()> {
        validate_sentiment_range(self.min_sentiment, self.max_sentiment)
    }

    /// Drop blank keywords. An empty keyword is a substring of every message,
    /// so keeping one would turn the keyword gate off.
    pub fn without_blank_keywords(mut self) -> Self {
        self.keywords.retain(|keyword| !keyword.trim().is_empty());
        self
    }
}

/// Reject NaN bounds and inverted ranges. An inverted range would silently
/// reject every message.
pub fn validate_sentiment_range(min: f64, max: f64) -> Result<()> {
    if min.is_nan() || max.is_nan() {
        return Err(SieveError::Configuration(
            "sentiment bounds must be numbers, got NaN".to_string(),
        ));
    }
    if min > max {
        return Err(SieveError::Configuration(format!(
            "min_sentiment ({min}) is greater than max_sentiment ({max})"
        )));
    }
    Ok(())
}
