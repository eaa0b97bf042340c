// Error taxonomy for the filtering core.
//
// The library returns typed errors so callers can tell a bad message apart
// from a bad configuration or a failing scorer. The binary wraps these in
// anyhow like everything else at the top level.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SieveError {
    /// A message (or a filter argument) is malformed, e.g. missing `content`.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Rejected filter configuration, e.g. `min_sentiment > max_sentiment`.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The tokenizer or sentiment scorer could not analyze the text.
    #[error("analysis failed: {0}")]
    Analysis(String),

    #[error("no filter registered under {0:?}")]
    UnknownFilter(String),

    #[error("malformed message JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SieveError>;
