use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analysis::denylist::Denylist;
use crate::filter::options::FilterOptions;

/// Filter settings loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy, so these can live there.
/// Command-line flags override whatever is set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// CHATSIEVE_KEYWORDS, comma-separated
    pub keywords: Vec<String>,
    /// CHATSIEVE_MIN_SENTIMENT (default 0)
    pub min_sentiment: f64,
    /// CHATSIEVE_MAX_SENTIMENT (default 10)
    pub max_sentiment: f64,
    /// CHATSIEVE_DENYLIST: path to a word list, one word per line
    pub denylist_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything is optional; unset values fall back to the filter defaults.
    pub fn load() -> Result<Self> {
        let defaults = FilterOptions::default();

        Ok(Self {
            keywords: env::var("CHATSIEVE_KEYWORDS")
                .map(|raw| parse_keyword_list(&raw))
                .unwrap_or_default(),
            min_sentiment: parse_bound("CHATSIEVE_MIN_SENTIMENT", defaults.min_sentiment)?,
            max_sentiment: parse_bound("CHATSIEVE_MAX_SENTIMENT", defaults.max_sentiment)?,
            denylist_path: env::var("CHATSIEVE_DENYLIST")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            keywords: self.keywords.clone(),
            min_sentiment: self.min_sentiment,
            max_sentiment: self.max_sentiment,
        }
    }

    /// Read the denylist file, if one is configured.
    pub fn load_denylist(&self) -> Result<Option<Denylist>> {
        let Some(path) = &self.denylist_path else {
            return Ok(None);
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read denylist {}", path.display()))?;
        Ok(Some(Denylist::parse(&text)))
    }

    /// Check that a denylist file is configured.
    /// Call this before any operation that needs the denylist.
    pub fn require_denylist(&self) -> Result<()> {
        if self.denylist_path.is_none() {
            anyhow::bail!(
                "CHATSIEVE_DENYLIST not set. Point it at a word list (one word per line)\n\
                 in your .env file, or pass --deny on the command line."
            );
        }
        Ok(())
    }
}

/// Split a comma-separated keyword list, dropping blanks.
pub fn parse_keyword_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bound(var: &str, default: f64) -> Result<f64> {
    match env::var(var) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<f64>()
            .with_context(|| format!("{var} must be a number, got {raw:?}")),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keyword_list() {
        assert_eq!(parse_keyword_list(" hello, world ,,"), vec!["hello", "world"]);
        assert!(parse_keyword_list("").is_empty());
    }

    #[test]
    fn test_filter_options_from_config() {
        let config = Config {
            keywords: vec!["hi".to_string()],
            min_sentiment: -2.0,
            max_sentiment: 2.0,
            denylist_path: None,
        };
        let options = config.filter_options();
        assert_eq!(options.keywords, vec!["hi"]);
        assert_eq!(options.min_sentiment, -2.0);
        assert!(config.require_denylist().is_err());
        assert!(config.load_denylist().unwrap().is_none());
    }
}
