// MessageFilter — the stateful façade over the analysis primitives.
//
// Holds the keyword list, the sentiment bounds, the accept/reject callbacks,
// an optional denylist, and a registry of named message transforms. `filter`
// judges one message at a time and fires exactly one callback.

pub mod censor;
pub mod options;
pub mod registry;

use tracing::{debug, info};

use crate::analysis::denylist::Denylist;
use crate::analysis::keywords::{has_keyword, within_range};
use crate::analysis::lexicon::AfinnScorer;
use crate::analysis::traits::SentimentScorer;
use crate::error::Result;
use crate::message::Message;

use options::{validate_sentiment_range, FilterOptions};
use registry::FilterRegistry;

/// Side-effecting callback run on accept or reject.
pub type Callback = Box<dyn FnMut(&Message)>;

/// Why a message was accepted or rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub accepted: bool,
    pub contains_keyword: bool,
    pub sentiment: f64,
}

pub struct MessageFilter {
    options: FilterOptions,
    on_accept: Callback,
    on_reject: Callback,
    scorer: Box<dyn SentimentScorer>,
    denylist: Option<Denylist>,
    registry: FilterRegistry,
}

impl MessageFilter {
    /// Build a filter with no-op callbacks and the default lexicon scorer.
    pub fn new(options: FilterOptions) -> Result<Self> {
        Self::builder().options(options).build()
    }

    pub fn builder() -> MessageFilterBuilder {
        MessageFilterBuilder::default()
    }

    /// Judge a message without firing any callback.
    ///
    /// A message is accepted when it contains at least one configured keyword
    /// and its sentiment score lies within the configured bounds.
    pub fn evaluate(&self, message: &Message) -> Result<Verdict> {
        let contains_keyword = has_keyword(message, &self.options.keywords);
        let sentiment = self.scorer.score(&message.content)?.score;
        let accepted = contains_keyword
            && within_range(sentiment, self.options.min_sentiment, self.options.max_sentiment);

        debug!(accepted, contains_keyword, sentiment, "Evaluated message");

        Ok(Verdict {
            accepted,
            contains_keyword,
            sentiment,
        })
    }

    /// Judge a message and invoke `on_accept` or `on_reject` exactly once.
    ///
    /// If the scorer fails, neither callback runs and the error is returned.
    pub fn filter(&mut self, message: &Message) -> Result<Verdict> {
        let verdict = self.evaluate(message)?;
        if verdict.accepted {
            (self.on_accept)(message);
        } else {
            (self.on_reject)(message);
        }
        Ok(verdict)
    }

    /// Replace the keyword list. Blank keywords are dropped.
    pub fn set_keywords<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.keywords = keywords
            .into_iter()
            .map(Into::into)
            .filter(|keyword: &String| !keyword.trim().is_empty())
            .collect();
    }

    /// Replace the sentiment bounds. On error the previous bounds stay in place.
    pub fn set_sentiment_range(&mut self, min: f64, max: f64) -> Result<()> {
        validate_sentiment_range(min, max)?;
        self.options.min_sentiment = min;
        self.options.max_sentiment = max;
        Ok(())
    }

    pub fn set_callbacks<A, R>(&mut self, on_accept: A, on_reject: R)
    where
        A: FnMut(&Message) + 'static,
        R: FnMut(&Message) + 'static,
    {
        self.on_accept = Box::new(on_accept);
        self.on_reject = Box::new(on_reject);
    }

    /// Register a named transform. An existing entry with the same name is replaced.
    pub fn add_filter<F>(&mut self, name: impl Into<String>, filter: F) -> Result<()>
    where
        F: Fn(&Message, &[&str]) -> Result<Message> + 'static,
    {
        self.registry.insert(name, filter)
    }

    /// Unregister a named transform. Unknown names are ignored.
    pub fn remove_filter(&mut self, name: &str) {
        self.registry.remove(name);
    }

    /// Run a registered transform.
    pub fn apply_filter(&self, name: &str, message: &Message, args: &[&str]) -> Result<Message> {
        self.registry.apply(name, message, args)
    }

    /// Denylisted words in the message; empty when no denylist is configured.
    pub fn inappropriate_words<'a>(&'a self, message: &Message) -> Vec<&'a str> {
        self.denylist
            .as_ref()
            .map(|denylist| denylist.matches(message))
            .unwrap_or_default()
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn denylist(&self) -> Option<&Denylist> {
        self.denylist.as_ref()
    }

    pub fn registry(&self) -> &FilterRegistry {
        &self.registry
    }
}

impl Default for MessageFilter {
    fn default() -> Self {
        Self {
            options: FilterOptions::default(),
            on_accept: Box::new(|_| {}),
            on_reject: Box::new(|_| {}),
            scorer: Box::new(AfinnScorer::new()),
            denylist: None,
            registry: FilterRegistry::new(),
        }
    }
}

impl std::fmt::Debug for MessageFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageFilter")
            .field("options", &self.options)
            .field("denylist", &self.denylist)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Accumulates filter settings; `build` validates them.
#[derive(Default)]
pub struct MessageFilterBuilder {
    options: FilterOptions,
    on_accept: Option<Callback>,
    on_reject: Option<Callback>,
    scorer: Option<Box<dyn SentimentScorer>>,
    denylist: Option<Denylist>,
}

impl MessageFilterBuilder {
    pub fn options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn sentiment_range(mut self, min: f64, max: f64) -> Self {
        self.options.min_sentiment = min;
        self.options.max_sentiment = max;
        self
    }

    pub fn on_accept(mut self, callback: impl FnMut(&Message) + 'static) -> Self {
        self.on_accept = Some(Box::new(callback));
        self
    }

    pub fn on_reject(mut self, callback: impl FnMut(&Message) + 'static) -> Self {
        self.on_reject = Some(Box::new(callback));
        self
    }

    /// Swap the default lexicon scorer for another implementation.
    pub fn scorer(mut self, scorer: impl SentimentScorer + 'static) -> Self {
        self.scorer = Some(Box::new(scorer));
        self
    }

    pub fn denylist(mut self, denylist: Denylist) -> Self {
        self.denylist = Some(denylist);
        self
    }

    /// Validate the sentiment range and drop blank keywords.
    pub fn build(mut self) -> Result<MessageFilter> {
        self.options.validate()?;
        self.options = self.options.without_blank_keywords();

        info!(
            keywords = self.options.keywords.len(),
            min_sentiment = self.options.min_sentiment,
            max_sentiment = self.options.max_sentiment,
            denylist = self.denylist.as_ref().map_or(0, Denylist::len),
            "Built message filter"
        );

        let defaults = MessageFilter::default();
        Ok(MessageFilter {
            options: self.options,
            on_accept: self.on_accept.unwrap_or(defaults.on_accept),
            on_reject: self.on_reject.unwrap_or(defaults.on_reject),
            scorer: self.scorer.unwrap_or(defaults.scorer),
            denylist: self.denylist,
            registry: defaults.registry,
        })
    }
}
