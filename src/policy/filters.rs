// Named filtering policies built on `filter_messages`.

use crate::analysis::keywords::{
    get_sentiment, has_keyword, list_inappropriate_words, within_range,
};
use crate::collection::filter_messages;
use crate::message::Message;

/// Messages containing at least one keyword (case-insensitive substring).
pub fn filter_messages_by_keyword<'a, K: AsRef<str>>(
    messages: &'a [Message],
    keywords: &[K],
) -> Vec<&'a Message> {
    filter_messages(messages, |message| has_keyword(message, keywords))
}

/// Messages whose sentiment score lies in `[min, max]`.
pub fn filter_messages_by_sentiment(messages: &[Message], min: f64, max: f64) -> Vec<&Message> {
    filter_messages(messages, |message| within_range(get_sentiment(message), min, max))
}

/// Messages that contain none of the listed words.
pub fn filter_messages_by_inappropriate_words<'a, K: AsRef<str>>(
    messages: &'a [Message],
    words: &[K],
) -> Vec<&'a Message> {
    filter_messages(messages, |message| list_inappropriate_words(message, words).is_empty())
}

/// Messages whose category is exactly `category`. Uncategorized messages never match.
pub fn filter_messages_by_category<'a>(
    messages: &'a [Message],
    category: &str,
) -> Vec<&'a Message> {
    filter_messages(messages, |message| message.category.as_deref() == Some(category))
}

/// Messages whose category is one of `categories`.
pub fn filter_messages_by_categories<'a, K: AsRef<str>>(
    messages: &'a [Message],
    categories: &[K],
) -> Vec<&'a Message> {
    filter_messages(messages, |message| {
        message
            .category
            .as_deref()
            .is_some_and(|category| categories.iter().any(|c| c.as_ref() == category))
    })
}
