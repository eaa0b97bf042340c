// Generic operations over a batch of messages.
//
// Both operators borrow from the input slice, so the messages they hand back
// are the caller's own messages (identity predicates keep working on them).

use indexmap::IndexMap;

use crate::message::Message;

/// Category label -> messages, buckets in first-seen order.
pub type Categories<'a> = IndexMap<String, Vec<&'a Message>>;

/// Keep the messages the predicate accepts, in input order.
/// The predicate runs exactly once per message, left to right.
pub fn filter_messages<'a, P>(messages: &'a [Message], mut predicate: P) -> Vec<&'a Message>
where
    P: FnMut(&Message) -> bool,
{
    messages.iter().filter(|&message| predicate(message)).collect()
}

/// Bucket every message under the label the classifier returns.
///
/// The classifier runs exactly once per message, left to right. Buckets are
/// created on first use, and each bucket keeps input order.
pub fn categorize_messages<'a, C, L>(messages: &'a [Message], mut classifier: C) -> Categories<'a>
where
    C: FnMut(&Message) -> L,
    L: AsRef<str>,
{
    let mut categories = Categories::new();
    for message in messages {
        let label = classifier(message);
        match categories.get_mut(label.as_ref()) {
            Some(bucket) => bucket.push(message),
            None => {
                categories.insert(label.as_ref().to_string(), vec![message]);
            }
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> Vec<Message> {
        ["one", "two", "three", "four"].into_iter().map(Message::new).collect()
    }

    #[test]
    fn test_filter_preserves_order() {
        let messages = batch();
        let kept = filter_messages(&messages, |m| m.content.len() == 3);
        let contents: Vec<&str> = kept.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "two"]);
    }

    #[test]
    fn test_filter_returns_input_references() {
        let messages = batch();
        let kept = filter_messages(&messages, |_| true);
        assert!(std::ptr::eq(kept[0], &messages[0]));
    }

    #[test]
    fn test_categorize_bucket_order_is_first_seen() {
        let messages = batch();
        let buckets = categorize_messages(&messages, |m| {
            if m.content.len() > 3 {
                "long"
            } else {
                "short"
            }
        });
        let labels: Vec<&str> = buckets.keys().map(String::as_str).collect();
        assert_eq!(labels, vec!["short", "long"]);
        assert_eq!(buckets["short"].len(), 2);
        assert_eq!(buckets["long"][0].content, "three");
    }

    #[test]
    fn test_categorize_empty_input() {
        assert!(categorize_messages(&[], |_| "x").is_empty());
    }
}
