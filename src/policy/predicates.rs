// Predicate builders — reusable single-message checks.
//
// Each builder captures its argument and returns a closure over one message.
// `depends_on` composes them: the callback runs only when every predicate
// holds, which is how conditional pipelines are assembled.

use crate::analysis::keywords::{get_sentiment, has_keyword, within_range};
use crate::message::Message;

/// A boxed predicate, for holding heterogeneous predicates in one list.
pub type Predicate<'a> = Box<dyn Fn(&Message) -> bool + 'a>;

pub fn is_keyword(keyword: impl Into<String>) -> impl Fn(&Message) -> bool {
    let keywords = [keyword.into()];
    move |message| has_keyword(message, &keywords)
}

pub fn is_category(category: impl Into<String>) -> impl Fn(&Message) -> bool {
    let category = category.into();
    move |message| message.category.as_deref() == Some(category.as_str())
}

pub fn is_sentiment(min: f64, max: f64) -> impl Fn(&Message) -> bool {
    move |message| within_range(get_sentiment(message), min, max)
}

/// Identity check: true only for this exact message, not for an equal copy.
pub fn is_message(target: &Message) -> impl Fn(&Message) -> bool + '_ {
    move |message| std::ptr::eq(target, message)
}

/// Structural check on `content` only.
pub fn is_message_object(target: &Message) -> impl Fn(&Message) -> bool + '_ {
    move |message| message.content == target.content
}

/// Identity membership in a set of messages.
pub fn is_message_array<'a>(targets: &'a [&'a Message]) -> impl Fn(&Message) -> bool + 'a {
    move |message| targets.iter().any(|target| std::ptr::eq(*target, message))
}

/// True when the message content equals `text` exactly.
pub fn is_message_string(text: impl Into<String>) -> impl Fn(&Message) -> bool {
    let text = text.into();
    move |message| message.content == text
}

/// Invoke `callback` for a message only when every predicate accepts it.
///
/// Predicates are checked in order and stop at the first rejection.
/// An empty predicate list always invokes the callback.
pub fn depends_on<'a, F>(
    predicates: Vec<Predicate<'a>>,
    mut callback: F,
) -> impl FnMut(&Message) + 'a
where
    F: FnMut(&Message) + 'a,
{
    move |message| {
        if predicates.iter().all(|predicate| predicate(message)) {
            callback(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_is_message_is_identity_not_equality() {
        let a = Message::new("same");
        let b = Message::new("same");
        let check = is_message(&a);
        assert!(check(&a));
        assert!(!check(&b));
    }

    #[test]
    fn test_is_message_object_compares_content() {
        let a = Message::new("same").with_category("x");
        let b = Message::new("same");
        assert!(is_message_object(&a)(&b));
    }

    #[test]
    fn test_depends_on_requires_all() {
        let calls = Cell::new(0);
        let predicates: Vec<Predicate> =
            vec![Box::new(is_keyword("hello")), Box::new(is_category("greeting"))];
        let mut gated = depends_on(predicates, |_| calls.set(calls.get() + 1));

        gated(&Message::new("hello there").with_category("greeting"));
        assert_eq!(calls.get(), 1);

        gated(&Message::new("hello there"));
        gated(&Message::new("bye").with_category("greeting"));
        assert_eq!(calls.get(), 1);
    }
}
