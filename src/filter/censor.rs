// Censor filter — a MessageFilter with the word-masking transform registered.
//
// Censoring is global: every occurrence of the word is masked, using an
// asterisk run of the same character length. The single-word censor is
// case-sensitive; the denylist censor masks every casing the denylist flags.

use crate::error::{Result, SieveError};
use crate::message::Message;
use crate::transform::{censor_inappropriate_words, censor_word};

use super::options::FilterOptions;
use super::MessageFilter;

/// Registry name of the single-word censor: `(message, [word])`.
pub const CENSOR: &str = "censor";
/// Registry name of the denylist censor, present only when a denylist is set.
pub const CENSOR_DENYLIST: &str = "censor_denylist";

/// A MessageFilter with the censor transforms registered.
pub fn censor_filter(options: FilterOptions) -> Result<MessageFilter> {
    Ok(with_censor(MessageFilter::new(options)?))
}

/// Register the censor transforms on an existing filter.
pub fn with_censor(mut filter: MessageFilter) -> MessageFilter {
    filter.registry.insert_builtin(CENSOR, |message, args| {
        let word = args.first().ok_or_else(|| {
            SieveError::InvalidInput("censor needs the word to mask".to_string())
        })?;
        Ok(censor_word(message, word))
    });

    if let Some(denylist) = filter.denylist.clone() {
        filter.registry.insert_builtin(CENSOR_DENYLIST, move |message, _args| {
            Ok(censor_inappropriate_words(message, denylist.words()))
        });
    }

    filter
}

impl MessageFilter {
    /// Mask `word` in the message with the registered censor.
    ///
    /// Fails with `UnknownFilter` on a filter that was not built with the censor.
    pub fn censor(&self, message: &Message, word: &str) -> Result<Message> {
        self.apply_filter(CENSOR, message, &[word])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::denylist::Denylist;

    #[test]
    fn test_censor_filter_registers_censor() {
        let filter = censor_filter(FilterOptions::default()).unwrap();
        assert!(filter.registry().contains(CENSOR));
        assert!(!filter.registry().contains(CENSOR_DENYLIST));
        let out = filter.censor(&Message::new("bad word here"), "bad").unwrap();
        assert_eq!(out.content, "*** word here");
    }

    #[test]
    fn test_censor_without_word_is_invalid_input() {
        let filter = censor_filter(FilterOptions::default()).unwrap();
        let err = filter.apply_filter(CENSOR, &Message::new("x"), &[]).unwrap_err();
        assert!(matches!(err, SieveError::InvalidInput(_)));
    }

    #[test]
    fn test_plain_filter_has_no_censor() {
        let err = MessageFilter::default()
            .censor(&Message::new("bad"), "bad")
            .unwrap_err();
        assert!(matches!(err, SieveError::UnknownFilter(_)));
    }

    #[test]
    fn test_denylist_censor() {
        let filter = with_censor(
            MessageFilter::builder()
                .denylist(Denylist::new(["heck", "darn"]))
                .build()
                .unwrap(),
        );
        let out = filter
            .apply_filter(CENSOR_DENYLIST, &Message::new("heck, darn it"), &[])
            .unwrap();
        assert_eq!(out.content, "****, **** it");
    }
}
