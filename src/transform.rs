// Content transforms — keyword replacement and censoring.
//
// Every transform returns a new Message built with `Message::with_content`;
// the input is only borrowed. Keyword replacement and single-word censoring
// are case-sensitive. Denylist censoring masks whatever the denylist flags,
// so it ignores case like `list_inappropriate_words`.

use std::ops::Range;

use crate::message::Message;

/// Replace the first occurrence of each keyword, keywords applied in order.
/// Later keywords see the output of earlier replacements. Empty keywords are skipped.
pub fn replace_keywords<K: AsRef<str>>(
    message: &Message,
    keywords: &[K],
    replacement: &str,
) -> Message {
    let mut content = message.content.clone();
    for keyword in keywords.iter().map(AsRef::as_ref) {
        if !keyword.is_empty() {
            content = content.replacen(keyword, replacement, 1);
        }
    }
    message.with_content(content)
}

/// Asterisk run as long as the word, counted in characters.
pub fn mask(word: &str) -> String {
    "*".repeat(word.chars().count())
}

/// Replace every occurrence of `word` with an equal-length run of asterisks.
pub fn censor_word(message: &Message, word: &str) -> Message {
    if word.is_empty() {
        return message.clone();
    }
    message.with_content(message.content.replace(word, &mask(word)))
}

/// Mask every occurrence of `word`, ignoring case. Each mask is as long as
/// the text it covers, so "HECK" and "heck" both become "****".
pub fn censor_word_ignore_case(message: &Message, word: &str) -> Message {
    let spans = match_spans_ignore_case(&message.content, word);
    if spans.is_empty() {
        return message.clone();
    }

    let mut content = String::with_capacity(message.content.len());
    let mut last = 0;
    for span in spans {
        content.push_str(&message.content[last..span.start]);
        content.push_str(&mask(&message.content[span.clone()]));
        last = span.end;
    }
    content.push_str(&message.content[last..]);
    message.with_content(content)
}

/// Censor every listed word wherever it occurs, in any case.
pub fn censor_inappropriate_words<K: AsRef<str>>(message: &Message, words: &[K]) -> Message {
    words.iter().fold(message.clone(), |current, word| {
        censor_word_ignore_case(&current, word.as_ref())
    })
}

/// Byte ranges of non-overlapping case-insensitive matches, left to right.
fn match_spans_ignore_case(text: &str, word: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
    let mut spans = Vec::new();
    if needle.is_empty() {
        return spans;
    }

    let mut start = 0;
    while let Some(c) = text[start..].chars().next() {
        match match_len_at(&text[start..], &needle) {
            Some(len) => {
                spans.push(start..start + len);
                start += len;
            }
            None => start += c.len_utf8(),
        }
    }
    spans
}

/// Length in bytes of the prefix of `text` whose lowercase form is `needle`.
fn match_len_at(text: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (offset, c) in text.char_indices() {
        for lower in c.to_lowercase() {
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(offset + c.len_utf8());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_keywords_first_occurrence_only() {
        let msg = Message::new("spam spam eggs");
        let out = replace_keywords(&msg, &["spam"], "ham");
        assert_eq!(out.content, "ham spam eggs");
    }

    #[test]
    fn test_replace_keywords_in_order() {
        let msg = Message::new("a b");
        let out = replace_keywords(&msg, &["a", "b"], "X");
        assert_eq!(out.content, "X X");
    }

    #[test]
    fn test_replace_keywords_is_case_sensitive() {
        let msg = Message::new("Spam");
        assert_eq!(replace_keywords(&msg, &["spam"], "ham").content, "Spam");
    }

    #[test]
    fn test_censor_word_scenario() {
        let out = censor_word(&Message::new("bad word here"), "bad");
        assert_eq!(out.content, "*** word here");
    }

    #[test]
    fn test_censor_word_is_global() {
        let out = censor_word(&Message::new("bad, bad dog"), "bad");
        assert_eq!(out.content, "***, *** dog");
    }

    #[test]
    fn test_mask_counts_characters_not_bytes() {
        assert_eq!(mask("café"), "****");
    }

    #[test]
    fn test_censor_empty_word_is_noop() {
        let msg = Message::new("unchanged");
        assert_eq!(censor_word(&msg, ""), msg);
    }

    #[test]
    fn test_censor_word_ignore_case_masks_every_casing() {
        let out = censor_word_ignore_case(&Message::new("Heck, HECK and heck"), "heck");
        assert_eq!(out.content, "****, **** and ****");
    }

    #[test]
    fn test_censor_word_ignore_case_keeps_multibyte_text_intact() {
        let out = censor_word_ignore_case(&Message::new("Ärger über ÄRGER"), "ärger");
        assert_eq!(out.content, "***** über *****");
    }

    #[test]
    fn test_censor_word_ignore_case_empty_word_is_noop() {
        let msg = Message::new("unchanged");
        assert_eq!(censor_word_ignore_case(&msg, ""), msg);
    }

    #[test]
    fn test_censor_inappropriate_words_ignores_case() {
        let out = censor_inappropriate_words(&Message::new("oh HECK, Darn"), &["heck", "darn"]);
        assert_eq!(out.content, "oh ****, ****");
    }

    #[test]
    fn test_censor_inappropriate_words() {
        let out = censor_inappropriate_words(&Message::new("heck and darn"), &["heck", "darn"]);
        assert_eq!(out.content, "**** and ****");
    }
}
