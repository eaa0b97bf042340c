// Denylist — a fixed list of flagged words.
//
// Optional. A MessageFilter can carry one (injected at construction), and the
// CLI loads one from a word-list file. Without a denylist, callers pass their
// own word list to the inappropriate-word helpers.

use super::keywords::list_inappropriate_words;
use crate::message::Message;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Denylist {
    words: Vec<String>,
}

impl Denylist {
    /// Build a denylist, dropping blank entries and duplicates (first wins).
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for word in words {
            let word = word.into().trim().to_string();
            if !word.is_empty() && !list.contains(&word) {
                list.push(word);
            }
        }
        Self { words: list }
    }

    /// Parse a word list: one word per line, `#` starts a comment line.
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Denylisted words found in the message.
    pub fn matches<'a>(&'a self, message: &Message) -> Vec<&'a str> {
        list_inappropriate_words(message, &self.words)
    }
}
