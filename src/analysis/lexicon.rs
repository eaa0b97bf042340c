// AFINN-style lexicon sentiment scorer — the default SentimentScorer.
//
// Every known word carries an integer valence from -5 (very negative) to +5
// (very positive). A text's score is the sum of the valences of its tokens.
// A valence flips sign when the token right before it is a negator, so
// "not good" scores -3 rather than +3.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::tokenizer::WordTokenizer;
use super::traits::{SentimentResult, SentimentScorer, Tokenizer};
use crate::error::Result;

const AFINN_WORDS: &[(&str, i32)] = &[
    ("abandon", -2),
    ("abandoned", -2),
    ("abuse", -3),
    ("abusive", -3),
    ("accept", 1),
    ("accepted", 1),
    ("admire", 3),
    ("adorable", 3),
    ("adore", 3),
    ("afraid", -2),
    ("aggressive", -2),
    ("agree", 1),
    ("alarmed", -2),
    ("amazing", 4),
    ("anger", -3),
    ("angry", -3),
    ("annoy", -2),
    ("annoyed", -2),
    ("annoying", -2),
    ("anxious", -2),
    ("appreciate", 2),
    ("appreciated", 2),
    ("awesome", 4),
    ("awful", -3),
    ("bad", -3),
    ("beautiful", 3),
    ("best", 3),
    ("better", 2),
    ("bitch", -5),
    ("blame", -2),
    ("bored", -2),
    ("boring", -3),
    ("brilliant", 4),
    ("broken", -1),
    ("calm", 2),
    ("care", 2),
    ("cheer", 2),
    ("clean", 2),
    ("clever", 2),
    ("cool", 1),
    ("crap", -3),
    ("crazy", -2),
    ("cruel", -3),
    ("cry", -1),
    ("damn", -4),
    ("dead", -3),
    ("death", -2),
    ("delight", 3),
    ("delighted", 3),
    ("dirty", -2),
    ("disappointed", -2),
    ("disaster", -2),
    ("disgusting", -3),
    ("dislike", -2),
    ("dumb", -3),
    ("easy", 1),
    ("enjoy", 2),
    ("enjoyed", 2),
    ("evil", -3),
    ("excellent", 3),
    ("excited", 3),
    ("fail", -2),
    ("failed", -2),
    ("failure", -2),
    ("fantastic", 4),
    ("fear", -2),
    ("fine", 2),
    ("fool", -2),
    ("free", 1),
    ("friendly", 2),
    ("fun", 4),
    ("funny", 4),
    ("glad", 3),
    ("good", 3),
    ("great", 3),
    ("greatest", 3),
    ("happy", 3),
    ("harm", -2),
    ("hate", -3),
    ("hated", -3),
    ("hates", -3),
    ("hell", -4),
    ("help", 2),
    ("helpful", 2),
    ("hope", 2),
    ("horrible", -3),
    ("hurt", -2),
    ("idiot", -3),
    ("ill", -2),
    ("interesting", 2),
    ("joy", 3),
    ("kill", -3),
    ("kind", 2),
    ("like", 2),
    ("liked", 2),
    ("lol", 3),
    ("lonely", -2),
    ("lost", -3),
    ("love", 3),
    ("loved", 3),
    ("lovely", 3),
    ("loves", 3),
    ("mad", -3),
    ("mess", -2),
    ("miss", -2),
    ("nice", 3),
    ("no", -1),
    ("pain", -2),
    ("pathetic", -2),
    ("perfect", 3),
    ("please", 1),
    ("pleased", 3),
    ("poor", -2),
    ("pretty", 1),
    ("problem", -2),
    ("rude", -2),
    ("sad", -2),
    ("scared", -2),
    ("shit", -4),
    ("sick", -2),
    ("smart", 1),
    ("sorry", -1),
    ("stupid", -2),
    ("super", 3),
    ("sweet", 2),
    ("terrible", -3),
    ("thank", 2),
    ("thanks", 2),
    ("trouble", -2),
    ("ugly", -3),
    ("upset", -2),
    ("useless", -2),
    ("weak", -2),
    ("win", 4),
    ("wonderful", 4),
    ("worry", -3),
    ("worse", -3),
    ("worst", -3),
    ("wow", 4),
    ("wrong", -2),
    ("yes", 1),
];

const NEGATORS: &[&str] = &[
    "aint", "ain't", "arent", "aren't", "cannot", "cant", "can't", "couldnt", "couldn't",
    "didnt", "didn't", "doesnt", "doesn't", "dont", "don't", "hadnt", "hadn't", "hasnt",
    "hasn't", "havent", "haven't", "isnt", "isn't", "never", "none", "nope", "nor", "not",
    "nothing", "nowhere", "shouldnt", "shouldn't", "wasnt", "wasn't", "werent", "weren't",
    "without", "wont", "won't", "wouldnt", "wouldn't",
];

static AFINN: LazyLock<HashMap<&'static str, i32>> =
    LazyLock::new(|| AFINN_WORDS.iter().copied().collect());

/// Lexicon-based scorer. Zero setup, runs locally, never fails.
pub struct AfinnScorer {
    tokenizer: Box<dyn Tokenizer>,
    /// Caller-supplied valences, consulted before the built-in lexicon
    extra: HashMap<String, i32>,
}

impl Default for AfinnScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl AfinnScorer {
    pub fn new() -> Self {
        Self::with_tokenizer(Box::new(WordTokenizer::for_sentiment()))
    }

    /// Use a different tokenizer. It should lowercase its output, since the
    /// lexicon keys are lowercase.
    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        Self {
            tokenizer,
            extra: HashMap::new(),
        }
    }

    /// Add or override the valence of a single word.
    pub fn with_word(mut self, word: impl Into<String>, valence: i32) -> Self {
        self.extra.insert(word.into().to_lowercase(), valence);
        self
    }

    fn valence(&self, token: &str) -> Option<i32> {
        self.extra
            .get(token)
            .or_else(|| AFINN.get(token))
            .copied()
    }

    /// Infallible scoring used by the free-standing helpers.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        let tokens = self.tokenizer.tokenize(text);
        let mut result = SentimentResult::default();

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut valence) = self.valence(token) else {
                continue;
            };
            if i > 0 && NEGATORS.contains(&tokens[i - 1].as_str()) {
                valence = -valence;
            }

            result.score += f64::from(valence);
            if valence > 0 {
                result.positive.push(token.clone());
            } else if valence < 0 {
                result.negative.push(token.clone());
            }
        }

        if !tokens.is_empty() {
            result.comparative = result.score / tokens.len() as f64;
        }
        result
    }
}

impl SentimentScorer for AfinnScorer {
    fn score(&self, text: &str) -> Result<SentimentResult> {
        Ok(self.analyze(text))
    }
}
