// Unit tests for the analysis primitives and transforms.
//
// Tests isolated pure functions: has_keyword matching rules, lexicon scoring
// through the SentimentScorer trait, and the immutability of transforms.

use chatsieve::analysis::keywords::{
    get_sentiment, get_sentiment_with, has_keyword, list_inappropriate_words,
};
use chatsieve::analysis::lexicon::AfinnScorer;
use chatsieve::analysis::tokenizer::WordTokenizer;
use chatsieve::analysis::traits::{SentimentResult, SentimentScorer, Tokenizer};
use chatsieve::transform::{censor_word, mask, replace_keywords};
use chatsieve::{Message, SieveError};

// ============================================================
// has_keyword — case-insensitive substring matching
// ============================================================

#[test]
fn keyword_matches_iff_some_keyword_is_a_substring() {
    let msg = Message::new("The Quick brown fox");
    let cases: Vec<(Vec<&str>, bool)> = vec![
        (vec!["quick"], true),
        (vec!["QUICK", "slow"], true),
        (vec!["own f"], true),
        (vec!["slow", "cat"], false),
        (vec![], false),
    ];
    for (keywords, expected) in cases {
        assert_eq!(has_keyword(&msg, &keywords), expected, "keywords {keywords:?}");
    }
}

#[test]
fn keyword_matching_accepts_owned_strings() {
    let keywords = vec!["fox".to_string()];
    assert!(has_keyword(&Message::new("a fox"), &keywords));
}

#[test]
fn keyword_matching_handles_non_ascii_case() {
    assert!(has_keyword(&Message::new("ÉCOLE"), &["école"]));
}

#[test]
fn inappropriate_words_are_reported_in_list_order() {
    let msg = Message::new("Heck, that darn thing");
    assert_eq!(
        list_inappropriate_words(&msg, &["darn", "heck", "gosh"]),
        vec!["darn", "heck"]
    );
}

// ============================================================
// Sentiment scoring
// ============================================================

#[test]
fn default_sentiment_sign_convention() {
    assert!(get_sentiment(&Message::new("This is wonderful, thanks!")) > 0.0);
    assert!(get_sentiment(&Message::new("This is awful and stupid")) < 0.0);
    assert_eq!(get_sentiment(&Message::new("The meeting is at noon")), 0.0);
}

#[test]
fn scorer_trait_matches_analyze() {
    let scorer = AfinnScorer::new();
    let via_trait = scorer.score("good and bad and great").unwrap();
    let direct = scorer.analyze("good and bad and great");
    assert_eq!(via_trait.score, direct.score);
    assert_eq!(via_trait.score, 3.0);
}

#[test]
fn comparative_is_score_per_token() {
    let result = AfinnScorer::new().analyze("good good bad ok");
    // 3 + 3 - 3 = 3 over 4 tokens
    assert!((result.comparative - 0.75).abs() < 1e-9, "got {}", result.comparative);
}

#[test]
fn negated_contraction_flips_score() {
    let result = AfinnScorer::new().analyze("I don't love it");
    assert_eq!(result.score, -3.0);
}

struct FixedScorer(f64);

impl SentimentScorer for FixedScorer {
    fn score(&self, _text: &str) -> chatsieve::Result<SentimentResult> {
        Ok(SentimentResult {
            score: self.0,
            ..Default::default()
        })
    }
}

struct BrokenScorer;

impl SentimentScorer for BrokenScorer {
    fn score(&self, _text: &str) -> chatsieve::Result<SentimentResult> {
        Err(SieveError::Analysis("model not loaded".to_string()))
    }
}

#[test]
fn custom_scorer_is_used() {
    let score = get_sentiment_with(&Message::new("anything"), &FixedScorer(-7.5)).unwrap();
    assert_eq!(score, -7.5);
}

#[test]
fn scorer_failure_surfaces_as_analysis_error() {
    let err = get_sentiment_with(&Message::new("anything"), &BrokenScorer).unwrap_err();
    assert!(matches!(err, SieveError::Analysis(_)));
}

#[test]
fn afinn_scorer_accepts_custom_tokenizer() {
    // A case-preserving tokenizer misses the lowercase lexicon keys for "GOOD"
    let scorer = AfinnScorer::with_tokenizer(Box::new(WordTokenizer::new()));
    assert_eq!(scorer.analyze("GOOD").score, 0.0);
    assert_eq!(scorer.analyze("good").score, 3.0);
}

#[test]
fn word_tokenizer_drops_punctuation() {
    let tokens = WordTokenizer::new().tokenize("hello, world!!");
    assert_eq!(tokens, vec!["hello", "world"]);
}

// ============================================================
// Transforms never mutate their input
// ============================================================

#[test]
fn replace_keywords_leaves_input_untouched() {
    let input = Message::from_json(r#"{"content":"foo bar foo","category":"x","id":1}"#).unwrap();
    let output = replace_keywords(&input, &["foo"], "baz");

    assert_eq!(input.content, "foo bar foo");
    assert_eq!(output.content, "baz bar foo");
    assert_eq!(output.category, input.category);
    assert_eq!(output.extra, input.extra);
}

#[test]
fn censor_mask_length_matches_word_length() {
    for word in ["a", "bad", "naïve", "日本"] {
        assert_eq!(mask(word).chars().count(), word.chars().count());
        let out = censor_word(&Message::new(format!("x {word} y")), word);
        assert_eq!(out.content, format!("x {} y", mask(word)));
    }
}

#[test]
fn censor_is_case_sensitive() {
    let out = censor_word(&Message::new("Bad bad"), "bad");
    assert_eq!(out.content, "Bad ***");
}
