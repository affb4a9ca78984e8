//! Sentiment scorer - classification and word tagging over a lexicon
//!
//! Classification runs in four steps:
//! 1. Tokenize (lowercase, strip punctuation, split on whitespace)
//! 2. Count lexicon hits per set
//! 3. Pick the label by strict majority and derive its confidence
//! 4. Build the score breakdown over all tokens
//!
//! The scorer holds nothing but a shared reference to an immutable lexicon,
//! so it is `Copy`, `Send` and `Sync`.

use crate::confidence::{compute_confidence, select_label, NO_HITS};
use crate::traits::Analyzer;
use crate::{tokenize, Lexicon, LexiconCounts, Sentiment, SentimentResult, WordTag};
use std::time::{SystemTime, UNIX_EPOCH};

/// Current timestamp in milliseconds since Unix epoch
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Lexicon-based sentiment scorer
///
/// # Examples
///
/// ```
/// use tenor_domain::{Sentiment, SentimentScorer};
///
/// let scorer = SentimentScorer::builtin();
/// let result = scorer.classify("What an amazing, wonderful day");
/// assert_eq!(result.sentiment, Sentiment::Positive);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SentimentScorer<'l> {
    lexicon: &'l Lexicon,
}

impl<'l> SentimentScorer<'l> {
    /// Create a scorer over the given lexicon
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Self { lexicon }
    }

    /// Classify a text
    pub fn classify(&self, text: &str) -> SentimentResult {
        let timestamp = current_timestamp_ms();

        if text.trim().is_empty() {
            return SentimentResult::empty(timestamp);
        }

        let tokens = tokenize(text);
        let total_words = tokens.len();

        if total_words == 0 {
            // Text was supplied but carried no words (punctuation only)
            return SentimentResult {
                confidence: NO_HITS,
                ..SentimentResult::empty(timestamp)
            };
        }

        let counts = self.count(&tokens);
        let sentiment = select_label(&counts);
        let confidence = compute_confidence(sentiment, &counts, total_words);

        let total = total_words as f64;
        let positive_score = counts.positive as f64 / total;
        let negative_score = counts.negative as f64 / total;
        // Residual; clamped so rounding cannot push it below zero
        let neutral_score = (1.0 - positive_score - negative_score).max(0.0);

        SentimentResult {
            sentiment,
            confidence,
            positive_score,
            negative_score,
            neutral_score,
            word_count: total_words,
            counts,
            timestamp,
        }
    }

    /// Tag every token of a text with its lexicon polarity
    ///
    /// Tokens in no lexicon are tagged neutral with score 0.
    pub fn tag_words(&self, text: &str) -> Vec<WordTag> {
        tokenize(text)
            .into_iter()
            .map(|word| {
                let sentiment = self.lexicon.lookup(&word).unwrap_or(Sentiment::Neutral);
                WordTag::new(word, sentiment)
            })
            .collect()
    }

    fn count(&self, tokens: &[String]) -> LexiconCounts {
        let mut counts = LexiconCounts::default();
        for sentiment in tokens.iter().filter_map(|t| self.lexicon.lookup(t)) {
            counts.record(sentiment);
        }
        counts
    }
}

impl SentimentScorer<'static> {
    /// Create a scorer over the built-in lexicon
    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl Default for SentimentScorer<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Analyzer for SentimentScorer<'_> {
    fn classify(&self, text: &str) -> SentimentResult {
        SentimentScorer::classify(self, text)
    }

    fn tag_words(&self, text: &str) -> Vec<WordTag> {
        SentimentScorer::tag_words(self, text)
    }
}

/// Classify a text with the built-in lexicon
pub fn classify(text: &str) -> SentimentResult {
    SentimentScorer::builtin().classify(text)
}

/// Tag the words of a text with the built-in lexicon
pub fn tag_words(text: &str) -> Vec<WordTag> {
    SentimentScorer::builtin().tag_words(text)
}
