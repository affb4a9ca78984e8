//! Result types produced by the scorer

use crate::Sentiment;

/// Number of tokens found in each lexicon set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexiconCounts {
    /// Tokens found in the positive set
    pub positive: usize,
    /// Tokens found in the negative set
    pub negative: usize,
    /// Tokens found in the neutral set
    pub neutral: usize,
}

impl LexiconCounts {
    /// Record one lexicon hit
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    /// Total lexicon hits across all three sets
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Hits for one set
    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }
}

/// Outcome of classifying one text
///
/// Scores form a distribution over all tokens: `neutral_score` is the residual
/// `1 - positive_score - negative_score`, so it covers both neutral-lexicon
/// words and words found in no lexicon at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentResult {
    /// Overall label
    pub sentiment: Sentiment,

    /// Heuristic confidence in the label, never above 0.9
    pub confidence: f64,

    /// Share of tokens in the positive lexicon
    pub positive_score: f64,

    /// Share of tokens in the negative lexicon
    pub negative_score: f64,

    /// Residual share: everything that is not positive or negative
    pub neutral_score: f64,

    /// Number of tokens, matched or not
    pub word_count: usize,

    /// Raw lexicon hit counts the label was chosen from
    pub counts: LexiconCounts,

    /// When the result was produced (milliseconds since Unix epoch)
    pub timestamp: u64,
}

impl SentimentResult {
    /// Result for empty or whitespace-only input
    pub fn empty(timestamp: u64) -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            confidence: 0.0,
            positive_score: 0.0,
            negative_score: 0.0,
            neutral_score: 1.0,
            word_count: 0,
            counts: LexiconCounts::default(),
            timestamp,
        }
    }
}

/// One token tagged with its lexicon polarity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTag {
    /// Lowercase token
    pub word: String,
    /// Polarity; tokens in no lexicon are neutral
    pub sentiment: Sentiment,
    /// +1, -1 or 0
    pub score: i8,
}

impl WordTag {
    /// Tag a token with a label
    pub fn new(word: impl Into<String>, sentiment: Sentiment) -> Self {
        Self {
            word: word.into(),
            sentiment,
            score: sentiment.score(),
        }
    }
}
