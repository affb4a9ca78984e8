//! Confidence module
//!
//! Confidence is a saturating linear function of lexicon-hit density. It is
//! capped below 1.0 for every label, and neutral texts without a single
//! lexicon hit get a fixed floor.

use crate::{LexiconCounts, Sentiment};

/// Upper bound for positive and negative labels
pub const POLAR_CAP: f64 = 0.9;

/// Multiplier applied to the polar hit density
pub const POLAR_GAIN: f64 = 2.0;

/// Upper bound for the neutral label
pub const NEUTRAL_CAP: f64 = 0.8;

/// Base confidence for a neutral label with at least one lexicon hit
pub const NEUTRAL_BASE: f64 = 0.3;

/// Confidence for a neutral label when no lexicon word was found
pub const NO_HITS: f64 = 0.5;

/// Pick the label by strict majority of lexicon counts
///
/// Ties of any kind, including 0/0/0, resolve to neutral.
pub fn select_label(counts: &LexiconCounts) -> Sentiment {
    let LexiconCounts {
        positive,
        negative,
        neutral,
    } = *counts;

    if positive > negative && positive > neutral {
        Sentiment::Positive
    } else if negative > positive && negative > neutral {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Compute the confidence of `label` given the counts over `total_words`
///
/// `total_words` must be non-zero; the classifier handles zero-token input
/// before calling this.
pub fn compute_confidence(label: Sentiment, counts: &LexiconCounts, total_words: usize) -> f64 {
    let total = total_words as f64;
    match label {
        Sentiment::Positive | Sentiment::Negative => {
            (counts.get(label) as f64 / total * POLAR_GAIN).min(POLAR_CAP)
        }
        Sentiment::Neutral if counts.total() == 0 => NO_HITS,
        Sentiment::Neutral => (NEUTRAL_BASE + counts.neutral as f64 / total).min(NEUTRAL_CAP),
    }
}
