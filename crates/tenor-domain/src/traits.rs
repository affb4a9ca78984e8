//! Trait definitions for collaborators
//!
//! Callers (CLI, services) depend on this trait rather than on a concrete
//! scorer, so they can be driven by a scorer over any lexicon.

use crate::{SentimentResult, WordTag};

/// Anything that can score text
///
/// Implemented by [`crate::SentimentScorer`]. Implementations must be total:
/// every input string yields a well-formed result.
pub trait Analyzer {
    /// Classify a text as a whole
    fn classify(&self, text: &str) -> SentimentResult;

    /// Tag every token of a text, in input order
    fn tag_words(&self, text: &str) -> Vec<WordTag>;
}

impl<A: Analyzer + ?Sized> Analyzer for &A {
    fn classify(&self, text: &str) -> SentimentResult {
        (**self).classify(text)
    }

    fn tag_words(&self, text: &str) -> Vec<WordTag> {
        (**self).tag_words(text)
    }
}
