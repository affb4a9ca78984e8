//! Tenor Domain Layer
//!
//! This crate contains the sentiment scoring core for Tenor. It has ZERO
//! runtime dependencies and defines the lexicon, the tokenizer, the
//! classification policy and the result types that every caller consumes.
//!
//! ## Key Concepts
//!
//! - **Lexicon**: three fixed word lists (positive, negative, neutral)
//! - **Token**: a lowercase word left after punctuation removal
//! - **Confidence**: a capped heuristic, never a probability
//! - **Score breakdown**: positive/negative/residual shares that sum to 1
//!
//! ## Entry Points
//!
//! ```
//! use tenor_domain::{classify, tag_words, Sentiment};
//!
//! let result = classify("terrible awful disaster");
//! assert_eq!(result.sentiment, Sentiment::Negative);
//! assert_eq!(result.confidence, 0.9);
//!
//! let tags = tag_words("good cat");
//! assert_eq!(tags[0].score, 1);
//! assert_eq!(tags[1].score, 0);
//! ```
//!
//! Both functions are pure apart from the timestamp on the result, and are
//! safe to call from any number of threads at once.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod confidence;
pub mod lexicon;
pub mod result;
pub mod scorer;
pub mod sentiment;
pub mod tokenizer;
pub mod traits;

// Re-exports for convenience
pub use lexicon::Lexicon;
pub use result::{LexiconCounts, SentimentResult, WordTag};
pub use scorer::{classify, current_timestamp_ms, tag_words, SentimentScorer};
pub use sentiment::Sentiment;
pub use tokenizer::tokenize;
pub use traits::Analyzer;
