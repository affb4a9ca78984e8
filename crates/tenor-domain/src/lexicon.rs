//! Lexicon module - the static word lists behind every score
//!
//! A lexicon holds three word sets, one per [`Sentiment`]. Lookups check the
//! sets in a fixed order (positive, negative, neutral) and the first set that
//! contains the word wins. The built-in lists are disjoint; injected lexicons
//! may not be, and [`Lexicon::overlaps`] reports any collisions.

use crate::Sentiment;
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

/// Built-in positive words
pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "awesome",
    "love", "loved", "like", "happy", "joy", "beautiful", "perfect", "best",
    "brilliant", "outstanding", "superb", "delightful", "pleased", "satisfied",
    "glad", "nice", "positive", "fabulous", "incredible", "marvelous", "terrific",
    "enjoy", "enjoyed", "exciting", "impressive", "helpful", "friendly", "success",
    "successful", "win", "recommend", "pleasant", "cheerful",
];

/// Built-in negative words
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "hate", "hated", "sad", "angry",
    "disappointed", "disappointing", "poor", "worst", "ugly", "disgusting",
    "annoying", "frustrating", "boring", "useless", "broken", "fail", "failure",
    "disaster", "dreadful", "pathetic", "miserable", "upset", "unhappy",
    "negative", "painful", "wrong", "problem", "rude", "slow", "waste", "lousy",
    "mediocre", "regret", "nasty", "inferior", "unacceptable",
];

/// Built-in neutral words
pub const NEUTRAL_WORDS: &[&str] = &[
    "okay", "ok", "fine", "average", "normal", "regular", "standard", "typical",
    "ordinary", "moderate", "fair", "neutral", "decent", "acceptable", "adequate",
    "reasonable", "common", "usual", "plain", "basic", "medium", "expected",
    "routine", "sufficient", "passable",
];

static BUILTIN: LazyLock<Lexicon> =
    LazyLock::new(|| Lexicon::new(POSITIVE_WORDS, NEGATIVE_WORDS, NEUTRAL_WORDS));

/// Three polarity word sets
///
/// Words are stored lowercase; membership tests are exact string matches on
/// lowercase tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    neutral: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from three word lists
    ///
    /// Words are lowercased and trimmed; blank entries are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenor_domain::{Lexicon, Sentiment};
    ///
    /// let lexicon = Lexicon::new(["Sunny"], ["rainy"], ["cloudy"]);
    /// assert_eq!(lexicon.lookup("sunny"), Some(Sentiment::Positive));
    /// assert_eq!(lexicon.lookup("foggy"), None);
    /// ```
    pub fn new<P, N, U>(positive: P, negative: N, neutral: U) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
        U: IntoIterator,
        U::Item: AsRef<str>,
    {
        Self {
            positive: normalize(positive),
            negative: normalize(negative),
            neutral: normalize(neutral),
        }
    }

    /// The process-wide built-in lexicon, loaded on first use
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Look up a lowercase token, first match wins
    pub fn lookup(&self, word: &str) -> Option<Sentiment> {
        Sentiment::ALL
            .into_iter()
            .find(|&sentiment| self.set(sentiment).contains(word))
    }

    /// Check whether a word belongs to one particular set
    pub fn contains(&self, sentiment: Sentiment, word: &str) -> bool {
        self.set(sentiment).contains(word)
    }

    /// Number of words in one set
    pub fn len(&self, sentiment: Sentiment) -> usize {
        self.set(sentiment).len()
    }

    /// Whether all three sets are empty
    pub fn is_empty(&self) -> bool {
        Sentiment::ALL.into_iter().all(|s| self.set(s).is_empty())
    }

    /// Words of one set, sorted alphabetically
    pub fn words(&self, sentiment: Sentiment) -> Vec<&str> {
        let mut words: Vec<&str> = self.set(sentiment).iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Words that appear in more than one set, with every set they appear in
    ///
    /// Lookups resolve such words to the first listed set.
    pub fn overlaps(&self) -> BTreeMap<&str, Vec<Sentiment>> {
        let mut seen: BTreeMap<&str, Vec<Sentiment>> = BTreeMap::new();
        for sentiment in Sentiment::ALL {
            for word in self.set(sentiment) {
                seen.entry(word.as_str()).or_default().push(sentiment);
            }
        }
        seen.retain(|_, sets| sets.len() > 1);
        seen
    }

    fn set(&self, sentiment: Sentiment) -> &HashSet<String> {
        match sentiment {
            Sentiment::Positive => &self.positive,
            Sentiment::Negative => &self.negative,
            Sentiment::Neutral => &self.neutral,
        }
    }
}

fn normalize<I>(words: I) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_disjoint() {
        assert!(Lexicon::builtin().overlaps().is_empty());
    }

    #[test]
    fn test_builtin_sizes_match_lists() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.len(Sentiment::Positive), POSITIVE_WORDS.len());
        assert_eq!(lexicon.len(Sentiment::Negative), NEGATIVE_WORDS.len());
        assert_eq!(lexicon.len(Sentiment::Neutral), NEUTRAL_WORDS.len());
    }

    #[test]
    fn test_builtin_lookup() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.lookup("amazing"), Some(Sentiment::Positive));
        assert_eq!(lexicon.lookup("disaster"), Some(Sentiment::Negative));
        assert_eq!(lexicon.lookup("okay"), Some(Sentiment::Neutral));
        assert_eq!(lexicon.lookup("the"), None);
        assert_eq!(lexicon.lookup("cat"), None);
    }

    #[test]
    fn test_lookup_is_exact_on_lowercase() {
        let lexicon = Lexicon::builtin();
        // Callers lowercase before lookup; stored words are lowercase
        assert_eq!(lexicon.lookup("Great"), None);
        assert_eq!(lexicon.lookup("greatness"), None);
    }

    #[test]
    fn test_new_normalizes_words() {
        let lexicon = Lexicon::new(["  Bright ", ""], ["DIM"], Vec::<String>::new());
        assert!(lexicon.contains(Sentiment::Positive, "bright"));
        assert!(lexicon.contains(Sentiment::Negative, "dim"));
        assert_eq!(lexicon.len(Sentiment::Positive), 1);
        assert_eq!(lexicon.len(Sentiment::Neutral), 0);
    }

    #[test]
    fn test_overlap_first_set_wins() {
        let lexicon = Lexicon::new(["sharp", "clear"], ["sharp"], ["clear", "flat"]);
        assert_eq!(lexicon.lookup("sharp"), Some(Sentiment::Positive));
        assert_eq!(lexicon.lookup("clear"), Some(Sentiment::Positive));

        let overlaps = lexicon.overlaps();
        assert_eq!(overlaps.len(), 2);
        assert_eq!(overlaps["sharp"], vec![Sentiment::Positive, Sentiment::Negative]);
        assert_eq!(overlaps["clear"], vec![Sentiment::Positive, Sentiment::Neutral]);
    }

    #[test]
    fn test_negative_beats_neutral_on_overlap() {
        let lexicon = Lexicon::new(Vec::<&str>::new(), ["meh"], ["meh"]);
        assert_eq!(lexicon.lookup("meh"), Some(Sentiment::Negative));
    }

    #[test]
    fn test_words_sorted() {
        let lexicon = Lexicon::new(["b", "a", "c"], ["z"], ["y"]);
        assert_eq!(lexicon.words(Sentiment::Positive), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_lexicon() {
        assert!(Lexicon::default().is_empty());
        assert!(!Lexicon::builtin().is_empty());
    }
}
