//! Tokenizer - turns raw text into lowercase word tokens

/// Split text into lowercase tokens
///
/// Lowercases the input, removes every character that is neither
/// alphanumeric nor whitespace, then splits on runs of whitespace.
/// Repeated words are kept.
///
/// # Examples
///
/// ```
/// use tenor_domain::tokenize;
///
/// assert_eq!(tokenize("GREAT, great!"), vec!["great", "great"]);
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().map(str::to_owned).collect()
}
