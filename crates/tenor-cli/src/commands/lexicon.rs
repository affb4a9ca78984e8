//! Lexicon command implementation.

use crate::cli::LexiconArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use tenor_domain::{tokenize, Lexicon, Sentiment};

/// Execute the lexicon command.
pub fn execute_lexicon(args: LexiconArgs, lexicon: &Lexicon, formatter: &Formatter) -> Result<()> {
    if let Some(warning) = overlap_warning(lexicon, formatter) {
        eprintln!("{}", warning);
    }

    if let Some(word) = args.check {
        println!("{}", check_word(&word, lexicon, formatter)?);
        return Ok(());
    }

    match args.sentiment {
        Some(sentiment) => {
            let sentiment: Sentiment = sentiment.into();
            let words = lexicon.words(sentiment);
            println!("{}", formatter.format_words(sentiment, &words)?);
        }
        None => println!("{}", formatter.format_lexicon(lexicon)?),
    }

    Ok(())
}

/// Warning shown when the lexicon sets are not disjoint.
fn overlap_warning(lexicon: &Lexicon, formatter: &Formatter) -> Option<String> {
    let overlaps = lexicon.overlaps();
    if overlaps.is_empty() {
        return None;
    }
    tracing::debug!("Lexicon overlaps: {:?}", overlaps);
    Some(formatter.warning(&format!(
        "{} word(s) appear in more than one lexicon set; the first set wins",
        overlaps.len()
    )))
}

/// Look up one word the way the scorer would see it.
fn check_word(word: &str, lexicon: &Lexicon, formatter: &Formatter) -> Result<String> {
    let tokens = tokenize(word);
    let [token] = tokens.as_slice() else {
        return Err(CliError::InvalidInput(format!(
            "'{}' is not a single word after normalization",
            word
        )));
    };

    let Some(sentiment) = lexicon.lookup(token) else {
        return Ok(formatter.info(&format!("'{}' is not in the lexicon", token)));
    };

    let shadowed: Vec<&str> = Sentiment::ALL
        .into_iter()
        .filter(|&other| other != sentiment && lexicon.contains(other, token))
        .map(|other| other.as_str())
        .collect();

    let mut line = format!("{}: {}", token, formatter.sentiment_label(sentiment));
    if !shadowed.is_empty() {
        line.push_str(&format!(" (also listed as {})", shadowed.join(", ")));
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_check_word_normalizes() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = check_word("Wonderful!", Lexicon::builtin(), &formatter).unwrap();
        assert_eq!(output, "wonderful: positive");
    }

    #[test]
    fn test_check_unknown_word() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = check_word("cat", Lexicon::builtin(), &formatter).unwrap();
        assert!(output.contains("not in the lexicon"));
    }

    #[test]
    fn test_check_reports_shadowed_sets() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let lexicon = Lexicon::new(["sharp"], ["sharp"], ["plain"]);
        let output = check_word("sharp", &lexicon, &formatter).unwrap();
        assert_eq!(output, "sharp: positive (also listed as negative)");
        assert_eq!(check_word("plain", &lexicon, &formatter).unwrap(), "plain: neutral");
    }

    #[test]
    fn test_overlap_warning() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert!(overlap_warning(Lexicon::builtin(), &formatter).is_none());

        let lexicon = Lexicon::new(["sharp", "keen"], ["sharp"], ["keen"]);
        let warning = overlap_warning(&lexicon, &formatter).unwrap();
        assert_eq!(
            warning,
            "⚠ 2 word(s) appear in more than one lexicon set; the first set wins"
        );
    }

    #[test]
    fn test_check_rejects_phrases() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert!(check_word("very good", Lexicon::builtin(), &formatter).is_err());
        assert!(check_word("!!!", Lexicon::builtin(), &formatter).is_err());
    }
}
