//! Classify command implementation.

use crate::cli::InputArgs;
use crate::error::Result;
use crate::input::read_input;
use crate::output::Formatter;
use tenor_domain::Analyzer;

/// Execute the classify command.
pub fn execute_classify<A: Analyzer>(args: InputArgs, analyzer: &A, formatter: &Formatter) -> Result<()> {
    let text = read_input(&args)?;
    println!("{}", render_classification(&text, analyzer, formatter)?);
    Ok(())
}

/// Classify `text` and render the result.
pub fn render_classification<A: Analyzer>(text: &str, analyzer: &A, formatter: &Formatter) -> Result<String> {
    let result = analyzer.classify(text);
    tracing::debug!(
        "Classified {} words as {} ({:.3})",
        result.word_count,
        result.sentiment,
        result.confidence
    );
    formatter.format_result(&result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tenor_domain::SentimentScorer;

    #[test]
    fn test_render_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let scorer = SentimentScorer::builtin();
        assert_eq!(render_classification("GREAT!!!", &scorer, &formatter).unwrap(), "positive");
        assert_eq!(render_classification("good bad", &scorer, &formatter).unwrap(), "neutral");
    }
}
