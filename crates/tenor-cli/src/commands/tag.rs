//! Tag command implementation.

use crate::cli::InputArgs;
use crate::error::Result;
use crate::input::read_input;
use crate::output::Formatter;
use tenor_domain::Analyzer;

/// Execute the tag command.
pub fn execute_tag<A: Analyzer>(args: InputArgs, analyzer: &A, formatter: &Formatter) -> Result<()> {
    let text = read_input(&args)?;
    let tags = analyzer.tag_words(&text);
    tracing::debug!("Tagged {} words", tags.len());
    println!("{}", formatter.format_tags(&tags)?);
    Ok(())
}
