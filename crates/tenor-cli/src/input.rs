//! Text input resolution for one-shot commands.

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use std::fs;
use std::io::{self, Read};

/// Collect the text named by the input arguments.
///
/// Positional words, a file and stdin may be combined; their contents are
/// joined with newlines in that order.
pub fn read_input(args: &InputArgs) -> Result<String> {
    read_input_from(args, io::stdin().lock())
}

/// Same as [`read_input`], reading "stdin" from the given reader.
pub fn read_input_from<R: Read>(args: &InputArgs, mut stdin: R) -> Result<String> {
    let mut parts = Vec::new();

    if !args.text.is_empty() {
        parts.push(args.text.join(" "));
    }

    if let Some(path) = &args.file {
        let contents = fs::read_to_string(path)
            .map_err(|e| CliError::InvalidInput(format!("Cannot read '{}': {}", path, e)))?;
        parts.push(contents);
    }

    if args.stdin {
        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer)?;
        parts.push(buffer);
    }

    if parts.is_empty() {
        return Err(CliError::InvalidInput(
            "No text provided. Pass text, --file <path> or --stdin".to_string(),
        ));
    }

    Ok(parts.join("\n"))
}
