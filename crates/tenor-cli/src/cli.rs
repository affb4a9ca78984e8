//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use tenor_domain::Sentiment;

/// Tenor CLI - Lexicon-based sentiment scoring for text.
#[derive(Debug, Parser)]
#[command(name = "tenor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "TENOR_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (labels only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify text as positive, negative or neutral
    Classify(InputArgs),

    /// Tag every word of a text with its polarity
    Tag(InputArgs),

    /// Inspect the built-in lexicon
    Lexicon(LexiconArgs),

    /// Classify stdin as it changes, after a quiet period
    Watch(WatchArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Where to read the text from.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Text to analyze (words are joined with spaces)
    pub text: Vec<String>,

    /// Read text from a file
    #[arg(short = 'i', long = "file")]
    pub file: Option<String>,

    /// Read text from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the lexicon command.
#[derive(Debug, Args)]
pub struct LexiconArgs {
    /// List the words of one set
    #[arg(short, long, value_enum)]
    pub sentiment: Option<SentimentArg>,

    /// Look up a single word
    #[arg(long)]
    pub check: Option<String>,
}

/// Arguments for the watch command.
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Quiet period before a change is classified (milliseconds)
    #[arg(short, long)]
    pub debounce_ms: Option<u64>,
}

/// Arguments for configuration management.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Set a configuration value
    Set {
        /// Setting name (color, format, history_size, debounce_ms, export_dir)
        key: String,
        /// New value
        value: String,
    },

    /// Restore default settings
    Reset,
}

/// Sentiment argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SentimentArg {
    /// Positive words
    Positive,
    /// Negative words
    Negative,
    /// Neutral words
    Neutral,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<SentimentArg> for Sentiment {
    fn from(arg: SentimentArg) -> Self {
        match arg {
            SentimentArg::Positive => Sentiment::Positive,
            SentimentArg::Negative => Sentiment::Negative,
            SentimentArg::Neutral => Sentiment::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_repl() {
        let cli = Cli::parse_from(["tenor"]);
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_classify_command() {
        let cli = Cli::parse_from(["tenor", "classify", "what", "a", "great", "day"]);
        match cli.command {
            Some(Command::Classify(args)) => {
                assert_eq!(args.text, vec!["what", "a", "great", "day"]);
                assert!(!args.stdin);
            }
            _ => panic!("Expected Classify command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["tenor", "tag", "fine", "--format", "json", "--no-color"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.no_color);
        assert!(matches!(cli.command, Some(Command::Tag(_))));
    }

    #[test]
    fn test_config_set_command() {
        let cli = Cli::parse_from(["tenor", "config", "set", "history_size", "5"]);
        match cli.command {
            Some(Command::Config(ConfigArgs {
                action: ConfigAction::Set { key, value },
            })) => {
                assert_eq!(key, "history_size");
                assert_eq!(value, "5");
            }
            _ => panic!("Expected Config Set command"),
        }
    }

    #[test]
    fn test_sentiment_conversion() {
        let sentiment: Sentiment = SentimentArg::Negative.into();
        assert_eq!(sentiment, Sentiment::Negative);
    }
}
