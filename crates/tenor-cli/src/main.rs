//! Tenor CLI - Command-line interface for the Tenor sentiment scorer.

use clap::Parser;
use std::path::PathBuf;
use tenor_cli::commands;
use tenor_cli::repl;
use tenor_cli::{logging, Cli, Command, Config, Formatter};
use tenor_domain::{Lexicon, SentimentScorer};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> tenor_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    logging::init(cli.verbose);

    // Load or create config
    let config_path = match cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::default_path()?,
    };
    let (mut config, load_error) = match Config::load_from(&config_path) {
        Ok(config) => (config, None),
        Err(e) => {
            tracing::warn!("Ignoring unreadable config {}: {}", config_path.display(), e);
            (Config::default(), Some(e))
        }
    };
    if !config_path.exists() {
        if let Err(e) = config.save_to(&config_path) {
            tracing::debug!("Could not write default config: {}", e);
        }
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let scorer = SentimentScorer::builtin();

    // Handle commands
    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&config, scorer, &formatter)?;
        }
        Some(Command::Classify(args)) => {
            commands::execute_classify(args, &scorer, &formatter)?;
        }
        Some(Command::Tag(args)) => {
            commands::execute_tag(args, &scorer, &formatter)?;
        }
        Some(Command::Lexicon(args)) => {
            commands::execute_lexicon(args, Lexicon::builtin(), &formatter)?;
        }
        Some(Command::Watch(args)) => {
            commands::execute_watch(args, &config.settings, &scorer, &formatter).await?;
        }
        Some(Command::Config(args)) => {
            commands::execute_config(
                args,
                &mut config,
                &config_path,
                load_error.as_ref(),
                &formatter,
            )?;
        }
    }

    Ok(())
}
