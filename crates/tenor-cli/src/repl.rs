//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! Plain input is classified and recorded in the session history. Lines
//! starting with `:` are commands.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::export::export_history;
use crate::history::{AnalysisHistory, AnalysisId, HistoryEntry};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::{Path, PathBuf};
use tenor_domain::Analyzer;

/// Run the interactive REPL.
pub fn run_repl<A: Analyzer>(config: &Config, analyzer: A, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Tenor REPL - Type text to analyze, ':help' for commands, ':quit' to exit")
    );
    println!();

    let mut editor = DefaultEditor::new()?;

    // Load line-editing history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut session = ReplSession::new(analyzer, config);

    loop {
        let prompt = format!("tenor [{}]> ", session.history().len());

        match editor.readline(&prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                editor.add_history_entry(line.as_str()).ok();

                match parse_repl_command(&line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(cmd) => match session.execute(cmd, formatter) {
                        Ok(output) => println!("{}", output),
                        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                    },
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use ':quit' to exit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save line-editing history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Leave the REPL
    Exit,
    /// Print available commands
    Help,
    /// Classify text and record it
    Analyze(String),
    /// Tag the words of a text
    Tag(String),
    /// List recorded analyses
    History,
    /// Show one recorded analysis (1 = newest)
    Show(usize),
    /// Show the recorded analysis with this id
    ShowId(AnalysisId),
    /// Export the history, optionally to a given path
    Export(Option<String>),
    /// Forget all recorded analyses
    Clear,
}

/// Parse a REPL input line.
///
/// Text to analyze is kept exactly as typed; only commands are trimmed.
pub fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    let Some(command) = trimmed.strip_prefix(':') else {
        return Ok(ReplCommand::Analyze(line.to_string()));
    };

    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    match name {
        "quit" | "exit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "tag" => require_arg(rest, "Usage: :tag <text>").map(ReplCommand::Tag),
        "history" | "h" => Ok(ReplCommand::History),
        "show" => {
            if let Ok(index) = rest.parse::<usize>() {
                if index == 0 {
                    return Err(CliError::InvalidInput("Entries are numbered from 1".to_string()));
                }
                return Ok(ReplCommand::Show(index));
            }
            AnalysisId::from_string(rest).map(ReplCommand::ShowId).map_err(|_| {
                CliError::InvalidInput("Usage: :show <n> (1 = newest) or :show <id>".to_string())
            })
        }
        "export" => Ok(ReplCommand::Export((!rest.is_empty()).then(|| rest.to_string()))),
        "clear" => Ok(ReplCommand::Clear),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: :{}. Type ':help' for available commands.",
            name
        ))),
    }
}

fn require_arg(rest: &str, usage: &str) -> Result<String> {
    if rest.is_empty() {
        Err(CliError::InvalidInput(usage.to_string()))
    } else {
        Ok(rest.to_string())
    }
}

/// State of one REPL session.
pub struct ReplSession<A> {
    analyzer: A,
    history: AnalysisHistory,
    export_dir: Option<PathBuf>,
}

impl<A: Analyzer> ReplSession<A> {
    /// Create a session using the configured history size and export directory.
    pub fn new(analyzer: A, config: &Config) -> Self {
        Self {
            analyzer,
            history: AnalysisHistory::new(config.settings.history_size),
            export_dir: config.settings.export_dir.clone(),
        }
    }

    /// Analyses recorded so far.
    pub fn history(&self) -> &AnalysisHistory {
        &self.history
    }

    /// Execute a command and return the text to print.
    pub fn execute(&mut self, cmd: ReplCommand, formatter: &Formatter) -> Result<String> {
        match cmd {
            ReplCommand::Exit => Ok(String::new()),
            ReplCommand::Help => Ok(help_text()),
            ReplCommand::Analyze(text) => {
                let result = self.analyzer.classify(&text);
                let entry = self.history.record(text, result);
                tracing::debug!("Recorded analysis {}", entry.id);
                formatter.format_result(&entry.result)
            }
            ReplCommand::Tag(text) => formatter.format_tags(&self.analyzer.tag_words(&text)),
            ReplCommand::History => formatter.format_history(&self.history),
            ReplCommand::Show(index) => {
                let entry = self.history.get(index - 1).ok_or_else(|| {
                    CliError::InvalidInput(format!(
                        "No entry {} (history holds {})",
                        index,
                        self.history.len()
                    ))
                })?;
                show_entry(entry, formatter)
            }
            ReplCommand::ShowId(id) => {
                let entry = self.history.find(id).ok_or_else(|| {
                    CliError::InvalidInput(format!("No analysis with id {} in history", id))
                })?;
                show_entry(entry, formatter)
            }
            ReplCommand::Export(path) => {
                let written = export_history(
                    &self.history,
                    path.as_deref().map(Path::new),
                    self.export_dir.as_deref(),
                )?;
                Ok(formatter.success(&format!(
                    "Exported {} analyses to {}",
                    self.history.len(),
                    written.display()
                )))
            }
            ReplCommand::Clear => {
                self.history.clear();
                Ok(formatter.success("History cleared"))
            }
        }
    }
}

fn show_entry(entry: &HistoryEntry, formatter: &Formatter) -> Result<String> {
    Ok(format!("{}\n{}", entry.text, formatter.format_result(&entry.result)?))
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let tenor_dir = home.join(".tenor");
    std::fs::create_dir_all(&tenor_dir)?;
    Ok(tenor_dir.join("history.txt"))
}

fn help_text() -> String {
    [
        "Available commands:",
        "",
        "  <text>              - Classify text and add it to the history",
        "  :tag <text>         - Tag each word with its polarity",
        "  :history, :h        - List recent analyses (newest first)",
        "  :show <n|id>        - Show analysis n (1 = newest) or by id",
        "  :export [path]      - Export the history as JSON",
        "  :clear              - Forget all analyses",
        "  :help, :?           - Show this help",
        "  :quit, :exit, :q    - Exit REPL",
    ]
    .join("\n")
}
