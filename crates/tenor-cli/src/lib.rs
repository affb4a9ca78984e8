//! Tenor CLI library.
//!
//! This library provides the collaborator side of the Tenor sentiment scorer:
//! configuration management, command execution, the interactive REPL, a
//! debounced watch mode, bounded session history with JSON export, and
//! output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod error;
pub mod export;
pub mod history;
pub mod input;
pub mod logging;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use history::{AnalysisHistory, AnalysisId, HistoryEntry};
pub use output::Formatter;
