//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use crate::history::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Number of analyses kept in the session history
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Quiet period for watch mode, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Directory for exported history files (current directory if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl OutputFormat {
    /// Parse a format name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "quiet" => Some(OutputFormat::Quiet),
            _ => None,
        }
    }
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".tenor").join("config.toml"))
    }

    /// Load configuration from a file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Set a single setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let settings = &mut self.settings;
        match key {
            "color" => {
                settings.color = value
                    .parse()
                    .map_err(|_| CliError::InvalidInput(format!("Expected true or false, got '{}'", value)))?;
            }
            "format" => {
                settings.format = OutputFormat::parse(value).ok_or_else(|| {
                    CliError::InvalidInput(format!("Unknown format '{}'. Use table, json or quiet", value))
                })?;
            }
            "history_size" => {
                let size: usize = value
                    .parse()
                    .map_err(|_| CliError::InvalidInput(format!("Expected a number, got '{}'", value)))?;
                if size == 0 {
                    return Err(CliError::InvalidInput("history_size must be at least 1".to_string()));
                }
                settings.history_size = size;
            }
            "debounce_ms" => {
                settings.debounce_ms = value
                    .parse()
                    .map_err(|_| CliError::InvalidInput(format!("Expected milliseconds, got '{}'", value)))?;
            }
            "export_dir" => {
                settings.export_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            _ => {
                return Err(CliError::InvalidInput(format!("Unknown setting '{}'", key)));
            }
        }
        Ok(())
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.settings.history_size == 0 {
            return Err(CliError::Config("history_size must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl Settings {
    /// Watch mode quiet period.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: DEFAULT_CAPACITY,
            debounce_ms: default_debounce_ms(),
            export_dir: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    DEFAULT_CAPACITY
}

fn default_debounce_ms() -> u64 {
    500
}
