//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
///
/// `load_error` is the error hit while reading the file at startup, if any.
/// Commands that write the file refuse to run in that case so the unreadable
/// file is not replaced by defaults.
pub fn execute_config(
    args: ConfigArgs,
    config: &mut Config,
    path: &Path,
    load_error: Option<&CliError>,
    formatter: &Formatter,
) -> Result<()> {
    if matches!(args.action, ConfigAction::Set { .. } | ConfigAction::Reset) {
        ensure_writable(path, load_error)?;
    }

    match args.action {
        ConfigAction::Show => show_config(config, path),
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Set { key, value } => set_value(config, path, &key, &value, formatter),
        ConfigAction::Reset => reset_config(config, path, formatter),
    }
}

/// Refuse to overwrite a config file that failed to load.
fn ensure_writable(path: &Path, load_error: Option<&CliError>) -> Result<()> {
    match load_error {
        Some(e) => Err(CliError::Config(format!(
            "{} could not be read ({}); fix or remove it before changing settings",
            path.display(),
            e
        ))),
        None => Ok(()),
    }
}

/// Show the effective configuration.
fn show_config(config: &Config, path: &Path) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Update one setting and persist it.
fn set_value(config: &mut Config, path: &Path, key: &str, value: &str, formatter: &Formatter) -> Result<()> {
    config.set(key, value)?;
    config.save_to(path)?;
    println!("{}", formatter.success(&format!("Set {} = {}", key, value)));
    Ok(())
}

/// Restore defaults and persist them.
fn reset_config(config: &mut Config, path: &Path, formatter: &Formatter) -> Result<()> {
    *config = Config::default();
    config.save_to(path)?;
    println!("{}", formatter.success("Configuration reset to defaults"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_set_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        let formatter = Formatter::new(OutputFormat::Table, false);

        set_value(&mut config, &path, "debounce_ms", "750", &formatter).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.settings.debounce_ms, 750);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.settings.history_size = 3;
        let formatter = Formatter::new(OutputFormat::Table, false);

        reset_config(&mut config, &path, &formatter).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_unreadable_config_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[settings\ncolor = false\n").unwrap();
        let load_error = Config::load_from(&path).unwrap_err();
        let mut config = Config::default();
        let formatter = Formatter::new(OutputFormat::Table, false);

        for action in [
            ConfigAction::Set {
                key: "format".into(),
                value: "json".into(),
            },
            ConfigAction::Reset,
        ] {
            let result = execute_config(
                ConfigArgs { action },
                &mut config,
                &path,
                Some(&load_error),
                &formatter,
            );
            assert!(matches!(result, Err(CliError::Config(_))));
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "[settings\ncolor = false\n");

        // Read-only actions still work
        execute_config(
            ConfigArgs {
                action: ConfigAction::Path,
            },
            &mut config,
            &path,
            Some(&load_error),
            &formatter,
        )
        .unwrap();
    }

    #[test]
    fn test_invalid_set_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        let formatter = Formatter::new(OutputFormat::Table, false);

        assert!(set_value(&mut config, &path, "format", "yaml", &formatter).is_err());
        assert!(!path.exists());
    }
}
