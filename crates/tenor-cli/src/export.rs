//! History export to a JSON document.

use crate::error::{CliError, Result};
use crate::history::{AnalysisHistory, HistoryEntry};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tenor_domain::current_timestamp_ms;

/// Exported document: export time plus the analyses, newest first.
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    /// When the export was produced (milliseconds since Unix epoch)
    pub exported_at: u64,
    /// Number of analyses
    pub count: usize,
    /// The analyses
    pub analyses: Vec<ExportedAnalysis<'a>>,
}

/// One analysis in an export document.
#[derive(Debug, Serialize)]
pub struct ExportedAnalysis<'a> {
    /// Analysis id
    pub id: String,
    /// Analyzed text
    pub text: &'a str,
    /// Label
    pub sentiment: &'static str,
    /// Confidence in the label
    pub confidence: f64,
    /// Positive share
    pub positive_score: f64,
    /// Negative share
    pub negative_score: f64,
    /// Residual share
    pub neutral_score: f64,
    /// Token count
    pub word_count: usize,
    /// When the analysis ran (milliseconds since Unix epoch)
    pub timestamp: u64,
}

impl<'a> From<&'a HistoryEntry> for ExportedAnalysis<'a> {
    fn from(entry: &'a HistoryEntry) -> Self {
        let r = &entry.result;
        Self {
            id: entry.id.to_string(),
            text: &entry.text,
            sentiment: r.sentiment.as_str(),
            confidence: r.confidence,
            positive_score: r.positive_score,
            negative_score: r.negative_score,
            neutral_score: r.neutral_score,
            word_count: r.word_count,
            timestamp: r.timestamp,
        }
    }
}

impl<'a> ExportDocument<'a> {
    /// Build a document from a history, stamped with `exported_at`.
    pub fn new(history: &'a AnalysisHistory, exported_at: u64) -> Self {
        let analyses: Vec<ExportedAnalysis<'a>> = history.entries().map(Into::into).collect();
        Self {
            exported_at,
            count: analyses.len(),
            analyses,
        }
    }
}

/// Default export file name inside `dir` (current directory when `None`).
pub fn default_export_path(dir: Option<&Path>, exported_at: u64) -> PathBuf {
    let file_name = format!("sentiment-analysis-{}.json", exported_at);
    match dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Write the history to `path` (or a default path) as pretty JSON.
///
/// Returns the path written. Exporting an empty history is an error.
pub fn export_history(
    history: &AnalysisHistory,
    path: Option<&Path>,
    export_dir: Option<&Path>,
) -> Result<PathBuf> {
    if history.is_empty() {
        return Err(CliError::EmptyHistory);
    }

    let exported_at = current_timestamp_ms();
    let target = match path {
        Some(path) => path.to_path_buf(),
        None => default_export_path(export_dir, exported_at),
    };

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let document = ExportDocument::new(history, exported_at);
    fs::write(&target, serde_json::to_string_pretty(&document)?)?;

    tracing::info!("Exported {} analyses to {}", document.count, target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tenor_domain::classify;

    fn sample_history() -> AnalysisHistory {
        let mut history = AnalysisHistory::default();
        history.record("the cat sat", classify("the cat sat"));
        history.record("amazing wonderful great", classify("amazing wonderful great"));
        history
    }

    #[test]
    fn test_document_shape() {
        let history = sample_history();
        let document = ExportDocument::new(&history, 1_700_000_000_000);
        let value = serde_json::to_value(&document).unwrap();

        assert_eq!(value["exported_at"], 1_700_000_000_000u64);
        assert_eq!(value["count"], 2);
        assert_eq!(value["analyses"][0]["text"], "amazing wonderful great");
        assert_eq!(value["analyses"][0]["sentiment"], "positive");
        assert_eq!(value["analyses"][0]["confidence"], 0.9);
        assert_eq!(value["analyses"][1]["sentiment"], "neutral");
        assert_eq!(value["analyses"][1]["neutral_score"], 1.0);
    }

    #[test]
    fn test_export_writes_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out").join("history.json");
        let written = export_history(&sample_history(), Some(&target), None).unwrap();
        assert_eq!(written, target);

        let contents = fs::read_to_string(&target).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["analyses"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_export_default_name_in_dir() {
        let dir = TempDir::new().unwrap();
        let written = export_history(&sample_history(), None, Some(dir.path())).unwrap();
        assert!(written.starts_with(dir.path()));
        let name = written.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("sentiment-analysis-"));
        assert!(name.ends_with(".json"));
        assert!(written.exists());
    }

    #[test]
    fn test_export_empty_history_fails() {
        let dir = TempDir::new().unwrap();
        let result = export_history(&AnalysisHistory::default(), None, Some(dir.path()));
        assert!(matches!(result, Err(CliError::EmptyHistory)));
    }

    #[test]
    fn test_default_export_path() {
        assert_eq!(
            default_export_path(None, 5),
            PathBuf::from("sentiment-analysis-5.json")
        );
    }
}
