//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::history::{AnalysisHistory, HistoryEntry};
use colored::*;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use tenor_domain::{Lexicon, Sentiment, SentimentResult, WordTag};

/// Width of the breakdown bar, in characters.
const BAR_WIDTH: usize = 30;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a classification result.
    pub fn format_result(&self, result: &SentimentResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&result_json(result))?),
            OutputFormat::Table => Ok(self.format_result_table(result)),
            OutputFormat::Quiet => Ok(result.sentiment.as_str().to_string()),
        }
    }

    /// Format word tags.
    pub fn format_tags(&self, tags: &[WordTag]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json_tags: Vec<serde_json::Value> = tags
                    .iter()
                    .map(|t| {
                        json!({
                            "word": t.word,
                            "sentiment": t.sentiment.as_str(),
                            "score": t.score,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json_tags)?)
            }
            OutputFormat::Table => Ok(self.format_tags_table(tags)),
            OutputFormat::Quiet => Ok(tags
                .iter()
                .map(|t| format!("{}\t{:+}", t.word, t.score))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the session history.
    pub fn format_history(&self, history: &AnalysisHistory) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = history.entries().map(entry_json).collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Table => Ok(self.format_history_table(history)),
            OutputFormat::Quiet => Ok(history
                .entries()
                .map(|e| format!("{}\t{}", e.id, e.result.sentiment))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a summary of the lexicon.
    pub fn format_lexicon(&self, lexicon: &Lexicon) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = json!({
                    "positive": lexicon.words(Sentiment::Positive),
                    "negative": lexicon.words(Sentiment::Negative),
                    "neutral": lexicon.words(Sentiment::Neutral),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Sentiment", "Words", "Examples"]);
                for sentiment in Sentiment::ALL {
                    let words = lexicon.words(sentiment);
                    let examples = words.iter().take(5).copied().collect::<Vec<_>>().join(", ");
                    builder.push_record([
                        self.sentiment_label(sentiment),
                        words.len().to_string(),
                        examples,
                    ]);
                }
                Ok(self.finish_table(builder))
            }
            OutputFormat::Quiet => Ok(Sentiment::ALL
                .iter()
                .map(|s| format!("{}\t{}", s, lexicon.len(*s)))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the words of one lexicon set.
    pub fn format_words(&self, sentiment: Sentiment, words: &[&str]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "sentiment": sentiment.as_str(),
                "words": words,
            }))?),
            OutputFormat::Table | OutputFormat::Quiet => Ok(words.join("\n")),
        }
    }

    /// One-line summary of a result, used by watch mode.
    pub fn summary_line(&self, result: &SentimentResult) -> String {
        format!(
            "{} {} | +{} -{} ~{} | {} words",
            self.sentiment_label(result.sentiment),
            percent(result.confidence),
            percent(result.positive_score),
            percent(result.negative_score),
            percent(result.neutral_score),
            result.word_count
        )
    }

    /// Three-way breakdown bar.
    pub fn breakdown_bar(&self, result: &SentimentResult) -> String {
        let positive = (result.positive_score * BAR_WIDTH as f64).round() as usize;
        let negative = ((result.negative_score * BAR_WIDTH as f64).round() as usize)
            .min(BAR_WIDTH.saturating_sub(positive));
        let neutral = BAR_WIDTH - positive - negative;

        format!(
            "{}{}{}",
            self.colorize(&"+".repeat(positive), "green"),
            self.colorize(&"-".repeat(negative), "red"),
            self.colorize(&"·".repeat(neutral), "yellow")
        )
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Sentiment name in its color.
    pub fn sentiment_label(&self, sentiment: Sentiment) -> String {
        self.colorize(sentiment.as_str(), sentiment_color(sentiment))
    }

    fn format_result_table(&self, result: &SentimentResult) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Sentiment".to_string(), self.sentiment_label(result.sentiment)]);
        builder.push_record(["Confidence".to_string(), percent(result.confidence)]);
        builder.push_record(["Positive".to_string(), percent(result.positive_score)]);
        builder.push_record(["Negative".to_string(), percent(result.negative_score)]);
        builder.push_record(["Neutral".to_string(), percent(result.neutral_score)]);
        builder.push_record(["Words".to_string(), result.word_count.to_string()]);
        builder.push_record(["Breakdown".to_string(), self.breakdown_bar(result)]);
        self.finish_table(builder)
    }

    fn format_tags_table(&self, tags: &[WordTag]) -> String {
        if tags.is_empty() {
            return self.colorize("No words found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Word", "Sentiment", "Score"]);
        for (idx, tag) in tags.iter().enumerate() {
            builder.push_record([
                (idx + 1).to_string(),
                tag.word.clone(),
                self.sentiment_label(tag.sentiment),
                format!("{:+}", tag.score),
            ]);
        }
        self.finish_table(builder)
    }

    fn format_history_table(&self, history: &AnalysisHistory) -> String {
        if history.is_empty() {
            return self.colorize("No analyses yet.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "ID", "Sentiment", "Confidence", "Words", "Text"]);
        for (idx, entry) in history.entries().enumerate() {
            builder.push_record([
                (idx + 1).to_string(),
                entry.id.short(),
                self.sentiment_label(entry.result.sentiment),
                percent(entry.result.confidence),
                entry.result.word_count.to_string(),
                truncate(&entry.text, 40),
            ]);
        }
        self.finish_table(builder)
    }

    fn finish_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// JSON representation of a result.
pub fn result_json(result: &SentimentResult) -> serde_json::Value {
    json!({
        "sentiment": result.sentiment.as_str(),
        "confidence": result.confidence,
        "positive_score": result.positive_score,
        "negative_score": result.negative_score,
        "neutral_score": result.neutral_score,
        "word_count": result.word_count,
        "counts": {
            "positive": result.counts.positive,
            "negative": result.counts.negative,
            "neutral": result.counts.neutral
        },
        "timestamp": result.timestamp
    })
}

fn entry_json(entry: &HistoryEntry) -> serde_json::Value {
    json!({
        "id": entry.id.to_string(),
        "text": entry.text,
        "result": result_json(&entry.result)
    })
}

/// Color associated with a sentiment.
pub fn sentiment_color(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "green",
        Sentiment::Negative => "red",
        Sentiment::Neutral => "yellow",
    }
}

/// Format a [0, 1] share as a percentage with one decimal.
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenor_domain::{classify, tag_words};

    #[test]
    fn test_json_result() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_result(&classify("amazing wonderful great")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["sentiment"], "positive");
        assert_eq!(value["confidence"], 0.9);
        assert_eq!(value["counts"]["positive"], 3);
    }

    #[test]
    fn test_quiet_result() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_result(&classify("terrible awful disaster")).unwrap();
        assert_eq!(output, "negative");
    }

    #[test]
    fn test_table_result() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_result(&classify("the cat sat")).unwrap();
        assert!(output.contains("Confidence"));
        assert!(output.contains("50.0%"));
        assert!(output.contains("neutral"));
    }

    #[test]
    fn test_quiet_tags() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_tags(&tag_words("good cat bad")).unwrap();
        assert_eq!(output, "good\t+1\ncat\t+0\nbad\t-1");
    }

    #[test]
    fn test_empty_tags_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_tags(&[]).unwrap();
        assert!(output.contains("No words found"));
    }

    #[test]
    fn test_history_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut history = AnalysisHistory::default();
        assert!(formatter.format_history(&history).unwrap().contains("No analyses yet"));

        history.record("good", classify("good"));
        let output = formatter.format_history(&history).unwrap();
        assert!(output.contains("positive"));
        assert!(output.contains("good"));
    }

    #[test]
    fn test_breakdown_bar_width() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        for text in ["", "good", "good bad okay cat", "awful awful awful"] {
            let bar = formatter.breakdown_bar(&classify(text));
            assert_eq!(bar.chars().count(), BAR_WIDTH);
        }
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.9), "90.0%");
        assert_eq!(percent(1.0 / 3.0), "33.3%");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer sentence", 6), "a muc…");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.sentiment_label(Sentiment::Positive), "positive");
    }
}
