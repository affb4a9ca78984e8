//! Watch command implementation.
//!
//! Every line read from stdin replaces the text being watched. The latest text
//! is classified once stdin has been quiet for the debounce period.

use crate::cli::WatchArgs;
use crate::config::Settings;
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::output::Formatter;
use std::io::BufRead;
use tenor_domain::Analyzer;
use tokio::sync::mpsc;
use tokio::time::Duration;

/// Execute the watch command.
pub async fn execute_watch<A: Analyzer>(
    args: WatchArgs,
    settings: &Settings,
    analyzer: &A,
    formatter: &Formatter,
) -> Result<()> {
    let delay = args
        .debounce_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| settings.debounce());

    eprintln!(
        "{}",
        formatter.info(&format!(
            "Watching stdin (debounce {} ms). Ctrl+C or EOF to stop.",
            delay.as_millis()
        ))
    );

    // Blocking stdin reads live on a plain thread so shutdown never waits on them
    let (tx, rx) = mpsc::channel::<String>(64);
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });

    let debouncer = Debouncer::new(delay);
    let on_settle = |text: String| println!("{}", formatter.summary_line(&analyzer.classify(&text)));

    tokio::select! {
        settled = debouncer.run(rx, on_settle) => {
            tracing::debug!("Watch finished after {} classifications", settled);
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted, stopping watch");
        }
    }

    Ok(())
}
