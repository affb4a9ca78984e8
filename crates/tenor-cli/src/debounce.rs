//! Debounced delivery of changing input.
//!
//! Values arrive on a channel; only the latest one is kept, and it is handed
//! to the callback once no newer value has arrived for the configured delay.
//! When the channel closes, a pending value is delivered immediately.

use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};

/// Debouncer for a stream of text updates.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    delay: Duration,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Consume updates until the channel closes.
    ///
    /// Returns the number of values delivered to `on_settle`.
    pub async fn run<T, F>(&self, mut updates: mpsc::Receiver<T>, mut on_settle: F) -> usize
    where
        F: FnMut(T),
    {
        let mut pending: Option<T> = None;
        let mut settled = 0;

        loop {
            match pending.take() {
                Some(value) => {
                    tokio::select! {
                        next = updates.recv() => match next {
                            Some(newer) => pending = Some(newer),
                            None => {
                                on_settle(value);
                                settled += 1;
                                break;
                            }
                        },
                        _ = sleep(self.delay) => {
                            on_settle(value);
                            settled += 1;
                        }
                    }
                }
                None => match updates.recv().await {
                    Some(value) => pending = Some(value),
                    None => break,
                },
            }
        }

        tracing::debug!("Debouncer stopped after {} deliveries", settled);
        settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_burst_collapses_to_last_value() {
        let (tx, rx) = mpsc::channel(8);
        for text in ["g", "go", "goo", "good"] {
            tx.send(text.to_string()).await.unwrap();
        }
        drop(tx);

        let mut delivered = Vec::new();
        let count = Debouncer::new(Duration::from_millis(200))
            .run(rx, |text| delivered.push(text))
            .await;

        assert_eq!(count, 1);
        assert_eq!(delivered, vec!["good"]);
    }

    #[tokio::test]
    async fn test_quiet_period_delivers_each_settled_value() {
        let (tx, rx) = mpsc::channel(8);
        tx.send("first".to_string()).await.unwrap();

        tokio::spawn(async move {
            sleep(Duration::from_millis(300)).await;
            tx.send("second".to_string()).await.ok();
        });

        let mut delivered = Vec::new();
        let count = Debouncer::new(Duration::from_millis(20))
            .run(rx, |text| delivered.push(text))
            .await;

        assert_eq!(count, 2);
        assert_eq!(delivered, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_closed_channel_without_values() {
        let (tx, rx) = mpsc::channel::<String>(1);
        drop(tx);
        let count = Debouncer::new(Duration::from_millis(10)).run(rx, |_| {}).await;
        assert_eq!(count, 0);
    }
}
