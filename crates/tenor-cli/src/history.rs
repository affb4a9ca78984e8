//! Session history of analyses.
//!
//! The history is bounded: recording beyond capacity evicts the oldest entry.
//! Entries are kept newest first.

use std::collections::VecDeque;
use std::fmt;
use tenor_domain::SentimentResult;

/// Default number of analyses kept.
pub const DEFAULT_CAPACITY: usize = 10;

/// Unique identifier for an analysis based on UUIDv7
///
/// UUIDv7 sorts chronologically, so exported analyses can be ordered by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnalysisId(u128);

impl AnalysisId {
    /// Generate a new UUIDv7-based id
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Parse an id from its UUID string form
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid analysis id: {}", e))
    }

    /// Short prefix used in tables
    pub fn short(&self) -> String {
        self.to_string()[..8].to_string()
    }
}

impl Default for AnalysisId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// One analyzed text and its result.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Unique id
    pub id: AnalysisId,
    /// Text as the user entered it
    pub text: String,
    /// Classification result
    pub result: SentimentResult,
}

/// Bounded, newest-first history of analyses.
#[derive(Debug, Clone)]
pub struct AnalysisHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl AnalysisHistory {
    /// Create a history holding at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record an analysis as the newest entry, evicting the oldest if full.
    pub fn record(&mut self, text: impl Into<String>, result: SentimentResult) -> &HistoryEntry {
        if self.entries.len() == self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                tracing::debug!("Evicted analysis {} from history", evicted.id);
            }
        }
        self.entries.push_front(HistoryEntry {
            id: AnalysisId::new(),
            text: text.into(),
            result,
        });
        &self.entries[0]
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Entry by position, 0 being the newest.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Entry with the given id, if it is still held.
    pub fn find(&self, id: AnalysisId) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for AnalysisHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
