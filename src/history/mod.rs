//! Bounded, in-memory log of successful conversions.
//!
//! The log is a ring buffer: once `capacity` entries are stored, recording a
//! new one drops the oldest. Nothing is persisted; the log lives as long as
//! the session that owns it.

use std::collections::VecDeque;

use crate::models::HistoryEntry;

/// Default number of entries retained
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;
/// Default number of entries shown by the history view
pub const DEFAULT_DISPLAY_COUNT: usize = 5;

#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a log holding at most `capacity` entries (at least 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { entries: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)), capacity }
    }

    /// Append an entry, evicting the oldest when full
    pub fn record(&mut self, entry: HistoryEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// The last `n` entries in insertion order (oldest first)
    pub fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).collect()
    }

    /// Display text of the last `n` entries in insertion order
    pub fn recent_entries(&self, n: usize) -> Vec<String> {
        self.recent(n).into_iter().map(|entry| entry.display.clone()).collect()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}
