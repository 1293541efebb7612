use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// A recorded failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    pub ts: DateTime<Utc>,

    /// Where the error happened (e.g., "storage.save", "import").
    pub context: String,

    pub message: String,
}

/// Ring buffer of the most recent errors.
#[derive(Debug, Clone)]
pub struct ErrorLog {
    entries: VecDeque<ErrorEntry>,
    capacity: usize,
}

impl Default for ErrorLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_LIMIT)
    }
}

impl ErrorLog {
    /// Create a log holding at most `capacity` entries (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { entries: VecDeque::with_capacity(capacity), capacity }
    }

    /// Record an error, evicting the oldest entry when full.
    pub fn record(&mut self, context: impl Into<String>, message: impl ToString) {
        let entry = ErrorEntry {
            ts: Utc::now(),
            context: context.into(),
            message: message.to_string(),
        };
        tracing::error!(context = %entry.context, "{}", entry.message);

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Entries from oldest to newest.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &ErrorEntry> + '_ {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&ErrorEntry> {
        self.entries.back()
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
