//! Journal of successful transitions.
//!
//! The journal is an append-only record of where the machine has been,
//! separate from the undo/redo stacks: it observes `change_state` and
//! `trigger` only, and is untouched by `undo`, `redo`, and `reset`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single successful transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// State the machine left.
    pub from: String,
    /// State the machine entered.
    pub to: String,
    /// Event that caused the transition, or `None` for an explicit
    /// state change.
    pub event: Option<String>,
    /// When the transition occurred.
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of transitions.
///
/// Updates are immutable: [`TransitionLog::record`] returns a new log and
/// leaves the original untouched.
///
/// # Example
///
/// ```rust
/// use flowstate::core::{TransitionLog, TransitionRecord};
/// use chrono::Utc;
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord {
///     from: "draft".to_string(),
///     to: "review".to_string(),
///     event: Some("submit".to_string()),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.path(), vec!["draft", "review"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl TransitionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning the extended log.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// The sequence of states traversed: the first record's origin, then
    /// every destination in order. Empty when nothing was recorded.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Elapsed time between the first and last recorded transition.
    ///
    /// `None` when the log is empty; zero when it holds a single record.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// All records in order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
