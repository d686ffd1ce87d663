//! Dispatch history tracking.
//!
//! Provides immutable tracking of dispatched actions and the states they
//! produced, for inspection and export.

use crate::core::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single dispatch.
///
/// Records are immutable values: the action's tag, when it was
/// dispatched, and the state the store held afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchRecord<S: State> {
    /// The dispatched action's tag
    pub kind: String,
    /// When the dispatch happened
    pub timestamp: DateTime<Utc>,
    /// The state after the dispatch completed
    pub state_after: S,
}

/// Ordered history of dispatches.
///
/// The log is immutable - `record` returns a new log with the record
/// added, leaving the original unchanged.
///
/// # Example
///
/// ```rust
/// use reflow::devtools::{DispatchLog, DispatchRecord};
/// use chrono::Utc;
///
/// let log: DispatchLog<u32> = DispatchLog::new();
///
/// let log = log.record(DispatchRecord {
///     kind: "Increment".to_string(),
///     timestamp: Utc::now(),
///     state_after: 1,
/// });
/// let log = log.record(DispatchRecord {
///     kind: "Decrement".to_string(),
///     timestamp: Utc::now(),
///     state_after: 0,
/// });
///
/// assert_eq!(log.records().len(), 2);
/// assert_eq!(log.states(), vec![&1, &0]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchLog<S: State> {
    records: Vec<DispatchRecord<S>>,
}

impl<S: State> Default for DispatchLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> DispatchLog<S> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Add a record, returning a new log.
    ///
    /// This is a pure function - it does not mutate the existing log but
    /// returns a new one with the record appended.
    pub fn record(&self, record: DispatchRecord<S>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get all records, in dispatch order.
    pub fn records(&self) -> &[DispatchRecord<S>] {
        &self.records
    }

    /// Get the sequence of states the store moved through.
    pub fn states(&self) -> Vec<&S> {
        self.records
            .iter()
            .map(|record| &record.state_after)
            .collect()
    }

    /// Total duration from first to last recorded dispatch.
    ///
    /// Returns `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Number of recorded dispatches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether anything has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
