//! Calculation history tracking.
//!
//! Provides an immutable, newest-first record of completed calculations,
//! following the same functional style as the rest of the core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Record of one completed calculation.
///
/// # Example
///
/// ```rust
/// use calcstate::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("√9", "3");
/// assert_eq!(entry.calculation, "√9");
/// assert_eq!(entry.result, "3");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Stable key for list rendering
    pub id: Uuid,
    /// Operands and symbol, e.g. `"7 × 8"` or `"4!"`
    pub calculation: String,
    /// Formatted result
    pub result: String,
    /// When the calculation completed
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(calculation: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            calculation: calculation.into(),
            result: result.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of calculations, newest first.
///
/// History is immutable - `record` and `cleared` return a new history.
///
/// # Example
///
/// ```rust
/// use calcstate::core::{CalculationHistory, HistoryEntry};
///
/// let history = CalculationHistory::new();
/// let history = history.record(HistoryEntry::new("2 + 3", "5"));
/// let history = history.record(HistoryEntry::new("5 × 2", "10"));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest().unwrap().result, "10");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationHistory {
    entries: Vec<HistoryEntry>,
}

impl CalculationHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new history with it in front.
    ///
    /// This is a pure function - the existing history is left unchanged.
    ///
    /// ```rust
    /// use calcstate::core::{CalculationHistory, HistoryEntry};
    ///
    /// let history = CalculationHistory::new();
    /// let updated = history.record(HistoryEntry::new("3²", "9"));
    /// assert_eq!(updated.len(), 1);
    /// assert!(history.is_empty()); // Original unchanged
    /// ```
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());
        Self { entries }
    }

    /// An empty history.
    pub fn cleared(&self) -> Self {
        Self::new()
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Most recently recorded entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Time between the oldest and the newest entry.
    ///
    /// Returns `None` for an empty history.
    pub fn span(&self) -> Option<Duration> {
        if let (Some(newest), Some(oldest)) = (self.entries.first(), self.entries.last()) {
            newest
                .timestamp
                .signed_duration_since(oldest.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = CalculationHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.latest().is_none());
        assert!(history.span().is_none());
    }

    #[test]
    fn record_prepends_entry() {
        let history = CalculationHistory::new()
            .record(HistoryEntry::new("1 + 1", "2"))
            .record(HistoryEntry::new("2 × 3", "6"));

        let calculations: Vec<&str> = history
            .entries()
            .iter()
            .map(|e| e.calculation.as_str())
            .collect();
        assert_eq!(calculations, vec!["2 × 3", "1 + 1"]);
        assert_eq!(history.latest().unwrap().result, "6");
    }

    #[test]
    fn record_is_immutable() {
        let history = CalculationHistory::new();
        let new_history = history.record(HistoryEntry::new("4!", "24"));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn cleared_drops_every_entry() {
        let history = CalculationHistory::new()
            .record(HistoryEntry::new("1 + 1", "2"))
            .record(HistoryEntry::new("2 + 2", "4"));

        let cleared = history.cleared();
        assert!(cleared.is_empty());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn entries_get_distinct_ids() {
        let a = HistoryEntry::new("1 + 1", "2");
        let b = HistoryEntry::new("1 + 1", "2");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn span_measures_oldest_to_newest() {
        let history = CalculationHistory::new().record(HistoryEntry::new("1 + 1", "2"));

        std::thread::sleep(std::time::Duration::from_millis(10));

        let history = history.record(HistoryEntry::new("2 + 2", "4"));

        let span = history.span();
        assert!(span.is_some());
        assert!(span.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_entry_has_zero_span() {
        let history = CalculationHistory::new().record(HistoryEntry::new("1 + 1", "2"));
        assert_eq!(history.span(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = CalculationHistory::new().record(HistoryEntry::new("9 ÷ 3", "3"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: CalculationHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
