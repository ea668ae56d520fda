//! Read-only view of the engine for rendering.

use crate::core::{CalculationHistory, CalculatorState, HistoryEntry};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when exporting a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}

/// Everything a display, keypad and history list need to render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub current_value: String,
    /// `"<operand> <symbol>"` while an operation is pending, else empty
    pub previous_operation_text: String,
    pub scientific_mode: bool,
    /// Newest first
    pub history: Vec<HistoryEntry>,
}

impl Snapshot {
    pub(crate) fn capture(state: &CalculatorState, history: &CalculationHistory) -> Self {
        Self {
            current_value: state.current_value.clone(),
            previous_operation_text: state.previous_operation_text(),
            scientific_mode: state.scientific_mode,
            history: history.entries().to_vec(),
        }
    }

    /// Serialize for a host that renders from JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }
}
