//! The calculator state record.
//!
//! `CalculatorState` is a plain value. Every engine handler is one atomic
//! transition of it, and all inspectors here are pure.

use super::error::ERROR_DISPLAY;
use super::operation::Operation;
use serde::{Deserialize, Serialize};

/// Complete state of the calculator between two key presses.
///
/// `previous_value` and `operation` are always set or cleared together.
///
/// # Example
///
/// ```rust
/// use calcstate::core::{CalculatorState, Operation};
///
/// let state = CalculatorState::default();
/// assert_eq!(state.current_value, "0");
/// assert!(!state.has_pending_operation());
///
/// let pending = CalculatorState {
///     current_value: "12".to_string(),
///     previous_value: Some("12".to_string()),
///     operation: Some(Operation::Divide),
///     reset_on_next_digit: true,
///     scientific_mode: false,
/// };
/// assert_eq!(pending.previous_operation_text(), "12 ÷");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text on the display
    pub current_value: String,
    /// Left operand captured when an operation key was pressed
    pub previous_value: Option<String>,
    /// Operation waiting for its right operand
    pub operation: Option<Operation>,
    /// The next digit starts a new number instead of extending this one
    pub reset_on_next_digit: bool,
    /// Scientific keypad is active
    pub scientific_mode: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_value: "0".to_string(),
            previous_value: None,
            operation: None,
            reset_on_next_digit: false,
            scientific_mode: false,
        }
    }
}

impl CalculatorState {
    /// Initial state with the given keypad mode.
    pub fn with_scientific_mode(scientific_mode: bool) -> Self {
        Self {
            scientific_mode,
            ..Self::default()
        }
    }

    /// The display shows the error marker.
    pub fn is_error(&self) -> bool {
        self.current_value == ERROR_DISPLAY
    }

    /// The display shows exactly `"0"`.
    pub fn is_zero(&self) -> bool {
        self.current_value == "0"
    }

    pub fn has_pending_operation(&self) -> bool {
        self.previous_value.is_some() && self.operation.is_some()
    }

    /// Text shown above the current value: `"<operand> <symbol>"`, or an
    /// empty string when nothing is pending.
    pub fn previous_operation_text(&self) -> String {
        match (&self.previous_value, self.operation) {
            (Some(previous), Some(operation)) => {
                format!("{previous} {}", operation.display_symbol())
            }
            _ => String::new(),
        }
    }
}
