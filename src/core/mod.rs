//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - The state record and its inspectors
//! - Binary operations and scientific functions
//! - Display formatting and operand parsing
//! - Guard predicates for handler preconditions
//! - Immutable calculation history
//!
//! Nothing in this module mutates shared state or logs. The engine is the
//! imperative shell that threads state through these functions.

mod error;
mod format;
mod guard;
mod history;
mod operation;
mod scientific;
mod state;

pub use error::{DomainError, ERROR_DISPLAY};
pub use format::{
    format_number, format_number_with_precision, parse_operand, DEFAULT_PRECISION,
};
pub use guard::Guard;
pub use history::{CalculationHistory, HistoryEntry};
pub use operation::{Operation, ParseOperationError};
pub use scientific::{Constant, ScientificFunction};
pub use state::CalculatorState;
