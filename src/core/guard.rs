//! Guard predicates for handler preconditions.
//!
//! Guards are pure boolean functions over [`CalculatorState`]. Engine
//! handlers check their guard first and become no-ops when it blocks.

use super::state::CalculatorState;
use std::fmt;

/// Named pure predicate that decides whether a handler may run.
///
/// # Example
///
/// ```rust
/// use calcstate::core::{CalculatorState, Guard};
///
/// let not_zero = Guard::new("not zero", |s: &CalculatorState| !s.is_zero());
///
/// assert!(!not_zero.check(&CalculatorState::default()));
/// ```
pub struct Guard {
    name: &'static str,
    predicate: Box<dyn Fn(&CalculatorState) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(name: &'static str, predicate: F) -> Self
    where
        F: Fn(&CalculatorState) -> bool + Send + Sync + 'static,
    {
        Guard {
            name,
            predicate: Box::new(predicate),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check if the guard allows a handler to run on this state.
    pub fn check(&self, state: &CalculatorState) -> bool {
        (self.predicate)(state)
    }

    /// An operand and operation are waiting to be evaluated.
    pub fn pending_operation() -> Self {
        Self::new("pending operation", CalculatorState::has_pending_operation)
    }

    /// A pending operation already has its right operand, so pressing
    /// another operator evaluates the chain first.
    pub fn chain_ready() -> Self {
        Self::new("chain ready", |s| {
            s.has_pending_operation() && !s.reset_on_next_digit
        })
    }

    /// The display holds a value whose sign can be flipped.
    pub fn signed_value() -> Self {
        Self::new("signed value", |s| !s.is_zero() && !s.is_error())
    }

    /// The display holds something other than the error marker.
    pub fn numeric_value() -> Self {
        Self::new("numeric value", |s| !s.is_error())
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("name", &self.name).finish()
    }
}
