//! Binary operations that can be left pending between operands.

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A binary operation waiting for its right-hand operand.
///
/// # Example
///
/// ```rust
/// use calcstate::core::Operation;
///
/// let op: Operation = "multiply".parse().unwrap();
/// assert_eq!(op, Operation::Multiply);
/// assert_eq!(op.apply(7.0, 8.0), Ok(56.0));
/// assert_eq!(op.display_symbol(), "×");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Root,
}

/// Unknown operation token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown operation '{0}'")]
pub struct ParseOperationError(pub String);

impl Operation {
    /// Token used by hosts to name the operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
            Self::Root => "root",
        }
    }

    /// Power and root are only available on the extended keypad.
    pub fn requires_extended(&self) -> bool {
        matches!(self, Self::Power | Self::Root)
    }

    /// Apply the operation to `prev` (left) and `cur` (right).
    ///
    /// Division by zero and non-positive root indices are rejected before
    /// any arithmetic happens.
    pub fn apply(&self, prev: f64, cur: f64) -> Result<f64, DomainError> {
        match self {
            Self::Add => Ok(prev + cur),
            Self::Subtract => Ok(prev - cur),
            Self::Multiply => Ok(prev * cur),
            Self::Divide => {
                if cur == 0.0 {
                    Err(DomainError::DivisionByZero)
                } else {
                    Ok(prev / cur)
                }
            }
            Self::Power => Ok(prev.powf(cur)),
            Self::Root => {
                if cur <= 0.0 {
                    Err(DomainError::NonPositiveRootIndex)
                } else {
                    Ok(prev.powf(1.0 / cur))
                }
            }
        }
    }

    /// Symbol shown next to the captured operand on the display.
    pub fn display_symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "–",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
            Self::Root => "√",
        }
    }

    /// Calculation text recorded to history.
    ///
    /// Formatted independently of [`display_symbol`](Self::display_symbol):
    /// subtraction uses a plain hyphen and root wraps the radicand.
    pub fn history_text(&self, prev: &str, cur: &str) -> String {
        match self {
            Self::Add => format!("{prev} + {cur}"),
            Self::Subtract => format!("{prev} - {cur}"),
            Self::Multiply => format!("{prev} × {cur}"),
            Self::Divide => format!("{prev} ÷ {cur}"),
            Self::Power => format!("{prev} ^ {cur}"),
            Self::Root => format!("{cur}√({prev})"),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            "power" => Ok(Self::Power),
            "root" => Ok(Self::Root),
            other => Err(ParseOperationError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_arithmetic() {
        assert_eq!(Operation::Add.apply(3.0, 4.0), Ok(7.0));
        assert_eq!(Operation::Subtract.apply(3.0, 4.0), Ok(-1.0));
        assert_eq!(Operation::Multiply.apply(3.0, 4.0), Ok(12.0));
        assert_eq!(Operation::Divide.apply(3.0, 4.0), Ok(0.75));
    }

    #[test]
    fn divide_by_zero_is_rejected() {
        assert_eq!(
            Operation::Divide.apply(5.0, 0.0),
            Err(DomainError::DivisionByZero)
        );
        assert_eq!(
            Operation::Divide.apply(5.0, -0.0),
            Err(DomainError::DivisionByZero)
        );
    }

    #[test]
    fn power_and_root() {
        assert_eq!(Operation::Power.apply(2.0, 10.0), Ok(1024.0));
        assert_eq!(Operation::Root.apply(27.0, 3.0).map(f64::round), Ok(3.0));
        assert_eq!(
            Operation::Root.apply(27.0, 0.0),
            Err(DomainError::NonPositiveRootIndex)
        );
        assert_eq!(
            Operation::Root.apply(27.0, -2.0),
            Err(DomainError::NonPositiveRootIndex)
        );
    }

    #[test]
    fn tokens_round_trip_through_from_str() {
        for op in [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
            Operation::Power,
            Operation::Root,
        ] {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
        }
        assert_eq!(
            "modulo".parse::<Operation>(),
            Err(ParseOperationError("modulo".to_string()))
        );
    }

    #[test]
    fn display_and_history_text_differ_for_root() {
        assert_eq!(Operation::Root.display_symbol(), "√");
        assert_eq!(Operation::Root.history_text("27", "3"), "3√(27)");
        assert_eq!(Operation::Subtract.display_symbol(), "–");
        assert_eq!(Operation::Subtract.history_text("9", "4"), "9 - 4");
    }

    #[test]
    fn only_power_and_root_need_extended() {
        assert!(Operation::Power.requires_extended());
        assert!(Operation::Root.requires_extended());
        assert!(!Operation::Divide.requires_extended());
    }
}
