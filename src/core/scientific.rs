//! Unary scientific functions and constants for the extended keypad.

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A unary function applied to the value on the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScientificFunction {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
    Cbrt,
    Square,
    Cube,
    Factorial,
}

impl ScientificFunction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Square => "square",
            Self::Cube => "cube",
            Self::Factorial => "factorial",
        }
    }

    /// Evaluate the function. Trigonometry works in radians.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcstate::core::{DomainError, ScientificFunction};
    ///
    /// assert_eq!(ScientificFunction::Sqrt.apply(9.0), Ok(3.0));
    /// assert_eq!(ScientificFunction::Factorial.apply(5.0), Ok(120.0));
    /// assert_eq!(
    ///     ScientificFunction::Sqrt.apply(-1.0),
    ///     Err(DomainError::NegativeSquareRoot)
    /// );
    /// ```
    pub fn apply(&self, x: f64) -> Result<f64, DomainError> {
        match self {
            Self::Sin => Ok(x.sin()),
            Self::Cos => Ok(x.cos()),
            Self::Tan => Ok(x.tan()),
            Self::Log => {
                if x <= 0.0 {
                    Err(DomainError::NonPositiveLogarithm { function: "log" })
                } else {
                    Ok(x.log10())
                }
            }
            Self::Ln => {
                if x <= 0.0 {
                    Err(DomainError::NonPositiveLogarithm { function: "ln" })
                } else {
                    Ok(x.ln())
                }
            }
            Self::Sqrt => {
                if x < 0.0 {
                    Err(DomainError::NegativeSquareRoot)
                } else {
                    Ok(x.sqrt())
                }
            }
            Self::Cbrt => Ok(x.cbrt()),
            Self::Square => Ok(x * x),
            Self::Cube => Ok(x * x * x),
            Self::Factorial => factorial(x),
        }
    }

    /// Calculation text recorded to history for `value`.
    pub fn history_text(&self, value: &str) -> String {
        match self {
            Self::Sin | Self::Cos | Self::Tan | Self::Log | Self::Ln => {
                format!("{}({value})", self.name())
            }
            Self::Sqrt => format!("√{value}"),
            Self::Cbrt => format!("∛{value}"),
            Self::Square => format!("{value}²"),
            Self::Cube => format!("{value}³"),
            Self::Factorial => format!("{value}!"),
        }
    }
}

/// Iterative factorial over `2..=n`; `0! == 1`.
///
/// NaN, infinite, negative and non-integer operands are rejected. The product stops
/// growing once it overflows to infinity.
fn factorial(x: f64) -> Result<f64, DomainError> {
    if x.is_nan() || x < 0.0 || x.fract() != 0.0 {
        return Err(DomainError::InvalidFactorial);
    }

    let n = x as u64;
    let mut result = 1.0_f64;
    for i in 2..=n {
        result *= i as f64;
        if result.is_infinite() {
            break;
        }
    }
    Ok(result)
}

/// Mathematical constants that can be placed on the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub fn value(&self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }
}
