//! Domain errors raised by calculator arithmetic.

use thiserror::Error;

/// Text shown on the display whenever a calculation hits a domain error.
pub const ERROR_DISPLAY: &str = "Error";

/// Invalid input to an arithmetic or scientific operation.
///
/// Domain errors never reach the caller of an engine handler. The engine
/// replaces the display with [`ERROR_DISPLAY`] and logs the cause.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("{function} is undefined for non-positive operands")]
    NonPositiveLogarithm { function: &'static str },

    #[error("Square root of a negative operand")]
    NegativeSquareRoot,

    #[error("Root index must be positive")]
    NonPositiveRootIndex,

    #[error("Factorial requires a non-negative integer")]
    InvalidFactorial,
}
