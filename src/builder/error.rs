//! Build errors for engine configuration.

use thiserror::Error;

/// A single problem found while validating an engine configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Precision {requested} is outside the supported range 1..={max}")]
    PrecisionOutOfRange { requested: usize, max: usize },

    #[error("Scientific mode requires the extended variant")]
    ScientificModeRequiresExtended,
}

/// Errors that can occur when building a calculator engine.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Every violation found, not just the first one
    #[error("Invalid engine configuration: {}", describe(.0))]
    InvalidConfig(Vec<ConfigViolation>),
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
