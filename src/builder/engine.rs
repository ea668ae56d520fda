//! Builder for constructing calculator engines.

use crate::builder::config::{EngineConfig, Variant};
use crate::builder::error::BuildError;
use crate::engine::CalculatorEngine;
use stillwater::validation::Validation;

/// Builder for constructing calculator engines with a fluent API.
///
/// # Example
///
/// ```rust
/// use calcstate::builder::EngineBuilder;
///
/// let engine = EngineBuilder::new()
///     .extended()
///     .precision(6)
///     .scientific_mode(true)
///     .build()
///     .unwrap();
///
/// assert!(engine.state().scientific_mode);
/// assert_eq!(engine.config().precision, 6);
/// ```
#[derive(Debug, Default)]
pub struct EngineBuilder {
    config: EngineConfig,
    scientific_mode: bool,
}

impl EngineBuilder {
    /// Create a new builder with basic defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the keypad variant.
    pub fn variant(mut self, variant: Variant) -> Self {
        self.config.variant = variant;
        self
    }

    /// Shorthand for `.variant(Variant::Extended)`.
    pub fn extended(self) -> Self {
        self.variant(Variant::Extended)
    }

    /// Set the number of fractional digits kept in results.
    pub fn precision(mut self, digits: usize) -> Self {
        self.config.precision = digits;
        self
    }

    /// Start with the scientific keypad active.
    pub fn scientific_mode(mut self, enabled: bool) -> Self {
        self.scientific_mode = enabled;
        self
    }

    /// Build the engine.
    /// Returns every configuration problem at once if validation fails.
    pub fn build(self) -> Result<CalculatorEngine, BuildError> {
        match self.config.validate(self.scientific_mode) {
            Validation::Success(()) => Ok(CalculatorEngine::with_config(
                self.config,
                self.scientific_mode,
            )),
            Validation::Failure(errors) => {
                Err(BuildError::InvalidConfig(errors.iter().cloned().collect()))
            }
        }
    }
}
