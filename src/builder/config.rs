//! Engine configuration and its validation.

use crate::builder::error::ConfigViolation;
use crate::core::DEFAULT_PRECISION;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Largest number of fractional digits an `f64` can display meaningfully.
pub const MAX_PRECISION: usize = 15;

/// Which keypad the engine serves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Digits, the four basic operations, sign, percent and backspace
    #[default]
    Basic,
    /// Adds scientific functions, power/root, constants and history
    Extended,
}

/// Validated engine settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub variant: Variant,
    /// Fractional digits kept when formatting results
    pub precision: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Basic,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl EngineConfig {
    pub fn extended() -> Self {
        Self {
            variant: Variant::Extended,
            ..Self::default()
        }
    }

    pub fn is_extended(&self) -> bool {
        self.variant == Variant::Extended
    }

    /// Check the configuration together with the requested start mode,
    /// accumulating ALL violations.
    pub fn validate(
        &self,
        scientific_mode: bool,
    ) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        let precision_check = if (1..=MAX_PRECISION).contains(&self.precision) {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::PrecisionOutOfRange {
                requested: self.precision,
                max: MAX_PRECISION,
            })
        };
        checks.push(precision_check);

        let mode_check = if scientific_mode && !self.is_extended() {
            Validation::fail(ConfigViolation::ScientificModeRequiresExtended)
        } else {
            Validation::success(())
        };
        checks.push(mode_check);

        Validation::all_vec(checks).map(|_| ())
    }
}
