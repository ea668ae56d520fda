//! Builder API and configuration for calculator engines.
//!
//! Configuration is validated up front with every problem reported at once,
//! so a host sees the complete list of mistakes in a single pass.

pub mod config;
pub mod engine;
pub mod error;

pub use config::{EngineConfig, Variant, MAX_PRECISION};
pub use engine::EngineBuilder;
pub use error::{BuildError, ConfigViolation};
