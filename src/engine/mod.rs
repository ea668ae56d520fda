//! The calculator engine: the imperative shell around the pure core.
//!
//! # Key Concepts
//!
//! - **Engine**: owns the state and history and applies one handler per input
//! - **Commands**: every handler expressed as serializable data
//! - **Snapshot**: the read-only view presentation layers render from

mod command;
mod machine;
mod snapshot;

pub use command::Command;
pub use machine::CalculatorEngine;
pub use snapshot::{Snapshot, SnapshotError};
