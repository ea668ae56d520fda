//! Calcstate: a pure calculator state machine
//!
//! Calcstate is the logic behind a calculator keypad. A host renders the
//! engine's [`Snapshot`](engine::Snapshot) and turns clicks and key presses
//! into handler calls; everything that decides what the display shows lives
//! here.
//!
//! # Core Concepts
//!
//! - **State**: the display text, pending operand and operation, and flags
//! - **Engine**: synchronous handlers, one per button or key
//! - **Errors as data**: invalid arithmetic shows `"Error"` instead of failing
//! - **History**: completed calculations, newest first (extended variant)
//!
//! # Example
//!
//! ```rust
//! use calcstate::builder::EngineBuilder;
//! use calcstate::core::{Operation, ScientificFunction};
//!
//! let mut engine = EngineBuilder::new().extended().build().unwrap();
//!
//! engine.digit('2');
//! engine.operation(Operation::Add);
//! engine.digit('3');
//! engine.operation(Operation::Add);
//! engine.digit('4');
//! engine.equals();
//! assert_eq!(engine.current_value(), "9");
//!
//! engine.scientific(ScientificFunction::Square);
//! assert_eq!(engine.current_value(), "81");
//! assert_eq!(engine.history().latest().unwrap().calculation, "9²");
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod input;

// Re-export commonly used types
pub use crate::builder::{EngineBuilder, Variant};
pub use crate::core::{CalculatorState, HistoryEntry, Operation, ScientificFunction};
pub use crate::engine::{CalculatorEngine, Command, Snapshot};
