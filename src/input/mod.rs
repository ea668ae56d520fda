//! Keyboard input for hosts that forward global key events.
//!
//! Pointer input needs nothing from this module: buttons call engine
//! handlers (or [`Command`](crate::engine::Command)s) directly.

mod keymap;
mod subscription;

pub use keymap::{Key, KeyAction, KeyMap};
pub use subscription::{CalculatorSession, KeyboardListeners, Subscription};
