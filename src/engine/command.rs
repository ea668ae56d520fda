//! Commands a host can send to the engine.

use crate::core::{Constant, Operation, ScientificFunction};
use serde::{Deserialize, Serialize};

/// One button press or key press, expressed as data.
///
/// Hosts that cannot call engine methods directly (a web view posting
/// messages, a test script) send commands to
/// [`CalculatorEngine::dispatch`](crate::engine::CalculatorEngine::dispatch).
///
/// # Example
///
/// ```rust
/// use calcstate::engine::Command;
///
/// let command: Command = serde_json::from_str(r#"{"type":"digit","value":"7"}"#).unwrap();
/// assert_eq!(command, Command::Digit('7'));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Command {
    Digit(char),
    DecimalPoint,
    Operation(Operation),
    Equals,
    Clear,
    ToggleSign,
    Percentage,
    Backspace,
    ToggleScientificMode,
    Scientific(ScientificFunction),
    Constant(Constant),
    Power,
    Root,
    ClearHistory,
}
