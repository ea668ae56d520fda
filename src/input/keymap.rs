//! Mapping from host key events to engine commands.

use crate::builder::Variant;
use crate::core::Operation;
use crate::engine::Command;
use serde::{Deserialize, Serialize};

/// A key reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Character(char),
    Enter,
    Escape,
    Backspace,
    /// Anything the calculator does not handle
    Other,
}

impl Key {
    /// Interpret a host key name such as `"7"`, `"Enter"` or `"Escape"`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcstate::input::Key;
    ///
    /// assert_eq!(Key::from_name("Enter"), Key::Enter);
    /// assert_eq!(Key::from_name("*"), Key::Character('*'));
    /// assert_eq!(Key::from_name("Shift"), Key::Other);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Self::Enter,
            "Escape" => Self::Escape,
            "Backspace" => Self::Backspace,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// What a recognised key does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyAction {
    pub command: Command,
    /// The host should suppress its own handling (form submit, quick find)
    pub prevent_default: bool,
}

impl KeyAction {
    fn new(command: Command) -> Self {
        Self {
            command,
            prevent_default: false,
        }
    }

    fn suppressing_default(command: Command) -> Self {
        Self {
            command,
            prevent_default: true,
        }
    }
}

/// Keyboard layout for one keypad variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyMap {
    variant: Variant,
}

impl KeyMap {
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    /// Resolve a key to its action, or `None` for keys the calculator ignores.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcstate::builder::Variant;
    /// use calcstate::core::Operation;
    /// use calcstate::engine::Command;
    /// use calcstate::input::{Key, KeyMap};
    ///
    /// let keymap = KeyMap::new(Variant::Basic);
    /// let action = keymap.resolve(&Key::Character('*')).unwrap();
    /// assert_eq!(action.command, Command::Operation(Operation::Multiply));
    /// assert!(keymap.resolve(&Key::Character('^')).is_none());
    /// ```
    pub fn resolve(&self, key: &Key) -> Option<KeyAction> {
        let action = match key {
            Key::Character(c) if c.is_ascii_digit() => KeyAction::new(Command::Digit(*c)),
            Key::Character('.') => KeyAction::new(Command::DecimalPoint),
            Key::Character('+') => KeyAction::new(Command::Operation(Operation::Add)),
            Key::Character('-') => KeyAction::new(Command::Operation(Operation::Subtract)),
            Key::Character('*') => KeyAction::new(Command::Operation(Operation::Multiply)),
            Key::Character('/') => {
                KeyAction::suppressing_default(Command::Operation(Operation::Divide))
            }
            Key::Character('^') if self.variant == Variant::Extended => {
                KeyAction::new(Command::Power)
            }
            Key::Character('=') | Key::Enter => KeyAction::suppressing_default(Command::Equals),
            Key::Escape => KeyAction::new(Command::Clear),
            Key::Backspace => KeyAction::new(Command::Backspace),
            _ => return None,
        };
        Some(action)
    }
}
