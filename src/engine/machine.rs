//! Calculator engine that applies key presses to the calculator state.

use crate::builder::EngineConfig;
use crate::core::{
    format_number_with_precision, parse_operand, CalculationHistory, CalculatorState, Constant,
    Guard, HistoryEntry, Operation, ScientificFunction, ERROR_DISPLAY,
};
use crate::engine::command::Command;
use crate::engine::snapshot::Snapshot;
use tracing::{debug, trace};

/// Preconditions checked by the handlers, built once per engine.
#[derive(Debug)]
struct Guards {
    pending_operation: Guard,
    chain_ready: Guard,
    signed_value: Guard,
    numeric_value: Guard,
}

impl Guards {
    fn new() -> Self {
        Self {
            pending_operation: Guard::pending_operation(),
            chain_ready: Guard::chain_ready(),
            signed_value: Guard::signed_value(),
            numeric_value: Guard::numeric_value(),
        }
    }
}

/// State machine behind a calculator keypad.
///
/// Each handler is a synchronous, atomic transition of the calculator state.
/// Handlers never fail: invalid arithmetic shows `"Error"` on the display
/// and input the current configuration does not support is ignored.
///
/// # Example
///
/// ```rust
/// use calcstate::core::Operation;
/// use calcstate::engine::CalculatorEngine;
///
/// let mut engine = CalculatorEngine::new();
/// engine.digit('7');
/// engine.operation(Operation::Multiply);
/// engine.digit('8');
/// engine.equals();
///
/// assert_eq!(engine.current_value(), "56");
/// assert_eq!(engine.previous_operation_text(), "");
/// ```
#[derive(Debug)]
pub struct CalculatorEngine {
    state: CalculatorState,
    history: CalculationHistory,
    config: EngineConfig,
    guards: Guards,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Basic keypad with default settings.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default(), false)
    }

    /// Extended keypad (scientific functions and history) with default settings.
    pub fn extended() -> Self {
        Self::with_config(EngineConfig::extended(), false)
    }

    /// Build from an already validated configuration.
    pub(crate) fn with_config(config: EngineConfig, scientific_mode: bool) -> Self {
        debug!(variant = ?config.variant, precision = config.precision, "engine created");
        Self {
            state: CalculatorState::with_scientific_mode(scientific_mode),
            history: CalculationHistory::new(),
            config,
            guards: Guards::new(),
        }
    }

    /// Current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Text on the display (pure)
    pub fn current_value(&self) -> &str {
        &self.state.current_value
    }

    /// Pending operand and symbol, e.g. `"12 ÷"` (pure)
    pub fn previous_operation_text(&self) -> String {
        self.state.previous_operation_text()
    }

    /// Calculation history, newest first (pure)
    pub fn history(&self) -> &CalculationHistory {
        &self.history
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.history)
    }

    /// Route a command to its handler.
    pub fn dispatch(&mut self, command: Command) {
        trace!(?command, "dispatch");
        match command {
            Command::Digit(digit) => self.digit(digit),
            Command::DecimalPoint => self.decimal_point(),
            Command::Operation(operation) => self.operation(operation),
            Command::Equals => self.equals(),
            Command::Clear => self.clear(),
            Command::ToggleSign => self.toggle_sign(),
            Command::Percentage => self.percentage(),
            Command::Backspace => self.backspace(),
            Command::ToggleScientificMode => self.toggle_scientific_mode(),
            Command::Scientific(function) => self.scientific(function),
            Command::Constant(constant) => self.constant(constant),
            Command::Power => self.power(),
            Command::Root => self.root(),
            Command::ClearHistory => self.clear_history(),
        }
    }

    /// Enter a digit.
    ///
    /// Starts a new number after an operator, equals or function key,
    /// replaces a lone `"0"`, and appends otherwise. Non-digit characters
    /// are ignored.
    pub fn digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            debug!(%digit, "ignored non-digit input");
            return;
        }

        if self.state.reset_on_next_digit {
            self.state.current_value = digit.to_string();
            self.state.reset_on_next_digit = false;
        } else if self.state.is_zero() {
            self.state.current_value = digit.to_string();
        } else {
            self.state.current_value.push(digit);
        }
        trace!(value = %self.state.current_value, "digit");
    }

    /// Enter a decimal point; a second point in the same number is ignored.
    pub fn decimal_point(&mut self) {
        if self.state.reset_on_next_digit {
            self.state.current_value = "0.".to_string();
            self.state.reset_on_next_digit = false;
        } else if !self.state.current_value.contains('.') {
            self.state.current_value.push('.');
        }
    }

    /// Start a binary operation, evaluating a ready chain first.
    ///
    /// `3 + 4 +` evaluates `3 + 4` before `+` becomes pending again.
    pub fn operation(&mut self, operation: Operation) {
        if operation.requires_extended() && !self.config.is_extended() {
            debug!(%operation, "ignored: operation needs the extended variant");
            return;
        }

        if self.guards.chain_ready.check(&self.state) {
            self.evaluate();
        }
        self.begin_operation(operation);
    }

    /// Start a pending power without evaluating a ready chain.
    pub fn power(&mut self) {
        self.begin_extended_operation(Operation::Power);
    }

    /// Start a pending root without evaluating a ready chain.
    pub fn root(&mut self) {
        self.begin_extended_operation(Operation::Root);
    }

    /// Evaluate the pending operation and clear it.
    pub fn equals(&mut self) {
        if !self.guards.pending_operation.check(&self.state) {
            debug!(
                guard = self.guards.pending_operation.name(),
                "equals ignored"
            );
            return;
        }

        self.evaluate();
        self.state.previous_value = None;
        self.state.operation = None;
        self.state.reset_on_next_digit = true;
    }

    /// Back to the initial state. Keypad mode and history are kept.
    pub fn clear(&mut self) {
        self.state = CalculatorState::with_scientific_mode(self.state.scientific_mode);
        debug!("cleared");
    }

    /// Flip the sign of the displayed value.
    pub fn toggle_sign(&mut self) {
        if !self.guards.signed_value.check(&self.state) {
            return;
        }

        let value = &self.state.current_value;
        self.state.current_value = match value.strip_prefix('-') {
            Some(unsigned) => unsigned.to_string(),
            None => format!("-{value}"),
        };
    }

    /// Divide the displayed value by 100.
    pub fn percentage(&mut self) {
        if !self.guards.numeric_value.check(&self.state) {
            return;
        }

        let value = self.state.current_value.clone();
        let result = self.format(parse_operand(&value) / 100.0);
        self.record(format!("{value}%"), &result);
        self.state.current_value = result;
    }

    /// Remove the last character; a single digit (signed or not) becomes `"0"`.
    pub fn backspace(&mut self) {
        let value = &self.state.current_value;
        let length = value.chars().count();

        if length <= 1 || (length == 2 && value.starts_with('-')) {
            self.state.current_value = "0".to_string();
        } else {
            self.state.current_value.pop();
        }
    }

    /// Switch between the basic and scientific keypads.
    ///
    /// Only the mode flag changes; the value and any pending operation stay.
    pub fn toggle_scientific_mode(&mut self) {
        if !self.config.is_extended() {
            debug!("ignored: scientific mode needs the extended variant");
            return;
        }
        self.state.scientific_mode = !self.state.scientific_mode;
        debug!(scientific_mode = self.state.scientific_mode, "keypad mode");
    }

    /// Apply a unary scientific function to the displayed value.
    pub fn scientific(&mut self, function: ScientificFunction) {
        if !self.config.is_extended() {
            debug!(function = function.name(), "ignored: needs the extended variant");
            return;
        }

        let value = self.state.current_value.clone();
        match function.apply(parse_operand(&value)) {
            Ok(result) => {
                let result = self.format(result);
                self.record(function.history_text(&value), &result);
                self.state.current_value = result;
            }
            Err(error) => {
                debug!(function = function.name(), %value, %error, "domain error");
                self.state.current_value = ERROR_DISPLAY.to_string();
            }
        }
        self.state.reset_on_next_digit = true;
    }

    /// Put a constant on the display. Constants are not recorded to history.
    pub fn constant(&mut self, constant: Constant) {
        if !self.config.is_extended() {
            debug!(?constant, "ignored: needs the extended variant");
            return;
        }
        self.state.current_value = self.format(constant.value());
        self.state.reset_on_next_digit = true;
    }

    pub fn pi(&mut self) {
        self.constant(Constant::Pi);
    }

    pub fn e(&mut self) {
        self.constant(Constant::E);
    }

    /// Forget every recorded calculation.
    pub fn clear_history(&mut self) {
        self.history = self.history.cleared();
        debug!("history cleared");
    }

    fn begin_extended_operation(&mut self, operation: Operation) {
        if !self.config.is_extended() {
            debug!(%operation, "ignored: needs the extended variant");
            return;
        }
        self.begin_operation(operation);
    }

    fn begin_operation(&mut self, operation: Operation) {
        self.state.previous_value = Some(self.state.current_value.clone());
        self.state.operation = Some(operation);
        self.state.reset_on_next_digit = true;
        trace!(previous = %self.state.current_value, %operation, "operation pending");
    }

    /// Replace the display with the result of the pending operation.
    fn evaluate(&mut self) {
        let (Some(previous), Some(operation)) =
            (self.state.previous_value.clone(), self.state.operation)
        else {
            return;
        };
        let current = self.state.current_value.clone();

        match operation.apply(parse_operand(&previous), parse_operand(&current)) {
            Ok(result) => {
                let result = self.format(result);
                debug!(%previous, %operation, %current, %result, "evaluated");
                self.record(operation.history_text(&previous, &current), &result);
                self.state.current_value = result;
            }
            Err(error) => {
                debug!(%previous, %operation, %current, %error, "domain error");
                self.state.current_value = ERROR_DISPLAY.to_string();
            }
        }
    }

    fn format(&self, value: f64) -> String {
        format_number_with_precision(value, self.config.precision)
    }

    fn record(&mut self, calculation: String, result: &str) {
        if !self.config.is_extended() {
            return;
        }
        self.history = self.history.record(HistoryEntry::new(calculation, result));
    }
}
