//! End-to-end key sequences against the public API.

use calcstate::builder::{BuildError, EngineBuilder, Variant};
use calcstate::core::{Operation, ScientificFunction};
use calcstate::engine::{CalculatorEngine, Command};
use calcstate::input::{CalculatorSession, Key, KeyboardListeners};

fn run(engine: &mut CalculatorEngine, commands: &[Command]) {
    for command in commands {
        engine.dispatch(*command);
    }
}

#[test]
fn multiply_then_equals() {
    let mut engine = CalculatorEngine::new();
    engine.digit('7');
    engine.operation(Operation::Multiply);
    engine.digit('8');
    engine.equals();

    assert_eq!(engine.current_value(), "56");
    assert_eq!(engine.previous_operation_text(), "");
}

#[test]
fn chained_addition() {
    let mut engine = CalculatorEngine::new();
    run(
        &mut engine,
        &[
            Command::Digit('2'),
            Command::Operation(Operation::Add),
            Command::Digit('3'),
            Command::Operation(Operation::Add),
            Command::Digit('4'),
            Command::Equals,
        ],
    );
    assert_eq!(engine.current_value(), "9");
}

#[test]
fn divide_by_zero_is_error_without_history() {
    let mut engine = CalculatorEngine::extended();
    run(
        &mut engine,
        &[
            Command::Digit('5'),
            Command::Operation(Operation::Divide),
            Command::Digit('0'),
            Command::Equals,
        ],
    );
    assert_eq!(engine.current_value(), "Error");
    assert!(engine.history().is_empty());
}

#[test]
fn error_recovers_on_clear() {
    let mut engine = CalculatorEngine::new();
    run(
        &mut engine,
        &[
            Command::Digit('5'),
            Command::Operation(Operation::Divide),
            Command::Digit('0'),
            Command::Equals,
            Command::Clear,
            Command::Digit('3'),
        ],
    );
    assert_eq!(engine.current_value(), "3");
}

#[test]
fn operating_on_error_yields_nan() {
    let mut engine = CalculatorEngine::new();
    run(
        &mut engine,
        &[
            Command::Digit('5'),
            Command::Operation(Operation::Divide),
            Command::Digit('0'),
            Command::Operation(Operation::Add),
        ],
    );
    assert_eq!(engine.current_value(), "Error");
    assert_eq!(engine.previous_operation_text(), "Error +");

    run(&mut engine, &[Command::Digit('1'), Command::Equals]);
    assert_eq!(engine.current_value(), "NaN");
}

#[test]
fn floating_point_noise_is_hidden() {
    let mut engine = CalculatorEngine::new();
    run(
        &mut engine,
        &[
            Command::DecimalPoint,
            Command::Digit('1'),
            Command::Operation(Operation::Add),
            Command::DecimalPoint,
            Command::Digit('2'),
            Command::Equals,
        ],
    );
    assert_eq!(engine.current_value(), "0.3");
}

#[test]
fn square_root_is_recorded() {
    let mut engine = CalculatorEngine::extended();
    engine.digit('9');
    engine.scientific(ScientificFunction::Sqrt);

    assert_eq!(engine.current_value(), "3");
    let latest = engine.history().latest().unwrap();
    assert_eq!(latest.calculation, "√9");
    assert_eq!(latest.result, "3");
}

#[test]
fn factorial_of_positive_and_negative() {
    let mut engine = CalculatorEngine::extended();
    engine.digit('4');
    engine.scientific(ScientificFunction::Factorial);
    assert_eq!(engine.current_value(), "24");
    assert_eq!(engine.history().latest().unwrap().calculation, "4!");

    engine.clear();
    engine.digit('1');
    engine.toggle_sign();
    engine.scientific(ScientificFunction::Factorial);
    assert_eq!(engine.current_value(), "Error");
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn scientific_mode_toggle_leaves_calculation_untouched() {
    let mut engine = CalculatorEngine::extended();
    run(
        &mut engine,
        &[
            Command::Digit('8'),
            Command::Operation(Operation::Subtract),
            Command::Digit('3'),
        ],
    );
    let before = engine.state().clone();

    engine.toggle_scientific_mode();
    assert!(engine.state().scientific_mode);
    assert_eq!(engine.current_value(), "3");
    engine.toggle_scientific_mode();

    assert_eq!(engine.state(), &before);
    engine.equals();
    assert_eq!(engine.current_value(), "5");
}

// Power/root initiators do not evaluate a pending chain, unlike operation().
#[test]
fn power_initiator_does_not_chain() {
    let mut engine = CalculatorEngine::extended();
    run(
        &mut engine,
        &[
            Command::Digit('2'),
            Command::Operation(Operation::Multiply),
            Command::Digit('5'),
            Command::Power,
            Command::Digit('2'),
            Command::Equals,
        ],
    );
    assert_eq!(engine.current_value(), "25");
}

#[test]
fn root_initiator_does_not_chain() {
    let mut engine = CalculatorEngine::extended();
    run(
        &mut engine,
        &[
            Command::Digit('2'),
            Command::Operation(Operation::Add),
            Command::Digit('8'),
            Command::Root,
        ],
    );
    assert_eq!(engine.previous_operation_text(), "8 √");

    run(&mut engine, &[Command::Digit('3'), Command::Equals]);
    assert_eq!(engine.current_value(), "2");
}

#[test]
fn root_operation_evaluates_chain_first() {
    let mut engine = CalculatorEngine::extended();
    run(
        &mut engine,
        &[
            Command::Digit('2'),
            Command::Operation(Operation::Add),
            Command::Digit('8'),
            Command::Operation(Operation::Root),
        ],
    );
    assert_eq!(engine.previous_operation_text(), "10 √");
}

#[test]
fn decimal_point_after_overflow_keeps_infinity() {
    let mut engine = CalculatorEngine::new();
    engine.digit('1');
    for _ in 0..400 {
        engine.digit('0');
    }
    engine.percentage();
    assert_eq!(engine.current_value(), "Infinity");

    engine.decimal_point();
    engine.digit('5');
    assert_eq!(engine.current_value(), "Infinity.5");

    engine.operation(Operation::Add);
    engine.digit('1');
    engine.equals();
    assert_eq!(engine.current_value(), "Infinity");
}

#[test]
fn constants_skip_history() {
    let mut engine = CalculatorEngine::extended();
    run(
        &mut engine,
        &[
            Command::Constant(calcstate::core::Constant::Pi),
            Command::Operation(Operation::Multiply),
            Command::Digit('2'),
            Command::Equals,
        ],
    );
    assert_eq!(engine.current_value(), "6.2831853072");

    let history = engine.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history.latest().unwrap().calculation, "3.1415926536 × 2");
}

#[test]
fn history_is_newest_first() {
    let mut engine = CalculatorEngine::extended();
    engine.digit('3');
    engine.scientific(ScientificFunction::Square);
    engine.scientific(ScientificFunction::Cube);

    let calculations: Vec<&str> = engine
        .history()
        .entries()
        .iter()
        .map(|e| e.calculation.as_str())
        .collect();
    assert_eq!(calculations, vec!["9³", "3²"]);
    assert_eq!(engine.current_value(), "729");
}

#[test]
fn snapshot_reflects_engine() {
    let mut engine = EngineBuilder::new()
        .extended()
        .scientific_mode(true)
        .build()
        .unwrap();
    engine.digit('6');
    engine.operation(Operation::Divide);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.current_value, "6");
    assert_eq!(snapshot.previous_operation_text, "6 ÷");
    assert!(snapshot.scientific_mode);
    assert!(snapshot.history.is_empty());

    let json = snapshot.to_json().unwrap();
    assert!(json.contains("\"previous_operation_text\":\"6 ÷\""));
}

#[test]
fn invalid_configuration_is_rejected() {
    let result = EngineBuilder::new()
        .variant(Variant::Basic)
        .scientific_mode(true)
        .build();
    assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
}

#[test]
fn keyboard_session_drives_engine() {
    let listeners = KeyboardListeners::new();
    let mut session = CalculatorSession::new(CalculatorEngine::extended());
    session.activate(&listeners);

    for name in ["2", "^", "1", "0"] {
        listeners.dispatch(&Key::from_name(name));
    }
    assert!(listeners.dispatch(&Key::from_name("=")));
    assert_eq!(session.engine().current_value(), "1024");

    listeners.dispatch(&Key::from_name("Backspace"));
    assert_eq!(session.engine().current_value(), "102");

    listeners.dispatch(&Key::from_name("Escape"));
    assert_eq!(session.snapshot().current_value, "0");
    assert_eq!(session.snapshot().history.len(), 1);
}
