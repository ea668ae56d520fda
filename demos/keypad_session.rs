//! Keypad Session
//!
//! This example drives an extended calculator the way a host would:
//! - keyboard events routed through a scoped subscription
//! - button clicks calling engine handlers directly
//! - a JSON snapshot handed to the renderer after every event
//!
//! Run with: RUST_LOG=calcstate=debug cargo run --example keypad_session

use calcstate::builder::EngineBuilder;
use calcstate::core::ScientificFunction;
use calcstate::input::{CalculatorSession, Key, KeyboardListeners};
use tracing_subscriber::EnvFilter;

fn render(session: &CalculatorSession) {
    let snapshot = session.snapshot();
    println!(
        "{:>12} | {:<16} | scientific: {}",
        snapshot.previous_operation_text, snapshot.current_value, snapshot.scientific_mode
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Keypad Session Example ===\n");

    let engine = EngineBuilder::new().extended().build()?;
    let listeners = KeyboardListeners::new();
    let mut session = CalculatorSession::new(engine);
    session.activate(&listeners);

    // Typed: 12 / 4 + 5 =
    for name in ["1", "2", "/", "4", "+", "5", "Enter"] {
        let prevented = listeners.dispatch(&Key::from_name(name));
        print!("key {name:<6} prevent_default={prevented:<5} ");
        render(&session);
    }

    // Clicked: scientific keypad, square root of the result
    session.engine_mut().toggle_scientific_mode();
    session.engine_mut().scientific(ScientificFunction::Sqrt);
    print!("click sqrt                         ");
    render(&session);

    // Typed: divide by zero, then recover
    for name in ["/", "0", "=", "Escape"] {
        listeners.dispatch(&Key::from_name(name));
        print!("key {name:<6}                      ");
        render(&session);
    }

    println!("\nHistory:");
    for entry in session.engine().history().entries() {
        println!(
            "  {} {} = {}",
            entry.timestamp.format("%H:%M"),
            entry.calculation,
            entry.result
        );
    }

    println!("\nSnapshot JSON:\n{}", session.snapshot().to_json()?);

    session.deactivate();
    println!("\nListeners after deactivate: {}", listeners.len());

    println!("\n=== Example Complete ===");
    Ok(())
}
