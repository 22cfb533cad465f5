//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Declarative configuration via the fsm_config! macro
//! - Event-driven transitions with trigger()
//! - Undoing and redoing transitions
//!
//! Run with: cargo run --example traffic_light

use flowstate::core::StateMachine;
use flowstate::fsm_config;

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let config = fsm_config! {
        initial: "red",
        states: {
            "red" => { "go" => "green" },
            "green" => { "caution" => "yellow" },
            "yellow" => { "stop" => "red" },
        }
    };

    let mut machine = StateMachine::new(config);
    println!("Initial state: {}\n", machine.state());

    println!("Cycling through the lights:");
    for event in ["go", "caution", "stop", "go"] {
        machine.trigger(event).unwrap();
        println!("  {:7} -> {}", event, machine.state());
    }

    println!("\nUndoing the last two transitions:");
    machine.undo();
    println!("  undo -> {}", machine.state());
    machine.undo();
    println!("  undo -> {}", machine.state());

    println!("\nRedoing one:");
    machine.redo();
    println!("  redo -> {}", machine.state());

    println!("\nFull journal path: {:?}", machine.journal().path());
    println!("States that accept \"go\": {:?}", machine.states_for("go"));

    println!("\n=== Example Complete ===");
}
