//! Document Workflow State Machine
//!
//! This example demonstrates a review workflow loaded from JSON
//! configuration, the kind an embedding application would supply.
//!
//! Key concepts:
//! - Loading configuration from a dynamic JSON document
//! - Error outcomes for invalid states and unknown transitions
//! - Querying states by event
//! - History inspection and clearing
//!
//! Run with: cargo run --example document_workflow

use flowstate::config::Config;
use flowstate::core::StateMachine;

fn main() {
    println!("=== Document Workflow ===\n");

    let config = Config::from_json(
        r#"{
            "initial": "draft",
            "states": {
                "draft": {"transitions": {"submit": "review"}},
                "review": {"transitions": {"approve": "published", "reject": "draft"}},
                "published": {}
            }
        }"#,
    )
    .unwrap();

    let mut machine = StateMachine::new(config);
    println!("Starting in: {}", machine.state());

    machine.trigger("submit").unwrap();
    println!("After submit: {}", machine.state());

    // Events without a transition from the current state are errors.
    if let Err(err) = machine.trigger("submit") {
        println!("Triggering submit again: {err}");
    }

    machine.trigger("reject").unwrap();
    machine.trigger("submit").unwrap();
    machine.trigger("approve").unwrap();
    println!("After the full review loop: {}", machine.state());

    println!("\nStates accepting \"submit\": {:?}", machine.states_for("submit"));
    println!("All states: {:?}", machine.states());

    println!("\nJournal path: {:?}", machine.journal().path());
    println!("Undo depth: {}", machine.undo_history().len());

    machine.clear_history();
    println!("After clear_history, undo available: {}", machine.undo());

    println!("\n=== Example Complete ===");
}
