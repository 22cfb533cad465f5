//! Core state machine types and logic.
//!
//! This module contains the machine itself and everything it owns:
//! - The [`StateMachine`] with its undo/redo stacks
//! - The transition journal
//! - Runtime error definitions
//!
//! Everything here is synchronous and in-process; the machine has no
//! external collaborators.

mod error;
mod history;
mod machine;

pub use error::FsmError;
pub use history::{TransitionLog, TransitionRecord};
pub use machine::StateMachine;
