//! Flowstate: a declarative finite state machine library
//!
//! A machine is described by a [`config::Config`]: an initial state plus a
//! string-keyed map of states, each carrying an event-to-target transition
//! table. The [`core::StateMachine`] tracks a single active state, applies
//! transitions in response to named events or explicit state changes, and
//! keeps linear undo/redo history of state changes.
//!
//! # Core Concepts
//!
//! - **State**: a named condition the machine can occupy, identified by a
//!   string key in the configuration
//! - **Event**: a named trigger that, fired from a given state, may cause
//!   a transition to another state
//! - **History**: undo/redo stacks over state changes, plus a journal of
//!   every successful transition
//!
//! # Example
//!
//! ```rust
//! use flowstate::fsm_config;
//! use flowstate::core::StateMachine;
//!
//! let config = fsm_config! {
//!     initial: "draft",
//!     states: {
//!         "draft" => { "submit" => "review" },
//!         "review" => { "approve" => "published", "reject" => "draft" },
//!         "published" => {},
//!     }
//! };
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger("submit").unwrap();
//! machine.trigger("approve").unwrap();
//! assert_eq!(machine.state(), "published");
//!
//! machine.undo();
//! assert_eq!(machine.state(), "review");
//! ```

pub mod builder;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use config::{Config, StateDefinition};
pub use core::{FsmError, StateMachine, TransitionLog, TransitionRecord};

#[doc(hidden)]
pub mod __private {
    pub use indexmap::IndexMap;
}
