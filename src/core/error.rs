//! Runtime errors for state machine operations.

use thiserror::Error;

/// Errors raised by configuration loading and machine operations.
///
/// All of these propagate to the caller; the machine performs no internal
/// recovery. The "nothing to undo/redo" condition is deliberately not an
/// error — [`crate::core::StateMachine::undo`] and
/// [`crate::core::StateMachine::redo`] report it through their boolean
/// return instead, since exhausted history is a routine outcome rather
/// than misuse.
#[derive(Debug, Error)]
pub enum FsmError {
    /// No configuration was supplied on the dynamic loading path
    /// (a JSON `null` stands in for a missing configuration).
    #[error("no configuration supplied")]
    ConfigMissing,

    /// A state change targeted a state that is not declared in the
    /// configuration.
    #[error("state `{state}` is not declared in the configuration")]
    InvalidState { state: String },

    /// An event was triggered that has no transition from the current
    /// state. Also covers a current state that is itself missing from
    /// the configuration (possible when the initial state was never
    /// declared).
    #[error("no transition for event `{event}` from state `{state}`")]
    UnknownTransition { state: String, event: String },

    /// The dynamic configuration value could not be parsed into a
    /// [`crate::config::Config`].
    #[error("malformed configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
