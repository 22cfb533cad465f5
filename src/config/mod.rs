//! Declarative state machine configuration.
//!
//! A [`Config`] names an initial state and maps state identifiers to
//! [`StateDefinition`]s, each of which maps event identifiers to target
//! states. Configurations are plain data: they carry no guards, actions,
//! or behavior, and are never mutated by the machine after construction.

use crate::core::FsmError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Transition table for a single state.
///
/// Maps event identifiers to target state identifiers. A state that cannot
/// be left has an empty table; the `transitions` field may be omitted
/// entirely in JSON.
///
/// # Example
///
/// ```rust
/// use flowstate::config::StateDefinition;
///
/// let def: StateDefinition = serde_json::from_str(r#"{}"#).unwrap();
/// assert!(def.transitions.is_empty());
///
/// let def: StateDefinition =
///     serde_json::from_str(r#"{"transitions": {"submit": "review"}}"#).unwrap();
/// assert_eq!(def.transitions.get("submit").map(String::as_str), Some("review"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event identifier -> target state identifier.
    #[serde(default)]
    pub transitions: IndexMap<String, String>,
}

/// Complete state machine configuration.
///
/// State iteration order follows declaration order, so queries such as
/// [`crate::core::StateMachine::states`] return identifiers in the order
/// the configuration listed them.
///
/// Construction does not require `initial` to be a declared state. The
/// looser check is deliberate: an undeclared initial state only surfaces
/// as an error from the first operation that consults the state table
/// (see [`crate::core::StateMachine::new`]).
///
/// # Example
///
/// ```rust
/// use flowstate::config::Config;
///
/// let config = Config::from_json(
///     r#"{
///         "initial": "red",
///         "states": {
///             "red": {"transitions": {"go": "green"}},
///             "green": {"transitions": {"stop": "red"}}
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial, "red");
/// assert!(config.has_state("green"));
/// assert_eq!(config.transition_target("red", "go"), Some("green"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Identifier of the starting state.
    pub initial: String,
    /// State identifier -> definition, in declaration order.
    pub states: IndexMap<String, StateDefinition>,
}

impl Config {
    /// Build a configuration from a dynamic JSON value.
    ///
    /// `Value::Null` means no configuration was supplied and fails with
    /// [`FsmError::ConfigMissing`]; any other shape mismatch fails with
    /// [`FsmError::ConfigParse`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowstate::config::Config;
    /// use flowstate::core::FsmError;
    /// use serde_json::json;
    ///
    /// let err = Config::from_value(json!(null)).unwrap_err();
    /// assert!(matches!(err, FsmError::ConfigMissing));
    ///
    /// let config = Config::from_value(json!({
    ///     "initial": "idle",
    ///     "states": {"idle": {}}
    /// }))
    /// .unwrap();
    /// assert_eq!(config.initial, "idle");
    /// ```
    pub fn from_value(value: Value) -> Result<Self, FsmError> {
        if value.is_null() {
            return Err(FsmError::ConfigMissing);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Parse a configuration from a JSON string.
    ///
    /// A literal `null` document fails with [`FsmError::ConfigMissing`],
    /// matching [`Config::from_value`].
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Check whether a state identifier is declared.
    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Resolve the target of `event` from `state`.
    ///
    /// Returns `None` when the state is undeclared, the event has no entry,
    /// or the entry's target is empty. Empty targets count as no transition
    /// for both triggering and state queries.
    pub fn transition_target(&self, state: &str, event: &str) -> Option<&str> {
        self.states
            .get(state)?
            .transitions
            .get(event)
            .map(String::as_str)
            .filter(|target| !target.is_empty())
    }

    /// All declared state identifiers, in declaration order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }
}
