//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a macro for creating
//! [`Config`] values with minimal boilerplate. Both are conveniences over
//! the plain data structures in [`crate::config`]; a configuration built
//! here behaves exactly like one written out literally or parsed from
//! JSON.

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::config::{Config, StateDefinition};
use indexmap::IndexMap;

/// Fluent builder for [`Config`] values.
///
/// States appear in the built configuration in the order they are first
/// mentioned. The builder checks only that an initial state was named and
/// at least one state declared; it does not require `initial` or
/// transition targets to be declared states, matching the machine's lazy
/// membership checking.
///
/// # Example
///
/// ```rust
/// use flowstate::builder::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .initial("draft")
///     .transition("draft", "submit", "review")
///     .transition("review", "approve", "published")
///     .transition("review", "reject", "draft")
///     .state("published")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.initial, "draft");
/// assert_eq!(config.transition_target("review", "reject"), Some("draft"));
/// ```
#[derive(Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: IndexMap<String, StateDefinition>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with no transitions of its own.
    ///
    /// Re-declaring an existing state keeps its transitions.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.entry(name.into()).or_default();
        self
    }

    /// Declare a transition, implicitly declaring `from` if needed.
    ///
    /// A later transition for the same `(from, event)` pair replaces the
    /// earlier one.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    ///
    /// Fails with [`BuildError::MissingInitialState`] when no initial
    /// state was set, or [`BuildError::NoStates`] when nothing was
    /// declared.
    pub fn build(self) -> Result<Config, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(Config {
            initial,
            states: self.states,
        })
    }
}
