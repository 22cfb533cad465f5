//! State machine that applies declarative, event-driven transitions.

use crate::config::Config;
use crate::core::error::FsmError;
use crate::core::history::{TransitionLog, TransitionRecord};
use chrono::Utc;
use std::sync::Arc;

/// Finite state machine with linear undo/redo history.
///
/// A machine owns a shared handle to its [`Config`], the current active
/// state, two history stacks, and a journal of successful transitions.
/// All operations are synchronous method calls; nothing here locks or
/// copies, so a machine shared across threads needs external
/// synchronization around the whole instance.
///
/// # Undo/redo semantics
///
/// `change_state` and `trigger` push the departed state onto the undo
/// stack and clear the redo stack (a new transition invalidates any
/// pending redo chain). `undo` moves the displaced state onto the redo
/// stack, but `redo` does **not** push back onto the undo stack — see
/// [`StateMachine::redo`] for the full description of the asymmetry.
///
/// # Example
///
/// ```rust
/// use flowstate::builder::ConfigBuilder;
/// use flowstate::core::StateMachine;
///
/// let config = ConfigBuilder::new()
///     .initial("red")
///     .transition("red", "go", "green")
///     .transition("green", "stop", "red")
///     .build()
///     .unwrap();
///
/// let mut machine = StateMachine::new(config);
/// assert_eq!(machine.state(), "red");
///
/// machine.trigger("go").unwrap();
/// assert_eq!(machine.state(), "green");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "red");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Arc<Config>,
    active: String,
    undo_history: Vec<String>,
    redo_history: Vec<String>,
    journal: TransitionLog,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state.
    ///
    /// The configuration is shared, not cloned; pass an `Arc<Config>` to
    /// keep a handle on the caller's side.
    ///
    /// No check that `initial` is a declared state happens here. An
    /// undeclared initial state is accepted and only surfaces later, as
    /// [`FsmError::UnknownTransition`] from the first [`trigger`] call
    /// (explicit [`change_state`] calls away from it still work). The
    /// lazy failure keeps construction infallible.
    ///
    /// [`trigger`]: StateMachine::trigger
    /// [`change_state`]: StateMachine::change_state
    pub fn new(config: impl Into<Arc<Config>>) -> Self {
        let config = config.into();
        let active = config.initial.clone();
        Self {
            config,
            active,
            undo_history: Vec::new(),
            redo_history: Vec::new(),
            journal: TransitionLog::new(),
        }
    }

    /// The current active state. Never fails, no side effects.
    pub fn state(&self) -> &str {
        &self.active
    }

    /// The machine's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Go directly to `state`.
    ///
    /// Fails with [`FsmError::InvalidState`] when `state` is not declared
    /// in the configuration, leaving the machine untouched. On success the
    /// departed state is pushed onto the undo stack and the redo stack is
    /// cleared.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowstate::builder::ConfigBuilder;
    /// use flowstate::core::{FsmError, StateMachine};
    ///
    /// let config = ConfigBuilder::new()
    ///     .initial("idle")
    ///     .state("idle")
    ///     .state("busy")
    ///     .build()
    ///     .unwrap();
    /// let mut machine = StateMachine::new(config);
    ///
    /// machine.change_state("busy").unwrap();
    /// assert_eq!(machine.state(), "busy");
    ///
    /// let err = machine.change_state("gone").unwrap_err();
    /// assert!(matches!(err, FsmError::InvalidState { .. }));
    /// assert_eq!(machine.state(), "busy");
    /// ```
    pub fn change_state(&mut self, state: &str) -> Result<(), FsmError> {
        self.transition_to(state, None)
    }

    /// Apply the transition configured for `event` from the current state.
    ///
    /// Fails with [`FsmError::UnknownTransition`] when the current state
    /// has no transition for `event`; a current state that is itself
    /// undeclared reports the same error kind. Resolution then delegates
    /// to the same path as [`StateMachine::change_state`], so a transition
    /// whose target was never declared fails with
    /// [`FsmError::InvalidState`]. Nothing is mutated on failure.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let target = self
            .config
            .transition_target(&self.active, event)
            .ok_or_else(|| FsmError::UnknownTransition {
                state: self.active.clone(),
                event: event.to_string(),
            })?
            .to_string();

        self.transition_to(&target, Some(event))
    }

    /// Jump back to the configured initial state.
    ///
    /// This is a raw jump, not a tracked transition: it pushes nothing
    /// onto the undo stack, leaves the redo stack alone, writes no journal
    /// record, and performs no validation of the initial state. Use
    /// [`StateMachine::change_state`] with the initial state's name to get
    /// a transition that history can unwind.
    pub fn reset(&mut self) {
        self.active = self.config.initial.clone();
    }

    /// All declared state identifiers, in declaration order.
    pub fn states(&self) -> Vec<&str> {
        self.config.state_names().collect()
    }

    /// States from which `event` is a valid trigger, in declaration order.
    ///
    /// Pure query: an unrecognized event yields an empty list rather than
    /// an error. Entries with an empty target do not count, and an empty
    /// event string matches nothing. To list every state, use
    /// [`StateMachine::states`]; dynamically-typed FSMs often overload a
    /// single query for both, but here they are separate methods.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowstate::builder::ConfigBuilder;
    /// use flowstate::core::StateMachine;
    ///
    /// let config = ConfigBuilder::new()
    ///     .initial("a")
    ///     .transition("a", "go", "b")
    ///     .state("b")
    ///     .build()
    ///     .unwrap();
    /// let machine = StateMachine::new(config);
    ///
    /// assert_eq!(machine.states(), vec!["a", "b"]);
    /// assert_eq!(machine.states_for("go"), vec!["a"]);
    /// assert!(machine.states_for("nonexistent").is_empty());
    /// ```
    pub fn states_for(&self, event: &str) -> Vec<&str> {
        self.config
            .state_names()
            .filter(|state| self.config.transition_target(state, event).is_some())
            .collect()
    }

    /// Revert the most recent state change.
    ///
    /// Returns `false` without mutating anything when there is nothing to
    /// undo. Otherwise the displaced state goes onto the redo stack, the
    /// machine adopts the popped state, and `true` is returned.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_history.pop() else {
            return false;
        };

        let displaced = std::mem::replace(&mut self.active, previous);
        self.redo_history.push(displaced);
        true
    }

    /// Reapply the most recently undone state change.
    ///
    /// Returns `false` without mutating anything when there is nothing to
    /// redo. Otherwise the machine adopts the popped state and returns
    /// `true`.
    ///
    /// Redo does **not** push the pre-redo state back onto the undo
    /// stack: after a `redo`, an `undo` reverts the step that preceded
    /// the redone one, and the redone step cannot be reapplied again.
    /// Undo and redo are deliberately asymmetric; callers wanting
    /// symmetric traversal should drive the machine through
    /// [`StateMachine::change_state`] instead of replaying history.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_history.pop() else {
            return false;
        };

        self.active = next;
        true
    }

    /// Empty the undo and redo stacks and the journal.
    ///
    /// The active state is untouched. Subsequent [`StateMachine::undo`]
    /// and [`StateMachine::redo`] calls return `false` until new
    /// transitions occur.
    pub fn clear_history(&mut self) {
        self.undo_history.clear();
        self.redo_history.clear();
        self.journal = TransitionLog::new();
    }

    /// States that can be restored by [`StateMachine::undo`], oldest first.
    pub fn undo_history(&self) -> &[String] {
        &self.undo_history
    }

    /// States that can be restored by [`StateMachine::redo`], oldest first.
    pub fn redo_history(&self) -> &[String] {
        &self.redo_history
    }

    /// Journal of successful transitions.
    pub fn journal(&self) -> &TransitionLog {
        &self.journal
    }

    /// Shared transition path for `change_state` and `trigger`.
    fn transition_to(&mut self, state: &str, event: Option<&str>) -> Result<(), FsmError> {
        if !self.config.has_state(state) {
            return Err(FsmError::InvalidState {
                state: state.to_string(),
            });
        }

        let record = TransitionRecord {
            from: self.active.clone(),
            to: state.to_string(),
            event: event.map(str::to_string),
            timestamp: Utc::now(),
        };
        self.journal = self.journal.record(record);

        let departed = std::mem::replace(&mut self.active, state.to_string());
        self.undo_history.push(departed);
        self.redo_history.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ConfigBuilder;

    /// a --go--> b --back--> a
    fn ping_pong() -> StateMachine {
        let config = ConfigBuilder::new()
            .initial("a")
            .transition("a", "go", "b")
            .transition("b", "back", "a")
            .build()
            .unwrap();
        StateMachine::new(config)
    }

    #[test]
    fn new_machine_starts_in_initial_state() {
        let machine = ping_pong();
        assert_eq!(machine.state(), "a");
        assert!(machine.undo_history().is_empty());
        assert!(machine.redo_history().is_empty());
        assert!(machine.journal().is_empty());
    }

    #[test]
    fn config_is_shared_not_cloned() {
        let config = Arc::new(
            ConfigBuilder::new()
                .initial("a")
                .state("a")
                .build()
                .unwrap(),
        );
        let machine = StateMachine::new(Arc::clone(&config));
        assert!(std::ptr::eq(machine.config(), config.as_ref()));
    }

    #[test]
    fn change_state_moves_and_tracks_history() {
        let mut machine = ping_pong();

        machine.change_state("b").unwrap();

        assert_eq!(machine.state(), "b");
        assert_eq!(machine.undo_history(), ["a"]);
        assert!(machine.redo_history().is_empty());
    }

    #[test]
    fn change_state_to_undeclared_state_fails_without_mutation() {
        let mut machine = ping_pong();
        machine.change_state("b").unwrap();

        let err = machine.change_state("limbo").unwrap_err();

        assert!(matches!(err, FsmError::InvalidState { state } if state == "limbo"));
        assert_eq!(machine.state(), "b");
        assert_eq!(machine.undo_history(), ["a"]);
        assert_eq!(machine.journal().len(), 1);
    }

    #[test]
    fn trigger_follows_configured_transition() {
        let mut machine = ping_pong();

        machine.trigger("go").unwrap();

        assert_eq!(machine.state(), "b");
        assert_eq!(machine.undo_history(), ["a"]);
    }

    #[test]
    fn trigger_without_transition_fails_without_mutation() {
        let mut machine = ping_pong();

        let err = machine.trigger("back").unwrap_err();

        assert!(matches!(
            err,
            FsmError::UnknownTransition { state, event } if state == "a" && event == "back"
        ));
        assert_eq!(machine.state(), "a");
        assert!(machine.undo_history().is_empty());
        assert!(machine.journal().is_empty());
    }

    #[test]
    fn trigger_from_undeclared_active_state_is_unknown_transition() {
        let config = ConfigBuilder::new()
            .initial("ghost")
            .state("a")
            .build()
            .unwrap();
        let mut machine = StateMachine::new(config);

        let err = machine.trigger("go").unwrap_err();
        assert!(matches!(err, FsmError::UnknownTransition { state, .. } if state == "ghost"));
    }

    #[test]
    fn trigger_to_undeclared_target_is_invalid_state() {
        let config = ConfigBuilder::new()
            .initial("a")
            .transition("a", "go", "nowhere")
            .build()
            .unwrap();
        let mut machine = StateMachine::new(config);

        let err = machine.trigger("go").unwrap_err();
        assert!(matches!(err, FsmError::InvalidState { state } if state == "nowhere"));
        assert_eq!(machine.state(), "a");
    }

    #[test]
    fn new_transition_clears_redo_chain() {
        let mut machine = ping_pong();
        machine.trigger("go").unwrap();
        assert!(machine.undo());
        assert_eq!(machine.redo_history(), ["b"]);

        machine.change_state("b").unwrap();

        assert!(machine.redo_history().is_empty());
        assert!(!machine.redo());
    }

    #[test]
    fn undo_on_fresh_machine_returns_false() {
        let mut machine = ping_pong();
        assert!(!machine.undo());
        assert_eq!(machine.state(), "a");
    }

    #[test]
    fn undo_redo_walk_the_history() {
        let mut machine = ping_pong();

        machine.trigger("go").unwrap();
        assert_eq!(machine.state(), "b");

        assert!(machine.undo());
        assert_eq!(machine.state(), "a");

        assert!(machine.redo());
        assert_eq!(machine.state(), "b");

        // The single undo entry was consumed and redo restored nothing to
        // the undo stack, so the history is now exhausted in both
        // directions.
        assert!(!machine.undo());
        assert_eq!(machine.state(), "b");

        assert!(!machine.redo());
        assert_eq!(machine.state(), "b");
    }

    #[test]
    fn redo_does_not_extend_undo_history() {
        let mut machine = ping_pong();
        machine.trigger("go").unwrap();

        assert!(machine.undo());
        let depth_before = machine.undo_history().len();

        assert!(machine.redo());
        assert_eq!(machine.undo_history().len(), depth_before);
    }

    #[test]
    fn states_returns_declaration_order() {
        let machine = ping_pong();
        assert_eq!(machine.states(), vec!["a", "b"]);
    }

    #[test]
    fn states_for_filters_by_event() {
        let machine = ping_pong();
        assert_eq!(machine.states_for("go"), vec!["a"]);
        assert_eq!(machine.states_for("back"), vec!["b"]);
        assert!(machine.states_for("nonexistent").is_empty());
    }

    #[test]
    fn states_for_empty_event_matches_nothing() {
        let machine = ping_pong();
        assert!(machine.states_for("").is_empty());
    }

    #[test]
    fn reset_jumps_without_touching_history() {
        let mut machine = ping_pong();
        machine.trigger("go").unwrap();
        machine.undo();

        machine.reset();

        assert_eq!(machine.state(), "a");
        assert!(machine.undo_history().is_empty());
        assert_eq!(machine.redo_history(), ["b"]);
        assert_eq!(machine.journal().len(), 1);
    }

    #[test]
    fn clear_history_empties_stacks_and_journal() {
        let mut machine = ping_pong();
        machine.trigger("go").unwrap();
        machine.undo();

        machine.clear_history();

        assert!(!machine.undo());
        assert!(!machine.redo());
        assert!(machine.journal().is_empty());
        assert_eq!(machine.state(), "a");
    }

    #[test]
    fn journal_records_event_attribution() {
        let mut machine = ping_pong();
        machine.trigger("go").unwrap();
        machine.change_state("a").unwrap();

        let records = machine.journal().records();
        assert_eq!(records[0].event.as_deref(), Some("go"));
        assert_eq!(records[1].event, None);
        assert_eq!(machine.journal().path(), vec!["a", "b", "a"]);
    }

    #[test]
    fn undo_and_redo_leave_journal_untouched() {
        let mut machine = ping_pong();
        machine.trigger("go").unwrap();

        machine.undo();
        machine.redo();

        assert_eq!(machine.journal().len(), 1);
    }
}
