//! The state machine and its transition engine.
//!
//! # Key Concepts
//!
//! - **Dispatch**: `event(name)` resolves the name against the current state
//!   and runs the matching handler
//! - **Callbacks**: exit runs on the state being left, enter on the state
//!   being entered
//! - **Fallback**: any failure moves the machine to the failing state's
//!   fallback, without running callbacks
//!
//! Everything runs synchronously on the caller's thread. `event` and
//! `set_state` take `&mut self`; share a machine across threads behind a
//! `Mutex`.

mod callbacks;
mod config;
mod dispatch;
mod outcome;
mod recovery;

pub use config::FsmConfig;
pub use outcome::{DispatchOutcome, Failure, FailureStage};

use crate::builder::BuildError;
use crate::core::{State, StateDefinition, StateHistory, StateTransition, TransitionKind};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Finite state machine over the state identifier `S`.
///
/// # Example
///
/// ```rust
/// use waystate::{goto, Fsm, StateBuilder};
///
/// # fn main() -> Result<(), waystate::BuildError> {
/// let mut light = Fsm::new(0u8)
///     .add_state(StateBuilder::new(0u8).add_event("toggle", goto(1)))?
///     .add_state(StateBuilder::new(1u8).add_event("toggle", goto(0)))?;
///
/// light.event("toggle");
/// assert_eq!(light.current_state(), 1);
///
/// light.event("unknown");
/// assert_eq!(light.current_state(), 1);
/// # Ok(())
/// # }
/// ```
pub struct Fsm<S: State> {
    current: S,
    states: BTreeMap<S, StateDefinition<S>>,
    history: StateHistory<S>,
    config: FsmConfig,
}

impl<S: State> Fsm<S> {
    /// Create a machine in `initial` with no states registered.
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            states: BTreeMap::new(),
            history: StateHistory::new(),
            config: FsmConfig::default(),
        }
    }

    /// Replace the configuration. Any history recorded so far is discarded.
    pub fn with_config(mut self, config: FsmConfig) -> Self {
        self.history = match config.history_limit {
            Some(limit) => StateHistory::bounded(limit),
            None => StateHistory::new(),
        };
        self.config = config;
        self
    }

    /// Register a state definition.
    ///
    /// Fails with [`BuildError::DuplicateState`] if a definition with the same
    /// id is already registered; the machine is consumed either way.
    pub fn add_state(
        mut self,
        definition: impl Into<StateDefinition<S>>,
    ) -> Result<Self, BuildError> {
        self.insert_state(definition.into())?;
        Ok(self)
    }

    pub(crate) fn insert_state(
        &mut self,
        definition: StateDefinition<S>,
    ) -> Result<(), BuildError> {
        let id = definition.id();
        if self.states.contains_key(&id) {
            return Err(BuildError::DuplicateState {
                state: id.name().into_owned(),
            });
        }
        self.states.insert(id, definition);
        Ok(())
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> S {
        self.current
    }

    /// Overwrite the current state.
    ///
    /// No callbacks run and no fallback applies. Meant for initialization and
    /// forced resets, not for normal transitions.
    pub fn set_state(&mut self, state: S) {
        let from = self.current;
        self.current = state;
        debug!(from = %from.name(), to = %state.name(), "state forced");
        self.record(from, state, TransitionKind::Forced);
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    pub fn config(&self) -> &FsmConfig {
        &self.config
    }

    /// Whether a definition for `state` is registered.
    pub fn contains_state(&self, state: S) -> bool {
        self.states.contains_key(&state)
    }

    /// Definition registered for `state`.
    pub fn definition(&self, state: S) -> Option<&StateDefinition<S>> {
        self.states.get(&state)
    }

    /// Whether the current state reacts to `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.current_definition()
            .is_some_and(|definition| definition.handles(event))
    }

    fn current_definition(&self) -> Option<&StateDefinition<S>> {
        self.states.get(&self.current)
    }

    fn record(&mut self, from: S, to: S, kind: TransitionKind) {
        if self.config.record_history {
            self.history.push(StateTransition::now(from, to, kind));
        }
    }
}

impl<S: State> fmt::Debug for Fsm<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fsm")
            .field("current", &self.current)
            .field("states", &self.states.keys().collect::<Vec<_>>())
            .field("history", &self.history.len())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{goto, StateBuilder};
    use crate::state_enum;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    state_enum! {
        enum Job {
            Idle,
            Busy,
            Done,
        }
    }

    #[test]
    fn new_machine_starts_in_initial_state() {
        let machine = Fsm::new(Job::Busy);

        assert_eq!(machine.current_state(), Job::Busy);
        assert!(!machine.contains_state(Job::Busy));
        assert!(machine.history().is_empty());
    }

    #[test]
    fn set_state_is_unconditional_and_silent() {
        let calls = Arc::new(AtomicUsize::new(0));
        let on_exit = Arc::clone(&calls);
        let on_enter = Arc::clone(&calls);

        let mut machine = Fsm::new(Job::Idle)
            .add_state(StateBuilder::new(Job::Idle).on_exit(move || {
                on_exit.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }))
            .unwrap()
            .add_state(StateBuilder::new(Job::Done).on_enter(move || {
                on_enter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }))
            .unwrap();

        machine.set_state(Job::Done);
        assert_eq!(machine.current_state(), Job::Done);

        // Busy has no definition; set_state does not care.
        machine.set_state(Job::Busy);
        assert_eq!(machine.current_state(), Job::Busy);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(machine.history().len(), 2);
        assert_eq!(machine.history().last().unwrap().kind, TransitionKind::Forced);
    }

    #[test]
    fn duplicate_state_is_rejected() {
        let result = Fsm::new(Job::Idle)
            .add_state(StateBuilder::new(Job::Idle).add_event("go", goto(Job::Busy)))
            .unwrap()
            .add_state(StateBuilder::new(Job::Idle));

        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateState {
                state: "Idle".to_string()
            }
        );
    }

    #[test]
    fn handles_reflects_current_state() {
        let mut machine = Fsm::new(Job::Idle)
            .add_state(StateBuilder::new(Job::Idle).add_event("go", goto(Job::Busy)))
            .unwrap();

        assert!(machine.handles("go"));
        assert!(!machine.handles("stop"));

        machine.set_state(Job::Busy);
        assert!(!machine.handles("go"));
    }

    #[test]
    fn config_bounds_history() {
        let mut machine = Fsm::new(Job::Idle).with_config(FsmConfig {
            history_limit: Some(2),
            ..FsmConfig::default()
        });

        machine.set_state(Job::Busy);
        machine.set_state(Job::Done);
        machine.set_state(Job::Idle);

        assert_eq!(machine.history().len(), 2);
        assert_eq!(machine.history().transitions()[0].to, Job::Done);
    }

    #[test]
    fn history_can_be_disabled() {
        let mut machine = Fsm::new(Job::Idle).with_config(FsmConfig::without_history());

        machine.set_state(Job::Busy);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn debug_lists_registered_states() {
        let machine = Fsm::new(Job::Idle)
            .add_state(StateBuilder::new(Job::Idle))
            .unwrap();

        let rendered = format!("{machine:?}");
        assert!(rendered.contains("current: Idle"));
        assert!(rendered.contains("states: [Idle]"));
    }
}
