//! Builder for constructing state definitions.

use crate::core::{ActionError, Callback, EventHandler, Phase, State, StateDefinition};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Builder for a single [`StateDefinition`] with a fluent API.
///
/// The builder is one owned value: every call mutates it in place and hands
/// it back, and [`build`](Self::build) consumes it. A definition that has
/// been built can no longer be changed.
///
/// # Example
///
/// ```rust
/// use waystate::{ActionError, Phase, StateBuilder};
///
/// let idle = StateBuilder::new(0u8)
///     .add_event("start", || Ok(1))
///     .add_event("break", || Err(ActionError::rejected("not allowed")))
///     .add_callback(Phase::Enter, || Ok(()))
///     .with_fallback(9)
///     .build();
///
/// assert!(idle.handles("start"));
/// assert_eq!(idle.fallback(), Some(9));
/// ```
pub struct StateBuilder<S: State> {
    id: S,
    events: HashMap<String, EventHandler<S>>,
    callbacks: BTreeMap<Phase, Callback>,
    fallback: Option<S>,
}

impl<S: State> StateBuilder<S> {
    /// Start describing the state `id`: no events, no callbacks, no fallback.
    pub fn new(id: S) -> Self {
        Self {
            id,
            events: HashMap::new(),
            callbacks: BTreeMap::new(),
            fallback: None,
        }
    }

    /// Register `handler` for the event `name`.
    ///
    /// Registering the same name again replaces the previous handler.
    pub fn add_event<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn() -> Result<S, ActionError> + Send + Sync + 'static,
    {
        self.events.insert(name.into(), Arc::new(handler));
        self
    }

    /// Register `callback` for `phase`, replacing any existing one.
    pub fn add_callback<F>(mut self, phase: Phase, callback: F) -> Self
    where
        F: Fn() -> Result<(), ActionError> + Send + Sync + 'static,
    {
        self.callbacks.insert(phase, Arc::new(callback));
        self
    }

    /// Shorthand for `add_callback(Phase::Enter, callback)`.
    pub fn on_enter<F>(self, callback: F) -> Self
    where
        F: Fn() -> Result<(), ActionError> + Send + Sync + 'static,
    {
        self.add_callback(Phase::Enter, callback)
    }

    /// Shorthand for `add_callback(Phase::Exit, callback)`.
    pub fn on_exit<F>(self, callback: F) -> Self
    where
        F: Fn() -> Result<(), ActionError> + Send + Sync + 'static,
    {
        self.add_callback(Phase::Exit, callback)
    }

    /// Set the recovery target for failures in this state. Last write wins.
    pub fn with_fallback(mut self, fallback: S) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Identifier of the state being built.
    pub fn id(&self) -> S {
        self.id
    }

    /// Finish the definition.
    pub fn build(self) -> StateDefinition<S> {
        StateDefinition {
            id: self.id,
            events: self.events,
            callbacks: self.callbacks,
            fallback: self.fallback,
        }
    }
}

impl<S: State> From<StateBuilder<S>> for StateDefinition<S> {
    fn from(builder: StateBuilder<S>) -> Self {
        builder.build()
    }
}
