//! Immutable description of a single state.

use super::error::ActionError;
use super::phase::Phase;
use super::state::State;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// Event handler: decides the next state, or fails.
///
/// Handlers create no side effects on the machine themselves; the returned
/// state is applied by the dispatch engine.
pub type EventHandler<S> = Arc<dyn Fn() -> Result<S, ActionError> + Send + Sync>;

/// Side effect run when entering or exiting a state.
pub type Callback = Arc<dyn Fn() -> Result<(), ActionError> + Send + Sync>;

/// Everything the machine knows about one state.
///
/// Definitions are produced by [`StateBuilder`](crate::StateBuilder) and are
/// immutable once built. Cloning is cheap: handlers are reference counted.
pub struct StateDefinition<S: State> {
    pub(crate) id: S,
    pub(crate) events: HashMap<String, EventHandler<S>>,
    pub(crate) callbacks: BTreeMap<Phase, Callback>,
    pub(crate) fallback: Option<S>,
}

impl<S: State> StateDefinition<S> {
    /// Identifier of this state.
    pub fn id(&self) -> S {
        self.id
    }

    /// Recovery target used when a handler or callback fails in this state.
    pub fn fallback(&self) -> Option<S> {
        self.fallback
    }

    /// Handler registered for `event`, if any.
    pub fn handler(&self, event: &str) -> Option<&EventHandler<S>> {
        self.events.get(event)
    }

    /// Callback registered for `phase`, if any.
    pub fn callback(&self, phase: Phase) -> Option<&Callback> {
        self.callbacks.get(&phase)
    }

    /// Whether this state reacts to `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.events.contains_key(event)
    }

    /// Names of the events this state reacts to, in no particular order.
    pub fn event_names(&self) -> impl Iterator<Item = &str> {
        self.events.keys().map(String::as_str)
    }
}

impl<S: State> Clone for StateDefinition<S> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            events: self.events.clone(),
            callbacks: self.callbacks.clone(),
            fallback: self.fallback,
        }
    }
}

impl<S: State> fmt::Debug for StateDefinition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut events: Vec<&str> = self.event_names().collect();
        events.sort_unstable();
        f.debug_struct("StateDefinition")
            .field("id", &self.id)
            .field("events", &events)
            .field("callbacks", &self.callbacks.keys().collect::<Vec<_>>())
            .field("fallback", &self.fallback)
            .finish()
    }
}
