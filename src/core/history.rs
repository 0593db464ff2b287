//! State transition history tracking.
//!
//! Every change of the current state is recorded as an immutable
//! [`StateTransition`]. The history itself is a value: `record` returns a new
//! history and leaves the original untouched.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What caused a change of the current state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    /// A handler for the named event succeeded.
    Event(String),
    /// Fallback recovery after a failed handler or callback.
    Fallback,
    /// `set_state` overwrote the current state.
    Forced,
}

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use waystate::{StateTransition, TransitionKind};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: 0u8,
///     to: 1u8,
///     kind: TransitionKind::Event("next".to_string()),
///     timestamp: Utc::now(),
/// };
/// assert!(transition.is_event("next"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Why the transition happened
    pub kind: TransitionKind,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Create a transition stamped with the current time.
    pub fn now(from: S, to: S, kind: TransitionKind) -> Self {
        Self {
            from,
            to,
            kind,
            timestamp: Utc::now(),
        }
    }

    /// Whether this transition was caused by the named event.
    pub fn is_event(&self, name: &str) -> bool {
        matches!(&self.kind, TransitionKind::Event(event) if event == name)
    }
}

/// Ordered history of state transitions.
///
/// A history may be bounded: once `limit` transitions are held, recording a
/// new one drops the oldest.
///
/// # Example
///
/// ```rust
/// use waystate::{StateHistory, StateTransition, TransitionKind};
///
/// let history = StateHistory::new()
///     .record(StateTransition::now(1u8, 2, TransitionKind::Event("a".into())))
///     .record(StateTransition::now(2u8, 3, TransitionKind::Fallback));
///
/// let path: Vec<u8> = history.get_path().into_iter().copied().collect();
/// assert_eq!(path, vec![1, 2, 3]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create an empty history holding at most `limit` transitions.
    pub fn bounded(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Maximum number of transitions kept, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a transition, returning a new history.
    ///
    /// ```rust
    /// use waystate::{StateHistory, StateTransition, TransitionKind};
    ///
    /// let history = StateHistory::new();
    /// let new_history = history.record(StateTransition::now(0u8, 1, TransitionKind::Forced));
    /// assert_eq!(new_history.len(), 1);
    /// assert_eq!(history.len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// In-place `record`, used by the machine that owns the history.
    pub(crate) fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
        if let Some(limit) = self.limit {
            let excess = self.transitions.len().saturating_sub(limit);
            self.transitions.drain(..excess);
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` state of the oldest
    /// retained transition, then the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all retained transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Most recent transition.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::borrow::Cow;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl State for TestState {
        fn name(&self) -> Cow<'_, str> {
            match self {
                Self::Initial => "Initial".into(),
                Self::Processing => "Processing".into(),
                Self::Complete => "Complete".into(),
            }
        }
    }

    fn event(from: TestState, to: TestState) -> StateTransition<TestState> {
        StateTransition::now(from, to, TransitionKind::Event("go".to_string()))
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(event(TestState::Initial, TestState::Processing));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(event(TestState::Initial, TestState::Processing))
            .record(event(TestState::Processing, TestState::Complete));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Initial);
        assert_eq!(path[1], &TestState::Processing);
        assert_eq!(path[2], &TestState::Complete);
    }

    #[test]
    fn bounded_history_drops_oldest() {
        let history = StateHistory::bounded(2)
            .record(event(TestState::Initial, TestState::Processing))
            .record(event(TestState::Processing, TestState::Complete))
            .record(StateTransition::now(
                TestState::Complete,
                TestState::Initial,
                TransitionKind::Forced,
            ));

        assert_eq!(history.len(), 2);
        assert_eq!(history.limit(), Some(2));
        assert_eq!(history.transitions()[0].from, TestState::Processing);
        assert_eq!(history.last().unwrap().kind, TransitionKind::Forced);
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let history = StateHistory::bounded(0).record(event(TestState::Initial, TestState::Complete));
        assert!(history.is_empty());
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(StateTransition {
                timestamp: start,
                ..event(TestState::Initial, TestState::Processing)
            })
            .record(StateTransition {
                timestamp: start + chrono::Duration::milliseconds(250),
                ..event(TestState::Processing, TestState::Complete)
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn is_event_matches_name() {
        let transition = event(TestState::Initial, TestState::Processing);
        assert!(transition.is_event("go"));
        assert!(!transition.is_event("stop"));
        assert!(!StateTransition::now(TestState::Initial, TestState::Complete, TransitionKind::Fallback)
            .is_event("go"));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::bounded(8).record(event(TestState::Initial, TestState::Processing));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.limit(), Some(8));
        assert!(deserialized.transitions()[0].is_event("go"));
    }
}
