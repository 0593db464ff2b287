//! Fallback recovery after a failed handler or callback.

use super::outcome::{DispatchOutcome, Failure};
use super::Fsm;
use crate::core::{State, StateDefinition, TransitionKind};
use tracing::warn;

impl<S: State> Fsm<S> {
    /// Move to the fallback of the current state, if it has one.
    ///
    /// The current state here is whatever it was when the failure happened:
    /// the old state for handler and exit failures, the new one for enter
    /// failures. No callbacks run, including those of the fallback target,
    /// and recovery is attempted once.
    pub(super) fn fallback(&mut self, failure: Failure<S>) -> DispatchOutcome<S> {
        let failed_at = self.current;
        let target = self
            .current_definition()
            .and_then(StateDefinition::fallback);

        warn!(
            state = %failed_at.name(),
            stage = %failure.stage,
            error = %failure.error,
            fallback = ?target,
            "dispatch failed"
        );

        match target {
            Some(to) => {
                self.current = to;
                self.record(failed_at, to, TransitionKind::Fallback);
                DispatchOutcome::Recovered { failure, to }
            }
            None => DispatchOutcome::Stuck { failure },
        }
    }
}
