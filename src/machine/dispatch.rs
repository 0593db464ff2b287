//! Event dispatch.

use super::outcome::{DispatchOutcome, Failure, FailureStage};
use super::Fsm;
use crate::core::State;
use tracing::debug;

impl<S: State> Fsm<S> {
    /// Dispatch the event `name` against the current state.
    ///
    /// - No definition for the current state, or no handler for `name`:
    ///   nothing happens ([`DispatchOutcome::Ignored`]).
    /// - The handler fails: fallback recovery runs against the current state
    ///   and the handler's target is never used.
    /// - The handler succeeds: the exit/enter sequence moves the machine to
    ///   the returned state. Returning the current state still runs exit and
    ///   enter.
    ///
    /// Failures are never returned as errors; inspect the outcome or
    /// [`current_state`](Self::current_state) afterwards.
    pub fn event(&mut self, name: &str) -> DispatchOutcome<S> {
        let from = self.current;
        let handler = self
            .current_definition()
            .and_then(|definition| definition.handler(name))
            .cloned();

        let Some(handler) = handler else {
            debug!(state = %from.name(), event = name, "event ignored");
            return DispatchOutcome::Ignored;
        };

        debug!(state = %from.name(), event = name, "dispatching event");
        match handler() {
            Ok(next) => self.change_state(name, next),
            Err(error) => self.fallback(Failure {
                stage: FailureStage::Handler,
                state: from,
                error,
            }),
        }
    }
}
