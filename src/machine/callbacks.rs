//! Exit/enter sequence around a state change.

use super::outcome::{DispatchOutcome, Failure, FailureStage};
use super::Fsm;
use crate::core::{ActionError, Phase, State, TransitionKind};
use tracing::{debug, trace};

impl<S: State> Fsm<S> {
    /// Move from the current state to `next` after `event` succeeded.
    ///
    /// Exit runs on the current state before it changes; enter runs on the
    /// new current state. A failing callback hands over to fallback recovery
    /// from whatever the current state is at that point.
    pub(super) fn change_state(&mut self, event: &str, next: S) -> DispatchOutcome<S> {
        let from = self.current;

        if let Err(error) = self.trigger_callback(Phase::Exit) {
            return self.fallback(Failure {
                stage: FailureStage::Exit,
                state: from,
                error,
            });
        }

        self.current = next;
        self.record(from, next, TransitionKind::Event(event.to_string()));

        if let Err(error) = self.trigger_callback(Phase::Enter) {
            return self.fallback(Failure {
                stage: FailureStage::Enter,
                state: next,
                error,
            });
        }

        debug!(from = %from.name(), to = %next.name(), event, "transitioned");
        DispatchOutcome::Transitioned { from, to: next }
    }

    /// Run the `phase` callback registered on the current state, if any.
    fn trigger_callback(&self, phase: Phase) -> Result<(), ActionError> {
        let callback = self
            .current_definition()
            .and_then(|definition| definition.callback(phase))
            .cloned();

        match callback {
            Some(callback) => {
                trace!(state = %self.current.name(), %phase, "running callback");
                callback()
            }
            None => Ok(()),
        }
    }
}
