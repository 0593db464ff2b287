//! Report of what a single dispatch did.

use crate::core::{ActionError, State};
use std::fmt;

/// Where in a dispatch a failure happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureStage {
    /// The event handler returned an error.
    Handler,
    /// The exit callback of the state being left failed.
    Exit,
    /// The enter callback of the state being entered failed.
    Enter,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handler => f.write_str("handler"),
            Self::Exit => f.write_str("exit callback"),
            Self::Enter => f.write_str("enter callback"),
        }
    }
}

/// A failed handler or callback, as seen by fallback recovery.
#[derive(Debug)]
pub struct Failure<S: State> {
    pub stage: FailureStage,
    /// Current state at the moment of failure.
    pub state: S,
    pub error: ActionError,
}

/// Result of [`Fsm::event`](crate::Fsm::event).
///
/// Dispatch never fails from the caller's point of view; this value only
/// tells what happened. Dropping it is always fine.
#[derive(Debug)]
pub enum DispatchOutcome<S: State> {
    /// The current state has no definition, or does not handle the event.
    Ignored,

    /// Handler and both callbacks succeeded.
    Transitioned { from: S, to: S },

    /// Something failed and the machine moved to the failing state's fallback.
    Recovered { failure: Failure<S>, to: S },

    /// Something failed and the failing state has no fallback.
    Stuck { failure: Failure<S> },
}

impl<S: State> DispatchOutcome<S> {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }

    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }

    /// The failure behind a `Recovered` or `Stuck` outcome.
    pub fn failure(&self) -> Option<&Failure<S>> {
        match self {
            Self::Recovered { failure, .. } | Self::Stuck { failure } => Some(failure),
            Self::Ignored | Self::Transitioned { .. } => None,
        }
    }
}
