//! Errors returned by event handlers and phase callbacks.

use super::phase::Phase;
use thiserror::Error;

/// Error returned from an event handler or a phase callback.
///
/// Any failure hands control to fallback recovery; the machine never
/// surfaces it as an `Err`. The error is reported back through
/// [`DispatchOutcome`](crate::DispatchOutcome) instead.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The handler refused the event.
    #[error("Event rejected: {0}")]
    Rejected(String),

    /// A phase callback failed.
    #[error("{phase} callback failed: {reason}")]
    Callback { phase: Phase, reason: String },

    /// Any other error raised by caller code.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ActionError {
    /// Shorthand for [`ActionError::Rejected`].
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    /// Shorthand for [`ActionError::Callback`].
    pub fn callback(phase: Phase, reason: impl Into<String>) -> Self {
        Self::Callback {
            phase,
            reason: reason.into(),
        }
    }
}
