//! Build errors for machine assembly.

use thiserror::Error;

/// Errors that can occur when assembling a state machine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("State '{state}' is already registered")]
    DuplicateState { state: String },

    #[error("Machine has {} problems: {}", .0.len(), list(.0))]
    Invalid(Vec<BuildError>),
}

fn list(errors: &[BuildError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
