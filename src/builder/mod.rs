//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for creating state
//! definitions and assembling them into machines.

pub mod error;
pub mod machine;
pub mod macros;
pub mod state;

pub use error::BuildError;
pub use machine::FsmBuilder;
pub use state::StateBuilder;

use crate::core::{ActionError, State};

/// Start describing the state `id`. Same as [`StateBuilder::new`].
pub fn state<S: State>(id: S) -> StateBuilder<S> {
    StateBuilder::new(id)
}

/// Create an event handler that always moves to `target`.
///
/// # Example
///
/// ```
/// use waystate::builder::{goto, state};
///
/// let start = state(0u8).add_event("next", goto(1)).build();
/// assert_eq!((start.handler("next").unwrap())().unwrap(), 1);
/// ```
pub fn goto<S: State>(target: S) -> impl Fn() -> Result<S, ActionError> + Send + Sync + 'static {
    move || Ok(target)
}

/// Create an event handler that always fails with `reason`.
///
/// # Example
///
/// ```
/// use waystate::builder::{fail_with, state};
///
/// let locked = state(0u8).add_event("open", fail_with("locked")).build();
/// assert!((locked.handler("open").unwrap())().is_err());
/// ```
pub fn fail_with<S: State>(
    reason: impl Into<String>,
) -> impl Fn() -> Result<S, ActionError> + Send + Sync + 'static {
    let reason = reason.into();
    move || Err(ActionError::rejected(reason.clone()))
}
