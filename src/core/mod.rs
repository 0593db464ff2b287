//! Core state machine types.
//!
//! This module contains the passive building blocks of the machine:
//! - State identifiers via the `State` trait
//! - Callback phases and the errors handlers may return
//! - Immutable state definitions
//! - Immutable history tracking
//!
//! Nothing in here drives a transition; that lives in [`crate::machine`].

mod definition;
mod error;
mod history;
mod phase;
mod state;

pub use definition::{Callback, EventHandler, StateDefinition};
pub use error::ActionError;
pub use history::{StateHistory, StateTransition, TransitionKind};
pub use phase::Phase;
pub use state::State;
