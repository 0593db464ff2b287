//! Waystate: an embeddable finite state machine
//!
//! A machine holds one current state and a set of state definitions. Each
//! definition maps event names to handlers that pick the next state, may
//! carry enter/exit callbacks, and may name a fallback state to recover to
//! when something fails.
//!
//! # Core Concepts
//!
//! - **State**: any ordinal-like identifier implementing the `State` trait
//! - **Events**: named triggers, handled only by the current state
//! - **Callbacks**: side effects on entering or exiting a state
//! - **Fallback**: per-state recovery target after a failed handler or callback
//!
//! Dispatch never returns an error. Unknown events are ignored, and failures
//! are absorbed by fallback recovery; the returned [`DispatchOutcome`] says
//! what happened.
//!
//! # Example
//!
//! ```rust
//! use waystate::{goto, state_enum, ActionError, Fsm, StateBuilder};
//!
//! state_enum! {
//!     enum Order {
//!         Cart,
//!         Paying,
//!         Paid,
//!         Failed,
//!     }
//! }
//!
//! # fn main() -> Result<(), waystate::BuildError> {
//! let mut order = Fsm::new(Order::Cart)
//!     .add_state(StateBuilder::new(Order::Cart).add_event("checkout", goto(Order::Paying)))?
//!     .add_state(
//!         StateBuilder::new(Order::Paying)
//!             .add_event("pay", || Err(ActionError::rejected("card declined")))
//!             .with_fallback(Order::Failed),
//!     )?;
//!
//! order.event("checkout");
//! assert_eq!(order.current_state(), Order::Paying);
//!
//! let outcome = order.event("pay");
//! assert!(outcome.failure().is_some());
//! assert_eq!(order.current_state(), Order::Failed);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{fail_with, goto, state, BuildError, FsmBuilder, StateBuilder};
pub use crate::core::{
    ActionError, Callback, EventHandler, Phase, State, StateDefinition, StateHistory,
    StateTransition, TransitionKind,
};
pub use crate::machine::{DispatchOutcome, Failure, FailureStage, Fsm, FsmConfig};
