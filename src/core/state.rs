//! Core State trait for state identifiers.
//!
//! A state identifier is a small ordinal-like value: an integer or a
//! fieldless enum. It is copied freely, ordered for lookup, and named for
//! diagnostics.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine state identifiers.
///
/// # Required Traits
///
/// - `Copy`: identifiers are plain values, stored in every definition and
///   handed out by [`Fsm::current_state`](crate::Fsm::current_state)
/// - `Ord`: definitions are keyed by identifier
/// - `Debug`: identifiers show up in logs and errors
/// - `Serialize` + `Deserialize`: transition history can be exported
///
/// Integer primitives implement this trait out of the box. For enums, use
/// [`state_enum!`](crate::state_enum) or implement it by hand:
///
/// ```rust
/// use waystate::State;
/// use serde::{Deserialize, Serialize};
/// use std::borrow::Cow;
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> Cow<'_, str> {
///         match self {
///             Self::Open => "Open".into(),
///             Self::Closed => "Closed".into(),
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait State:
    Copy + Ord + Hash + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Get the state's name for display/logging.
    fn name(&self) -> Cow<'_, str>;
}

macro_rules! impl_state_for_ordinals {
    ($($ty:ty),* $(,)?) => {
        $(
            impl State for $ty {
                fn name(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_state_for_ordinals!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
