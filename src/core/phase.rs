//! Callback phases around a state change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two moments around a state change at which callbacks run.
///
/// `Exit` fires on the state being left, before the current state changes.
/// `Enter` fires on the state being entered, after the change.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Phase {
    Enter,
    Exit,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enter => f.write_str("enter"),
            Self::Exit => f.write_str("exit"),
        }
    }
}
