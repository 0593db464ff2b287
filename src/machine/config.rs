//! Per-machine configuration.

use serde::{Deserialize, Serialize};

/// Tunables of a [`Fsm`](crate::Fsm).
///
/// The configuration is plain data so embedding applications can load it
/// with whatever serde format they already use.
///
/// ```rust
/// use waystate::FsmConfig;
///
/// let config: FsmConfig = serde_json::from_str(r#"{ "history_limit": 32 }"#).unwrap();
/// assert!(config.record_history);
/// assert_eq!(config.history_limit, Some(32));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FsmConfig {
    /// Record every state change in the machine's history.
    pub record_history: bool,

    /// Keep at most this many transitions; `None` keeps all of them.
    pub history_limit: Option<usize>,
}

impl Default for FsmConfig {
    fn default() -> Self {
        Self {
            record_history: true,
            history_limit: None,
        }
    }
}

impl FsmConfig {
    /// Configuration that records nothing.
    pub fn without_history() -> Self {
        Self {
            record_history: false,
            history_limit: None,
        }
    }
}
