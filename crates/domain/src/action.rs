//! Actions — named requests to change the light state.

use serde::{Deserialize, Serialize};

/// A requested state change.
///
/// Serialized the way the dashboard's buttons describe them:
/// `{"type": "allOn"}`, `{"type": "toggle", "payload": 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    /// Switch every light on.
    AllOn,
    /// Switch every light off.
    AllOff,
    /// Invert the light at the given index.
    Toggle(usize),
    /// Any action kind this version does not know about.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllOn => f.write_str("allOn"),
            Self::AllOff => f.write_str("allOff"),
            Self::Toggle(index) => write!(f, "toggle({index})"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}
