//! Actions that can be requested against an order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A requested transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Pay,
    Ship,
    Deliver,
    Cancel,
}

impl Action {
    /// All actions, in lifecycle order.
    pub const ALL: [Action; 4] = [Action::Pay, Action::Ship, Action::Deliver, Action::Cancel];

    /// Returns the action name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Pay => "pay",
            Action::Ship => "ship",
            Action::Deliver => "deliver",
            Action::Cancel => "cancel",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a string does not name an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown action: {0} (expected pay, ship, deliver or cancel)")]
pub struct ParseActionError(String);

impl std::str::FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseActionError(s.to_string()))
    }
}
