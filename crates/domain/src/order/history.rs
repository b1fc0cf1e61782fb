//! Order history log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Action, OrderState};

/// One recorded transition of an order.
///
/// Entries are appended in chronological order and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The action that caused the transition.
    pub action: Action,

    /// The state the order entered.
    pub resulting_state: OrderState,

    /// When the transition happened.
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(action: Action, resulting_state: OrderState, timestamp: DateTime<Utc>) -> Self {
        Self {
            action,
            resulting_state,
            timestamp,
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} -> {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.action,
            self.resulting_state
        )
    }
}
