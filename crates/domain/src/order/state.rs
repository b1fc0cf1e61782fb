//! Order state machine states.

use serde::{Deserialize, Serialize};

/// The state of an order in its lifecycle.
///
/// State transitions:
/// ```text
/// Created ──pay──► Paid ──ship──► Shipped ──deliver──► Delivered
///    │               │
///    └────cancel─────┴──► Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderState {
    /// Order has been placed but not paid.
    #[default]
    Created,

    /// The owner has been charged.
    Paid,

    /// Order is on its way to the owner.
    Shipped,

    /// Order has reached the owner (terminal state).
    Delivered,

    /// Order was cancelled (terminal state).
    Cancelled,
}

impl OrderState {
    /// All states, in lifecycle order.
    pub const ALL: [OrderState; 5] = [
        OrderState::Created,
        OrderState::Paid,
        OrderState::Shipped,
        OrderState::Delivered,
        OrderState::Cancelled,
    ];

    /// Returns true if this is a terminal state (no further transitions possible).
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderState::Delivered | OrderState::Cancelled)
    }

    /// Returns true if illegal actions in this state are hard rejections
    /// rather than reported no-ops.
    pub fn rejects_illegal_actions(&self) -> bool {
        matches!(self, OrderState::Created | OrderState::Paid)
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Created => "Created",
            OrderState::Paid => "Paid",
            OrderState::Shipped => "Shipped",
            OrderState::Delivered => "Delivered",
            OrderState::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_created() {
        assert_eq!(OrderState::default(), OrderState::Created);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!OrderState::Created.is_terminal());
        assert!(!OrderState::Paid.is_terminal());
        assert!(!OrderState::Shipped.is_terminal());
        assert!(OrderState::Delivered.is_terminal());
        assert!(OrderState::Cancelled.is_terminal());
    }

    #[test]
    fn test_only_early_states_reject() {
        assert!(OrderState::Created.rejects_illegal_actions());
        assert!(OrderState::Paid.rejects_illegal_actions());
        assert!(!OrderState::Shipped.rejects_illegal_actions());
        assert!(!OrderState::Delivered.rejects_illegal_actions());
        assert!(!OrderState::Cancelled.rejects_illegal_actions());
    }

    #[test]
    fn test_display() {
        assert_eq!(OrderState::Created.to_string(), "Created");
        assert_eq!(OrderState::Paid.to_string(), "Paid");
        assert_eq!(OrderState::Shipped.to_string(), "Shipped");
        assert_eq!(OrderState::Delivered.to_string(), "Delivered");
        assert_eq!(OrderState::Cancelled.to_string(), "Cancelled");
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&OrderState::Shipped).unwrap();
        assert_eq!(json, "\"Shipped\"");
        let state: OrderState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, OrderState::Shipped);
    }
}
