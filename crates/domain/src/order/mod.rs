//! Order record, lifecycle state machine and service.

mod action;
mod aggregate;
mod history;
pub mod machine;
mod service;
mod state;
mod value_objects;

pub use action::{Action, ParseActionError};
pub use aggregate::{ActionOutcome, Order};
pub use history::HistoryEntry;
pub use machine::{Decision, Effect, available_actions, decide};
pub use service::{OrderDetail, OrderService, OrderSummary};
pub use state::OrderState;
pub use value_objects::{Money, ORDER_AMOUNT};

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The action is not allowed in the order's current state.
    #[error("Invalid state transition: cannot {action} from {current_state} state ({reason})")]
    InvalidTransition {
        current_state: OrderState,
        action: Action,
        reason: &'static str,
    },
}
