//! Domain error types.

use common::OrderId;
use thiserror::Error;

use crate::ledger::LedgerError;
use crate::order::OrderError;

/// Errors that can occur during domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An error occurred in the account ledger.
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// An error occurred in the order state machine.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// No order exists with the given id.
    #[error("Order not found: {order_id}")]
    OrderNotFound { order_id: OrderId },
}
