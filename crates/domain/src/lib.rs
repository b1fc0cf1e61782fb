//! Domain layer for the order lifecycle system.
//!
//! This crate provides:
//! - An in-memory account ledger with sufficiency-checked debits
//! - The order record and its append-only history
//! - The order state machine as an exhaustive `(state, action)` dispatch
//! - A session store and the order service that ties them together

pub mod error;
pub mod ledger;
pub mod order;
pub mod store;

pub use error::DomainError;
pub use ledger::{Account, Ledger, LedgerError};
pub use order::{
    Action, ActionOutcome, HistoryEntry, Money, ORDER_AMOUNT, Order, OrderDetail, OrderError,
    OrderService, OrderState, OrderSummary, ParseActionError,
};
pub use store::{DEMO_ACCOUNTS, Store};
