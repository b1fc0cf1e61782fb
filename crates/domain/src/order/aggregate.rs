//! Order record and transition application.

use chrono::{DateTime, Utc};
use common::{AccountId, OrderId};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ledger::Ledger;

use super::machine::{self, Decision, Effect};
use super::{Action, HistoryEntry, Money, ORDER_AMOUNT, OrderError, OrderState};

/// Result of a successful [`Order::perform`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The order moved to `new_state`; `entry` was appended to its history.
    Transitioned {
        new_state: OrderState,
        entry: HistoryEntry,
    },

    /// Nothing changed.
    NoOp { message: &'static str },
}

impl ActionOutcome {
    /// Returns true if the order changed state.
    pub fn is_transition(&self) -> bool {
        matches!(self, ActionOutcome::Transitioned { .. })
    }
}

/// A single purchase request.
///
/// State and history only change through [`Order::perform`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,

    /// Account charged for the order. Lookup only.
    owner_id: AccountId,

    amount: Money,

    created_at: DateTime<Utc>,

    history: Vec<HistoryEntry>,

    state: OrderState,
}

// Query methods
impl Order {
    /// Creates a new order in the `Created` state.
    pub fn new(id: OrderId, owner_id: AccountId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            owner_id,
            amount: ORDER_AMOUNT,
            created_at,
            history: Vec::new(),
            state: OrderState::Created,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the owning account's id.
    pub fn owner_id(&self) -> AccountId {
        self.owner_id
    }

    /// Returns the amount charged on payment.
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the current state.
    pub fn state(&self) -> OrderState {
        self.state
    }

    /// Returns the transition history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns true if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}

// Transitions
impl Order {
    /// Performs `action` against the order.
    ///
    /// On an advancing transition the balance effect runs first, then the
    /// history entry is appended and the state switched. If the effect fails
    /// the order is left untouched.
    pub fn perform(
        &mut self,
        action: Action,
        ledger: &mut Ledger,
        now: DateTime<Utc>,
    ) -> Result<ActionOutcome, DomainError> {
        match machine::decide(self.state, action) {
            Decision::Reject { reason } => Err(OrderError::InvalidTransition {
                current_state: self.state,
                action,
                reason,
            }
            .into()),
            Decision::NoOp { message } => Ok(ActionOutcome::NoOp { message }),
            Decision::Advance { effect, next } => {
                self.run_effect(effect, ledger)?;

                let entry = HistoryEntry::new(action, next, now);
                self.history.push(entry.clone());
                self.state = next;

                Ok(ActionOutcome::Transitioned {
                    new_state: next,
                    entry,
                })
            }
        }
    }

    fn run_effect(&self, effect: Effect, ledger: &mut Ledger) -> Result<(), DomainError> {
        match effect {
            Effect::None => {}
            Effect::ChargeOwner => {
                ledger.debit(self.owner_id, self.amount)?;
            }
            Effect::RefundOwner => {
                ledger.credit(self.owner_id, self.amount)?;
            }
        }
        Ok(())
    }
}
