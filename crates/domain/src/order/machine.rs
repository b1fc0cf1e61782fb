//! Transition table for the order lifecycle.
//!
//! [`decide`] is a pure function of the current state and the requested
//! action. It does not touch the ledger or the order; the caller runs the
//! returned [`Effect`] and records the transition.
//!
//! ```text
//!             pay              ship             deliver          cancel
//! Created     charge -> Paid   reject           reject           -> Cancelled
//! Paid        reject           -> Shipped       reject           refund -> Cancelled
//! Shipped     no-op            no-op            -> Delivered     no-op
//! Delivered   no-op            no-op            no-op            no-op
//! Cancelled   no-op            no-op            no-op            no-op
//! ```

use super::{Action, OrderState};

/// Side effect a transition has on the owner's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No balance change.
    None,
    /// Debit the order amount from the owner.
    ChargeOwner,
    /// Credit the order amount back to the owner.
    RefundOwner,
}

/// Outcome of looking up `(state, action)` in the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Run `effect`, then move to `next`.
    Advance { effect: Effect, next: OrderState },

    /// Hard rejection reported to the caller as an error.
    Reject { reason: &'static str },

    /// Harmless request; nothing changes and `message` is reported.
    NoOp { message: &'static str },
}

impl Decision {
    fn advance(next: OrderState) -> Self {
        Decision::Advance {
            effect: Effect::None,
            next,
        }
    }

    /// Returns true if the order would change state.
    pub fn is_advance(&self) -> bool {
        matches!(self, Decision::Advance { .. })
    }
}

/// Looks up what `action` does to an order in `state`.
pub fn decide(state: OrderState, action: Action) -> Decision {
    use Action::{Cancel, Deliver, Pay, Ship};
    use OrderState::{Cancelled, Created, Delivered, Paid, Shipped};

    match (state, action) {
        (Created, Pay) => Decision::Advance {
            effect: Effect::ChargeOwner,
            next: Paid,
        },
        (Created, Ship) => Decision::Reject {
            reason: "cannot ship unpaid order",
        },
        (Created, Deliver) => Decision::Reject {
            reason: "cannot deliver unpaid order",
        },
        (Created, Cancel) => Decision::advance(Cancelled),

        (Paid, Pay) => Decision::Reject {
            reason: "already paid",
        },
        (Paid, Ship) => Decision::advance(Shipped),
        (Paid, Deliver) => Decision::Reject {
            reason: "cannot deliver unshipped order",
        },
        (Paid, Cancel) => Decision::Advance {
            effect: Effect::RefundOwner,
            next: Cancelled,
        },

        (Shipped, Pay) => Decision::NoOp {
            message: "already paid",
        },
        (Shipped, Ship) => Decision::NoOp {
            message: "already shipping",
        },
        (Shipped, Deliver) => Decision::advance(Delivered),
        (Shipped, Cancel) => Decision::NoOp {
            message: "cannot cancel in transit",
        },

        (Delivered, Pay | Ship | Deliver) => Decision::NoOp {
            message: "already delivered",
        },
        (Delivered, Cancel) => Decision::NoOp {
            message: "cannot cancel delivered",
        },

        (Cancelled, Pay) => Decision::NoOp {
            message: "cannot pay cancelled",
        },
        (Cancelled, Ship) => Decision::NoOp {
            message: "cannot ship cancelled",
        },
        (Cancelled, Deliver) => Decision::NoOp {
            message: "cannot deliver cancelled",
        },
        (Cancelled, Cancel) => Decision::NoOp {
            message: "already cancelled",
        },
    }
}

/// Actions that move an order out of `state`.
pub fn available_actions(state: OrderState) -> Vec<Action> {
    Action::ALL
        .into_iter()
        .filter(|action| decide(state, *action).is_advance())
        .collect()
}
