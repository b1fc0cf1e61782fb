//! In-memory session store.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use common::OrderId;

use crate::ledger::Ledger;
use crate::order::{Money, Order};

/// Accounts seeded by [`Store::demo`].
pub const DEMO_ACCOUNTS: [(&str, u64); 2] = [("Artem", 1000), ("Denis", 200)];

/// Holds every account and order of a session.
///
/// Whoever starts the session builds the store and hands it to an
/// [`OrderService`](crate::OrderService). Nothing here outlives the process.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) ledger: Ledger,
    /// Keyed by id, which is also creation order.
    pub(crate) orders: BTreeMap<OrderId, Order>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one account per `(name, balance)` seed.
    pub fn with_accounts<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = (S, Money)>,
        S: Into<String>,
    {
        let mut store = Self::new();
        for (name, balance) in seeds {
            store.ledger.open(name, balance);
        }
        store
    }

    /// Creates a store with the demo accounts.
    pub fn demo() -> Self {
        Self::with_accounts(
            DEMO_ACCOUNTS
                .into_iter()
                .map(|(name, balance)| (name, Money::new(balance))),
        )
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Returns an order by id.
    pub fn order(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.get(&order_id)
    }

    /// Returns all orders, oldest first.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Returns the id for an order created at `now`.
    pub(crate) fn next_order_id(&self, now: DateTime<Utc>) -> OrderId {
        OrderId::issue(now.timestamp_millis(), self.orders.keys().next_back().copied())
    }

    pub(crate) fn insert_order(&mut self, order: Order) {
        self.orders.insert(order.id(), order);
    }
}
