//! Order service providing the session API for order operations.

use chrono::{DateTime, Utc};
use common::{AccountId, Clock, OrderId, SystemClock};
use serde::Serialize;

use crate::error::DomainError;
use crate::ledger::{Account, LedgerError};
use crate::store::Store;

use super::{
    Action, ActionOutcome, HistoryEntry, Money, Order, OrderState, machine::available_actions,
};

/// One line of the order list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub owner_name: String,
    pub state: OrderState,
}

/// Detailed view of a single order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDetail {
    pub id: OrderId,
    pub owner_id: AccountId,
    pub owner_name: String,
    pub state: OrderState,
    pub amount: Money,
    pub created_at: DateTime<Utc>,
    /// Actions that would move the order to another state.
    pub available_actions: Vec<Action>,
}

/// Service for managing orders.
///
/// Owns the session [`Store`] and the clock used for order ids and history
/// timestamps. Mutating operations take `&mut self`, so at most one
/// transition is ever in flight.
pub struct OrderService<C: Clock = SystemClock> {
    store: Store,
    clock: C,
}

impl OrderService<SystemClock> {
    /// Creates a service over `store` using wall-clock time.
    pub fn with_system_clock(store: Store) -> Self {
        Self::new(store, SystemClock)
    }
}

impl<C: Clock> OrderService<C> {
    /// Creates a new order service.
    pub fn new(store: Store, clock: C) -> Self {
        Self { store, clock }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Consumes the service, returning its store.
    pub fn into_store(self) -> Store {
        self.store
    }

    /// Returns all accounts in id order.
    pub fn list_accounts(&self) -> impl Iterator<Item = &Account> {
        self.store.ledger.accounts()
    }

    /// Opens a new account.
    #[tracing::instrument(skip(self))]
    pub fn open_account(&mut self, name: &str, balance: Money) -> AccountId {
        let account_id = self.store.ledger.open(name, balance);
        tracing::info!(%account_id, "account opened");
        account_id
    }

    /// Lists all orders, oldest first.
    pub fn list_orders(&self) -> Vec<OrderSummary> {
        self.store
            .orders()
            .map(|order| OrderSummary {
                id: order.id(),
                owner_name: self.owner_name(order.owner_id()),
                state: order.state(),
            })
            .collect()
    }

    /// Places a new order for `owner_id`.
    #[tracing::instrument(skip(self))]
    pub fn create_order(&mut self, owner_id: AccountId) -> Result<Order, DomainError> {
        if !self.store.ledger.contains(owner_id) {
            return Err(LedgerError::AccountNotFound {
                account_id: owner_id,
            }
            .into());
        }

        let now = self.clock.now();
        let order_id = self.store.next_order_id(now);
        let order = Order::new(order_id, owner_id, now);
        self.store.insert_order(order.clone());

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(%order_id, %owner_id, "order created");
        Ok(order)
    }

    /// Loads an order by ID.
    pub fn get_order(&self, order_id: OrderId) -> Result<&Order, DomainError> {
        self.store
            .order(order_id)
            .ok_or(DomainError::OrderNotFound { order_id })
    }

    /// Returns the detail view of an order.
    pub fn order_detail(&self, order_id: OrderId) -> Result<OrderDetail, DomainError> {
        let order = self.get_order(order_id)?;
        let owner = self
            .store
            .ledger
            .get(order.owner_id())
            .ok_or(LedgerError::AccountNotFound {
                account_id: order.owner_id(),
            })?;

        Ok(OrderDetail {
            id: order.id(),
            owner_id: owner.id,
            owner_name: owner.name.clone(),
            state: order.state(),
            amount: order.amount(),
            created_at: order.created_at(),
            available_actions: available_actions(order.state()),
        })
    }

    /// Performs `action` against an order.
    ///
    /// Hard rejections come back as errors; requests that have no effect in
    /// the current state succeed with [`ActionOutcome::NoOp`].
    #[tracing::instrument(skip(self))]
    pub fn perform_action(
        &mut self,
        order_id: OrderId,
        action: Action,
    ) -> Result<ActionOutcome, DomainError> {
        let now = self.clock.now();
        let Store { ledger, orders } = &mut self.store;
        let order = orders
            .get_mut(&order_id)
            .ok_or(DomainError::OrderNotFound { order_id })?;

        let result = order.perform(action, ledger, now);

        match &result {
            Ok(ActionOutcome::Transitioned { new_state, .. }) => {
                metrics::counter!(
                    "order_actions_total",
                    "action" => action.as_str(),
                    "outcome" => "transitioned"
                )
                .increment(1);
                tracing::info!(%order_id, %action, state = %new_state, "order transitioned");
                if *new_state == OrderState::Delivered {
                    tracing::info!(%order_id, "order delivered to customer");
                }
            }
            Ok(ActionOutcome::NoOp { message }) => {
                metrics::counter!(
                    "order_actions_total",
                    "action" => action.as_str(),
                    "outcome" => "no_op"
                )
                .increment(1);
                tracing::info!(%order_id, %action, note = %message, "action had no effect");
            }
            Err(err) => {
                metrics::counter!(
                    "order_actions_total",
                    "action" => action.as_str(),
                    "outcome" => "rejected"
                )
                .increment(1);
                tracing::warn!(%order_id, %action, error = %err, "action rejected");
            }
        }

        result
    }

    /// Returns the history of an order, oldest first.
    pub fn history(&self, order_id: OrderId) -> Result<&[HistoryEntry], DomainError> {
        self.get_order(order_id).map(Order::history)
    }

    fn owner_name(&self, owner_id: AccountId) -> String {
        self.store
            .ledger
            .get(owner_id)
            .map(|account| account.name.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderError;
    use chrono::{Duration, TimeZone};
    use common::ManualClock;

    fn service() -> (OrderService<ManualClock>, ManualClock) {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        (OrderService::new(Store::demo(), clock.clone()), clock)
    }

    const ARTEM: AccountId = AccountId::new(1);
    const DENIS: AccountId = AccountId::new(2);

    #[test]
    fn test_create_order() {
        let (mut service, clock) = service();

        let order = service.create_order(ARTEM).unwrap();

        assert_eq!(order.state(), OrderState::Created);
        assert_eq!(order.owner_id(), ARTEM);
        assert_eq!(order.created_at(), clock.now());
        assert_eq!(order.id().value(), clock.now().timestamp_millis() as u64);
        assert_eq!(service.store().order_count(), 1);
    }

    #[test]
    fn test_create_order_unknown_account() {
        let (mut service, _) = service();

        let err = service.create_order(AccountId::new(99)).unwrap_err();

        assert_eq!(
            err,
            DomainError::Ledger(LedgerError::AccountNotFound {
                account_id: AccountId::new(99)
            })
        );
        assert_eq!(service.store().order_count(), 0);
    }

    #[test]
    fn test_orders_in_same_instant_get_distinct_ids() {
        let (mut service, _) = service();

        let a = service.create_order(ARTEM).unwrap().id();
        let b = service.create_order(DENIS).unwrap().id();

        assert!(b > a);
    }

    #[test]
    fn test_list_orders() {
        let (mut service, clock) = service();
        let first = service.create_order(ARTEM).unwrap().id();
        clock.advance(Duration::seconds(1));
        let second = service.create_order(DENIS).unwrap().id();
        service.perform_action(second, Action::Pay).unwrap();

        assert_eq!(
            service.list_orders(),
            vec![
                OrderSummary {
                    id: first,
                    owner_name: "Artem".to_string(),
                    state: OrderState::Created,
                },
                OrderSummary {
                    id: second,
                    owner_name: "Denis".to_string(),
                    state: OrderState::Paid,
                },
            ]
        );
    }

    #[test]
    fn test_order_detail() {
        let (mut service, clock) = service();
        let order_id = service.create_order(DENIS).unwrap().id();

        let detail = service.order_detail(order_id).unwrap();

        assert_eq!(detail.owner_id, DENIS);
        assert_eq!(detail.owner_name, "Denis");
        assert_eq!(detail.state, OrderState::Created);
        assert_eq!(detail.amount, Money::new(100));
        assert_eq!(detail.created_at, clock.now());
        assert_eq!(detail.available_actions, vec![Action::Pay, Action::Cancel]);
    }

    #[test]
    fn test_unknown_order() {
        let (mut service, _) = service();
        let missing = OrderId::new(123);
        let expected = DomainError::OrderNotFound { order_id: missing };

        assert_eq!(service.get_order(missing).unwrap_err(), expected);
        assert_eq!(service.order_detail(missing).unwrap_err(), expected);
        assert_eq!(service.history(missing).unwrap_err(), expected);
        assert_eq!(
            service.perform_action(missing, Action::Pay).unwrap_err(),
            expected
        );
    }

    #[test]
    fn test_perform_action_uses_clock_for_history() {
        let (mut service, clock) = service();
        let order_id = service.create_order(ARTEM).unwrap().id();

        clock.advance(Duration::minutes(5));
        let paid_at = clock.now();
        service.perform_action(order_id, Action::Pay).unwrap();

        clock.advance(Duration::minutes(5));
        let outcome = service.perform_action(order_id, Action::Ship).unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::Transitioned {
                new_state: OrderState::Shipped,
                entry: HistoryEntry::new(Action::Ship, OrderState::Shipped, clock.now()),
            }
        );
        let history = service.history(order_id).unwrap();
        assert_eq!(history[0].timestamp, paid_at);
        assert_eq!(history[1].timestamp, clock.now());
    }

    #[test]
    fn test_rejection_reports_current_state() {
        let (mut service, _) = service();
        let order_id = service.create_order(ARTEM).unwrap().id();
        service.perform_action(order_id, Action::Pay).unwrap();

        let err = service.perform_action(order_id, Action::Deliver).unwrap_err();

        assert_eq!(
            err,
            DomainError::Order(OrderError::InvalidTransition {
                current_state: OrderState::Paid,
                action: Action::Deliver,
                reason: "cannot deliver unshipped order",
            })
        );
        assert_eq!(
            err.to_string(),
            "Order error: Invalid state transition: cannot deliver from Paid state \
             (cannot deliver unshipped order)"
        );
    }

    #[test]
    fn test_open_account() {
        let (mut service, _) = service();

        let id = service.open_account("Olga", Money::new(500));

        assert_eq!(id, AccountId::new(3));
        let names: Vec<_> = service.list_accounts().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Artem", "Denis", "Olga"]);
        service.create_order(id).unwrap();
    }
}
