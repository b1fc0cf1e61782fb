//! In-memory account ledger.
//!
//! The ledger is the only place balances change. Orders reach it through the
//! state machine when a payment is taken or refunded.

use std::collections::BTreeMap;

use common::AccountId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::order::Money;

/// Errors raised by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// No account exists with the given id.
    #[error("Account not found: {account_id}")]
    AccountNotFound { account_id: AccountId },

    /// The account balance does not cover the requested debit.
    #[error(
        "Insufficient funds on account {account_id}: required {required}, available {available}"
    )]
    InsufficientFunds {
        account_id: AccountId,
        required: Money,
        available: Money,
    },

    /// Crediting the account would overflow its balance.
    #[error("Balance overflow on account {account_id}")]
    BalanceOverflow { account_id: AccountId },
}

/// A customer account holding a balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub balance: Money,
}

/// Mapping from account id to account.
///
/// Accounts are never removed, so a lookup that succeeded once keeps
/// succeeding for the lifetime of the ledger.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    accounts: BTreeMap<AccountId, Account>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new account and returns its id.
    ///
    /// Ids are assigned sequentially starting at 1.
    pub fn open(&mut self, name: impl Into<String>, balance: Money) -> AccountId {
        let id = self
            .accounts
            .keys()
            .next_back()
            .map(AccountId::next)
            .unwrap_or(AccountId::new(1));

        let account = Account {
            id,
            name: name.into(),
            balance,
        };
        tracing::debug!(account_id = %id, name = %account.name, %balance, "account opened");
        self.accounts.insert(id, account);
        id
    }

    /// Returns the account with the given id.
    pub fn get(&self, account_id: AccountId) -> Option<&Account> {
        self.accounts.get(&account_id)
    }

    /// Returns true if the account exists.
    pub fn contains(&self, account_id: AccountId) -> bool {
        self.accounts.contains_key(&account_id)
    }

    /// Returns the current balance of an account.
    pub fn balance(&self, account_id: AccountId) -> Result<Money, LedgerError> {
        self.get(account_id)
            .map(|account| account.balance)
            .ok_or(LedgerError::AccountNotFound { account_id })
    }

    /// Returns all accounts in ascending id order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Returns the number of accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if no accounts have been opened.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Increases an account balance and returns the new balance.
    pub fn credit(&mut self, account_id: AccountId, amount: Money) -> Result<Money, LedgerError> {
        let account = self.account_mut(account_id)?;
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow { account_id })?;

        tracing::debug!(%account_id, %amount, balance = %account.balance, "account credited");
        Ok(account.balance)
    }

    /// Decreases an account balance and returns the new balance.
    ///
    /// Fails without touching the balance if it does not cover `amount`.
    pub fn debit(&mut self, account_id: AccountId, amount: Money) -> Result<Money, LedgerError> {
        let account = self.account_mut(account_id)?;
        let available = account.balance;
        account.balance = available
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientFunds {
                account_id,
                required: amount,
                available,
            })?;

        tracing::debug!(%account_id, %amount, balance = %account.balance, "account debited");
        Ok(account.balance)
    }

    fn account_mut(&mut self, account_id: AccountId) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(&account_id)
            .ok_or(LedgerError::AccountNotFound { account_id })
    }
}
