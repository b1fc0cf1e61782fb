//! Value objects for the order domain.

use serde::{Deserialize, Serialize};

/// A non-negative amount of money in whole units.
///
/// Balances and order amounts are plain integers; the unsigned
/// representation makes a negative balance unrepresentable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Creates a new Money amount.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns zero money.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Returns the amount as an integer.
    pub fn amount(&self) -> u64 {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds another amount, returning `None` on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtracts another amount, returning `None` if the result would be negative.
    pub fn checked_sub(&self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Money {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

/// The fixed charge for every order.
pub const ORDER_AMOUNT: Money = Money::new(100);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_sub_refuses_negative() {
        let balance = Money::new(50);
        assert_eq!(balance.checked_sub(Money::new(100)), None);
        assert_eq!(balance.checked_sub(Money::new(50)), Some(Money::zero()));
    }

    #[test]
    fn test_checked_add_detects_overflow() {
        assert_eq!(
            Money::new(100).checked_add(Money::new(23)),
            Some(Money::new(123))
        );
        assert_eq!(Money::new(u64::MAX).checked_add(Money::new(1)), None);
    }

    #[test]
    fn test_display_is_plain_integer() {
        assert_eq!(Money::new(900).to_string(), "900");
        assert_eq!(ORDER_AMOUNT.to_string(), "100");
    }

    #[test]
    fn test_zero() {
        assert!(Money::zero().is_zero());
        assert!(!ORDER_AMOUNT.is_zero());
        assert_eq!(Money::default(), Money::zero());
    }
}
