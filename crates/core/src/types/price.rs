//! Menu and revenue amounts.
//!
//! The pizza service prices everything in bitcoin with sub-cent precision
//! (a Veggie pizza is `0.0038`), which rules out `f64` arithmetic for cart
//! totals. Amounts are held as [`Decimal`] and travel as plain JSON numbers.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bitcoin amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The underlying amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₿{}", self.0.normalize())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_json_number() {
        let price: Price = serde_json::from_str("0.0038").unwrap();
        assert_eq!(price.amount(), Decimal::new(38, 4));
    }

    #[test]
    fn test_serializes_json_number() {
        let price = Price::new(Decimal::new(42, 4));
        assert_eq!(serde_json::to_string(&price).unwrap(), "0.0042");
    }

    #[test]
    fn test_sum_is_exact() {
        let total: Price = [Decimal::new(38, 4), Decimal::new(42, 4), Decimal::new(14, 4)]
            .into_iter()
            .map(Price::new)
            .sum();
        assert_eq!(total.amount(), Decimal::new(94, 4));
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::new(Decimal::new(50, 4)).to_string(), "₿0.005");
        assert_eq!(Price::ZERO.to_string(), "₿0");
    }
}
