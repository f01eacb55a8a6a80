use std::{fmt::Display, ops::Mul};

use serde::Serialize;

use super::{number::Number, time::Minutes};

/// A monetary amount. Call logs carry no currency, so neither does this type.
///
/// Amounts are exact decimals, multiplying a minute price by a minute count or adding two amounts
/// never goes through binary floating point.
#[derive(Debug, Default, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Money(Number);

impl Money {
    pub(crate) fn zero() -> Self {
        Self(Number::default())
    }

    /// Whether this amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition, `None` if the sum does not fit a decimal.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl Mul<Minutes> for Money {
    type Output = Money;

    fn mul(self, rhs: Minutes) -> Self::Output {
        Self(self.0.saturating_mul(Number::from(rhs.count())))
    }
}

impl From<rust_decimal::Decimal> for Money {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self(value.into())
    }
}

impl From<Money> for rust_decimal::Decimal {
    fn from(value: Money) -> Self {
        value.0.into()
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
