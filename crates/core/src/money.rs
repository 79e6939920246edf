//! Fixed-point money in integer minor units.
//!
//! Ledger amounts are summed as whole cents so that thousands of small
//! transactions add up without drift. Conversion to `Decimal` happens only
//! for ratios and display.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::MINOR_UNITS_SCALE;

const CENTS_PER_UNIT: i64 = 100;

/// An amount of a single currency, stored as cents.
///
/// Arithmetic saturates at the `i64` bounds, like `from_decimal`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Whole currency units, e.g. `Money::from_units(1000)` is 1000.00.
    pub const fn from_units(units: i64) -> Self {
        Money(units * CENTS_PER_UNIT)
    }

    /// Converts a decimal amount, rounding half away from zero to cents.
    ///
    /// Amounts beyond the `i64` cent range saturate.
    pub fn from_decimal(amount: Decimal) -> Self {
        let cents = amount
            .round_dp_with_strategy(MINOR_UNITS_SCALE, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::from(CENTS_PER_UNIT))
            .and_then(|c| c.to_i64());
        match cents {
            Some(c) => Money(c),
            None if amount.is_sign_negative() => Money(i64::MIN),
            None => Money(i64::MAX),
        }
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Exact decimal value with two fractional digits.
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, MINOR_UNITS_SCALE)
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// `self / denominator` as a decimal; zero when the denominator is zero.
    pub fn ratio(self, denominator: Money) -> Decimal {
        if denominator.is_zero() {
            return Decimal::ZERO;
        }
        Decimal::from(self.0) / Decimal::from(denominator.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(self.0.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money::from_decimal(amount)
    }
}

// On the wire money is a plain decimal number, like every other amount.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&self.to_decimal(), serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Decimal as Deserialize>::deserialize(deserializer).map(Money::from_decimal)
    }
}
