//! The validated monetary amount used for transaction values.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};
use serde::{Deserialize, Serialize};

use crate::Error;

/// A strictly positive monetary value with two-decimal display semantics.
///
/// Amounts are stored as exact decimals so that summing a long run of values
/// does not accumulate binary floating-point error. Zero and negative values
/// are rejected at construction; the sign convention for balances lives in
/// [Totals](crate::aggregate::Totals), not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Create an amount from an exact decimal value.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if `value` is zero or negative.
    pub fn new(value: Decimal) -> Result<Self, Error> {
        if value <= Decimal::ZERO {
            return Err(Error::InvalidAmount(format!(
                "{value} is not greater than zero"
            )));
        }

        Ok(Self(value))
    }

    /// Create an amount from a binary floating-point value, e.g. one parsed
    /// from a form field.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if `value` is NaN, infinite, zero or
    /// negative.
    pub fn from_f64(value: f64) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(Error::InvalidAmount(format!(
                "{value} is not a finite number"
            )));
        }

        let value = Decimal::from_f64(value).ok_or_else(|| {
            Error::InvalidAmount(format!("{value} cannot be represented as a decimal"))
        })?;

        Self::new(value)
    }

    /// The underlying decimal value.
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{rounded:.2}")
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        // The sum of two positive amounts is positive, so the invariant holds.
        Money(self.0 + rhs.0)
    }
}

impl FromStr for Money {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        let value = Decimal::from_str(text)
            .map_err(|error| Error::InvalidAmount(format!("could not parse \"{text}\": {error}")))?;

        Self::new(value)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self, Error> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Decimal {
        money.0
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{Error, money::Money};

    #[test]
    fn new_accepts_positive_value() {
        let money = Money::new(dec!(120.00)).expect("positive amount should be valid");

        assert_eq!(money.value(), dec!(120.00));
    }

    #[test]
    fn new_rejects_zero() {
        let result = Money::new(Decimal::ZERO);

        assert!(matches!(result, Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn new_rejects_negative_value() {
        let result = Money::new(dec!(-10.50));

        assert!(matches!(result, Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn from_f64_rejects_nan() {
        let result = Money::from_f64(f64::NAN);

        assert!(matches!(result, Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn from_f64_rejects_infinity() {
        let result = Money::from_f64(f64::INFINITY);

        assert!(matches!(result, Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn from_f64_accepts_common_form_input() {
        let money = Money::from_f64(95.5).expect("95.5 should be valid");

        assert_eq!(money.value(), dec!(95.5));
    }

    #[test]
    fn display_renders_two_decimal_places() {
        assert_eq!(Money::from_f64(120.0).unwrap().to_string(), "120.00");
        assert_eq!(Money::from_f64(0.5).unwrap().to_string(), "0.50");
        assert_eq!(Money::from_f64(12.345).unwrap().to_string(), "12.35");
    }

    #[test]
    fn summing_tenths_is_exact() {
        // The classic 0.1 + 0.2 != 0.3 failure mode of f64 accumulation.
        let tenth = Money::from_f64(0.1).unwrap();
        let total = (0..10).fold(Decimal::ZERO, |sum, _| sum + tenth.value());

        assert_eq!(total, dec!(1.0));
    }

    #[test]
    fn addition_sums_exact_values() {
        let first = Money::from_f64(120.0).unwrap();
        let second = Money::from_f64(0.45).unwrap();

        assert_eq!((first + second).value(), dec!(120.45));
    }

    #[test]
    fn parses_from_string() {
        let money: Money = "42.75".parse().expect("42.75 should parse");

        assert_eq!(money.value(), dec!(42.75));
    }

    #[test]
    fn parse_rejects_garbage_and_negatives() {
        assert!(matches!(
            "not a number".parse::<Money>(),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(
            "-5".parse::<Money>(),
            Err(Error::InvalidAmount(_))
        ));
    }
}
