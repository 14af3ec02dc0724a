//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    100.00 × 1.23 = 123.00000000000001                                   │
//! │                                                                         │
//! │  OUR SOLUTION: Exact Decimals With Explicit Scale                      │
//! │    mantissa 10000, scale 2  → 100.00                                   │
//! │    100.00 × 1.23 = 123.0000 (scale 2 + scale 2 = scale 4)              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Kinds of Equality
//! `100.00` and `100` are the same amount of money but not the same
//! representation. `==` compares by value; [`Money::is_identical_to`]
//! compares mantissa and scale.
//!
//! ## Usage
//! ```rust
//! use vatcalc_core::money::Money;
//!
//! let price: Money = "21.50".parse().unwrap();
//! let total = price + "0.50".parse::<Money>().unwrap();
//! assert_eq!(total.to_string(), "22.00");
//!
//! // NEVER do this:
//! // let bad = Money::from_f64(21.50); // NO SUCH METHOD EXISTS!
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value held as an exact decimal.
///
/// ## Design Decisions
/// - **Decimal (signed)**: negative values carry refunds and credit notes
/// - **Single field tuple struct**: zero-cost wrapper over `Decimal`
/// - **Scale is preserved**: `"150.00"` stays `150.00` until rounded
/// - **Serialized as a string**: the scale survives a JSON round trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use vatcalc_core::money::Money;
    ///
    /// let price = Money::new(Decimal::new(10099, 2)); // 100.99
    /// assert_eq!(price.to_string(), "100.99");
    /// ```
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Number of digits after the decimal point in this representation.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.0.scale()
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Compares by representation rather than by value.
    ///
    /// ## Example
    /// ```rust
    /// use vatcalc_core::money::Money;
    ///
    /// let a: Money = "100.00".parse().unwrap();
    /// let b: Money = "100".parse().unwrap();
    ///
    /// assert_eq!(a, b);                 // same amount
    /// assert!(!a.is_identical_to(&b));  // different scale
    /// ```
    pub fn is_identical_to(&self, other: &Money) -> bool {
        self.0.mantissa() == other.0.mantissa() && self.0.scale() == other.0.scale()
    }

    /// Rounds to exactly `scale` fractional digits, half away from zero.
    ///
    /// ## Scale vs Significance
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  2485.989900 rounded...                                             │
    /// │                                                                     │
    /// │  to 4 FRACTIONAL digits (this function):   2485.9899   ✅           │
    /// │  to 4 SIGNIFICANT digits:                  2486        ❌           │
    /// │                                                                     │
    /// │  Significance-based rounding eats the cents of any price with      │
    /// │  an integer part. Prices are always rounded by scale.              │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// Values with fewer fractional digits are padded with zeros, so the
    /// result always has `scale` digits after the point unless the padded
    /// mantissa would not fit.
    ///
    /// ## Example
    /// ```rust
    /// use vatcalc_core::money::Money;
    ///
    /// let gross: Money = "26.44500".parse().unwrap();
    /// assert_eq!(gross.round_half_up(2).to_string(), "26.45");
    ///
    /// let net: Money = "150.00".parse().unwrap();
    /// assert_eq!(net.round_half_up(4).to_string(), "150.0000");
    /// ```
    pub fn round_half_up(&self, scale: u32) -> Money {
        let mut rounded = self
            .0
            .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
        // round_dp never widens the scale
        rounded.rescale(scale);
        Money(rounded)
    }

    /// Rounds to `digits` significant digits, half away from zero.
    ///
    /// Not used for prices; see [`Money::round_half_up`]. Returns `None` when
    /// the result cannot be represented.
    pub fn round_significant(&self, digits: u32) -> Option<Money> {
        self.0
            .round_sf_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
            .map(Money)
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiplies by an exact decimal factor, returning `None` on overflow.
    ///
    /// A product needing more than 28 fractional digits is rounded to fit;
    /// [`gross_price`](crate::calculator::gross_price) does not go through here.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use vatcalc_core::money::Money;
    ///
    /// let net: Money = "100.00".parse().unwrap();
    /// let gross = net.checked_mul(Decimal::new(123, 2)).unwrap();
    /// assert_eq!(gross.to_string(), "123.0000");
    /// ```
    #[inline]
    pub fn checked_mul(&self, factor: Decimal) -> Option<Money> {
        self.0.checked_mul(factor).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal notation, scale preserved (`150.00`, `-1650.0000`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

/// Parses an exact decimal string.
///
/// Input with more digits than a decimal can hold is rejected instead of
/// being silently rounded.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "money".to_string(),
            });
        }

        Decimal::from_str_exact(s)
            .map(Money)
            .map_err(|e| ValidationError::InvalidFormat {
                field: "money".to_string(),
                reason: e.to_string(),
            })
    }
}

/// Addition of two Money values.
///
/// Panics on decimal overflow, like integer addition in debug builds.
/// Use [`Money::checked_add`] where the range is not known.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Negation (refunds).
impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_preserves_scale() {
        let price = money("100.00");
        assert_eq!(price.amount(), dec!(100));
        assert_eq!(price.scale(), 2);
        assert_eq!(price.to_string(), "100.00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "".parse::<Money>(),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            "YOLO!".parse::<Money>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!("12,50".parse::<Money>().is_err());
    }

    #[test]
    fn test_value_equality_ignores_scale() {
        assert_eq!(money("100.00"), money("100"));
        assert_eq!(money("10.0"), money("10.00"));
    }

    #[test]
    fn test_representation_equality_sees_scale() {
        assert!(!money("100.00").is_identical_to(&money("100")));
        assert!(!money("10.0").is_identical_to(&money("10.00")));
        assert!(money("10.00").is_identical_to(&money("10.00")));
    }

    #[test]
    fn test_round_half_up_midpoint_goes_away_from_zero() {
        assert_eq!(money("26.445").round_half_up(2).to_string(), "26.45");
        assert_eq!(money("-26.445").round_half_up(2).to_string(), "-26.45");
        assert_eq!(money("26.444").round_half_up(2).to_string(), "26.44");
        assert_eq!(money("0.00005").round_half_up(4).to_string(), "0.0001");
    }

    #[test]
    fn test_round_half_up_pads_scale() {
        let rounded = money("150.00").round_half_up(4);
        assert_eq!(rounded.scale(), 4);
        assert_eq!(rounded.to_string(), "150.0000");

        let whole = money("7").round_half_up(4);
        assert_eq!(whole.to_string(), "7.0000");
    }

    #[test]
    fn test_significant_rounding_differs_from_scale_rounding() {
        let gross = money("2485.9899");
        let by_scale = gross.round_half_up(4);
        let by_significance = gross.round_significant(4).unwrap();

        assert_eq!(by_scale, money("2485.9899"));
        assert_eq!(by_significance, money("2486"));
        assert_ne!(by_scale, by_significance);
    }

    #[test]
    fn test_checked_arithmetic() {
        let net = money("100.00");
        assert_eq!(net.checked_mul(dec!(1.23)).unwrap().to_string(), "123.0000");
        assert_eq!(net.checked_add(money("0.5")).unwrap(), money("100.50"));
        assert!(Money::new(Decimal::MAX).checked_mul(dec!(2)).is_none());
        assert!(Money::new(Decimal::MAX).checked_add(money("1")).is_none());
    }

    #[test]
    fn test_arithmetic_and_sign() {
        let a = money("10.00");
        let b = money("2.50");

        assert_eq!((a + b).to_string(), "12.50");
        assert_eq!((a - b).to_string(), "7.50");
        assert!((-a).is_negative());
        assert!(!Money::zero().is_negative());
        assert!(Money::default().is_zero());
    }

    #[test]
    fn test_serializes_as_decimal_string() {
        let json = serde_json::to_string(&money("123.0000")).unwrap();
        assert_eq!(json, "\"123.0000\"");

        let back: Money = serde_json::from_str(&json).unwrap();
        assert!(back.is_identical_to(&money("123.0000")));
    }
}
