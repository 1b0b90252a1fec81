// ============================================================================
// Amount
// Arbitrary-precision count of smallest currency units
// ============================================================================

use super::config::{CurrencyConfig, COIN_DECIMALS};
use super::denomination::Denomination;
use crate::numeric::{ExactDecimal, NumericError, NumericResult, RoundingMode};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Monetary amount counted in Watanabe, the smallest indivisible unit
/// (1 MONA = 10^8 Watanabe).
///
/// Storage is an arbitrary-precision integer, so arithmetic never overflows
/// or wraps. Every constructor checks the magnitude against the supply
/// bound of the currency and rounds fractional Watanabe half away from zero.
/// Arithmetic does *not* re-check the bound: callers that need the
/// invariant after adding or multiplying must validate again, e.g. with
/// [`Amount::from_units`].
///
/// # Example
/// ```
/// use mona_amount::prelude::*;
///
/// let fee: Amount = "0.01234567".parse().unwrap();
/// assert_eq!(fee.to_i64(), Some(1_234_567));
/// assert_eq!(fee.to_string(), "0.01234567 MONA");
/// assert_eq!(fee.format(Denomination::WATANABE), "1234567 Watanabe");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(BigInt);

/// Reject a configuration that fails [`CurrencyConfig::validate`]
fn check_config(config: &CurrencyConfig) -> NumericResult<()> {
    config.validate().map_err(|reason| {
        tracing::debug!(%reason, "rejected currency configuration");
        NumericError::InvalidConfig { reason }
    })
}

/// Whole-coin rendering of a unit count, for error messages
fn units_as_coins(units: &BigInt) -> String {
    ExactDecimal::from(units.clone())
        .shift(-i64::from(COIN_DECIMALS))
        .to_string()
}

impl Amount {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Zero Watanabe
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    /// Create from a count of Watanabe.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the magnitude exceeds the Monacoin supply.
    pub fn from_units(units: impl Into<BigInt>) -> NumericResult<Self> {
        Self::from_units_in(units, &CurrencyConfig::MONACOIN)
    }

    /// Create from a count of smallest units, bounded by `config`.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `config` fails validation and
    /// `OutOfRange` past its supply bound.
    pub fn from_units_in(units: impl Into<BigInt>, config: &CurrencyConfig) -> NumericResult<Self> {
        check_config(config)?;
        let units = units.into();
        let bound = config.max_units();
        if units.abs() > bound {
            tracing::debug!(%units, %bound, "rejected amount outside supply bound");
            return Err(NumericError::OutOfRange {
                value: units_as_coins(&units),
                bound: units_as_coins(&bound),
            });
        }
        Ok(Self(units))
    }

    /// Create from an exact quantity of whole coins.
    ///
    /// The value is checked against the supply bound first, then rounded to
    /// the nearest Watanabe (half away from zero).
    ///
    /// # Errors
    /// Returns `OutOfRange` if `|coins|` exceeds the Monacoin supply.
    pub fn from_decimal(coins: &ExactDecimal) -> NumericResult<Self> {
        Self::from_decimal_in(coins, &CurrencyConfig::MONACOIN)
    }

    /// Create from an exact quantity of whole coins, bounded by `config`.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `config` fails validation and
    /// `OutOfRange` past its supply bound.
    pub fn from_decimal_in(coins: &ExactDecimal, config: &CurrencyConfig) -> NumericResult<Self> {
        check_config(config)?;
        let bound = config.max_coins();
        if coins.abs() > bound {
            tracing::debug!(%coins, %bound, "rejected amount outside supply bound");
            return Err(NumericError::OutOfRange {
                value: coins.to_string(),
                bound: bound.to_string(),
            });
        }

        let places = i64::from(COIN_DECIMALS);
        let units = coins
            .round(places, RoundingMode::HalfAwayFromZero)
            .shift(places)
            .to_integer()
            .ok_or(NumericError::Overflow)?;
        Ok(Self(units))
    }

    /// Create from a float quantity of whole coins.
    ///
    /// The float goes through its shortest decimal form, so `0.01234567`
    /// yields exactly 1,234,567 Watanabe.
    ///
    /// # Errors
    /// Returns `NotFinite` for NaN or infinities and `OutOfRange` past the
    /// supply bound.
    pub fn from_f64(coins: f64) -> NumericResult<Self> {
        let coins = ExactDecimal::from_f64(coins).map_err(|err| {
            tracing::debug!(coins, "rejected non-finite amount");
            err
        })?;
        Self::from_decimal(&coins)
    }

    /// Create from a `rust_decimal::Decimal` quantity of whole coins.
    pub fn from_rust_decimal(coins: rust_decimal::Decimal) -> NumericResult<Self> {
        Self::from_decimal(&ExactDecimal::from(coins))
    }

    /// Parse a decimal numeral of whole coins, bounded by `config`.
    ///
    /// Accepts `[-]digit+[.digit+][(e|E)[-]digit+]`, e.g. `"105.12e6"`.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `config` fails validation, `Parse` for
    /// malformed input and `OutOfRange` past the supply bound.
    pub fn parse_in(s: &str, config: &CurrencyConfig) -> NumericResult<Self> {
        check_config(config)?;
        let coins: ExactDecimal = s.parse()?;
        Self::from_decimal_in(&coins, config)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Count of Watanabe
    #[inline]
    pub fn units(&self) -> &BigInt {
        &self.0
    }

    #[inline]
    pub fn into_units(self) -> BigInt {
        self.0
    }

    /// Count of Watanabe as `i64`, if it fits
    pub fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Multiply by a float factor, rounding to the nearest Watanabe with
    /// ties away from zero.
    ///
    /// Meant for things like fee percentages. The factor is taken at its
    /// shortest decimal form and the product is computed exactly, so
    /// `50 × 0.01` is exactly one half and rounds to 1.
    ///
    /// # Errors
    /// Returns `NotFinite` if `factor` is NaN or infinite.
    pub fn mul_f64(&self, factor: f64) -> NumericResult<Self> {
        let factor = ExactDecimal::from_f64(factor).map_err(|err| {
            tracing::debug!(factor, "rejected non-finite multiplier");
            err
        })?;
        let product = &ExactDecimal::from(self.0.clone()) * &factor;
        let units = product
            .round(0, RoundingMode::HalfAwayFromZero)
            .to_integer()
            .ok_or(NumericError::Overflow)?;
        Ok(Self(units))
    }

    // ========================================================================
    // Scaled Output
    // ========================================================================

    /// Exact value expressed in `unit`.
    pub fn to_decimal(&self, unit: Denomination) -> ExactDecimal {
        ExactDecimal::from(self.0.clone()).shift(-unit.unit_shift())
    }

    /// Exact value in `unit` without a label, e.g. `"444.333222111"`.
    ///
    /// Always positional, for any denomination exponent.
    pub fn to_string_in(&self, unit: Denomination) -> String {
        self.to_decimal(unit).to_plain_string()
    }

    /// Value in `unit` followed by the unit label, e.g. `"444.333222111 kMONA"`.
    pub fn format(&self, unit: Denomination) -> String {
        self.format_in(unit, &CurrencyConfig::MONACOIN)
    }

    /// Like [`format`](Self::format) with labels taken from `config`.
    ///
    /// Formatting cannot fail, so labels are used as given; run
    /// [`CurrencyConfig::validate`] on configs from untrusted sources.
    pub fn format_in(&self, unit: Denomination, config: &CurrencyConfig) -> String {
        format!("{} {}", self.to_string_in(unit), unit.label_in(config))
    }

    /// Nearest `f64` of the value in `unit`. Lossy; for display only.
    pub fn to_unit_f64(&self, unit: Denomination) -> f64 {
        self.to_decimal(unit).to_f64()
    }

    /// Nearest `f64` of the value in whole coins. Lossy; for display only.
    pub fn to_coin_f64(&self) -> f64 {
        self.to_unit_f64(Denomination::MONA)
    }

    /// Value in `unit` as a `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `Overflow` if the value does not fit a 28-digit scale.
    pub fn to_rust_decimal(&self, unit: Denomination) -> NumericResult<rust_decimal::Decimal> {
        self.to_decimal(unit).to_rust_decimal()
    }
}

// ============================================================================
// Operators
// ============================================================================

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Amount {
            type Output = Amount;

            #[inline]
            fn $method(self, rhs: Amount) -> Amount {
                Amount(self.0 $op rhs.0)
            }
        }

        impl<'a> $trait<&'a Amount> for &'a Amount {
            type Output = Amount;

            #[inline]
            fn $method(self, rhs: &'a Amount) -> Amount {
                Amount(&self.0 $op &rhs.0)
            }
        }
    };
}

impl_binary_op!(Add, add, +);
impl_binary_op!(Sub, sub, -);
impl_binary_op!(Mul, mul, *);

impl Neg for Amount {
    type Output = Amount;

    #[inline]
    fn neg(self) -> Amount {
        Amount(-self.0)
    }
}

impl Neg for &Amount {
    type Output = Amount;

    #[inline]
    fn neg(self) -> Amount {
        Amount(-&self.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        Amount(iter.map(|a| a.0).sum())
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        Amount(iter.map(|a| &a.0).sum())
    }
}

// ============================================================================
// Display and Parsing
// ============================================================================

impl fmt::Display for Amount {
    /// Whole-coin rendering, e.g. `"444333.222111 MONA"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Denomination::MONA))
    }
}

impl FromStr for Amount {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_in(s, &CurrencyConfig::MONACOIN)
    }
}

// ============================================================================
// Serde (whole-coin decimal string, validated on the way in)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Amount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_in(Denomination::MONA))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Amount {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
