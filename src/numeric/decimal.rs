// ============================================================================
// Exact Decimal
// Arbitrary-precision decimal with configurable rounding
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Mul, Neg};
use std::str::FromStr;

// ============================================================================
// Rounding
// ============================================================================

/// Tie-breaking rule applied when [`ExactDecimal::round`] drops digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Nearest, an exact half goes to the neighbour of larger magnitude
    #[default]
    HalfAwayFromZero,
    /// Nearest, an exact half goes to the even neighbour (banker's rounding)
    HalfEven,
    /// Drop the extra digits (truncate)
    TowardZero,
}

/// Compute 10^n as a big integer
fn pow10(n: u32) -> BigInt {
    BigInt::from(10u32).pow(n)
}

/// Beyond this exponent magnitude `Display` switches to `<coefficient>e<exponent>`
const PLAIN_EXPONENT_LIMIT: u64 = 4096;

/// Number of decimal digits in the magnitude (zero has one digit)
fn digit_count(n: &BigInt) -> u64 {
    n.magnitude().to_str_radix(10).len() as u64
}

/// Decimal number stored as `coefficient × 10^exponent`.
///
/// The coefficient is an arbitrary-precision integer, so parsing, scaling
/// and multiplication are exact regardless of magnitude. Equality, ordering
/// and hashing compare numeric values: `1.50` equals `1.5`.
///
/// Exponents saturate at the `i64` limits instead of overflowing.
///
/// # Example
/// ```
/// use mona_amount::numeric::{ExactDecimal, RoundingMode};
///
/// let d: ExactDecimal = "54.999999999999943157".parse().unwrap();
/// assert_eq!(d.round(8, RoundingMode::HalfAwayFromZero).to_string(), "55");
/// ```
#[derive(Clone)]
pub struct ExactDecimal {
    coefficient: BigInt,
    exponent: i64,
}

impl ExactDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create `coefficient × 10^exponent`.
    pub fn new(coefficient: impl Into<BigInt>, exponent: i64) -> Self {
        Self {
            coefficient: coefficient.into(),
            exponent,
        }
    }

    /// Zero value
    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    /// Convert a finite float through its shortest round-trip decimal form.
    ///
    /// No floating point arithmetic is involved: `0.01` becomes exactly
    /// `1 × 10^-2`, not the nearest binary fraction.
    ///
    /// # Errors
    /// Returns `NotFinite` for NaN and infinities.
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::NotFinite);
        }
        format!("{:e}", value).parse()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The unscaled integer coefficient.
    #[inline]
    pub fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }

    /// The power-of-ten exponent.
    #[inline]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    /// Exponent of the most significant digit, `None` for zero.
    fn adjusted_exponent(&self) -> Option<i64> {
        if self.is_zero() {
            return None;
        }
        let digits = digit_count(&self.coefficient) as i64;
        Some(self.exponent.saturating_add(digits - 1))
    }

    /// Same value with trailing zeros moved out of the coefficient.
    ///
    /// Zero normalizes to `0 × 10^0`.
    pub fn normalized(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let digits = self.coefficient.magnitude().to_str_radix(10);
        let trailing = digits.len() - digits.trim_end_matches('0').len();
        if trailing == 0 {
            return self.clone();
        }
        Self {
            coefficient: &self.coefficient / pow10(trailing as u32),
            exponent: self.exponent.saturating_add(trailing as i64),
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.coefficient.abs(), self.exponent)
    }

    // ========================================================================
    // Scaling and Rounding
    // ========================================================================

    /// Move the decimal point `places` to the right (left when negative).
    ///
    /// Multiplies the value by `10^places` without touching the coefficient.
    #[inline]
    pub fn shift(&self, places: i64) -> Self {
        Self::new(self.coefficient.clone(), self.exponent.saturating_add(places))
    }

    /// Round to `places` digits after the decimal point.
    ///
    /// Negative `places` rounds to tens, hundreds and so on. Values that
    /// already have at most `places` fractional digits come back unchanged.
    pub fn round(&self, places: i64, mode: RoundingMode) -> Self {
        let target = places.saturating_neg();
        if self.exponent >= target {
            return self.clone();
        }
        if self.is_zero() {
            return Self::new(BigInt::zero(), target);
        }

        let dropped = i128::from(target) - i128::from(self.exponent);
        if dropped > i128::from(digit_count(&self.coefficient)) {
            // Magnitude is below a tenth of the target unit
            return Self::new(BigInt::zero(), target);
        }

        let divisor = pow10(dropped as u32);
        let quotient = &self.coefficient / &divisor;
        let remainder = &self.coefficient % &divisor;
        let twice_remainder = remainder.abs() * 2u32;

        let round_outward = match mode {
            RoundingMode::TowardZero => false,
            RoundingMode::HalfAwayFromZero => twice_remainder >= divisor,
            RoundingMode::HalfEven => match twice_remainder.cmp(&divisor) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => !(&quotient % 2u32).is_zero(),
            },
        };

        let coefficient = if round_outward {
            quotient + self.coefficient.signum()
        } else {
            quotient
        };
        Self::new(coefficient, target)
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// The exact integer value, or `None` if there is a fractional part.
    ///
    /// The result is materialized in full, so very large exponents are
    /// expensive.
    pub fn to_integer(&self) -> Option<BigInt> {
        let normalized = self.normalized();
        if normalized.exponent < 0 {
            return None;
        }
        let places = u32::try_from(normalized.exponent).ok()?;
        Some(normalized.coefficient * pow10(places))
    }

    /// Positional rendering with the minimal number of digits, never
    /// switching to scientific notation.
    ///
    /// Output length grows with the exponent magnitude.
    pub fn to_plain_string(&self) -> String {
        Plain(self).to_string()
    }

    /// Nearest `f64`. Intended for display only.
    pub fn to_f64(&self) -> f64 {
        format!("{}e{}", self.coefficient, self.exponent)
            .parse()
            .unwrap_or(f64::NAN)
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `Overflow` if the value needs more than 28 fractional digits
    /// or a mantissa wider than 96 bits.
    pub fn to_rust_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let normalized = self.normalized();
        let (mantissa, scale) = if normalized.exponent >= 0 {
            if normalized.exponent > 28 {
                return Err(NumericError::Overflow);
            }
            (normalized.to_integer().ok_or(NumericError::Overflow)?, 0)
        } else {
            let scale =
                u32::try_from(normalized.exponent.unsigned_abs()).map_err(|_| NumericError::Overflow)?;
            (normalized.coefficient, scale)
        };
        let mantissa = mantissa.to_i128().ok_or(NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, scale)
            .map_err(|_| NumericError::Overflow)
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match (self.adjusted_exponent(), other.adjusted_exponent()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(lhs), Some(rhs)) if lhs != rhs => return lhs.cmp(&rhs),
            _ => {}
        }

        // Same leading digit position: exponents differ by at most the digit count
        let common = self.exponent.min(other.exponent);
        let lhs = self.coefficient.abs() * pow10(self.exponent.abs_diff(common) as u32);
        let rhs = other.coefficient.abs() * pow10(other.exponent.abs_diff(common) as u32);
        lhs.cmp(&rhs)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for ExactDecimal {
    fn default() -> Self {
        Self::zero()
    }
}

fn sign_rank(sign: Sign) -> i8 {
    match sign {
        Sign::Minus => -1,
        Sign::NoSign => 0,
        Sign::Plus => 1,
    }
}

impl Ord for ExactDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs_sign = sign_rank(self.coefficient.sign());
        let rhs_sign = sign_rank(other.coefficient.sign());
        if lhs_sign != rhs_sign {
            return lhs_sign.cmp(&rhs_sign);
        }
        let magnitude = self.cmp_magnitude(other);
        if lhs_sign < 0 {
            magnitude.reverse()
        } else {
            magnitude
        }
    }
}

impl PartialOrd for ExactDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ExactDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ExactDecimal {}

impl Hash for ExactDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalized();
        normalized.coefficient.hash(state);
        normalized.exponent.hash(state);
    }
}

impl Neg for ExactDecimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.coefficient, self.exponent)
    }
}

impl Mul for &ExactDecimal {
    type Output = ExactDecimal;

    fn mul(self, rhs: Self) -> Self::Output {
        ExactDecimal::new(
            &self.coefficient * &rhs.coefficient,
            self.exponent.saturating_add(rhs.exponent),
        )
    }
}

impl Mul for ExactDecimal {
    type Output = ExactDecimal;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl From<i64> for ExactDecimal {
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl From<u64> for ExactDecimal {
    fn from(value: u64) -> Self {
        Self::new(value, 0)
    }
}

impl From<BigInt> for ExactDecimal {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl From<rust_decimal::Decimal> for ExactDecimal {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self::new(value.mantissa(), -i64::from(value.scale()))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

/// Plain positional rendering with no exponent, whatever the scale
struct Plain<'a>(&'a ExactDecimal);

impl fmt::Display for Plain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let normalized = self.0.normalized();
        let digits = normalized.coefficient.magnitude().to_str_radix(10);
        let sign = if normalized.is_negative() { "-" } else { "" };

        if normalized.exponent >= 0 {
            let zeros = "0".repeat(normalized.exponent as usize);
            return write!(f, "{}{}{}", sign, digits, zeros);
        }

        let fraction_len = normalized.exponent.unsigned_abs() as usize;
        if digits.len() > fraction_len {
            let (integer, fraction) = digits.split_at(digits.len() - fraction_len);
            write!(f, "{}{}.{}", sign, integer, fraction)
        } else {
            let padding = "0".repeat(fraction_len - digits.len());
            write!(f, "{}0.{}{}", sign, padding, digits)
        }
    }
}

impl fmt::Display for ExactDecimal {
    /// Plain notation with the minimal number of digits, e.g. `105.12`,
    /// `-0.005`, `44433322211100`. Past an exponent magnitude of 4096 this
    /// falls back to `<coefficient>e<exponent>`; use
    /// [`to_plain_string`](Self::to_plain_string) where positional output
    /// is required.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let normalized = self.normalized();
        if normalized.exponent.unsigned_abs() > PLAIN_EXPONENT_LIMIT {
            return write!(f, "{}e{}", normalized.coefficient, normalized.exponent);
        }
        fmt::Display::fmt(&Plain(&normalized), f)
    }
}

impl fmt::Debug for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExactDecimal({}, coefficient={}, exponent={})",
            self, self.coefficient, self.exponent
        )
    }
}

// ============================================================================
// String Parsing
// ============================================================================

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for ExactDecimal {
    type Err = NumericError;

    /// Parse `[-]digit+[.digit+][(e|E)[-]digit+]`.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "-0.001" -> -0.001
    /// - "105.12e6" -> 105120000
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = || {
            tracing::trace!(input = s, "rejected malformed decimal numeral");
            NumericError::parse(s)
        };

        let (is_negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (mantissa, exponent_str) = match body.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
            None => (body, None),
        };

        let (int_str, frac_str) = match mantissa.split_once('.') {
            Some((int_str, frac_str)) => {
                if !is_digits(frac_str) {
                    return Err(reject());
                }
                (int_str, frac_str)
            }
            None => (mantissa, ""),
        };
        if !is_digits(int_str) {
            return Err(reject());
        }

        let exponent = match exponent_str {
            Some(exp) => {
                let (exp_negative, exp_digits) = match exp.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, exp),
                };
                if !is_digits(exp_digits) {
                    return Err(reject());
                }
                let magnitude = exp_digits.bytes().fold(0i64, |acc, b| {
                    acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
                });
                if exp_negative {
                    -magnitude
                } else {
                    magnitude
                }
            }
            None => 0,
        };

        let mut digits = String::with_capacity(int_str.len() + frac_str.len());
        digits.push_str(int_str);
        digits.push_str(frac_str);
        let mut coefficient = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(reject)?;
        if is_negative {
            coefficient = -coefficient;
        }

        Ok(Self::new(
            coefficient,
            exponent.saturating_sub(frac_str.len() as i64),
        ))
    }
}

// ============================================================================
// Serde (decimal string form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for ExactDecimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ExactDecimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> ExactDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_plain() {
        let x = dec("123.456");
        assert_eq!(x.coefficient(), &BigInt::from(123456));
        assert_eq!(x.exponent(), -3);

        let y = dec("-0.001");
        assert!(y.is_negative());
        assert_eq!(y.to_string(), "-0.001");

        assert_eq!(dec("42").to_string(), "42");
        assert_eq!(dec("007").to_string(), "7");
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(dec("105.12e6").to_string(), "105120000");
        assert_eq!(dec("105.12E6").to_string(), "105120000");
        assert_eq!(dec("1.234567e-2").to_string(), "0.01234567");
        assert_eq!(dec("-5e-3").to_string(), "-0.005");
        assert_eq!(dec("0e0").to_string(), "0");
    }

    #[test]
    fn test_parse_invalid() {
        for input in [
            "", "abc", "-", "+1", "1.", ".5", "1.2.3", "1e", "1e+5", "1e-", "--1", " 1", "1 ",
            "1_000", "0x10", "1.5f", "NaN", "inf", "1e5.5",
        ] {
            assert_eq!(
                input.parse::<ExactDecimal>(),
                Err(NumericError::parse(input)),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_huge_exponent_saturates() {
        let huge = dec("1e99999999999999999999999");
        assert_eq!(huge.exponent(), i64::MAX);
        assert!(huge > dec("105120000"));

        let tiny = dec("1e-99999999999999999999999");
        assert!(tiny > ExactDecimal::zero());
        assert!(tiny.round(8, RoundingMode::HalfAwayFromZero).is_zero());
    }

    #[test]
    fn test_display_minimal_digits() {
        assert_eq!(ExactDecimal::new(44433322211100i64, -8).to_string(), "444333.222111");
        assert_eq!(ExactDecimal::new(10512000000000000i64, -14).to_string(), "105.12");
        assert_eq!(ExactDecimal::new(-5, -1).to_string(), "-0.5");
        assert_eq!(ExactDecimal::new(12, 3).to_string(), "12000");
        assert_eq!(ExactDecimal::new(0, -8).to_string(), "0");
        assert_eq!(dec("-0").to_string(), "0");
    }

    #[test]
    fn test_display_extreme_exponent() {
        assert_eq!(dec("1e99999999999999999999").to_string(), "1e9223372036854775807");
        assert_eq!(dec("-25e-5000").to_string(), "-25e-5000");
        assert_eq!(dec("-25e-5000").to_string().parse::<ExactDecimal>(), Ok(dec("-25e-5000")));
    }

    #[test]
    fn test_plain_string_never_uses_exponent() {
        let small = dec("-25e-5000").to_plain_string();
        assert!(small.starts_with("-0.000"));
        assert!(small.ends_with("25"));
        assert_eq!(small.len(), "-0.".len() + 5000);
        assert_eq!(small.parse::<ExactDecimal>(), Ok(dec("-25e-5000")));

        let large = dec("1e5000").to_plain_string();
        assert_eq!(large.len(), 5001);
        assert!(!large.contains('e'));

        assert_eq!(dec("105.1200").to_plain_string(), "105.12");
        assert_eq!(dec("0").to_plain_string(), "0");
    }

    #[test]
    fn test_equality_ignores_scale() {
        assert_eq!(dec("1.50"), dec("1.5"));
        assert_eq!(dec("15e-1"), dec("1.5"));
        assert_eq!(dec("0"), dec("-0.000"));
        assert_ne!(dec("1.5"), dec("-1.5"));
    }

    #[test]
    fn test_ordering() {
        assert!(dec("-2") < dec("-1.5"));
        assert!(dec("-1.5") < dec("0"));
        assert!(dec("0") < dec("0.00000001"));
        assert!(dec("99.99") < dec("100"));
        assert!(dec("105120000.00000001") > dec("105.12e6"));
        assert!(dec("-105120000.00000001") < dec("-105.12e6"));
    }

    #[test]
    fn test_round_half_away_from_zero() {
        let mode = RoundingMode::HalfAwayFromZero;
        assert_eq!(dec("0.5").round(0, mode), dec("1"));
        assert_eq!(dec("-0.5").round(0, mode), dec("-1"));
        assert_eq!(dec("2.5").round(0, mode), dec("3"));
        assert_eq!(dec("0.49").round(0, mode), dec("0"));
        assert_eq!(dec("54.999999999999943157").round(8, mode), dec("55"));
        assert_eq!(dec("55.000000000000056843").round(8, mode), dec("55"));
    }

    #[test]
    fn test_round_half_even() {
        let mode = RoundingMode::HalfEven;
        assert_eq!(dec("0.5").round(0, mode), dec("0"));
        assert_eq!(dec("1.5").round(0, mode), dec("2"));
        assert_eq!(dec("2.5").round(0, mode), dec("2"));
        assert_eq!(dec("-2.5").round(0, mode), dec("-2"));
        assert_eq!(dec("-3.5").round(0, mode), dec("-4"));
        assert_eq!(dec("2.51").round(0, mode), dec("3"));
    }

    #[test]
    fn test_round_toward_zero() {
        let mode = RoundingMode::TowardZero;
        assert_eq!(dec("1.999").round(2, mode), dec("1.99"));
        assert_eq!(dec("-1.999").round(2, mode), dec("-1.99"));
    }

    #[test]
    fn test_round_keeps_exponent_at_target() {
        let rounded = dec("0.123456789").round(8, RoundingMode::HalfAwayFromZero);
        assert_eq!(rounded.exponent(), -8);
        assert_eq!(rounded.coefficient(), &BigInt::from(12345679));

        // Already within precision: untouched
        let exact = dec("0.01234567");
        assert_eq!(exact.round(8, RoundingMode::HalfAwayFromZero).exponent(), -8);
    }

    #[test]
    fn test_round_negative_places() {
        let mode = RoundingMode::HalfAwayFromZero;
        assert_eq!(dec("545").round(-1, mode), dec("550"));
        assert_eq!(dec("44").round(-2, mode), dec("0"));
    }

    #[test]
    fn test_shift() {
        assert_eq!(dec("1.5").shift(8), dec("150000000"));
        assert_eq!(ExactDecimal::from(44433322211100i64).shift(-11).to_string(), "444.333222111");
    }

    #[test]
    fn test_mul() {
        assert_eq!(&dec("100") * &dec("0.666"), dec("66.6"));
        assert_eq!(dec("-1.02") * dec("20000000"), dec("-20400000"));
    }

    #[test]
    fn test_to_integer() {
        assert_eq!(dec("1.5e1").to_integer(), Some(BigInt::from(15)));
        assert_eq!(dec("150e-1").to_integer(), Some(BigInt::from(15)));
        assert_eq!(dec("1.5").to_integer(), None);
        assert_eq!(dec("-0").to_integer(), Some(BigInt::zero()));
    }

    #[test]
    fn test_from_f64_uses_shortest_form() {
        assert_eq!(ExactDecimal::from_f64(0.01).unwrap(), dec("0.01"));
        assert_eq!(ExactDecimal::from_f64(0.666).unwrap(), dec("0.666"));
        assert_eq!(ExactDecimal::from_f64(-1.02).unwrap(), dec("-1.02"));
        assert_eq!(ExactDecimal::from_f64(1e21).unwrap(), dec("1e21"));
        assert_eq!(ExactDecimal::from_f64(0.0).unwrap(), ExactDecimal::zero());
        assert_eq!(ExactDecimal::from_f64(f64::NAN), Err(NumericError::NotFinite));
        assert_eq!(ExactDecimal::from_f64(f64::INFINITY), Err(NumericError::NotFinite));
        assert_eq!(ExactDecimal::from_f64(f64::NEG_INFINITY), Err(NumericError::NotFinite));
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(dec("444333.222111").to_f64(), 444333.222111);
        assert_eq!(dec("-0.5").to_f64(), -0.5);
    }

    #[test]
    fn test_rust_decimal_interop() {
        let d = rust_decimal::Decimal::new(12345, 2); // 123.45
        let x = ExactDecimal::from(d);
        assert_eq!(x, dec("123.45"));
        assert_eq!(x.to_rust_decimal().unwrap(), d);

        assert_eq!(dec("1e5").to_rust_decimal().unwrap(), rust_decimal::Decimal::new(100000, 0));
        assert_eq!(dec("1e-29").to_rust_decimal(), Err(NumericError::Overflow));
        assert_eq!(dec("1e40").to_rust_decimal(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_hash_matches_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(dec("1.5"));
        assert!(set.contains(&dec("1.50")));
        assert!(set.contains(&dec("15e-1")));
    }

    #[test]
    fn prop_integer_round_trip() {
        fn prop(n: i64) -> bool {
            let d = ExactDecimal::from(n);
            d.to_string() == n.to_string()
                && d.to_integer() == Some(BigInt::from(n))
                && d.to_string().parse::<ExactDecimal>() == Ok(d)
        }
        quickcheck::quickcheck(prop as fn(i64) -> bool);
    }

    #[test]
    fn prop_ordering_matches_rescaled_integers() {
        fn prop(a: i64, ea: i8, b: i64, eb: i8) -> bool {
            let (ea, eb) = (i64::from(ea % 20), i64::from(eb % 20));
            let common = ea.min(eb);
            let lhs = BigInt::from(a) * pow10((ea - common) as u32);
            let rhs = BigInt::from(b) * pow10((eb - common) as u32);
            ExactDecimal::new(a, ea).cmp(&ExactDecimal::new(b, eb)) == lhs.cmp(&rhs)
        }
        quickcheck::quickcheck(prop as fn(i64, i8, i64, i8) -> bool);
    }

    #[test]
    fn prop_display_parse_round_trip() {
        fn prop(coefficient: i64, exponent: i8) -> bool {
            let d = ExactDecimal::new(coefficient, i64::from(exponent % 30));
            d.to_string().parse::<ExactDecimal>() == Ok(d)
        }
        quickcheck::quickcheck(prop as fn(i64, i8) -> bool);
    }
}
