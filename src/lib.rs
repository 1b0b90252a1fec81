// ============================================================================
// Monacoin Amount Library
// Exact fixed-point monetary amounts with arbitrary-precision storage
// ============================================================================

//! # Mona Amount
//!
//! Monetary values for Monacoin, stored as an arbitrary-precision count of
//! Watanabe (1 MONA = 10^8 Watanabe).
//!
//! ## Features
//!
//! - **Exact parsing** of decimal numerals, including scientific notation
//! - **Supply-bound validation** at construction time (±105.12 million MONA)
//! - **Deterministic rounding** to the nearest Watanabe, ties away from zero
//! - **Unbounded arithmetic** that never overflows or wraps
//! - **Multi-scale formatting** (MMONA, kMONA, MONA, mMONA, μMONA, Watanabe)
//!
//! ## Example
//!
//! ```rust
//! use mona_amount::prelude::*;
//!
//! let balance: Amount = "444333.222111".parse().unwrap();
//! let fee = balance.mul_f64(0.001).unwrap();
//!
//! assert_eq!(balance.format(Denomination::KILO_MONA), "444.333222111 kMONA");
//! assert_eq!(fee.to_string(), "444.33322211 MONA");
//! assert_eq!((&balance - &fee).to_string(), "443888.88888889 MONA");
//!
//! assert!(matches!(
//!     "105120000.00000001".parse::<Amount>(),
//!     Err(NumericError::OutOfRange { .. })
//! ));
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Amount, CurrencyConfig, Denomination, COIN_DECIMALS, MAX_SUPPLY_COINS, MAX_UNITS,
        UNITS_PER_CENT, UNITS_PER_COIN,
    };
    pub use crate::interfaces::{CheckEncoder, CheckEncodingError};
    pub use crate::numeric::{ExactDecimal, NumericError, NumericResult, RoundingMode};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_wallet_flow() {
        // Parse a balance and an outgoing payment from user input
        let balance: Amount = "105.12e6".parse().unwrap();
        let payment: Amount = "0.01234567".parse().unwrap();
        assert_eq!(balance.to_i64(), Some(MAX_UNITS as i64));
        assert_eq!(payment.to_i64(), Some(1_234_567));

        // Fee as a percentage of the payment
        let fee = payment.mul_f64(0.01).unwrap();
        assert_eq!(fee.to_i64(), Some(12_346));

        let remaining = &(&balance - &payment) - &fee;
        assert_eq!(
            remaining.format(Denomination::WATANABE),
            "10511999998753087 Watanabe"
        );
        assert_eq!(remaining.to_string(), "105119999.98753087 MONA");

        // Result is still a valid amount
        assert!(Amount::from_units(remaining.into_units()).is_ok());
    }

    #[test]
    fn test_all_constructors_agree() {
        let expected = Amount::from_units(150_000_000).unwrap();

        assert_eq!("1.5".parse::<Amount>().unwrap(), expected);
        assert_eq!("15e-1".parse::<Amount>().unwrap(), expected);
        assert_eq!(Amount::from_f64(1.5).unwrap(), expected);
        assert_eq!(
            Amount::from_decimal(&ExactDecimal::new(15, -1)).unwrap(),
            expected
        );
        assert_eq!(
            Amount::from_rust_decimal(rust_decimal::Decimal::new(15, 1)).unwrap(),
            expected
        );
    }

    #[test]
    fn test_every_denomination_round_trips() {
        let amount = Amount::from_units(44_433_322_211_100i64).unwrap();
        for unit in Denomination::KNOWN {
            let text = amount.to_string_in(unit);
            let back = text.parse::<ExactDecimal>().unwrap().shift(i64::from(unit.exponent()));
            assert_eq!(Amount::from_decimal(&back).unwrap(), amount, "{unit}");

            let formatted = amount.format(unit);
            let (_, label) = formatted.split_once(' ').unwrap();
            assert_eq!(label.parse::<Denomination>().unwrap(), unit);
        }
    }

    #[test]
    fn test_garbage_never_panics() {
        for input in ["abc", "--", "1e", "e1", ".", "-.5", "1..2", "٣", "1e-", "\u{0}"] {
            assert!(matches!(
                input.parse::<Amount>(),
                Err(NumericError::Parse { .. })
            ));
        }
    }
}
