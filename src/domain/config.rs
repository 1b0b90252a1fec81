// ============================================================================
// Currency Configuration
// Supply bound constants and display labels
// ============================================================================

use crate::numeric::ExactDecimal;
use num_bigint::BigInt;
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Fractional digits of one whole coin
pub const COIN_DECIMALS: u32 = 8;

/// Number of Watanabe (smallest units) in one MONA
pub const UNITS_PER_COIN: u64 = 100_000_000;

/// Number of Watanabe in one MONA cent
pub const UNITS_PER_CENT: u64 = 1_000_000;

/// Maximum producible supply in whole MONA
pub const MAX_SUPPLY_COINS: u64 = 105_120_000;

/// Maximum amount magnitude in Watanabe
pub const MAX_UNITS: u64 = MAX_SUPPLY_COINS * UNITS_PER_COIN;

// ============================================================================
// Currency Configuration
// ============================================================================

/// Labels and supply bound of the currency an amount is denominated in.
///
/// The unit scale (8 fractional digits) is fixed; the ticker, the name of
/// the smallest unit and the supply bound are configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencyConfig {
    /// Ticker used in labels (e.g., "MONA")
    pub ticker: Cow<'static, str>,

    /// Label of the smallest unit (e.g., "Watanabe")
    pub base_unit_name: Cow<'static, str>,

    /// Maximum producible supply in whole coins
    pub max_supply: u64,
}

impl CurrencyConfig {
    /// Monacoin: MONA / Watanabe, 105.12 million coins
    pub const MONACOIN: Self = Self {
        ticker: Cow::Borrowed("MONA"),
        base_unit_name: Cow::Borrowed("Watanabe"),
        max_supply: MAX_SUPPLY_COINS,
    };

    /// Create a new configuration with required parameters
    pub fn new(
        ticker: impl Into<Cow<'static, str>>,
        base_unit_name: impl Into<Cow<'static, str>>,
        max_supply: u64,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            base_unit_name: base_unit_name.into(),
            max_supply,
        }
    }

    /// Builder method: Set ticker
    pub fn with_ticker(mut self, ticker: impl Into<Cow<'static, str>>) -> Self {
        self.ticker = ticker.into();
        self
    }

    /// Builder method: Set smallest unit label
    pub fn with_base_unit_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.base_unit_name = name.into();
        self
    }

    /// Builder method: Set maximum supply in whole coins
    pub fn with_max_supply(mut self, max_supply: u64) -> Self {
        self.max_supply = max_supply;
        self
    }

    /// Supply bound in whole coins
    pub fn max_coins(&self) -> ExactDecimal {
        ExactDecimal::from(self.max_supply)
    }

    /// Supply bound in smallest units
    pub fn max_units(&self) -> BigInt {
        BigInt::from(self.max_supply) * UNITS_PER_COIN
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.ticker.trim().is_empty() {
            return Err("Ticker cannot be empty".to_string());
        }

        if self.base_unit_name.trim().is_empty() {
            return Err("Base unit name cannot be empty".to_string());
        }

        if self.ticker.chars().any(char::is_whitespace) {
            return Err("Ticker cannot contain whitespace".to_string());
        }

        if self.max_supply == 0 {
            return Err("Maximum supply must be positive".to_string());
        }

        Ok(())
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self::MONACOIN
    }
}
