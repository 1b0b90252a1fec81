// ============================================================================
// Domain Models Module
// Currency amounts, display denominations and currency parameters
// ============================================================================

pub mod amount;
pub mod config;
pub mod denomination;

pub use amount::Amount;
pub use config::{
    CurrencyConfig, COIN_DECIMALS, MAX_SUPPLY_COINS, MAX_UNITS, UNITS_PER_CENT, UNITS_PER_COIN,
};
pub use denomination::Denomination;
