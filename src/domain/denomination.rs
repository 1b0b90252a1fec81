// ============================================================================
// Denomination
// Power-of-ten display scales for amounts
// ============================================================================

use super::config::{CurrencyConfig, COIN_DECIMALS};
use crate::numeric::NumericError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display scale of an amount, as the power-of-ten exponent relative to one
/// whole coin.
///
/// `MONA` is `0`, `KILO_MONA` is `3`, and the smallest unit `WATANABE` is
/// `-8`. Any other exponent is valid too and renders with a generic
/// `1e<N> MONA` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Denomination(i32);

impl Denomination {
    pub const MEGA_MONA: Self = Self(6);
    pub const KILO_MONA: Self = Self(3);
    pub const MONA: Self = Self(0);
    pub const MILLI_MONA: Self = Self(-3);
    pub const MICRO_MONA: Self = Self(-6);
    pub const WATANABE: Self = Self(-(COIN_DECIMALS as i32));

    /// Named denominations, largest first
    pub const KNOWN: [Self; 6] = [
        Self::MEGA_MONA,
        Self::KILO_MONA,
        Self::MONA,
        Self::MILLI_MONA,
        Self::MICRO_MONA,
        Self::WATANABE,
    ];

    #[inline]
    pub const fn new(exponent: i32) -> Self {
        Self(exponent)
    }

    /// Power-of-ten distance from one whole coin
    #[inline]
    pub const fn exponent(self) -> i32 {
        self.0
    }

    /// Power-of-ten distance from the smallest unit.
    ///
    /// An amount of `n` smallest units is `n × 10^-unit_shift()` of this
    /// denomination.
    #[inline]
    pub const fn unit_shift(self) -> i64 {
        self.0 as i64 + COIN_DECIMALS as i64
    }

    /// Whether this is one of the named denominations
    pub fn is_known(self) -> bool {
        Self::KNOWN.contains(&self)
    }

    /// Human-readable label using the given currency's ticker.
    pub fn label_in(self, config: &CurrencyConfig) -> String {
        let ticker = &config.ticker;
        match self {
            Self::MEGA_MONA => format!("M{}", ticker),
            Self::KILO_MONA => format!("k{}", ticker),
            Self::MONA => ticker.to_string(),
            Self::MILLI_MONA => format!("m{}", ticker),
            Self::MICRO_MONA => format!("μ{}", ticker),
            Self::WATANABE => config.base_unit_name.to_string(),
            Self(exponent) => format!("1e{} {}", exponent, ticker),
        }
    }

    /// Parse a label produced by [`label_in`](Self::label_in).
    ///
    /// `u` is accepted as an ASCII stand-in for the micro prefix.
    pub fn parse_in(label: &str, config: &CurrencyConfig) -> Option<Self> {
        if label == config.base_unit_name {
            return Some(Self::WATANABE);
        }
        if let Some(generic) = label.strip_prefix("1e") {
            let (exponent, ticker) = generic.split_once(' ')?;
            if ticker != config.ticker {
                return None;
            }
            return exponent.parse().ok().map(Self);
        }

        let prefix = label.strip_suffix(&*config.ticker)?;
        match prefix {
            "M" => Some(Self::MEGA_MONA),
            "k" => Some(Self::KILO_MONA),
            "" => Some(Self::MONA),
            "m" => Some(Self::MILLI_MONA),
            "μ" | "u" => Some(Self::MICRO_MONA),
            _ => None,
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label_in(&CurrencyConfig::MONACOIN))
    }
}

impl FromStr for Denomination {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_in(s, &CurrencyConfig::MONACOIN).ok_or_else(|| NumericError::parse(s))
    }
}
