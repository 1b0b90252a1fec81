// ============================================================================
// Numeric Errors
// Error types for decimal parsing and amount construction
// ============================================================================

use thiserror::Error;

/// Errors that can occur while parsing decimals or constructing amounts.
///
/// Arithmetic and formatting on an already valid [`Amount`](crate::domain::Amount)
/// never fail, so these only come out of constructors and conversions.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is not a syntactically valid decimal numeral
    #[error("invalid decimal numeral: {input:?}")]
    Parse { input: String },

    /// Value magnitude exceeds the maximum producible supply
    #[error("amount {value} is outside the supply bound of ±{bound}")]
    OutOfRange { value: String, bound: String },

    /// Floating point input was NaN or infinite
    #[error("non-finite floating point value")]
    NotFinite,

    /// Value does not fit the target fixed-width representation
    #[error("value cannot be represented in the target type")]
    Overflow,

    /// Currency configuration failed validation
    #[error("invalid currency configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl NumericError {
    pub(crate) fn parse(input: &str) -> Self {
        NumericError::Parse {
            input: input.to_string(),
        }
    }
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
