// ============================================================================
// Numeric Module
// Exact decimal arithmetic for monetary calculations
// ============================================================================
//
// This module provides:
// - ExactDecimal: arbitrary-precision decimal (BigInt coefficient, i64 exponent)
// - RoundingMode: tie-breaking rules used when digits are dropped
// - NumericError: error types for parsing and amount construction
//
// Design principles:
// - No floating-point operations on values (floats are converted via their
//   shortest decimal form)
// - Parsing and conversion return Result (no panics)
// - Arithmetic is exact and cannot overflow

mod decimal;
mod errors;

pub use decimal::{ExactDecimal, RoundingMode};
pub use errors::{NumericError, NumericResult};
