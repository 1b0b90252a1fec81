// ============================================================================
// Interfaces Module
// Contracts for collaborators that share the library boundary
// ============================================================================

pub mod check_encoding;

pub use check_encoding::{CheckEncoder, CheckEncodingError, CHECKSUM_LEN};
