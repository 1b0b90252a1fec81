// ============================================================================
// Check Encoding Interface
// Contract for versioned payload encoders with an appended checksum
// ============================================================================

use thiserror::Error;

/// Number of checksum bytes appended after the version and payload.
pub const CHECKSUM_LEN: usize = 4;

/// Failures an encoder reports while decoding.
///
/// Callers receive these unchanged; nothing in this crate wraps them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckEncodingError {
    /// Checksum bytes do not match the version and payload
    #[error("checksum error")]
    Checksum,

    /// Decoded data too short to hold the version and checksum bytes
    #[error("invalid format: version and/or checksum bytes missing")]
    InvalidFormat,
}

/// Encoder that turns a versioned binary payload into a human-typable string
/// with an integrity checksum, and back.
///
/// Framing is `version || payload || checksum`, where the checksum is
/// [`CHECKSUM_LEN`] bytes. Implementations must satisfy:
/// - `decode(encode(p, v), v.len()) == Ok((p, v))`
/// - decoded data shorter than `version_len + CHECKSUM_LEN` is `InvalidFormat`
/// - a checksum mismatch is `Checksum`
pub trait CheckEncoder: Send + Sync {
    /// Encode `payload` prefixed with `version`
    fn encode(&self, payload: &[u8], version: &[u8]) -> String;

    /// Decode into `(payload, version)`, taking the first `version_len`
    /// bytes as the version
    fn decode(
        &self,
        input: &str,
        version_len: usize,
    ) -> Result<(Vec<u8>, Vec<u8>), CheckEncodingError>;

    /// Minimum decoded length for a given version width
    fn min_decoded_len(&self, version_len: usize) -> usize {
        version_len + CHECKSUM_LEN
    }
}
