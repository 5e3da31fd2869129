use std::fmt;

/// Failure to restore a [`Digest`](super::Digest) from serialized state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestError {
    /// The blob is shorter than the magic or does not start with it.
    InvalidFormat,

    /// The blob has the right magic but is not exactly 20 bytes.
    InvalidSize,

    /// The blob was produced with a table for a different polynomial.
    TableMismatch,
}

impl fmt::Display for DigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DigestError::InvalidFormat => "crc64: invalid hash state identifier",
            DigestError::InvalidSize => "crc64: invalid hash state size",
            DigestError::TableMismatch => "crc64: tables do not match",
        })
    }
}

impl std::error::Error for DigestError {}
