//! Error types for hashing operations

use core::fmt;

/// Result type alias using our Error type
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while requesting a digest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Keyed mode was given a key that is not exactly 32 bytes
    InvalidKeyLength,

    /// An output of zero bytes was requested
    InvalidOutputLength,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength => write!(f, "Invalid key length"),
            Error::InvalidOutputLength => write!(f, "Invalid output length"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
