//! Error types for Typedpack operations.

use thiserror::Error;

use crate::types::IntWidth;

/// Result type for Typedpack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Typedpack operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Value passed to an encoder is outside its declared range.
    #[error("{what} out of range: {value}")]
    OutOfRange { what: &'static str, value: i128 },

    /// Length does not fit in the 32-bit length field of the wire format.
    #[error("invalid {what} length: {length}")]
    LengthTooLong { what: &'static str, length: usize },

    /// Number passed where an integer is expected is not integral.
    #[error("not an integer: {0}")]
    NotAnInteger(f64),

    /// Buffer overflow during encoding.
    #[error("buffer overflow: needed {needed} bytes at offset {offset}, capacity is {capacity}")]
    BufferOverflow {
        offset: usize,
        needed: usize,
        capacity: usize,
    },

    /// Buffer underflow during decoding.
    #[error("buffer underflow: needed {needed} bytes at offset {offset}, capacity is {capacity}")]
    BufferUnderflow {
        offset: usize,
        needed: usize,
        capacity: usize,
    },

    /// Tag byte does not belong to the requested kind.
    #[error("unexpected tag 0x{found:02x}: not {expected}")]
    UnexpectedTag { expected: &'static str, found: u8 },

    /// Decoded integer does not fit the requested width.
    #[error("decoded value {value} does not fit in {target}")]
    IntegerOverflow { value: i128, target: IntWidth },

    /// Byte array length disagrees with the declared fixed length.
    #[error("invalid byte array length: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Invalid UTF-8 string.
    #[error("invalid UTF-8 string: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Encoder input outside the representable range.
    Domain,
    /// Read or write outside the buffer.
    BufferBounds,
    /// Tag byte or decoded value not acceptable for the target type.
    Format,
    /// Byte array length differs from the expected length.
    LengthMismatch,
    /// Payload is not valid UTF-8.
    TextDecode,
}

impl Error {
    /// Creates a buffer overflow error.
    pub fn buffer_overflow(offset: usize, needed: usize, capacity: usize) -> Self {
        Self::BufferOverflow {
            offset,
            needed,
            capacity,
        }
    }

    /// Creates a buffer underflow error.
    pub fn buffer_underflow(offset: usize, needed: usize, capacity: usize) -> Self {
        Self::BufferUnderflow {
            offset,
            needed,
            capacity,
        }
    }

    /// Creates an unexpected tag error.
    pub fn unexpected_tag(expected: &'static str, found: u8) -> Self {
        Self::UnexpectedTag { expected, found }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::OutOfRange { .. } | Error::LengthTooLong { .. } | Error::NotAnInteger(_) => {
                ErrorKind::Domain
            }
            Error::BufferOverflow { .. } | Error::BufferUnderflow { .. } => {
                ErrorKind::BufferBounds
            }
            Error::UnexpectedTag { .. } | Error::IntegerOverflow { .. } => ErrorKind::Format,
            Error::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            Error::InvalidUtf8(_) => ErrorKind::TextDecode,
        }
    }
}
