//! Codec error types.

use thiserror::Error;

/// Errors produced by compression and expansion.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Invalid code width in configuration.
    #[error("Invalid code width: {0} (must be 9-16)")]
    InvalidBitWidth(u8),

    /// Invalid radix in configuration.
    #[error("Invalid radix: {0} (must be 2-256 and fit in the code width)")]
    InvalidRadix(u16),

    /// Input byte outside the configured alphabet.
    #[error("Symbol {symbol:#04x} outside alphabet of size {radix}")]
    SymbolOutOfRange {
        /// The offending input byte.
        symbol: u8,
        /// Configured alphabet size.
        radix: u16,
    },

    /// Expansion read a code with no table entry that is not the legitimate
    /// one-step-ahead case. The compressed input is malformed or was
    /// produced with a different configuration.
    #[error("Invalid code on expand: {0}")]
    InvalidCode(u16),

    /// The longest-prefix match produced a sequence the code table does not
    /// know. Unreachable when the single pass maintains its own invariants;
    /// indicates an implementation fault, not bad input.
    #[error("Prefix dictionary out of sync at input offset {position}")]
    PrefixDesync {
        /// Byte offset into the uncompressed input.
        position: usize,
    },

    /// Compressed stream ended inside a code.
    #[error("Unexpected end of compressed data at bit position {position}")]
    UnexpectedEof {
        /// Bit position where the stream ran out.
        position: u64,
    },

    /// I/O error from the surrounding plumbing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
