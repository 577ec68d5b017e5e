//! # textpress: adaptive-dictionary text compression
//!
//! This crate compresses a byte stream by replacing repeated substrings
//! with fixed-width numeric codes, and losslessly reconstructs the stream
//! from those codes.
//!
//! ## Features
//!
//! - **Pure Rust**: no C dependencies, `#![forbid(unsafe_code)]`
//! - **Adaptive dictionary**: grows during a single linear pass and is
//!   never transmitted; the decoder replays the encoder's growth rule
//! - **Ternary-trie tokenizer**: longest-prefix matching without hashing
//!   every candidate substring
//! - **Fixed-width codes**: 9-16 bit codes, MSB-first bit packing
//!
//! ## Wire contract
//!
//! A compressor and its paired expander must be built with the same
//! [`CodecConfig`] (alphabet size and code width); the configuration is
//! never embedded in the stream. Code space runs from `0` to
//! `2^code_bits - 1`: codes below the radix are the single-symbol entries,
//! the code equal to the radix is reserved, and everything above is
//! allocated to learned sequences in first-seen order until the space is
//! exhausted, after which the dictionary freezes and the pass continues
//! with what it knows.
//!
//! ## Example
//!
//! ```rust
//! use textpress::{compress_text, expand_text};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let compressed = compress_text(original).unwrap();
//! let expanded = expand_text(&compressed).unwrap();
//! assert_eq!(expanded, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod bitstream;
mod config;
mod decoder;
mod encoder;
mod error;
mod trie;

pub use config::CodecConfig;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{CodecError, Result};

/// Compress data with the given configuration.
///
/// # Example
///
/// ```rust
/// use textpress::{compress, expand, CodecConfig};
///
/// let data = b"abracadabra";
/// let compressed = compress(data, CodecConfig::TEXT).unwrap();
/// assert_eq!(expand(&compressed, CodecConfig::TEXT).unwrap(), data);
/// ```
pub fn compress(data: &[u8], config: CodecConfig) -> Result<Vec<u8>> {
    Encoder::new(config)?.encode(data)
}

/// Expand a compressed code stream with the given configuration.
///
/// The configuration must match the one the stream was compressed with;
/// see [`CodecConfig`].
pub fn expand(data: &[u8], config: CodecConfig) -> Result<Vec<u8>> {
    Decoder::new(config)?.decode(data)
}

/// Compress with the canonical text configuration ([`CodecConfig::TEXT`]).
pub fn compress_text(data: &[u8]) -> Result<Vec<u8>> {
    compress(data, CodecConfig::TEXT)
}

/// Expand with the canonical text configuration ([`CodecConfig::TEXT`]).
pub fn expand_text(data: &[u8]) -> Result<Vec<u8>> {
    expand(data, CodecConfig::TEXT)
}
