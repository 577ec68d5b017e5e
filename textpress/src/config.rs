//! Codec configuration: alphabet size and code width.
//!
//! Both values are part of the wire contract between a compressor and its
//! paired expander. They are never embedded in the stream; mismatched ends
//! produce garbage, so a pair must be built with identical configuration.

use crate::error::{CodecError, Result};

/// Configuration for a compress/expand pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Alphabet size R. Symbols are bytes; input bytes must be `< radix`.
    pub radix: u16,
    /// Fixed width in bits of every emitted code (9-16).
    pub code_bits: u8,
}

impl CodecConfig {
    /// Canonical text configuration: full byte alphabet, 12-bit codes.
    pub const TEXT: Self = Self {
        radix: 256,
        code_bits: 12,
    };

    /// 7-bit ASCII alphabet, 12-bit codes.
    ///
    /// Leaves more code space for learned sequences, but any byte `>= 128`
    /// in the input is a compression error.
    pub const ASCII: Self = Self {
        radix: 128,
        code_bits: 12,
    };

    /// Create a new configuration. Validity is checked by
    /// [`Encoder::new`](crate::Encoder::new) / [`Decoder::new`](crate::Decoder::new).
    pub fn new(radix: u16, code_bits: u8) -> Self {
        Self { radix, code_bits }
    }

    /// Largest code value representable in `code_bits` bits.
    ///
    /// Codes `0..radix` are the pre-seeded single-symbol entries, code
    /// `radix` is reserved, and allocation proceeds from `radix + 1` up to
    /// and including this bound.
    pub fn max_code(&self) -> u16 {
        ((1u32 << self.code_bits) - 1) as u16
    }

    /// The reserved code: equal to the radix, never allocated and never
    /// valid on the wire.
    pub fn reserved_code(&self) -> u16 {
        self.radix
    }

    /// First code available for learned sequences (`radix + 1`).
    pub fn first_code(&self) -> u32 {
        self.radix as u32 + 1
    }

    /// Check that the configuration is usable.
    ///
    /// Code widths below 9 would let the writer's byte padding masquerade
    /// as a code; widths above 16 do not fit the wire type. The radix must
    /// cover at least two symbols, fit in a byte alphabet, and leave its
    /// reserved code representable in the code width.
    pub fn validate(&self) -> Result<()> {
        if self.code_bits < 9 || self.code_bits > 16 {
            return Err(CodecError::InvalidBitWidth(self.code_bits));
        }
        if self.radix < 2 || self.radix > 256 || self.radix as u32 > self.max_code() as u32 {
            return Err(CodecError::InvalidRadix(self.radix));
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::TEXT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_config() {
        let config = CodecConfig::TEXT;
        assert_eq!(config.radix, 256);
        assert_eq!(config.code_bits, 12);
        assert_eq!(config.max_code(), 4095);
        assert_eq!(config.reserved_code(), 256);
        assert_eq!(config.first_code(), 257);
    }

    #[test]
    fn test_ascii_config() {
        let config = CodecConfig::ASCII;
        assert_eq!(config.radix, 128);
        assert_eq!(config.reserved_code(), 128);
        assert_eq!(config.first_code(), 129);
        assert_eq!(config.max_code(), 4095);
    }

    #[test]
    fn test_widest_codes() {
        let config = CodecConfig::new(256, 16);
        assert_eq!(config.max_code(), u16::MAX);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_width() {
        assert!(matches!(
            CodecConfig::new(256, 8).validate(),
            Err(CodecError::InvalidBitWidth(8))
        ));
        assert!(matches!(
            CodecConfig::new(256, 17).validate(),
            Err(CodecError::InvalidBitWidth(17))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_radix() {
        assert!(matches!(
            CodecConfig::new(1, 12).validate(),
            Err(CodecError::InvalidRadix(1))
        ));
        assert!(matches!(
            CodecConfig::new(257, 12).validate(),
            Err(CodecError::InvalidRadix(257))
        ));
    }
}
