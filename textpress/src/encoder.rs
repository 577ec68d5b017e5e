//! Compression: single left-to-right pass over the input.

use crate::bitstream::BitWriter;
use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::trie::PrefixTrie;
use log::debug;

/// Compressor for a fixed configuration.
///
/// Holds no per-stream state; the dictionary lives and dies inside each
/// [`encode`](Encoder::encode) call, so one encoder can compress any number
/// of independent inputs.
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    config: CodecConfig,
}

impl Encoder {
    /// Create an encoder, validating the configuration.
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Compress `input` into a bit-packed stream of fixed-width codes.
    ///
    /// Each step emits the code of the longest dictionary-registered prefix
    /// at the current position, then (while code space remains and another
    /// symbol follows) registers that prefix extended by one symbol under
    /// the next free code. The decoder replays the identical growth rule,
    /// so the dictionary itself is never transmitted.
    pub fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let radix = self.config.radix;
        let max_code = self.config.max_code() as u32;
        let mut next_code = self.config.first_code();

        let mut prefixes = PrefixTrie::with_alphabet(radix);
        let mut writer = BitWriter::new();

        let mut index = 0;
        let mut emitted = 0u64;
        while index < input.len() {
            let len = prefixes.longest_prefix(input, index);
            if len == 0 {
                // Single-symbol entries cover the whole alphabet, so a
                // zero-length match means the byte is out of alphabet.
                return Err(CodecError::SymbolOutOfRange {
                    symbol: input[index],
                    radix,
                });
            }

            let prefix = &input[index..index + len];
            let code = prefix_code(&prefixes, prefix, index)?;
            writer.write_bits(code, self.config.code_bits);
            emitted += 1;

            if next_code <= max_code && index + len < input.len() {
                prefixes.insert(&input[index..index + len + 1], next_code as u16);
                next_code += 1;
            }

            index += len;
        }

        debug!(
            "compressed {} bytes into {} codes ({} learned sequences, {} trie nodes)",
            input.len(),
            emitted,
            next_code - self.config.first_code(),
            prefixes.node_count(),
        );

        Ok(writer.into_vec())
    }
}

/// Resolve the code for a matched prefix.
///
/// The match came out of the trie one call earlier, so a miss here means
/// the dictionary views have diverged, which the pass invariants rule out.
fn prefix_code(prefixes: &PrefixTrie, prefix: &[u8], position: usize) -> Result<u16> {
    prefixes
        .lookup(prefix)
        .ok_or(CodecError::PrefixDesync { position })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitstream::BitReader;

    fn codes_of(compressed: &[u8], config: CodecConfig) -> Vec<u16> {
        let mut reader = BitReader::new(compressed);
        let mut codes = Vec::new();
        while reader.has_bits(config.code_bits) {
            codes.push(reader.read_bits(config.code_bits).unwrap());
        }
        codes
    }

    #[test]
    fn test_encode_empty() {
        let encoder = Encoder::new(CodecConfig::TEXT).unwrap();
        assert!(encoder.encode(b"").unwrap().is_empty());
    }

    #[test]
    fn test_encode_single_symbol() {
        let encoder = Encoder::new(CodecConfig::TEXT).unwrap();
        let compressed = encoder.encode(b"A").unwrap();
        assert_eq!(codes_of(&compressed, CodecConfig::TEXT), vec![65]);
    }

    #[test]
    fn test_encode_learns_pairs() {
        // "ABAB": emits A, B, then the learned "AB" (code 257; 256 is
        // reserved).
        let encoder = Encoder::new(CodecConfig::TEXT).unwrap();
        let compressed = encoder.encode(b"ABAB").unwrap();
        assert_eq!(codes_of(&compressed, CodecConfig::TEXT), vec![65, 66, 257]);
    }

    #[test]
    fn test_code_allocation_is_monotonic() {
        let encoder = Encoder::new(CodecConfig::TEXT).unwrap();
        // Distinct pairs force one fresh allocation per step.
        let input = b"ABCDABCDABCD";
        let compressed = encoder.encode(input).unwrap();
        let codes = codes_of(&compressed, CodecConfig::TEXT);
        // A B C D AB CD AB CD -> learned codes appear in allocation order.
        assert_eq!(codes, vec![65, 66, 67, 68, 257, 259, 261, 68]);
    }

    #[test]
    fn test_encode_rejects_out_of_alphabet() {
        let encoder = Encoder::new(CodecConfig::ASCII).unwrap();
        let err = encoder.encode(b"ok\xFF").unwrap_err();
        assert!(matches!(
            err,
            CodecError::SymbolOutOfRange {
                symbol: 0xFF,
                radix: 128
            }
        ));
    }

    #[test]
    fn test_encode_rejects_bad_config() {
        assert!(Encoder::new(CodecConfig::new(256, 8)).is_err());
    }

    #[test]
    fn test_determinism() {
        let encoder = Encoder::new(CodecConfig::TEXT).unwrap();
        let input = b"the same input twice must compress identically".repeat(3);
        assert_eq!(encoder.encode(&input).unwrap(), encoder.encode(&input).unwrap());
    }
}
