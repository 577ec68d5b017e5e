//! Expansion: reconstruct the symbol stream from fixed-width codes.
//!
//! The decoder mirrors the encoder's dictionary growth with a flat
//! code-indexed table instead of a prefix trie, because lookups here are by
//! numeric code. The two structures hold the same set of sequences at every
//! step; that lock-step is what lets the stream omit the dictionary.

use crate::bitstream::BitReader;
use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use log::debug;

/// Expander for a fixed configuration.
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    config: CodecConfig,
}

impl Decoder {
    /// Create a decoder, validating the configuration.
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Expand a bit-packed code stream back into the original bytes.
    ///
    /// The read loop runs one code ahead of what it emits: the sequence for
    /// the last code read is flushed after the loop. A code with no table
    /// entry is legal in exactly one situation, when it is the code the
    /// encoder allocated immediately before transmitting it; its sequence
    /// is then the current prefix extended by its own first symbol. Any
    /// other unknown code aborts expansion.
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let code_bits = self.config.code_bits;
        let max_code = self.config.max_code() as u32;
        let mut next_code = self.config.first_code();

        // Codes 0..radix are the single-symbol entries; the slot at `radix`
        // stays empty (reserved), as do all slots not yet allocated.
        let mut table: Vec<Option<Vec<u8>>> = vec![None; max_code as usize + 1];
        for i in 0..self.config.radix {
            table[i as usize] = Some(vec![i as u8]);
        }

        let mut reader = BitReader::new(input);
        if !reader.has_bits(1) {
            return Ok(Vec::new());
        }

        let first = reader.read_bits(code_bits)?;
        let mut prefix = table[first as usize]
            .clone()
            .ok_or(CodecError::InvalidCode(first))?;

        let mut output = Vec::new();
        while reader.has_bits(code_bits) {
            output.extend_from_slice(&prefix);

            let lookahead = reader.read_bits(code_bits)?;
            let lookahead_seq = match &table[lookahead as usize] {
                Some(seq) => seq.clone(),
                // One-step-ahead code: the encoder defined it during the
                // step that produced `prefix`, so it must be the very next
                // free slot and its sequence is prefix + prefix[0].
                None if lookahead as u32 == next_code && next_code <= max_code => {
                    let mut seq = prefix.clone();
                    seq.push(prefix[0]);
                    seq
                }
                None => return Err(CodecError::InvalidCode(lookahead)),
            };

            if next_code <= max_code {
                let mut entry = prefix;
                entry.push(lookahead_seq[0]);
                table[next_code as usize] = Some(entry);
                next_code += 1;
            }

            prefix = lookahead_seq;
        }

        // The last code read was never emitted inside the loop.
        output.extend_from_slice(&prefix);

        debug!(
            "expanded {} compressed bytes into {} ({} learned sequences)",
            input.len(),
            output.len(),
            next_code - self.config.first_code(),
        );

        Ok(output)
    }
}
