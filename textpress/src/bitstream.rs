//! MSB-first bit-level I/O for fixed-width codes.
//!
//! Codes are packed most-significant-bit first, so a 12-bit code sequence
//! reads the same in a hex dump as it was emitted. The writer pads the
//! trailing partial byte with zero bits; because codes are at least 9 bits
//! wide and padding is at most 7, padding can never be misread as a code.

use crate::error::{CodecError, Result};

/// MSB-first bit reader over an in-memory buffer.
#[derive(Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Next unread byte.
    byte_pos: usize,
    /// Pending bits, left-aligned at the low end (MSB of the stream is the
    /// highest valid bit).
    buffer: u32,
    bits_in_buffer: u8,
    total_bits_read: u64,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Whether at least `count` bits remain in the stream.
    ///
    /// This is the loop-termination query for expansion: once fewer than a
    /// whole code remains, what is left is the writer's zero padding.
    pub fn has_bits(&self, count: u8) -> bool {
        self.bits_in_buffer as usize + 8 * (self.data.len() - self.byte_pos) >= count as usize
    }

    /// Read `count` bits (1-16), MSB-first.
    pub fn read_bits(&mut self, count: u8) -> Result<u16> {
        debug_assert!((1..=16).contains(&count));

        while self.bits_in_buffer < count {
            let Some(&byte) = self.data.get(self.byte_pos) else {
                return Err(CodecError::UnexpectedEof {
                    position: self.total_bits_read,
                });
            };
            self.byte_pos += 1;
            self.buffer = (self.buffer << 8) | byte as u32;
            self.bits_in_buffer += 8;
        }

        let shift = self.bits_in_buffer - count;
        let value = (self.buffer >> shift) & ((1u32 << count) - 1);
        self.bits_in_buffer -= count;
        self.total_bits_read += count as u64;

        Ok(value as u16)
    }

    /// Total bits consumed so far (for error reporting).
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }
}

/// MSB-first bit writer backed by a `Vec<u8>`.
#[derive(Debug, Default)]
pub struct BitWriter {
    output: Vec<u8>,
    buffer: u32,
    bits_in_buffer: u8,
}

impl BitWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the low `count` bits (1-16) of `value`, MSB-first.
    pub fn write_bits(&mut self, value: u16, count: u8) {
        debug_assert!((1..=16).contains(&count));

        self.buffer = (self.buffer << count) | (value as u32 & ((1u32 << count) - 1));
        self.bits_in_buffer += count;

        while self.bits_in_buffer >= 8 {
            self.output.push((self.buffer >> (self.bits_in_buffer - 8)) as u8);
            self.bits_in_buffer -= 8;
        }
    }

    /// Pad the trailing partial byte with zeros and return the buffer.
    pub fn into_vec(mut self) -> Vec<u8> {
        if self.bits_in_buffer > 0 {
            self.output
                .push((self.buffer << (8 - self.bits_in_buffer)) as u8);
        }
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b101, 3);
        writer.write_bits(0b1100, 4);
        writer.write_bits(0x0ABC, 12);

        let data = writer.into_vec();
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.read_bits(3).unwrap(), 0b101);
        assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
        assert_eq!(reader.read_bits(12).unwrap(), 0x0ABC);
    }

    #[test]
    fn test_msb_packing() {
        // Two 12-bit codes fill exactly three bytes, high bits first.
        let mut writer = BitWriter::new();
        writer.write_bits(0x123, 12);
        writer.write_bits(0x456, 12);
        assert_eq!(writer.into_vec(), vec![0x12, 0x34, 0x56]);
    }

    #[test]
    fn test_final_byte_padding() {
        let mut writer = BitWriter::new();
        writer.write_bits(0xFFF, 12);
        // 12 bits pad out to 16: 1111_1111 1111_0000.
        assert_eq!(writer.into_vec(), vec![0xFF, 0xF0]);
    }

    #[test]
    fn test_has_bits() {
        let data = [0xAB, 0xCD];
        let mut reader = BitReader::new(&data);
        assert!(reader.has_bits(16));
        assert!(!reader.has_bits(17));

        reader.read_bits(12).unwrap();
        assert!(reader.has_bits(4));
        assert!(!reader.has_bits(12));
        assert_eq!(reader.bits_read(), 12);
    }

    #[test]
    fn test_eof_mid_code() {
        let data = [0xAB];
        let mut reader = BitReader::new(&data);
        let err = reader.read_bits(12).unwrap_err();
        assert!(matches!(err, CodecError::UnexpectedEof { position: 0 }));
    }

    #[test]
    fn test_empty_writer() {
        assert!(BitWriter::new().into_vec().is_empty());
    }
}
