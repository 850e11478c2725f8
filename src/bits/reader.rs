// src/bits/reader.rs

use super::BitError;
use std::io::Read;

/// A bit-level reader over a byte stream.
///
/// A new byte is pulled from the underlying reader only when the current one
/// has been fully consumed, so the reader never reads ahead of what the
/// caller asked for.
pub struct BitReader<R: Read> {
    reader: R,
    current_byte: u8,
    bits_remaining: u8,
    bits_read: u64,
}

impl<R: Read> BitReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            current_byte: 0,
            bits_remaining: 0,
            bits_read: 0,
        }
    }

    /// Reads a single bit.
    ///
    /// Fails with [`BitError::EndOfStream`] when the underlying data is
    /// exhausted.
    pub fn read_bit(&mut self) -> Result<bool, BitError> {
        if self.bits_remaining == 0 {
            let mut byte = [0u8; 1];
            self.reader
                .read_exact(&mut byte)
                .map_err(BitError::from_read)?;
            self.current_byte = byte[0];
            self.bits_remaining = 8;
        }

        self.bits_remaining -= 1;
        self.bits_read += 1;
        Ok((self.current_byte >> self.bits_remaining) & 1 == 1)
    }

    /// Reads eight bits, most significant first.
    pub fn read_byte(&mut self) -> Result<u8, BitError> {
        let mut value = 0u8;
        for _ in 0..8 {
            value = (value << 1) | self.read_bit()? as u8;
        }
        Ok(value)
    }

    /// Number of bits consumed so far.
    pub fn bits_read(&self) -> u64 {
        self.bits_read
    }

    /// Number of whole bytes pulled from the underlying reader.
    pub fn bytes_consumed(&self) -> u64 {
        self.bits_read.div_ceil(8)
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}
