// src/bits/writer.rs

use super::{BitError, Codeword};
use std::io::Write;

/// A bit-level writer backed by a byte stream.
///
/// Completed bytes are handed to the underlying writer as soon as they fill.
/// [`finish`](BitWriter::finish) zero-pads the trailing partial byte; if the
/// writer is dropped without being finished the same padding happens on a
/// best-effort basis.
pub struct BitWriter<W: Write> {
    writer: Option<W>,
    current_byte: u8,
    bits_in_current: u8,
    bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
            current_byte: 0,
            bits_in_current: 0,
            bits_written: 0,
        }
    }

    /// Writes a single bit.
    pub fn write_bit(&mut self, bit: bool) -> Result<(), BitError> {
        if bit {
            self.current_byte |= 1 << (7 - self.bits_in_current);
        }
        self.bits_in_current += 1;
        self.bits_written += 1;

        if self.bits_in_current == 8 {
            self.emit_current()?;
        }
        Ok(())
    }

    /// Writes all eight bits of `byte`, most significant first.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), BitError> {
        if self.bits_in_current == 0 {
            self.current_byte = byte;
            self.bits_in_current = 8;
            self.bits_written += 8;
            return self.emit_current();
        }
        for i in (0..8).rev() {
            self.write_bit((byte >> i) & 1 == 1)?;
        }
        Ok(())
    }

    /// Writes every bit of `codeword` in order.
    pub fn write_codeword(&mut self, codeword: &Codeword) -> Result<(), BitError> {
        for bit in codeword.iter() {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Total number of bits accepted so far, excluding padding.
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Zero-pads the last partial byte, flushes, and returns the inner writer.
    pub fn finish(mut self) -> Result<W, BitError> {
        self.pad_and_flush()?;
        // `pad_and_flush` only fails before the writer is taken
        self.writer
            .take()
            .ok_or_else(|| BitError::Io(std::io::Error::other("bit writer already finished")))
    }

    fn emit_current(&mut self) -> Result<(), BitError> {
        let byte = self.current_byte;
        self.current_byte = 0;
        self.bits_in_current = 0;
        match self.writer.as_mut() {
            Some(w) => Ok(w.write_all(&[byte])?),
            None => Err(BitError::Io(std::io::Error::other(
                "bit writer already finished",
            ))),
        }
    }

    fn pad_and_flush(&mut self) -> Result<(), BitError> {
        if self.bits_in_current > 0 {
            self.emit_current()?;
        }
        if let Some(w) = self.writer.as_mut() {
            w.flush()?;
        }
        Ok(())
    }
}

impl<W: Write> Drop for BitWriter<W> {
    fn drop(&mut self) {
        if self.writer.is_some() {
            if let Err(err) = self.pad_and_flush() {
                log::warn!("failed to flush trailing bits on drop: {}", err);
            }
        }
    }
}
