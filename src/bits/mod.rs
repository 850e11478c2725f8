//! Bit-level I/O used by the tree serializer and the payload coder.
//!
//! Bits are always packed MSB-first. The writer zero-pads the final partial
//! byte when it is finished, so every compressed stream is byte aligned.

pub mod codeword;
pub mod reader;
pub mod writer;

pub use codeword::Codeword;
pub use reader::BitReader;
pub use writer::BitWriter;

use thiserror::Error;

/// Failures raised by the bit layer.
#[derive(Error, Debug)]
pub enum BitError {
    /// A bit or byte was requested past the end of the underlying data.
    #[error("unexpected end of bit stream")]
    EndOfStream,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BitError {
    /// Maps a read failure, turning a short read into `EndOfStream`.
    pub(crate) fn from_read(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => BitError::EndOfStream,
            _ => BitError::Io(err),
        }
    }
}
