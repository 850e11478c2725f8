// src/utils/error.rs

use crate::bits::BitError;
use std::fmt;

/// Which part of a compressed stream was being read when it ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    Tree,
    Payload,
}

impl fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeStage::Tree => f.write_str("code tree"),
            DecodeStage::Payload => f.write_str("payload"),
        }
    }
}

/// The primary error type for all operations in the Huffman codec.
#[derive(Debug)]
pub enum HuffError {
    /// An error occurred opening, reading or writing an underlying stream.
    Io(std::io::Error),
    /// A bit was requested past the end of the compressed data.
    EndOfStream { stage: DecodeStage },
    /// The serialized tree is structurally impossible.
    InvalidTree(String),
    /// An invalid argument was provided to a function.
    InvalidArg(String),
}

impl HuffError {
    /// Converts a bit-layer error, tagging end-of-stream with `stage`.
    pub fn at_stage(err: BitError, stage: DecodeStage) -> Self {
        match err {
            BitError::EndOfStream => HuffError::EndOfStream { stage },
            BitError::Io(e) => HuffError::Io(e),
        }
    }

    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, HuffError::EndOfStream { .. })
    }
}

impl std::error::Error for HuffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HuffError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for HuffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HuffError::Io(err) => write!(f, "I/O error: {}", err),
            HuffError::EndOfStream { stage } => {
                write!(f, "Unexpected end of stream while reading {}", stage)
            }
            HuffError::InvalidTree(msg) => write!(f, "Invalid code tree: {}", msg),
            HuffError::InvalidArg(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl From<std::io::Error> for HuffError {
    fn from(err: std::io::Error) -> Self {
        HuffError::Io(err)
    }
}

/// Bit errors without further context come from the payload coder.
impl From<BitError> for HuffError {
    fn from(err: BitError) -> Self {
        HuffError::at_stage(err, DecodeStage::Payload)
    }
}

/// A specialized `Result` type for codec operations.
pub type Result<T> = std::result::Result<T, HuffError>;
