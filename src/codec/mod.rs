//! Encode and decode orchestration.
//!
//! A compressed stream is the serialized code tree, followed by the codeword
//! of every input byte in order, followed by the end-of-stream codeword,
//! zero-padded to a byte boundary. There is no header, length or checksum.

pub mod decoder;
pub mod encoder;
pub mod file;
pub mod params;
pub mod reverse_map;

pub use decoder::{DecodeStats, Decoder};
pub use encoder::{EncodeStats, Encoder};
pub use file::{decode_file, encode_file, make_tree, read_tree_dump};
pub use params::CodecParams;
pub use reverse_map::ReverseMap;

use crate::utils::error::Result;
use std::io::{Read, Write};

/// Compresses `input` into `output` with default parameters.
pub fn encode<W: Write>(input: &[u8], output: W) -> Result<EncodeStats> {
    Encoder::new().encode(input, output)
}

/// Expands a compressed stream from `input` into `output`.
pub fn decode<R: Read, W: Write>(input: R, output: W) -> Result<DecodeStats> {
    Decoder::new().decode(input, output)
}

/// Convenience wrapper returning the compressed bytes.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode(input, &mut out)?;
    Ok(out)
}

/// Convenience wrapper returning the decompressed bytes.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    decode(input, &mut out)?;
    Ok(out)
}
