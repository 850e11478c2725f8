//! A byte-oriented Huffman coder.
//!
//! The coder builds a prefix-code tree from the byte frequencies of its input,
//! writes that tree in a compact self-describing bit format, and follows it
//! with the codeword of every input byte and an end-of-stream codeword.
//!
//! # Quick Start
//!
//! ```
//! use huffman_codec::{compress, decompress};
//!
//! let packed = compress(b"abracadabra")?;
//! assert_eq!(decompress(&packed)?, b"abracadabra");
//! # Ok::<(), huffman_codec::HuffError>(())
//! ```
//!
//! # Stream layout
//!
//! 1. The code tree, pre-order (see [`tree::serialize`])
//! 2. One codeword per input byte, in input order
//! 3. The end-of-stream codeword
//! 4. Zero bits up to the next byte boundary
//!
//! There is no header, length or checksum. A truncated stream is only
//! detected when a read runs past the end of the data, and feeding the
//! decoder something that was never produced by the encoder may yield
//! arbitrary output rather than an error.

// Core modules
pub mod bits;
pub mod codec;
pub mod tree;
pub mod utils;

// Encoding and decoding
pub use codec::{
    compress, decode, decode_file, decompress, encode, encode_file, make_tree, read_tree_dump,
    CodecParams, DecodeStats, Decoder, EncodeStats, Encoder, ReverseMap,
};

// Tree types
pub use tree::{dump_tree, read_tree, write_tree, CodeTree, FrequencyTable, Symbol};

// Bit I/O
pub use bits::{BitError, BitReader, BitWriter, Codeword};

// Error types
pub use utils::error::{DecodeStage, HuffError, Result};
pub use utils::progress::{NoProgress, ProgressObserver};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_roundtrip() {
        let data = b"public api".repeat(10);
        let packed = compress(&data).unwrap();
        assert!(packed.len() < data.len());
        assert_eq!(decompress(&packed).unwrap(), data);
    }

    #[test]
    fn test_dump_of_encoded_tree() {
        let packed = compress(b"aaaa").unwrap();
        let mut reader = BitReader::new(&packed[..]);
        let tree = read_tree(&mut reader).unwrap();
        assert_eq!(dump_tree(&tree), "+ L\n\t| EOF\n+ R\n\t| 0x61 (a)\n");
    }
}
