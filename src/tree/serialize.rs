// src/tree/serialize.rs

//! Bit-exact pre-order tree format.
//!
//! | node            | bits                              |
//! |-----------------|-----------------------------------|
//! | internal        | `1`, left subtree, right subtree  |
//! | leaf `v != 0`   | `0`, `v` (8 bits MSB-first)       |
//! | leaf `0x00`     | `0`, `00000000`, `0`              |
//! | end marker      | `0`, `00000000`, `1`              |
//!
//! The trailing bit after a zero byte is what tells a zero-valued leaf apart
//! from the end marker.

use super::CodeTree;
use crate::bits::{BitError, BitReader, BitWriter};
use crate::utils::error::{DecodeStage, HuffError, Result};
use std::io::{Read, Write};

/// Deepest nesting a 257-symbol tree can reach.
pub const MAX_TREE_DEPTH: usize = 256;

/// Serializes `tree` into `writer`.
pub fn write_tree<W: Write>(tree: &CodeTree, writer: &mut BitWriter<W>) -> std::result::Result<(), BitError> {
    match tree {
        CodeTree::Internal(left, right) => {
            writer.write_bit(true)?;
            write_tree(left, writer)?;
            write_tree(right, writer)
        }
        CodeTree::Leaf(value) => {
            writer.write_bit(false)?;
            writer.write_byte(*value)?;
            if *value == 0 {
                writer.write_bit(false)?;
            }
            Ok(())
        }
        CodeTree::EndMarker => {
            writer.write_bit(false)?;
            writer.write_byte(0)?;
            writer.write_bit(true)
        }
    }
}

/// Reads one serialized tree from `reader`.
///
/// Running out of data yields [`HuffError::EndOfStream`] tagged with
/// [`DecodeStage::Tree`]. Nesting beyond [`MAX_TREE_DEPTH`] is rejected as
/// [`HuffError::InvalidTree`], and so is a bare byte leaf at the root, which
/// has no codeword for the end of the stream.
pub fn read_tree<R: Read>(reader: &mut BitReader<R>) -> Result<CodeTree> {
    let tree = read_node(reader, 0)?;
    if let CodeTree::Leaf(value) = tree {
        return Err(HuffError::InvalidTree(format!(
            "root is a lone leaf 0x{:02X}",
            value
        )));
    }
    log::debug!(
        "read code tree: {} leaves, {} bits",
        tree.leaf_count(),
        reader.bits_read()
    );
    Ok(tree)
}

fn read_node<R: Read>(reader: &mut BitReader<R>, depth: usize) -> Result<CodeTree> {
    let tree_err = |e| HuffError::at_stage(e, DecodeStage::Tree);

    if reader.read_bit().map_err(tree_err)? {
        if depth >= MAX_TREE_DEPTH {
            return Err(HuffError::InvalidTree(format!(
                "nesting exceeds {} levels",
                MAX_TREE_DEPTH
            )));
        }
        let left = read_node(reader, depth + 1)?;
        let right = read_node(reader, depth + 1)?;
        return Ok(CodeTree::internal(left, right));
    }

    let value = reader.read_byte().map_err(tree_err)?;
    if value != 0 {
        return Ok(CodeTree::Leaf(value));
    }
    if reader.read_bit().map_err(tree_err)? {
        Ok(CodeTree::EndMarker)
    } else {
        Ok(CodeTree::Leaf(0))
    }
}

/// Number of bits `tree` occupies when serialized.
#[cfg(test)]
fn serialized_bits(tree: &CodeTree) -> u64 {
    match tree {
        CodeTree::Internal(l, r) => 1 + serialized_bits(l) + serialized_bits(r),
        CodeTree::Leaf(0) | CodeTree::EndMarker => 10,
        CodeTree::Leaf(_) => 9,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn to_bits(tree: &CodeTree) -> (Vec<u8>, u64) {
        let mut writer = BitWriter::new(Vec::new());
        write_tree(tree, &mut writer).unwrap();
        let bits = writer.bits_written();
        (writer.finish().unwrap(), bits)
    }

    fn from_bytes(bytes: Vec<u8>) -> Result<CodeTree> {
        read_tree(&mut BitReader::new(Cursor::new(bytes)))
    }

    #[test]
    fn test_zero_leaf_is_ten_bits() {
        let (bytes, bits) = to_bits(&CodeTree::Leaf(0));
        assert_eq!(bits, 10);
        // 0 00000000 0 -> 00000000 00______
        assert_eq!(bytes, vec![0x00, 0x00]);
    }

    #[test]
    fn test_end_marker_is_ten_bits() {
        let (bytes, bits) = to_bits(&CodeTree::EndMarker);
        assert_eq!(bits, 10);
        // 0 00000000 1 -> 00000000 01______
        assert_eq!(bytes, vec![0x00, 0b0100_0000]);
    }

    #[test]
    fn test_nonzero_leaf_is_nine_bits() {
        let (bytes, bits) = to_bits(&CodeTree::Leaf(0xFF));
        assert_eq!(bits, 9);
        assert_eq!(bytes, vec![0b0111_1111, 0b1000_0000]);
    }

    #[test]
    fn test_internal_layout() {
        // 1 | 0 00000000 1 | 0 01100001
        let tree = CodeTree::internal(CodeTree::EndMarker, CodeTree::Leaf(b'a'));
        let (bytes, bits) = to_bits(&tree);
        assert_eq!(bits, 20);
        assert_eq!(bytes, vec![0b1000_0000, 0b0010_0110, 0b0001_0000]);
        assert_eq!(serialized_bits(&tree), 20);
    }

    #[test]
    fn test_zero_leaf_and_end_marker_are_distinguished() {
        let tree = CodeTree::internal(
            CodeTree::Leaf(0),
            CodeTree::internal(CodeTree::EndMarker, CodeTree::Leaf(1)),
        );
        let (bytes, _) = to_bits(&tree);
        assert_eq!(from_bytes(bytes).unwrap(), tree);
    }

    #[test]
    fn test_full_alphabet_tree_survives() {
        let data: Vec<u8> = (0..=255u8).chain(0..=40u8).collect();
        let tree = CodeTree::from_bytes(&data);
        let (bytes, bits) = to_bits(&tree);
        assert_eq!(bits, serialized_bits(&tree));
        assert_eq!(from_bytes(bytes).unwrap(), tree);
    }

    #[test]
    fn test_truncated_tree_reports_tree_stage() {
        let tree = CodeTree::from_bytes(b"hello world");
        let (mut bytes, _) = to_bits(&tree);
        bytes.truncate(bytes.len() / 2);
        match from_bytes(bytes) {
            Err(HuffError::EndOfStream { stage }) => assert_eq!(stage, DecodeStage::Tree),
            other => panic!("expected end of stream, got {:?}", other),
        }
    }

    #[test]
    fn test_runaway_nesting_is_rejected() {
        // All-ones input describes an endlessly left-leaning tree.
        let result = from_bytes(vec![0xFF; 64]);
        assert!(matches!(result, Err(HuffError::InvalidTree(_))));
    }

    #[test]
    fn test_lone_leaf_root_is_rejected() {
        // 0 00110000 1: a single leaf for '0' and no end marker anywhere.
        let result = from_bytes(vec![0b0011_0000, 0b1000_0000]);
        assert!(matches!(result, Err(HuffError::InvalidTree(_))));

        let (bytes, _) = to_bits(&CodeTree::Leaf(0));
        assert!(matches!(from_bytes(bytes), Err(HuffError::InvalidTree(_))));
    }
}
