// src/bits/codeword.rs

//! In-memory bit sequence used to hold the path to a single symbol.

use bitvec::order::Msb0;
use bitvec::prelude::*;
use std::fmt;

/// An append-only sequence of bits.
///
/// Codewords are accumulated while walking the tree and later replayed into a
/// [`BitWriter`](super::BitWriter). They have no backing stream and therefore
/// no flush step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Codeword {
    bits: BitVec<u8, Msb0>,
}

impl Codeword {
    pub fn new() -> Self {
        Self {
            bits: BitVec::new(),
        }
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: BitVec::with_capacity(bits),
        }
    }

    pub fn push_bit(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Appends all eight bits of `byte`, most significant first.
    pub fn push_byte(&mut self, byte: u8) {
        self.bits.extend_from_bitslice(byte.view_bits::<Msb0>());
    }

    /// Appends every bit of `other`, preserving order.
    pub fn append(&mut self, other: &Codeword) {
        self.bits.extend_from_bitslice(other.bits.as_bitslice());
    }

    /// Returns a copy of `self` with one more bit on the end.
    pub fn extended(&self, bit: bool) -> Codeword {
        let mut next = Codeword::with_capacity(self.len() + 1);
        next.append(self);
        next.push_bit(bit);
        next
    }

    /// Number of bits held.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|bit| *bit)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    /// True when every bit of `self` matches the start of `other`.
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        other.bits.starts_with(self.bits.as_bitslice())
    }

    /// Packs the bits MSB-first, zero-filling the unused tail of the last byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut packed = self.bits.clone();
        packed.set_uninitialized(false);
        packed.into_vec()
    }
}

impl FromIterator<bool> for Codeword {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_byte_is_msb_first() {
        let mut cw = Codeword::new();
        cw.push_byte(0b1010_0001);
        assert_eq!(cw.len(), 8);
        assert_eq!(cw.to_string(), "10100001");
        assert_eq!(cw.to_bytes(), vec![0b1010_0001]);
    }

    #[test]
    fn test_append_preserves_order_across_byte_boundaries() {
        // 11 bits: exercises the trailing partial byte of the source
        let src: Codeword = "10110011101"
            .chars()
            .map(|c| c == '1')
            .collect();
        let mut dst = Codeword::new();
        dst.push_bit(false);
        dst.append(&src);
        assert_eq!(dst.len(), 12);
        assert_eq!(dst.to_string(), "010110011101");
    }

    #[test]
    fn test_append_two_full_bytes() {
        let mut src = Codeword::new();
        src.push_byte(0xAB);
        src.push_byte(0xCD);
        let mut dst = Codeword::new();
        dst.append(&src);
        assert_eq!(dst.to_bytes(), vec![0xAB, 0xCD]);
    }

    #[test]
    fn test_to_bytes_zero_pads() {
        let cw: Codeword = [true, true, true].into_iter().collect();
        assert_eq!(cw.to_bytes(), vec![0b1110_0000]);
    }

    #[test]
    fn test_prefix() {
        let short: Codeword = [true, false].into_iter().collect();
        let long: Codeword = [true, false, true].into_iter().collect();
        assert!(short.is_prefix_of(&long));
        assert!(!long.is_prefix_of(&short));
        assert!(Codeword::new().is_prefix_of(&short));
    }

    #[test]
    fn test_extended_does_not_touch_original() {
        let base: Codeword = [false].into_iter().collect();
        let left = base.extended(false);
        let right = base.extended(true);
        assert_eq!(base.to_string(), "0");
        assert_eq!(left.to_string(), "00");
        assert_eq!(right.to_string(), "01");
    }
}
