//! The Huffman code tree and everything that produces or consumes it whole.
//!
//! - [`FrequencyTable`]: byte counts gathered in a single pass over the input
//! - [`build_tree`]: greedy min-weight merging into a [`CodeTree`]
//! - [`write_tree`] / [`read_tree`]: the self-describing pre-order bit format
//! - [`dump_tree`]: indented text rendering for diagnostics

pub mod builder;
pub mod dump;
pub mod frequency;
pub mod serialize;

pub use builder::{build_tree, BuiltTree};
pub use dump::dump_tree;
pub use frequency::FrequencyTable;
pub use serialize::{read_tree, write_tree, MAX_TREE_DEPTH};

/// Number of distinct symbols: every byte value plus the end marker.
pub const SYMBOL_COUNT: usize = 257;

/// A symbol of the coding alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Byte(u8),
    /// Logical end of the payload.
    End,
}

impl Symbol {
    /// Dense index in `0..SYMBOL_COUNT`; the end marker takes the last slot.
    pub fn index(self) -> usize {
        match self {
            Symbol::Byte(b) => b as usize,
            Symbol::End => SYMBOL_COUNT - 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Symbol> {
        match index {
            0..=255 => Some(Symbol::Byte(index as u8)),
            256 => Some(Symbol::End),
            _ => None,
        }
    }
}

/// A strict binary prefix-code tree.
///
/// Every internal node owns exactly two children. Reading a path from the
/// root with left = 0 and right = 1 yields the codeword of the leaf it ends
/// on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeTree {
    Leaf(u8),
    EndMarker,
    Internal(Box<CodeTree>, Box<CodeTree>),
}

impl CodeTree {
    pub fn internal(left: CodeTree, right: CodeTree) -> Self {
        CodeTree::Internal(Box::new(left), Box::new(right))
    }

    /// Builds a tree from a byte slice's frequency distribution.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::from_frequencies(&FrequencyTable::from_bytes(data))
    }

    pub fn from_frequencies(table: &FrequencyTable) -> Self {
        build_tree(table).tree
    }

    pub fn is_end_marker(&self) -> bool {
        matches!(self, CodeTree::EndMarker)
    }

    /// The symbol carried by a leaf, or `None` for internal nodes.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            CodeTree::Leaf(b) => Some(Symbol::Byte(*b)),
            CodeTree::EndMarker => Some(Symbol::End),
            CodeTree::Internal(..) => None,
        }
    }

    /// Length of the longest root-to-leaf path. A bare leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            CodeTree::Leaf(_) | CodeTree::EndMarker => 0,
            CodeTree::Internal(l, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Number of leaves, end marker included.
    pub fn leaf_count(&self) -> usize {
        match self {
            CodeTree::Leaf(_) | CodeTree::EndMarker => 1,
            CodeTree::Internal(l, r) => l.leaf_count() + r.leaf_count(),
        }
    }

    /// Depth of the leaf holding `symbol`, if present.
    pub fn depth_of(&self, symbol: Symbol) -> Option<usize> {
        match self {
            CodeTree::Internal(l, r) => l
                .depth_of(symbol)
                .or_else(|| r.depth_of(symbol))
                .map(|d| d + 1),
            leaf => (leaf.symbol() == Some(symbol)).then_some(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_index_roundtrip() {
        assert_eq!(Symbol::Byte(0).index(), 0);
        assert_eq!(Symbol::Byte(255).index(), 255);
        assert_eq!(Symbol::End.index(), 256);
        assert_eq!(Symbol::from_index(256), Some(Symbol::End));
        assert_eq!(Symbol::from_index(65), Some(Symbol::Byte(b'A')));
        assert_eq!(Symbol::from_index(257), None);
    }

    #[test]
    fn test_shape_queries() {
        let tree = CodeTree::internal(
            CodeTree::EndMarker,
            CodeTree::internal(CodeTree::Leaf(1), CodeTree::Leaf(2)),
        );
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.depth_of(Symbol::End), Some(1));
        assert_eq!(tree.depth_of(Symbol::Byte(2)), Some(2));
        assert_eq!(tree.depth_of(Symbol::Byte(3)), None);
        assert_eq!(tree.symbol(), None);
    }

    #[test]
    fn test_bare_end_marker() {
        let tree = CodeTree::from_bytes(&[]);
        assert!(tree.is_end_marker());
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.leaf_count(), 1);
    }
}
