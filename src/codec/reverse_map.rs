// src/codec/reverse_map.rs

use crate::bits::Codeword;
use crate::tree::{CodeTree, Symbol, SYMBOL_COUNT};

/// Symbol → codeword lookup derived from a [`CodeTree`].
#[derive(Debug, Clone)]
pub struct ReverseMap {
    codes: Vec<Option<Codeword>>,
}

impl ReverseMap {
    /// Walks `tree` once, recording the root-to-leaf path of every leaf.
    pub fn from_tree(tree: &CodeTree) -> Self {
        let mut map = Self {
            codes: vec![None; SYMBOL_COUNT],
        };
        map.populate(tree, Codeword::new());
        map
    }

    fn populate(&mut self, node: &CodeTree, path: Codeword) {
        match node {
            CodeTree::Internal(left, right) => {
                self.populate(left, path.extended(false));
                self.populate(right, path.extended(true));
            }
            CodeTree::Leaf(value) => self.codes[Symbol::Byte(*value).index()] = Some(path),
            CodeTree::EndMarker => self.codes[Symbol::End.index()] = Some(path),
        }
    }

    pub fn get(&self, symbol: Symbol) -> Option<&Codeword> {
        self.codes[symbol.index()].as_ref()
    }

    /// Number of symbols that have a codeword.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Recorded entries in symbol order, end marker last.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Codeword)> + '_ {
        self.codes.iter().enumerate().filter_map(|(i, code)| {
            let code = code.as_ref()?;
            Symbol::from_index(i).map(|s| (s, code))
        })
    }
}
