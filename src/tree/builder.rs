// src/tree/builder.rs

//! Greedy Huffman construction over a min-priority queue.

use super::{CodeTree, FrequencyTable};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Synthetic weight given to the end marker so it always receives a codeword.
pub const END_MARKER_WEIGHT: u64 = 1;

/// A constructed tree together with the weight of its root.
#[derive(Debug, Clone)]
pub struct BuiltTree {
    pub tree: CodeTree,
    /// Sum of all leaf weights, end marker included.
    pub weight: u64,
}

/// A queue entry. `seq` is the insertion order and breaks weight ties.
struct Candidate {
    weight: u64,
    seq: u64,
    node: CodeTree,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Builds the code tree for `table`.
///
/// Byte leaves are queued in ascending value order, followed by the end
/// marker. The two lightest candidates are merged repeatedly, the first one
/// removed becoming the left child. Among equal weights the earlier inserted
/// candidate is removed first, so the result is deterministic.
pub fn build_tree(table: &FrequencyTable) -> BuiltTree {
    let mut heap = BinaryHeap::with_capacity(table.distinct() + 1);
    let mut seq = 0u64;
    let mut push = |heap: &mut BinaryHeap<Candidate>, weight: u64, node: CodeTree| {
        heap.push(Candidate { weight, seq, node });
        seq += 1;
    };

    for (byte, count) in table.iter() {
        push(&mut heap, count, CodeTree::Leaf(byte));
    }
    push(&mut heap, END_MARKER_WEIGHT, CodeTree::EndMarker);

    while heap.len() > 1 {
        if let (Some(a), Some(b)) = (heap.pop(), heap.pop()) {
            log::trace!("merging weights {} + {}", a.weight, b.weight);
            push(
                &mut heap,
                a.weight + b.weight,
                CodeTree::internal(a.node, b.node),
            );
        }
    }

    let built = match heap.pop() {
        Some(root) => BuiltTree {
            tree: root.node,
            weight: root.weight,
        },
        None => BuiltTree {
            tree: CodeTree::EndMarker,
            weight: END_MARKER_WEIGHT,
        },
    };
    log::debug!(
        "built code tree: {} leaves, depth {}, weight {}",
        built.tree.leaf_count(),
        built.tree.depth(),
        built.weight
    );
    built
}
