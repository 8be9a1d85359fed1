use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::tools::freq_count::FreqTable;

/// One node of the coding tree. Leaves own a symbol; internal nodes own
/// exactly two children and weigh the sum of them. The tree is always full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }
}

/// Heap entry. The sequence number makes extraction deterministic: leaves
/// are numbered in ascending symbol order, merged nodes in creation order,
/// and ties on weight go to the lower number.
#[derive(Debug, PartialEq, Eq)]
struct HeapNode {
    seq: u32,
    node: Box<Node>,
}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so compare the other way around: the
        // lightest node (oldest on ties) must pop first.
        other
            .node
            .weight()
            .cmp(&self.node.weight())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the coding tree for a frequency table, or None for an empty table.
///
/// Standard greedy construction: seed one leaf per present symbol, then
/// repeatedly merge the two minimum-weight nodes under a new internal node
/// until one root remains. The first node popped becomes the left child.
/// A table with a single entry yields a lone leaf root with no merge.
pub fn build_tree(freqs: &FreqTable) -> Option<Node> {
    let mut heap = BinaryHeap::with_capacity(freqs.distinct());
    let mut seq = 0_u32;
    for (symbol, count) in freqs.entries() {
        heap.push(HeapNode {
            seq,
            node: Box::new(Node::Leaf {
                symbol,
                weight: count,
            }),
        });
        seq += 1;
    }

    while heap.len() > 1 {
        let left = heap.pop()?.node;
        let right = heap.pop()?.node;
        heap.push(HeapNode {
            seq,
            node: Box::new(Node::Internal {
                weight: left.weight() + right.weight(),
                left,
                right,
            }),
        });
        seq += 1;
    }

    heap.pop().map(|entry| *entry.node)
}
