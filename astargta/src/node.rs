//! Search-tree nodes: identity, payload, and the two orderings.

use crate::pool::NodeRef;
use gta_types::{NodeId, Score};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// How the current model column was consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StateKind {
    Match,
    Insert,
    Delete,
}

/// Node identity: everything the closed set and open index key on.
/// Scores, ancestry, and emissions are payload, not identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    pub node_id: NodeId,
    pub state_no: usize,
    pub kind: StateKind,
}

/// Packed nucleotide emission: up to three 3-bit fields, first consumed base
/// in the low bits. An all-zero value (the delete sentinel) emits nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NuclEmission(u16);

impl NuclEmission {
    pub const EMPTY: NuclEmission = NuclEmission(0);

    /// Single-base emission of a DNA model step.
    #[inline]
    pub fn single(code: u8) -> NuclEmission {
        debug_assert!((1..=4).contains(&code));
        NuclEmission(code as u16)
    }

    /// Codon emission of a protein model step.
    #[inline]
    pub fn codon(codes: [u8; 3]) -> NuclEmission {
        debug_assert!(codes.iter().all(|c| (1..=4).contains(c)));
        NuclEmission(codes[0] as u16 | (codes[1] as u16) << 3 | (codes[2] as u16) << 6)
    }

    /// The emitted base codes in consumption order.
    #[inline]
    pub fn bases(self) -> impl DoubleEndedIterator<Item = u8> {
        [
            (self.0 & 0x7) as u8,
            (self.0 >> 3 & 0x7) as u8,
            (self.0 >> 6 & 0x7) as u8,
        ]
        .into_iter()
        .filter(|&c| c != 0)
    }
}

/// A node of the search tree, owned by the per-seed pool.
#[derive(Clone, Copy, Debug)]
pub struct AStarNode {
    pub key: NodeKey,
    /// Priority key; equals `score` since the admissible remainder bound of
    /// the normalized metric is zero.
    pub fval: Score,
    /// Normalized path score: real score minus each consumed column's
    /// maximum match emission.
    pub score: Score,
    /// Unnormalized path score; drives goal selection.
    pub real_score: Score,
    /// Emitted symbols so far, in model coordinates.
    pub length: usize,
    /// Consecutive steps with non-positive score contribution.
    pub negative_count: u32,
    /// True until the node is popped as a terminal.
    pub partial: bool,
    pub emission: NuclEmission,
    pub discovered_from: Option<NodeRef>,
}

impl AStarNode {
    /// Open-index dominance between nodes of equal identity: the replacement
    /// test of the decrease-key policy.
    #[inline]
    pub fn dominates(&self, other: &AStarNode) -> bool {
        self.score > other.score || (self.score == other.score && self.length < other.length)
    }
}

/// Heap entry: a copy of the ordering keys plus the pool handle. Max by
/// `fval`, then `real_score`, then shortest `length`; the identity breaks
/// remaining ties so equal-scoring pops are deterministic.
#[derive(Clone, Copy, Debug)]
pub struct HeapEntry {
    pub fval: Score,
    pub real_score: Score,
    pub length: usize,
    pub key: NodeKey,
    pub node: NodeRef,
}

impl HeapEntry {
    #[inline]
    pub fn of(node: &AStarNode, r: NodeRef) -> HeapEntry {
        HeapEntry {
            fval: node.fval,
            real_score: node.real_score,
            length: node.length,
            key: node.key,
            node: r,
        }
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.fval)
            .cmp(&OrderedFloat(other.fval))
            .then_with(|| OrderedFloat(self.real_score).cmp(&OrderedFloat(other.real_score)))
            .then_with(|| other.length.cmp(&self.length))
            .then_with(|| other.key.cmp(&self.key))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn entry(fval: Score, real_score: Score, length: usize, state_no: usize) -> HeapEntry {
        HeapEntry {
            fval,
            real_score,
            length,
            key: NodeKey {
                node_id: 0,
                state_no,
                kind: StateKind::Match,
            },
            node: NodeRef::default(),
        }
    }

    #[test]
    fn heap_orders_by_fval_then_real_then_shortest() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(-1.0, 5.0, 3, 0));
        heap.push(entry(0.0, 1.0, 3, 1));
        heap.push(entry(0.0, 2.0, 3, 2));
        heap.push(entry(0.0, 2.0, 2, 3));
        assert_eq!(heap.pop().unwrap().key.state_no, 3);
        assert_eq!(heap.pop().unwrap().key.state_no, 2);
        assert_eq!(heap.pop().unwrap().key.state_no, 1);
        assert_eq!(heap.pop().unwrap().key.state_no, 0);
    }

    #[test]
    fn emission_packs_in_consumption_order() {
        let codon = NuclEmission::codon([1, 3, 4]);
        assert_eq!(codon.bases().collect::<Vec<_>>(), vec![1, 3, 4]);
        assert_eq!(codon.bases().rev().collect::<Vec<_>>(), vec![4, 3, 1]);
        assert_eq!(NuclEmission::single(2).bases().collect::<Vec<_>>(), vec![2]);
        assert_eq!(NuclEmission::EMPTY.bases().count(), 0);
    }
}
