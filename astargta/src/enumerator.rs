//! One-column successor enumeration over the graph.

use crate::node::{AStarNode, NodeKey, NuclEmission, StateKind};
use crate::pool::{NodePool, NodeRef};
use crate::prelude::*;
use gta_graph::{DbGraph, Direction};
use gta_hmm::{Alphabet, ProfileHmm, Transition};
use gta_types::codon;
use smallvec::SmallVec;

/// Successor handles produced by one expansion.
pub type Children = SmallVec<[NodeRef; 16]>;

/// Plan7 transition from a state of kind `from` into one of kind `to`;
/// `None` for the two edges plan7 does not have.
fn transition(from: StateKind, to: StateKind) -> Option<Transition> {
    use StateKind::*;
    Some(match (from, to) {
        (Match, Match) => Transition::MM,
        (Match, Insert) => Transition::MI,
        (Match, Delete) => Transition::MD,
        (Insert, Match) => Transition::IM,
        (Insert, Insert) => Transition::II,
        (Delete, Match) => Transition::DM,
        (Delete, Delete) => Transition::DD,
        (Insert, Delete) | (Delete, Insert) => return None,
    })
}

/// Produces the nodes reachable from a current node by one model-column
/// step: match and insert consume a codon (protein) or one base (DNA) from
/// the graph, delete consumes nothing.
pub struct NodeEnumerator<'a, G> {
    hmm: &'a ProfileHmm,
    graph: &'a G,
    dir: Direction,
}

impl<'a, G: DbGraph> NodeEnumerator<'a, G> {
    pub fn new(hmm: &'a ProfileHmm, graph: &'a G, dir: Direction) -> NodeEnumerator<'a, G> {
        NodeEnumerator { hmm, graph, dir }
    }

    /// All legal successors of `curr`, allocated in `pool`. A `hint` moves a
    /// previously cached best child to the front; it never changes the set.
    pub fn enumerate(
        &self,
        pool: &mut NodePool,
        curr_ref: NodeRef,
        hint: Option<NodeKey>,
    ) -> Children {
        let curr = pool[curr_ref];
        debug_assert!(curr.key.state_no < self.hmm.model_length());
        let mut children = Children::new();

        match self.hmm.alphabet() {
            Alphabet::Protein => {
                for (codes, node_id) in self.codon_paths(curr.key.node_id) {
                    // Stop codons have no emission symbol.
                    if let Some(aa) = codon::translate(codes) {
                        self.emitting_children(
                            pool,
                            &mut children,
                            &curr,
                            curr_ref,
                            aa,
                            NuclEmission::codon(codes),
                            node_id,
                        );
                    }
                }
            }
            Alphabet::Dna => {
                for (symbol, node_id) in self.graph.successors(curr.key.node_id, self.dir) {
                    self.emitting_children(
                        pool,
                        &mut children,
                        &curr,
                        curr_ref,
                        symbol - 1,
                        NuclEmission::single(symbol),
                        node_id,
                    );
                }
            }
        }
        self.delete_child(pool, &mut children, &curr, curr_ref);

        if let Some(hint) = hint {
            if let Some(at) = children.iter().position(|&r| pool[r].key == hint) {
                children.swap(0, at);
            }
        }
        children
    }

    /// Nucleotide triples reachable by three edges, with the node reached.
    fn codon_paths(&self, node: NodeId) -> SmallVec<[([u8; 3], NodeId); 8]> {
        let mut paths = SmallVec::new();
        for &(s1, n1) in &self.graph.successors(node, self.dir) {
            for &(s2, n2) in &self.graph.successors(n1, self.dir) {
                for &(s3, n3) in &self.graph.successors(n2, self.dir) {
                    paths.push(([s1, s2, s3], n3));
                }
            }
        }
        paths
    }

    /// The match and insert successors for one consumed symbol.
    #[allow(clippy::too_many_arguments)]
    fn emitting_children(
        &self,
        pool: &mut NodePool,
        children: &mut Children,
        curr: &AStarNode,
        curr_ref: NodeRef,
        symbol: u8,
        emission: NuclEmission,
        node_id: NodeId,
    ) {
        let j = curr.key.state_no;
        if let Some(t) = transition(curr.key.kind, StateKind::Match) {
            let trans = self.hmm.tsc(j, t);
            if trans > Score::NEG_INFINITY {
                let d_real = self.hmm.msc(j + 1, symbol) + trans;
                self.push(
                    pool,
                    children,
                    curr,
                    curr_ref,
                    NodeKey {
                        node_id,
                        state_no: j + 1,
                        kind: StateKind::Match,
                    },
                    d_real,
                    d_real - self.hmm.max_match_emission(j + 1),
                    emission,
                );
            }
        }
        // Insert stays on the column.
        if let Some(t) = transition(curr.key.kind, StateKind::Insert) {
            let trans = self.hmm.tsc(j, t);
            if trans > Score::NEG_INFINITY {
                let d_real = self.hmm.isc(j, symbol) + trans;
                self.push(
                    pool,
                    children,
                    curr,
                    curr_ref,
                    NodeKey {
                        node_id,
                        state_no: j,
                        kind: StateKind::Insert,
                    },
                    d_real,
                    d_real,
                    emission,
                );
            }
        }
    }

    /// The delete successor: advances the column without touching the graph.
    fn delete_child(
        &self,
        pool: &mut NodePool,
        children: &mut Children,
        curr: &AStarNode,
        curr_ref: NodeRef,
    ) {
        let j = curr.key.state_no;
        if let Some(t) = transition(curr.key.kind, StateKind::Delete) {
            let trans = self.hmm.tsc(j, t);
            if trans > Score::NEG_INFINITY {
                self.push(
                    pool,
                    children,
                    curr,
                    curr_ref,
                    NodeKey {
                        node_id: curr.key.node_id,
                        state_no: j + 1,
                        kind: StateKind::Delete,
                    },
                    trans,
                    trans - self.hmm.max_match_emission(j + 1),
                    NuclEmission::EMPTY,
                );
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn push(
        &self,
        pool: &mut NodePool,
        children: &mut Children,
        curr: &AStarNode,
        curr_ref: NodeRef,
        key: NodeKey,
        d_real: Score,
        d_score: Score,
        emission: NuclEmission,
    ) {
        let score = curr.score + d_score;
        let emits = key.kind != StateKind::Delete;
        let node = AStarNode {
            key,
            fval: score,
            score,
            real_score: curr.real_score + d_real,
            length: curr.length + emits as usize,
            negative_count: if d_real <= 0.0 {
                curr.negative_count + 1
            } else {
                0
            },
            partial: true,
            emission,
            discovered_from: Some(curr_ref),
        };
        children.push(pool.construct(node));
    }
}
