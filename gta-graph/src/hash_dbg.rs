//! Hash-map backed de Bruijn graph over literal k-mers.

use crate::{DbGraph, Direction, Successors};
use gta_types::{dna, NodeId};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// In-memory graph for tests and the driver. Each distinct k-mer of an
/// added sequence becomes a node; consecutive k-mers are joined by an edge
/// labelled with the appended base.
pub struct HashDbg {
    k: usize,
    index: FxHashMap<Box<[u8]>, NodeId>,
    out: Vec<Successors>,
}

impl HashDbg {
    pub fn new(k: usize) -> HashDbg {
        assert!(k > 0);
        HashDbg {
            k,
            index: FxHashMap::default(),
            out: Vec::new(),
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.out.len()
    }

    fn intern(&mut self, kmer: &[u8]) -> NodeId {
        if let Some(&id) = self.index.get(kmer) {
            return id;
        }
        let id = self.out.len() as NodeId;
        self.index.insert(kmer.into(), id);
        self.out.push(SmallVec::new());
        id
    }

    /// Add every k-mer of an encoded sequence, joining consecutive ones.
    pub fn add_seq(&mut self, codes: &[u8]) {
        if codes.len() < self.k {
            return;
        }
        let mut prev = self.intern(&codes[..self.k]);
        for window in codes.windows(self.k).skip(1) {
            let next = self.intern(window);
            let symbol = window[self.k - 1];
            let edges = &mut self.out[prev as usize];
            if !edges.iter().any(|&(s, n)| s == symbol && n == next) {
                edges.push((symbol, next));
            }
            prev = next;
        }
    }

    /// Add a sequence and its reverse complement.
    pub fn add_seq_with_rc(&mut self, codes: &[u8]) {
        self.add_seq(codes);
        self.add_seq(&dna::revcomp(codes));
    }
}

impl DbGraph for HashDbg {
    fn k(&self) -> usize {
        self.k
    }

    fn index_of(&self, kmer: &[u8]) -> Option<NodeId> {
        self.index.get(kmer).copied()
    }

    fn successors(&self, node: NodeId, _dir: Direction) -> Successors {
        self.out[node as usize].clone()
    }
}
