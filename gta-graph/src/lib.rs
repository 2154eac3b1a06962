//! De Bruijn graph interface used by the search engine.

mod hash_dbg;

pub use hash_dbg::HashDbg;

use gta_types::NodeId;
use smallvec::SmallVec;

/// Traversal sense of a search: rightward along the seed's strand, or
/// leftward (which runs on the reverse-complement strand).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Outgoing edges of a node: at most one per nucleotide.
pub type Successors = SmallVec<[(u8, NodeId); 4]>;

/// A fixed-k de Bruijn graph over the `1..=4` nucleotide encoding.
pub trait DbGraph {
    fn k(&self) -> usize;

    /// Id of the node for an encoded k-mer, if indexed.
    fn index_of(&self, kmer: &[u8]) -> Option<NodeId>;

    /// Edges leaving `node`, as `(edge symbol, next node)` pairs.
    ///
    /// `dir` lets strand-canonicalizing implementations orient the walk;
    /// implementations whose node ids name literal k-mers extend along
    /// outgoing edges in both senses, since a backward search already
    /// enters on the reverse-complement k-mer.
    fn successors(&self, node: NodeId, dir: Direction) -> Successors;
}
