//! A*-guided extension of protein-coding gene contigs over a de Bruijn graph.
//!
//! From a seed k-mer that scores well against some interior model column,
//! the engine extends the alignment rightward with the forward model and
//! leftward with the reverse model, selecting the highest-scoring
//! terminating path by best-first search under an admissible
//! column-normalized heuristic.

mod astar;
mod cache;
mod config;
mod emit;
mod enumerator;
mod error;
mod node;
mod pool;
mod seed;

pub mod stats;

pub use astar::{Contig, Extension, HmmGraphSearch};
pub use cache::TransitionCache;
pub use config::{exit_score, DEFAULT_HEURISTIC_PRUNING, MAX_EXIT_LENGTH};
pub use enumerator::{Children, NodeEnumerator};
pub use error::SearchError;
pub use node::{AStarNode, NodeKey, NuclEmission, StateKind};
pub use pool::{NodePool, NodeRef};

mod prelude {
    pub use gta_types::{NodeId, Score};
    pub use rustc_hash::FxHashMap as HashMap;
    pub use rustc_hash::FxHashSet as HashSet;
}
