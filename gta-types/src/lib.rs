//! Shared primitive types for the gene-targeted assembler crates.

pub mod codon;
pub mod dna;
pub mod kmer;

/// Natural-log odds score.
pub type Score = f64;

/// Graph vertex id, as returned by `index_of`.
pub type NodeId = i64;
