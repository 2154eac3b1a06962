//! Seed adapter: turns a nucleotide seed k-mer into a starting node.

use crate::error::SearchError;
use crate::node::{AStarNode, NodeKey, NuclEmission, StateKind};
use crate::pool::{NodePool, NodeRef};
use crate::prelude::*;
use gta_graph::{DbGraph, Direction};
use gta_hmm::{real_score_start, score_start, Alphabet, ProfileHmm};
use gta_types::{codon, dna};

/// Build the starting node for one directed search. `start_state` is the
/// model column the seed's first symbol aligns after; reverse searches
/// receive the already-mirrored column.
pub fn starting_node<G: DbGraph>(
    hmm: &ProfileHmm,
    graph: &G,
    pool: &mut NodePool,
    seed: &[u8],
    start_state: usize,
    dir: Direction,
) -> Result<NodeRef, SearchError> {
    let codes = dna::encode_seq(seed).map_err(|byte| SearchError::InvalidAlphabet { byte })?;
    // A backward search enters the graph on the reverse-complement strand.
    let lookup = match dir {
        Direction::Forward => codes.clone(),
        Direction::Backward => dna::revcomp(&codes),
    };

    let (word, units) = match hmm.alphabet() {
        Alphabet::Protein => {
            let units = codes.len() / 3;
            let framed = match dir {
                Direction::Forward => codon::translate_seq(&codes[..units * 3]),
                // Reverse-complement, translate, then reverse the
                // amino-acid string.
                Direction::Backward => codon::translate_seq(&lookup[..units * 3]).map(|mut aa| {
                    aa.reverse();
                    aa
                }),
            };
            let word = framed.map_err(|_| SearchError::InvalidAlphabet { byte: b'*' })?;
            (word, units)
        }
        Alphabet::Dna => (codes.iter().map(|&c| c - 1).collect(), codes.len()),
    };

    // Already past the last column: terminal before the search starts, for
    // any seed; the graph position is never consulted.
    if start_state >= hmm.model_length() {
        let node_id = graph.index_of(&lookup).unwrap_or(-1);
        return Ok(pool.construct(root(
            NodeKey {
                node_id,
                state_no: start_state,
                kind: StateKind::Match,
            },
            0.0,
            0.0,
            units,
        )));
    }

    let node_id = graph.index_of(&lookup).ok_or(SearchError::SeedNotInGraph)?;
    let score = score_start(hmm, &word, start_state)?;
    let real_score = real_score_start(hmm, &word, start_state)?;
    Ok(pool.construct(root(
        NodeKey {
            node_id,
            state_no: start_state + units,
            kind: StateKind::Match,
        },
        score,
        real_score,
        units,
    )))
}

fn root(key: NodeKey, score: Score, real_score: Score, length: usize) -> AStarNode {
    AStarNode {
        key,
        fval: score,
        score,
        real_score,
        length,
        negative_count: 0,
        partial: false,
        emission: NuclEmission::EMPTY,
        discovered_from: None,
    }
}
