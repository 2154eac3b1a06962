//! Best-first search over (graph node, model column, state kind) triples.

use std::collections::BinaryHeap;

use crate::cache::TransitionCache;
use crate::config::{exit_score, DEFAULT_HEURISTIC_PRUNING};
use crate::emit;
use crate::enumerator::NodeEnumerator;
use crate::error::SearchError;
use crate::node::{AStarNode, HeapEntry, NodeKey};
use crate::pool::{NodePool, NodeRef};
use crate::prelude::*;
use crate::seed;
use crate::stats::SearchStats;
use gta_graph::{DbGraph, Direction};
use gta_hmm::{Alphabet, ProfileHmm};
use gta_types::dna;

const D: bool = false;

/// One directed extension: the emitted flank, a value copy of the goal
/// node, whether the search fell short of a terminal column, and counters.
pub struct Extension {
    pub seq: Vec<u8>,
    pub goal: AStarNode,
    pub partial: bool,
    pub stats: SearchStats,
}

/// A finished contig for one seed.
pub struct Contig {
    pub left: Vec<u8>,
    pub seed: Vec<u8>,
    pub right: Vec<u8>,
}

impl Contig {
    /// FASTA record in the driver's naming scheme.
    pub fn fasta(&self, gene: &str, count: usize) -> String {
        format!(
            ">test_{gene}_contig_{}_contig_{}\n{}{}{}",
            2 * count,
            2 * count + 1,
            String::from_utf8_lossy(&self.left),
            String::from_utf8_lossy(&self.seed),
            String::from_utf8_lossy(&self.right),
        )
    }
}

/// The A* engine. Owns the per-seed arena and the open/closed bookkeeping;
/// all of it is reset between searches, so one engine serves any number of
/// seeds sequentially.
pub struct HmmGraphSearch {
    heuristic_pruning: u32,
    pool: NodePool,
    closed: HashSet<NodeKey>,
    open_index: HashMap<NodeKey, NodeRef>,
}

impl Default for HmmGraphSearch {
    fn default() -> HmmGraphSearch {
        HmmGraphSearch::new(DEFAULT_HEURISTIC_PRUNING)
    }
}

impl HmmGraphSearch {
    pub fn new(heuristic_pruning: u32) -> HmmGraphSearch {
        HmmGraphSearch {
            heuristic_pruning,
            pool: NodePool::default(),
            closed: HashSet::default(),
            open_index: HashMap::default(),
        }
    }

    /// Extend one seed rightward with the forward model and leftward with
    /// the reverse model, and assemble the contig. Stats cover both
    /// searches.
    pub fn assemble<G: DbGraph>(
        &mut self,
        forward_hmm: &ProfileHmm,
        reverse_hmm: &ProfileHmm,
        graph: &G,
        seed: &[u8],
        start_state: usize,
        cache: &TransitionCache,
    ) -> Result<(Contig, SearchStats), SearchError> {
        let right = self.extend(forward_hmm, graph, seed, start_state, Direction::Forward, cache)?;

        let units = seed.len()
            / match forward_hmm.alphabet() {
                Alphabet::Protein => 3,
                Alphabet::Dna => 1,
            };
        let l_start = reverse_hmm
            .model_length()
            .checked_sub(start_state + units)
            .ok_or(SearchError::ModelOutOfRange {
                state: start_state + units,
                model_length: reverse_hmm.model_length(),
            })?;
        let left = self.extend(reverse_hmm, graph, seed, l_start, Direction::Backward, cache)?;

        let mut stats = right.stats;
        stats += left.stats;
        Ok((
            Contig {
                left: left.seq,
                seed: seed.to_ascii_lowercase(),
                right: right.seq,
            },
            stats,
        ))
    }

    /// Run one directed search from a seed.
    pub fn extend<G: DbGraph>(
        &mut self,
        hmm: &ProfileHmm,
        graph: &G,
        seed: &[u8],
        start_state: usize,
        dir: Direction,
        cache: &TransitionCache,
    ) -> Result<Extension, SearchError> {
        let t_total = instant::Instant::now();
        self.pool.clear();
        let start = seed::starting_node(hmm, graph, &mut self.pool, seed, start_state, dir)?;

        let enumerator = NodeEnumerator::new(hmm, graph, dir);
        let mut stats = SearchStats {
            sample_size: 1,
            ..SearchStats::default()
        };
        let (goal, partial) = self.astar(hmm, &enumerator, start, cache, &mut stats)?;
        stats.timing.astar = t_total.elapsed().as_secs_f32();

        let t_trace = instant::Instant::now();
        let mut seq = emit::sequence_from_goal(&self.pool, goal, cache);
        if dir == Direction::Backward {
            seq = dna::revcomp_ascii(&seq);
        }
        stats.timing.traceback = t_trace.elapsed().as_secs_f32();
        stats.timing.total = t_total.elapsed().as_secs_f32();

        Ok(Extension {
            seq,
            goal: self.pool[goal],
            partial,
            stats,
        })
    }

    fn astar<G: DbGraph>(
        &mut self,
        hmm: &ProfileHmm,
        enumerator: &NodeEnumerator<G>,
        start: NodeRef,
        cache: &TransitionCache,
        stats: &mut SearchStats,
    ) -> Result<(NodeRef, bool), SearchError> {
        let model_length = hmm.model_length();
        if self.pool[start].key.state_no >= model_length {
            return Ok((start, false));
        }

        self.closed.clear();
        self.open_index.clear();
        let mut open = BinaryHeap::new();

        let hint = cache.hint(&self.pool[start].key);
        for child in enumerator.enumerate(&mut self.pool, start, hint) {
            stats.explored += 1;
            open.push(HeapEntry::of(&self.pool[child], child));
        }
        if open.is_empty() {
            return Err(SearchError::NoSuccessors);
        }

        let mut inter_goal = start;

        while let Some(entry) = open.pop() {
            // Stale entries left behind by decrease-key replacements.
            if self.closed.contains(&entry.key) {
                continue;
            }
            stats.expanded += 1;
            let curr = entry.node;

            if entry.key.state_no >= model_length {
                self.pool[curr].partial = false;
                if self.exit(curr) > self.exit(inter_goal) {
                    inter_goal = curr;
                }
                return Ok((emit::highest_score_ancestor(&self.pool, inter_goal), false));
            }

            self.closed.insert(entry.key);
            if self.exit(curr) > self.exit(inter_goal) {
                inter_goal = curr;
            }
            if D {
                println!(
                    "expand {:?} f={} real={} len={}",
                    entry.key, entry.fval, entry.real_score, entry.length
                );
            }

            let hint = cache.hint(&entry.key);
            for next_ref in enumerator.enumerate(&mut self.pool, curr, hint) {
                let next = self.pool[next_ref];
                debug_assert!(next.fval >= next.score);

                if self.heuristic_pruning > 0
                    && !((next.length < 5 || next.negative_count <= self.heuristic_pruning)
                        && next.real_score > 0.0)
                {
                    stats.pruned += 1;
                    continue;
                }

                // Decrease-key by lazy deletion: a replaced entry stays in
                // the heap and is discarded through the closed set when it
                // finally pops.
                let open_node = match self.open_index.get(&next.key) {
                    Some(&best) => {
                        stats.repeated += 1;
                        let replace = next.dominates(&self.pool[best]);
                        if replace {
                            stats.replaced += 1;
                        }
                        replace
                    }
                    None => true,
                };
                if open_node {
                    self.open_index.insert(next.key, next_ref);
                    stats.explored += 1;
                    open.push(HeapEntry::of(&next, next_ref));
                }
            }
        }

        self.pool[inter_goal].partial = true;
        Ok((emit::highest_score_ancestor(&self.pool, inter_goal), true))
    }

    #[inline]
    fn exit(&self, r: NodeRef) -> Score {
        let n = &self.pool[r];
        exit_score(n.real_score, n.length)
    }
}
