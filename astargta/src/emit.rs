//! Back-walks from a goal: best-ancestor selection and sequence assembly.

use crate::cache::TransitionCache;
use crate::node::StateKind;
use crate::pool::{NodePool, NodeRef};
use gta_types::dna;

/// The ancestor of `from` (possibly `from` itself) with the largest real
/// score. The exit-score optimum may sit on a path that later drifted
/// negative; the reported goal backs up to the peak.
pub fn highest_score_ancestor(pool: &NodePool, from: NodeRef) -> NodeRef {
    let mut best = from;
    let mut cur = from;
    while let Some(parent) = pool[cur].discovered_from {
        cur = parent;
        if pool[cur].real_score > pool[best].real_score {
            best = cur;
        }
    }
    best
}

/// Assemble the nucleotides emitted between the root and `goal`, and
/// install every `(parent -> child)` edge of the walked path into the
/// cache. Delete nodes contribute nothing.
pub fn sequence_from_goal(pool: &NodePool, goal: NodeRef, cache: &TransitionCache) -> Vec<u8> {
    let mut seq = Vec::new();
    let mut cur = goal;
    while let Some(parent) = pool[cur].discovered_from {
        let node = &pool[cur];
        if node.key.kind != StateKind::Delete {
            // Per-node emissions go in back-to-front; the single reversal
            // below restores path order.
            for code in node.emission.bases().rev() {
                seq.push(dna::to_char(code));
            }
        }
        cache.insert(pool[parent].key, node.key);
        cur = parent;
    }
    seq.reverse();
    seq
}
