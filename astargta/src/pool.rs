//! Append-only node storage for one seed search.

use crate::node::AStarNode;
use std::ops::{Index, IndexMut};

/// Handle to a node in the pool; valid until the next `clear`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodeRef(u32);

/// Owns every node discovered during one seed search. Nodes are only ever
/// appended; the whole pool is reset in one `clear` between seeds, so
/// parent references stay valid for the entire search and emission.
#[derive(Default)]
pub struct NodePool {
    nodes: Vec<AStarNode>,
}

impl NodePool {
    pub fn construct(&mut self, node: AStarNode) -> NodeRef {
        let r = NodeRef(self.nodes.len() as u32);
        self.nodes.push(node);
        r
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Index<NodeRef> for NodePool {
    type Output = AStarNode;

    #[inline]
    fn index(&self, r: NodeRef) -> &AStarNode {
        &self.nodes[r.0 as usize]
    }
}

impl IndexMut<NodeRef> for NodePool {
    #[inline]
    fn index_mut(&mut self, r: NodeRef) -> &mut AStarNode {
        &mut self.nodes[r.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeKey, NuclEmission, StateKind};

    fn node(state_no: usize) -> AStarNode {
        AStarNode {
            key: NodeKey {
                node_id: 7,
                state_no,
                kind: StateKind::Match,
            },
            fval: 0.0,
            score: 0.0,
            real_score: 0.0,
            length: 0,
            negative_count: 0,
            partial: false,
            emission: NuclEmission::EMPTY,
            discovered_from: None,
        }
    }

    #[test]
    fn construct_and_reset() {
        let mut pool = NodePool::default();
        let a = pool.construct(node(1));
        let b = pool.construct(node(2));
        assert_ne!(a, b);
        assert_eq!(pool[a].key.state_no, 1);
        assert_eq!(pool[b].key.state_no, 2);
        pool[b].partial = true;
        assert!(pool[b].partial);
        pool.clear();
        assert!(pool.is_empty());
        let c = pool.construct(node(3));
        assert_eq!(pool[c].key.state_no, 3);
    }
}
