//! Best-successor cache shared across seed searches.

use crate::node::NodeKey;
use crate::prelude::*;
use std::sync::RwLock;

/// Map from a parent's identity to the best child observed from it on any
/// completed path of any seed. Hints steer successor order; they never
/// change which successors are legal, so a stale read is harmless.
///
/// Writes happen only during emission and are serialized by the lock; the
/// search only takes shared read guards. Stored values are identity copies,
/// never arena handles, so the cache outlives every pool.
#[derive(Default)]
pub struct TransitionCache {
    map: RwLock<HashMap<NodeKey, NodeKey>>,
}

impl TransitionCache {
    pub fn new() -> TransitionCache {
        TransitionCache::default()
    }

    /// The cached best child of `key`, if any seed has completed through it.
    pub fn hint(&self, key: &NodeKey) -> Option<NodeKey> {
        self.map.read().unwrap().get(key).copied()
    }

    pub fn insert(&self, parent: NodeKey, child: NodeKey) {
        self.map.write().unwrap().insert(parent, child);
    }

    pub fn len(&self) -> usize {
        self.map.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
