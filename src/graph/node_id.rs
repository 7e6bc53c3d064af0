//! Identifiers of the Intersections in a [`RoadGraph`](crate::RoadGraph) and the maps the searches
//! keep their state in.

use std::hash::{BuildHasherDefault, Hasher};

/// The index of an Intersection in its [`RoadGraph`](crate::RoadGraph).
///
/// IDs are handed out in insertion order and stay valid for the lifetime of the Graph.
pub type NodeID = usize;

/// Per-search state keyed by [`NodeID`]
pub type NodeIDMap<V> = hashbrown::HashMap<NodeID, V, BuildHasherDefault<NodeIDHasher>>;
/// A set of [`NodeID`]s, e.g. the Intersections a search has closed
pub type NodeIDSet = hashbrown::HashSet<NodeID, BuildHasherDefault<NodeIDHasher>>;

/// Hashes a [`NodeID`] to itself.
///
/// IDs are dense indices, so they need no mixing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NodeIDHasher(u64);

impl Hasher for NodeIDHasher {
    fn write(&mut self, bytes: &[u8]) {
        // only reached for keys that are not a NodeID
        for &byte in bytes {
            self.0 = self.0.rotate_left(8) ^ u64::from(byte);
        }
    }

    fn write_usize(&mut self, id: NodeID) {
        self.0 = id as u64;
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::BuildHasher;

    #[test]
    fn map_and_set() {
        let mut map = NodeIDMap::default();
        map.insert(3, (1.5, 0));
        map.insert(7, (0.5, 3));
        assert_eq!(map[&3], (1.5, 0));
        assert_eq!(map.get(&4), None);

        let set: NodeIDSet = [1, 2, 2, 5].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&5));
    }

    #[test]
    fn identity() {
        let build = BuildHasherDefault::<NodeIDHasher>::default();
        assert_eq!(build.hash_one(42_usize), 42);
    }
}
