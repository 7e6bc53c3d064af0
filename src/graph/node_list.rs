use super::{NodeID, RoadNode};
use crate::Location;

#[derive(Clone, Debug)]
pub(crate) struct NodeList<P: Location> {
    nodes: slab::Slab<RoadNode<P>>,
    pos_map: hashbrown::HashMap<P, NodeID>,
}

impl<P: Location> NodeList<P> {
    pub fn new() -> Self {
        Self {
            nodes: slab::Slab::default(),
            pos_map: hashbrown::HashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.pos_map.len()
    }

    /// Adds a Node at `location`, unless there already is one
    pub fn add_node(&mut self, location: P) -> Option<NodeID> {
        if self.pos_map.contains_key(&location) {
            return None;
        }
        let entry = self.nodes.vacant_entry();
        let id = entry.key();
        entry.insert(RoadNode::new(id, location));
        self.pos_map.insert(location, id);
        Some(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoadNode<P>> + '_ {
        self.nodes.iter().map(|(_, node)| node)
    }

    pub fn locations(&self) -> impl Iterator<Item = &P> + '_ {
        self.pos_map.keys()
    }

    pub fn id_at(&self, location: &P) -> Option<NodeID> {
        self.pos_map.get(location).copied()
    }

    pub fn get(&self, id: NodeID) -> Option<&RoadNode<P>> {
        self.nodes.get(id)
    }
}

use std::ops::{Index, IndexMut};
impl<P: Location> Index<NodeID> for NodeList<P> {
    type Output = RoadNode<P>;
    #[track_caller]
    fn index(&self, index: NodeID) -> &RoadNode<P> {
        &self.nodes[index]
    }
}
impl<P: Location> IndexMut<NodeID> for NodeList<P> {
    #[track_caller]
    fn index_mut(&mut self, index: NodeID) -> &mut RoadNode<P> {
        &mut self.nodes[index]
    }
}

#[test]
fn add_node() {
    use crate::GeographicPoint;

    let mut nodes = NodeList::new();
    let a = nodes.add_node(GeographicPoint::new(0.0, 0.0)).unwrap();
    let b = nodes.add_node(GeographicPoint::new(1.0, 1.0)).unwrap();
    assert_eq!(nodes.add_node(GeographicPoint::new(1.0, 1.0)), None);

    assert_eq!(nodes.len(), 2);
    assert_ne!(a, b);
    assert_eq!(nodes.id_at(&GeographicPoint::new(1.0, 1.0)), Some(b));
    assert_eq!(nodes[a].location(), GeographicPoint::new(0.0, 0.0));
    assert_eq!(nodes.get(42).map(RoadNode::id), None);
}
