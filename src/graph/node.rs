use super::NodeID;
use crate::Location;

/// An Intersection of the Road Network.
///
/// A Node only knows its own Location and the Nodes that can be reached from it in a single step.
/// Search state like distances or predecessors is kept by the search itself.
#[derive(Clone, Debug)]
pub struct RoadNode<P: Location> {
    id: NodeID,
    location: P,
    outgoing: Vec<NodeID>,
}

impl<P: Location> RoadNode<P> {
    pub(crate) fn new(id: NodeID, location: P) -> RoadNode<P> {
        RoadNode {
            id,
            location,
            outgoing: Vec::new(),
        }
    }

    /// The ID of this Node within its Graph
    pub fn id(&self) -> NodeID {
        self.id
    }

    /// The Location of this Intersection
    pub fn location(&self) -> P {
        self.location
    }

    /// The Nodes that can be reached from here, in the order their Edges were added.
    ///
    /// A Node shows up several times if more than one Edge towards it was added.
    pub fn outgoing_neighbors(&self) -> &[NodeID] {
        &self.outgoing
    }

    pub(crate) fn add_outgoing_neighbor(&mut self, neighbor: NodeID) {
        self.outgoing.push(neighbor);
    }
}
