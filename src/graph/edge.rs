use super::NodeID;

/// The key of an Edge: the ordered pair of its begin and end Node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    /// where the Edge starts
    pub begin: NodeID,
    /// where the Edge ends
    pub end: NodeID,
}

impl EdgeKey {
    /// Creates the key of the Edge from `begin` to `end`
    pub fn new(begin: NodeID, end: NodeID) -> EdgeKey {
        EdgeKey { begin, end }
    }
}

/// A directed Road segment between two Intersections.
///
/// An Edge from A to B says nothing about the way back. Roads that can be used in both directions
/// are stored as two Edges.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadEdge {
    pub(crate) key: EdgeKey,
    pub(crate) length: f64,
    pub(crate) road_type: String,
    pub(crate) road_name: Option<String>,
}

impl RoadEdge {
    /// The Node this Edge starts at
    pub fn begin(&self) -> NodeID {
        self.key.begin
    }

    /// The Node this Edge leads to
    pub fn end(&self) -> NodeID {
        self.key.end
    }

    /// The length of the Road, in kilometers
    pub fn length(&self) -> f64 {
        self.length
    }

    /// What kind of Road this is (`"residential"`, `"primary"`, ...). Not used by any search.
    pub fn road_type(&self) -> &str {
        &self.road_type
    }

    /// The name of the Road, if the Edge was added with one
    pub fn road_name(&self) -> Option<&str> {
        self.road_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_ordered() {
        let key = EdgeKey::new(1, 2);
        assert_ne!(key, EdgeKey::new(2, 1));
        assert_eq!(key, EdgeKey { begin: 1, end: 2 });
    }
}
