use thiserror::Error;

/// The ways an operation on a [`RoadGraph`](crate::RoadGraph) can be called with invalid Arguments.
///
/// Not finding a Path is not an Error: the searches return `Ok(None)` in that case.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A Location was used that was never added with [`add_vertex`](crate::RoadGraph::add_vertex)
    #[error("{location} has not been added to the graph")]
    UnknownVertex {
        /// the offending Location
        location: String,
    },
    /// An Edge length was negative, NaN or infinite
    #[error("edge length must be a non-negative number, got {length}")]
    InvalidLength {
        /// the rejected length
        length: f64,
    },
    /// Two Locations were expected to be joined by an Edge, but aren't
    #[error("there is no edge from {from} to {to}")]
    MissingEdge {
        /// start of the missing Edge
        from: String,
        /// end of the missing Edge
        to: String,
    },
}

impl GraphError {
    pub(crate) fn unknown_vertex(location: &impl std::fmt::Debug) -> GraphError {
        GraphError::UnknownVertex {
            location: format!("{:?}", location),
        }
    }

    pub(crate) fn missing_edge(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> GraphError {
        GraphError::MissingEdge {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}
