//! The Road Network and its queries

mod node_id;
pub use node_id::*;

mod node;
pub use node::RoadNode;

mod edge;
pub use edge::{EdgeKey, RoadEdge};

mod node_list;
use node_list::NodeList;

use crate::search::{a_star::weighted_search, bfs::breadth_first_search};
use crate::search::{Heuristic, SearchOutcome};
use crate::utils::debug;
use crate::{GraphError, Location, Path};

/// A directed, weighted Graph of Intersections and the Roads between them.
///
/// Intersections are identified by their [`Location`]. They are added with
/// [`add_vertex`](RoadGraph::add_vertex) and connected with [`add_edge`](RoadGraph::add_edge).
/// Nothing is ever removed.
///
/// ## Examples
/// ```
/// use road_graph::prelude::*;
///
/// let (a, b, c) = (
///     GeographicPoint::new(0.0, 0.0),
///     GeographicPoint::new(1.0, 0.0),
///     GeographicPoint::new(1.0, 1.0),
/// );
///
/// let mut graph = RoadGraph::new();
/// for location in [a, b, c] {
///     graph.add_vertex(location);
/// }
/// graph.add_edge(a, b, "residential", 1.0)?;
/// graph.add_edge(b, c, "residential", 1.0)?;
/// graph.add_edge(a, c, "track", 5.0)?;
///
/// // fewest Roads
/// let path = graph.bfs(a, c)?.unwrap();
/// assert_eq!(path, vec![a, c]);
///
/// // shortest Distance
/// let path = graph.dijkstra(a, c)?.unwrap();
/// assert_eq!(path, vec![a, b, c]);
/// assert_eq!(path.cost(), 2.0);
///
/// // there is no way back
/// assert_eq!(graph.a_star_search(c, a)?, None);
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RoadGraph<P: Location> {
    nodes: NodeList<P>,
    edges: hashbrown::HashMap<EdgeKey, RoadEdge>,
    visited: Vec<NodeID>,
}

impl<P: Location> Default for RoadGraph<P> {
    fn default() -> Self {
        RoadGraph::new()
    }
}

impl<P: Location> RoadGraph<P> {
    /// Creates an empty Graph
    pub fn new() -> RoadGraph<P> {
        RoadGraph {
            nodes: NodeList::new(),
            edges: hashbrown::HashMap::default(),
            visited: vec![],
        }
    }

    /// The number of Intersections in the Graph
    pub fn num_vertices(&self) -> usize {
        self.nodes.len()
    }

    /// The Locations of all Intersections, in no particular order
    pub fn vertices(&self) -> impl Iterator<Item = &P> + '_ {
        self.nodes.locations()
    }

    /// The number of Roads in the Graph.
    ///
    /// This counts every call to [`add_edge`](RoadGraph::add_edge) that succeeded, even if an
    /// Edge between the same two Intersections was replaced. See [`edges`](RoadGraph::edges) for
    /// the distinct Edges.
    pub fn num_edges(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| node.outgoing_neighbors().len())
            .sum()
    }

    /// `true` if there is an Intersection at `location`
    pub fn contains(&self, location: &P) -> bool {
        self.nodes.id_at(location).is_some()
    }

    /// The Intersection at `location`
    pub fn node(&self, location: &P) -> Option<&RoadNode<P>> {
        self.nodes.id_at(location).map(|id| &self.nodes[id])
    }

    /// The Intersection with the given ID
    pub fn node_by_id(&self, id: NodeID) -> Option<&RoadNode<P>> {
        self.nodes.get(id)
    }

    /// The Road from `from` to `to`, if there is one
    pub fn edge(&self, from: &P, to: &P) -> Option<&RoadEdge> {
        let key = EdgeKey::new(self.nodes.id_at(from)?, self.nodes.id_at(to)?);
        self.edges.get(&key)
    }

    /// All distinct Roads, in no particular order
    pub fn edges(&self) -> impl Iterator<Item = &RoadEdge> + '_ {
        self.edges.values()
    }

    /// Adds an Intersection at `location`.
    ///
    /// Returns `false` and leaves the Graph unchanged if `location` is already part of the Graph
    /// or not [valid](Location::is_valid).
    pub fn add_vertex(&mut self, location: P) -> bool {
        if !location.is_valid() {
            debug!("rejected invalid location {:?}", location);
            return false;
        }
        self.nodes.add_node(location).is_some()
    }

    /// Adds a directed Road from `from` to `to` with the given type and length (in km).
    ///
    /// Both Locations have to be added with [`add_vertex`](RoadGraph::add_vertex) first. An
    /// existing Road between the same two Intersections is replaced. No Road in the opposite
    /// direction is created.
    ///
    /// ## Errors
    /// - [`GraphError::InvalidLength`] if `length` is negative, NaN or infinite
    /// - [`GraphError::UnknownVertex`] if `from` or `to` is not part of the Graph
    pub fn add_edge(&mut self, from: P, to: P, road_type: &str, length: f64) -> Result<(), GraphError> {
        self.insert_edge(from, to, None, road_type, length)
    }

    /// Same as [`add_edge`](RoadGraph::add_edge), but also stores the name of the Road
    pub fn add_named_edge(
        &mut self,
        from: P,
        to: P,
        road_name: &str,
        road_type: &str,
        length: f64,
    ) -> Result<(), GraphError> {
        self.insert_edge(from, to, Some(road_name.to_owned()), road_type, length)
    }

    fn insert_edge(
        &mut self,
        from: P,
        to: P,
        road_name: Option<String>,
        road_type: &str,
        length: f64,
    ) -> Result<(), GraphError> {
        if !(length >= 0.0 && length.is_finite()) {
            debug!("rejected edge {:?} -> {:?} with length {}", from, to, length);
            return Err(GraphError::InvalidLength { length });
        }
        let key = EdgeKey::new(self.id_of(&from)?, self.id_of(&to)?);

        self.nodes[key.begin].add_outgoing_neighbor(key.end);
        self.edges.insert(
            key,
            RoadEdge {
                key,
                length,
                road_type: road_type.to_owned(),
                road_name,
            },
        );
        Ok(())
    }

    /// Finds the Path from `start` to `goal` with the fewest Roads.
    ///
    /// The cost of the returned Path is still the total length of its Roads.
    ///
    /// Returns `Ok(None)` if `goal` cannot be reached.
    ///
    /// ## Errors
    /// [`GraphError::UnknownVertex`] if `start` or `goal` is not part of the Graph
    pub fn bfs(&self, start: P, goal: P) -> Result<Option<Path<P>>, GraphError> {
        self.bfs_with(start, goal, |_| {})
    }

    /// Same as [`bfs`](RoadGraph::bfs), but calls `on_discover` with every Location the moment
    /// it is discovered.
    pub fn bfs_with(
        &self,
        start: P,
        goal: P,
        on_discover: impl FnMut(P),
    ) -> Result<Option<Path<P>>, GraphError> {
        let (start_id, goal_id) = (self.id_of(&start)?, self.id_of(&goal)?);

        let steps = match breadth_first_search(self, start_id, goal_id, on_discover) {
            Some(steps) => steps,
            None => return Ok(None),
        };

        let mut cost = 0.0;
        for pair in steps.windows(2) {
            let edge = self
                .edge_by_key(EdgeKey::new(pair[0], pair[1]))
                .ok_or_else(|| {
                    GraphError::missing_edge(&self.nodes[pair[0]].location(), &self.nodes[pair[1]].location())
                })?;
            cost += edge.length();
        }
        let locations = steps.into_iter().map(|id| self.nodes[id].location()).collect();
        Ok(Some(Path::new(locations, cost)))
    }

    /// Finds the shortest Path from `start` to `goal` using Dijkstra's Algorithm.
    ///
    /// Returns `Ok(None)` if `goal` cannot be reached. The Intersections closed during the search
    /// can be inspected afterwards with [`visited`](RoadGraph::visited).
    ///
    /// ## Errors
    /// [`GraphError::UnknownVertex`] if `start` or `goal` is not part of the Graph
    pub fn dijkstra(&mut self, start: P, goal: P) -> Result<Option<Path<P>>, GraphError> {
        self.dijkstra_with(start, goal, |_| {})
    }

    /// Same as [`dijkstra`](RoadGraph::dijkstra), but calls `on_discover` with a Location every
    /// time a shorter way to it is found.
    pub fn dijkstra_with(
        &mut self,
        start: P,
        goal: P,
        on_discover: impl FnMut(P),
    ) -> Result<Option<Path<P>>, GraphError> {
        self.recorded_search(start, goal, Heuristic::Zero, on_discover)
    }

    /// Finds the shortest Path from `start` to `goal` using A* with the straight-line
    /// [`distance`](Location::distance) to `goal` as the Heuristic.
    ///
    /// The Path has the same length as the one found by [`dijkstra`](RoadGraph::dijkstra) as
    /// long as no Road is shorter than the straight line between its ends.
    ///
    /// Returns `Ok(None)` if `goal` cannot be reached. The Intersections closed during the search
    /// can be inspected afterwards with [`visited`](RoadGraph::visited).
    ///
    /// ## Errors
    /// [`GraphError::UnknownVertex`] if `start` or `goal` is not part of the Graph
    pub fn a_star_search(&mut self, start: P, goal: P) -> Result<Option<Path<P>>, GraphError> {
        self.a_star_search_with(start, goal, |_| {})
    }

    /// Same as [`a_star_search`](RoadGraph::a_star_search), but calls `on_discover` with a
    /// Location every time a shorter way to it is found.
    pub fn a_star_search_with(
        &mut self,
        start: P,
        goal: P,
        on_discover: impl FnMut(P),
    ) -> Result<Option<Path<P>>, GraphError> {
        self.recorded_search(start, goal, Heuristic::StraightLine, on_discover)
    }

    /// Runs a weighted search without touching the Graph.
    ///
    /// This is what [`dijkstra`](RoadGraph::dijkstra) and
    /// [`a_star_search`](RoadGraph::a_star_search) use internally. Since all search state is
    /// owned by the call, any number of these may run at the same time.
    ///
    /// ## Errors
    /// - [`GraphError::UnknownVertex`] if `start` or `goal` is not part of the Graph
    /// - [`GraphError::MissingEdge`] if a Neighbor has no matching Edge
    pub fn find_path(
        &self,
        start: P,
        goal: P,
        heuristic: Heuristic,
        on_discover: impl FnMut(P),
    ) -> Result<SearchOutcome<P>, GraphError> {
        let (start_id, goal_id) = (self.id_of(&start)?, self.id_of(&goal)?);
        weighted_search(self, start_id, goal_id, heuristic, on_discover)
    }

    /// The Intersections closed by the most recent call to [`dijkstra`](RoadGraph::dijkstra) or
    /// [`a_star_search`](RoadGraph::a_star_search), in the order they were closed.
    ///
    /// [`bfs`](RoadGraph::bfs) and [`find_path`](RoadGraph::find_path) don't change this.
    pub fn visited(&self) -> impl Iterator<Item = &RoadNode<P>> + '_ {
        self.visited.iter().map(move |&id| &self.nodes[id])
    }

    fn recorded_search(
        &mut self,
        start: P,
        goal: P,
        heuristic: Heuristic,
        on_discover: impl FnMut(P),
    ) -> Result<Option<Path<P>>, GraphError> {
        let outcome = self.find_path(start, goal, heuristic, on_discover)?;
        self.visited = outcome.visited;
        Ok(outcome.path)
    }

    fn id_of(&self, location: &P) -> Result<NodeID, GraphError> {
        self.nodes
            .id_at(location)
            .ok_or_else(|| GraphError::unknown_vertex(location))
    }

    pub(crate) fn nodes(&self) -> &NodeList<P> {
        &self.nodes
    }

    pub(crate) fn edge_by_key(&self, key: EdgeKey) -> Option<&RoadEdge> {
        self.edges.get(&key)
    }
}
