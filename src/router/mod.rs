//! Visiting several Destinations in one round trip

mod config;
pub use config::{RouteScoring, RouterConfig};

use crate::graph::{RoadEdge, RoadGraph};
use crate::search::Heuristic;
use crate::utils::debug;
use crate::{GraphError, Location, Path};

use thiserror::Error;

/// What the [`GreedyRouter`] needs from a Road Network.
///
/// [`RoadGraph`] is the provided implementation.
pub trait RouteOracle: Sync {
    /// The Locations of the Network
    type Location: Location;

    /// `true` if `location` is part of the Network
    fn contains(&self, location: &Self::Location) -> bool;

    /// The shortest route from `start` to `goal`, or `None` if there is none
    fn route_between(
        &self,
        start: Self::Location,
        goal: Self::Location,
    ) -> Result<Option<Path<Self::Location>>, GraphError>;

    /// The length of the Road from `from` to `to`, or `None` if there is no such Road
    fn edge_length(&self, from: &Self::Location, to: &Self::Location) -> Option<f64>;
}

impl<P: Location> RouteOracle for RoadGraph<P> {
    type Location = P;

    fn contains(&self, location: &P) -> bool {
        RoadGraph::contains(self, location)
    }

    /// Uses A*, without recording the closed Intersections
    fn route_between(&self, start: P, goal: P) -> Result<Option<Path<P>>, GraphError> {
        Ok(self.find_path(start, goal, Heuristic::StraightLine, |_| {})?.path)
    }

    fn edge_length(&self, from: &P, to: &P) -> Option<f64> {
        self.edge(from, to).map(RoadEdge::length)
    }
}

/// Errors of the [`GreedyRouter`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    /// An invalid Location or inconsistent route was passed to the Graph
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// [`build_greedy_route`](GreedyRouter::build_greedy_route) was called before
    /// [`add_origin`](GreedyRouter::add_origin)
    #[error("no origin has been added")]
    MissingOrigin,
    /// None of the Destinations left can be reached from the last stop
    #[error("none of the remaining destinations {remaining} can be reached from {from}")]
    UnreachableDestination {
        /// the last stop of the route so far
        from: String,
        /// the Destinations that were not visited
        remaining: String,
    },
}

/// Sums up the Distance along `route` according to `scoring`.
///
/// Every two consecutive Locations of `route` have to be joined by a Road, no matter how the
/// Distance is measured.
///
/// ## Errors
/// [`GraphError::MissingEdge`] if two consecutive Locations are not joined by a Road
pub fn route_length<G: RouteOracle>(
    graph: &G,
    route: &[G::Location],
    scoring: RouteScoring,
) -> Result<f64, GraphError> {
    let mut sum = 0.0;
    for pair in route.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let length = graph
            .edge_length(from, to)
            .ok_or_else(|| GraphError::missing_edge(from, to))?;
        sum += match scoring {
            RouteScoring::StraightLine => from.distance(to),
            RouteScoring::RoadLength => length,
        };
    }
    Ok(sum)
}

/// Builds a round trip from an Origin through a list of Destinations using the
/// nearest-neighbor heuristic.
///
/// Starting at the Origin, the route always continues with the closest Destination that was not
/// visited yet, then returns to the Origin. This is fast, but not the shortest possible round trip.
///
/// ## Examples
/// ```
/// use road_graph::prelude::*;
///
/// let points = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)].map(GeographicPoint::from);
/// let mut graph = RoadGraph::new();
/// for &point in &points {
///     graph.add_vertex(point);
/// }
/// for pair in points.windows(2) {
///     graph.add_edge(pair[0], pair[1], "residential", 1.0)?;
///     graph.add_edge(pair[1], pair[0], "residential", 1.0)?;
/// }
///
/// let mut router = GreedyRouter::new(&graph);
/// router.add_origin(points[0])?;
/// router.add_destination(points[3])?;
/// router.add_destination(points[1])?;
///
/// let route = router.build_greedy_route()?;
/// assert_eq!(route, &[points[0], points[1], points[3], points[0]]);
/// # Ok::<(), RouteError>(())
/// ```
#[derive(Debug)]
pub struct GreedyRouter<'g, G: RouteOracle> {
    graph: &'g G,
    config: RouterConfig,
    origin: Option<G::Location>,
    destinations: Vec<G::Location>,
    suggested_route: Vec<G::Location>,
}

impl<'g, G: RouteOracle> GreedyRouter<'g, G> {
    /// Creates a Router on `graph` with the default [`RouterConfig`]
    pub fn new(graph: &'g G) -> Self {
        GreedyRouter::with_config(graph, RouterConfig::default())
    }

    /// Creates a Router on `graph` with the given [`RouterConfig`]
    pub fn with_config(graph: &'g G, config: RouterConfig) -> Self {
        GreedyRouter {
            graph,
            config,
            origin: None,
            destinations: vec![],
            suggested_route: vec![],
        }
    }

    /// Sets where the route starts and ends, replacing any previous Origin.
    ///
    /// ## Errors
    /// [`GraphError::UnknownVertex`] if `origin` is not part of the Graph
    pub fn add_origin(&mut self, origin: G::Location) -> Result<(), RouteError> {
        if !self.graph.contains(&origin) {
            return Err(GraphError::unknown_vertex(&origin).into());
        }
        self.origin = Some(origin);
        Ok(())
    }

    /// Adds a Destination that has to be visited.
    ///
    /// Destinations are not deduplicated: a Destination added twice is visited twice.
    ///
    /// ## Errors
    /// [`GraphError::UnknownVertex`] if `destination` is not part of the Graph
    pub fn add_destination(&mut self, destination: G::Location) -> Result<(), RouteError> {
        if !self.graph.contains(&destination) {
            return Err(GraphError::unknown_vertex(&destination).into());
        }
        self.destinations.push(destination);
        Ok(())
    }

    /// The Origin, if one was added
    pub fn origin(&self) -> Option<G::Location> {
        self.origin
    }

    /// The Destinations, in the order they were added
    pub fn destinations(&self) -> &[G::Location] {
        &self.destinations
    }

    /// The config of this Router
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// The route produced by the last call to
    /// [`build_greedy_route`](GreedyRouter::build_greedy_route), or an empty slice
    pub fn suggested_route(&self) -> &[G::Location] {
        &self.suggested_route
    }

    /// Orders the Destinations into a round trip.
    ///
    /// The route starts at the Origin, then repeatedly moves on to the remaining Destination with
    /// the lowest score according to [`RouterConfig::scoring`], where the score is measured along
    /// the A* route from the current stop. Ties go to the Destination added first. Finally the
    /// Origin is appended again, unless [`RouterConfig::return_to_origin`] is `false`.
    ///
    /// Destinations that cannot be reached from the current stop are passed over as long as any
    /// other remaining Destination can be reached. Once none can, the next one in the order they
    /// were added is taken anyway, so the route still lists every Destination.
    ///
    /// Every copy of the Origin is left out of the Destinations. The route is rebuilt from scratch
    /// on each call and nothing is consumed, so calling this again returns the same route.
    ///
    /// ## Errors
    /// - [`RouteError::MissingOrigin`] if no Origin was added
    /// - [`RouteError::UnreachableDestination`] if [`RouterConfig::require_reachable`] is set and
    ///   at some stop none of the remaining Destinations can be reached
    pub fn build_greedy_route(&mut self) -> Result<&[G::Location], RouteError> {
        let origin = self.origin.ok_or(RouteError::MissingOrigin)?;

        let mut remaining: Vec<G::Location> = self
            .destinations
            .iter()
            .copied()
            .filter(|destination| *destination != origin)
            .collect();

        let mut route = Vec::with_capacity(remaining.len() + 2);
        route.push(origin);

        let mut current = origin;
        while !remaining.is_empty() {
            let index = match self.closest(current, &remaining)? {
                Some((index, _score)) => {
                    debug!(
                        "next stop after {:?}: {:?} (score {})",
                        current, remaining[index], _score
                    );
                    index
                }
                None if self.config.require_reachable => {
                    return Err(RouteError::UnreachableDestination {
                        from: format!("{:?}", current),
                        remaining: format!("{:?}", remaining),
                    });
                }
                None => {
                    debug!("none of {:?} can be reached from {:?}", remaining, current);
                    0
                }
            };
            let next = remaining.remove(index);

            route.push(next);
            current = next;
        }

        if self.config.return_to_origin {
            route.push(origin);
        }
        self.suggested_route = route;
        Ok(&self.suggested_route)
    }

    /// The index and score of the best candidate reachable from `from`
    fn closest(
        &self,
        from: G::Location,
        candidates: &[G::Location],
    ) -> Result<Option<(usize, f64)>, RouteError> {
        #[cfg(feature = "parallel")]
        let scores = self.scores_parallel(from, candidates)?;
        #[cfg(not(feature = "parallel"))]
        let scores = self.scores_sequential(from, candidates)?;

        let mut best: Option<(usize, f64)> = None;
        for (index, score) in scores.into_iter().enumerate() {
            let Some(score) = score else {
                continue;
            };
            if best.map_or(true, |(_, best_score)| score < best_score) {
                best = Some((index, score));
            }
        }
        Ok(best)
    }

    #[cfg(feature = "parallel")]
    fn scores_parallel(
        &self,
        from: G::Location,
        candidates: &[G::Location],
    ) -> Result<Vec<Option<f64>>, RouteError> {
        use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
        candidates
            .par_iter()
            .map(|&to| self.score(from, to))
            .collect()
    }

    #[cfg(any(test, not(feature = "parallel")))]
    fn scores_sequential(
        &self,
        from: G::Location,
        candidates: &[G::Location],
    ) -> Result<Vec<Option<f64>>, RouteError> {
        candidates.iter().map(|&to| self.score(from, to)).collect()
    }

    fn score(&self, from: G::Location, to: G::Location) -> Result<Option<f64>, RouteError> {
        match self.graph.route_between(from, to)? {
            Some(path) => Ok(Some(route_length(self.graph, &path, self.config.scoring)?)),
            None => Ok(None),
        }
    }
}
