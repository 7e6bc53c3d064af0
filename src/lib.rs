#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find Paths through a directed, weighted Road Network.
//!
//! ## Introduction
//! A [`RoadGraph`] stores Intersections, identified by their [`Location`], and the directed Roads
//! between them, each with a length and a type. Roads that can be used in both directions are
//! simply added twice.
//!
//! Paths between two Intersections can be searched in three ways:
//! - [`bfs`](RoadGraph::bfs) finds the Path with the fewest Roads, ignoring their lengths
//! - [`dijkstra`](RoadGraph::dijkstra) finds the shortest Path
//! - [`a_star_search`](RoadGraph::a_star_search) also finds the shortest Path, but uses the
//!   straight-line Distance to the goal to look at far fewer Intersections on the way
//!
//! Dijkstra and A* are the same frontier expansion, differing only in the [`Heuristic`] that
//! orders the frontier.
//!
//! On top of that, the [`GreedyRouter`] plans a round trip from an Origin through several
//! Destinations, using A* to pick the nearest unvisited Destination at every stop.
//!
//! ## Examples
//! Building a Graph:
//! ```
//! use road_graph::prelude::*;
//!
//! //  (1,1) --3-- (4,1) --1-- (5,1)
//! //                |           |
//! //               1.5          2
//! //                |           |
//! //              (4,0) --3-- (6.5,0)
//! let points = [(1.0, 1.0), (4.0, 1.0), (5.0, 1.0), (4.0, 0.0), (6.5, 0.0)]
//!     .map(GeographicPoint::from);
//! let [a, b, c, d, e] = points;
//!
//! let mut graph = RoadGraph::new();
//! for point in points {
//!     assert!(graph.add_vertex(point));
//! }
//! for (from, to, length) in [(a, b, 3.0), (b, c, 1.0), (b, d, 1.5), (c, e, 2.0), (d, e, 3.0)] {
//!     graph.add_edge(from, to, "residential", length)?;
//!     graph.add_edge(to, from, "residential", length)?;
//! }
//!
//! assert_eq!(graph.num_vertices(), 5);
//! assert_eq!(graph.num_edges(), 10);
//! # Ok::<(), GraphError>(())
//! ```
//!
//! ### Pathfinding
//! ```
//! # use road_graph::prelude::*;
//! # let points = [(1.0, 1.0), (4.0, 1.0), (5.0, 1.0), (4.0, 0.0), (6.5, 0.0)]
//! #     .map(GeographicPoint::from);
//! # let [a, b, c, d, e] = points;
//! # let mut graph = RoadGraph::new();
//! # for point in points {
//! #     graph.add_vertex(point);
//! # }
//! # for (from, to, length) in [(a, b, 3.0), (b, c, 1.0), (b, d, 1.5), (c, e, 2.0), (d, e, 3.0)] {
//! #     graph.add_edge(from, to, "residential", length)?;
//! #     graph.add_edge(to, from, "residential", length)?;
//! # }
//! // dijkstra returns Some(Path) if the goal can be reached
//! let path = graph.dijkstra(a, e)?.unwrap();
//! assert_eq!(path, vec![a, b, c, e]);
//! assert_eq!(path.cost(), 6.0);
//!
//! // A* finds a Path of the same length
//! let path = graph.a_star_search(a, e)?.unwrap();
//! assert_eq!(path.cost(), 6.0);
//!
//! // the Intersections A* closed on the way
//! let closed: Vec<GeographicPoint> = graph.visited().map(|node| node.location()).collect();
//! assert_eq!(closed, vec![a, b, c, e]);
//!
//! // asking for a Location that is not in the Graph is an Error
//! assert!(graph.bfs(a, GeographicPoint::new(0.0, 0.0)).is_err());
//! # Ok::<(), GraphError>(())
//! ```
//!
//! ### Configuration
//! The [`GreedyRouter`] takes a [`RouterConfig`] that decides how the nearest Destination is
//! measured and whether the route returns to the Origin.
//! ```
//! use road_graph::prelude::*;
//! # let graph = RoadGraph::<GeographicPoint>::new();
//!
//! let router = GreedyRouter::with_config(
//!     &graph,
//!     RouterConfig {
//!         return_to_origin: false,
//!         ..RouterConfig::ROAD_LENGTH
//!     },
//! );
//!
//! assert_eq!(router.config().scoring, RouteScoring::RoadLength);
//! ```
//!
//! ## Crate Features
//! - `parallel` (default): scores the candidate Destinations of each Router step in parallel
//!   using `rayon`.
//! - `log`: reports search statistics and Router decisions through the `log` crate.

mod utils;

mod error;
pub use self::error::GraphError;

mod location;
pub use self::location::{GeographicPoint, Location};

mod path;
pub use self::path::Path;

pub mod graph;
pub use self::graph::{RoadEdge, RoadGraph, RoadNode};

pub mod search;
pub use self::search::{Heuristic, SearchOutcome};

pub mod router;
pub use self::router::{GreedyRouter, RouteError, RouteOracle, RouteScoring, RouterConfig};

/// The most commonly used Types of this crate
pub mod prelude {
    pub use crate::{
        GeographicPoint, GraphError, GreedyRouter, Heuristic, Location, Path, RoadGraph,
        RouteError, RouteScoring, RouterConfig,
    };
}
