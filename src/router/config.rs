/// How the greedy Router measures the Distance to a candidate Destination
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RouteScoring {
    /// Sum of the straight-line Distances between consecutive Locations of the A* route.
    ///
    /// This is not the metric A* optimized, but it is what routes have always been ranked by.
    #[default]
    StraightLine,
    /// Sum of the lengths of the Roads along the A* route
    RoadLength,
}

/// Options for configuring the [`GreedyRouter`](crate::GreedyRouter)
///
/// Default options:
/// ```
/// # use road_graph::{RouterConfig, RouteScoring};
/// assert_eq!(
///     RouterConfig {
///         scoring: RouteScoring::StraightLine,
///         return_to_origin: true,
///         require_reachable: false,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouterConfig {
    /// How candidate Destinations are ranked (defaults to [`RouteScoring::StraightLine`])
    pub scoring: RouteScoring,
    /// `true` (default): the route ends where it started.
    ///
    /// `false`: the route ends at the last Destination.
    pub return_to_origin: bool,
    /// `false` (default): Destinations that cannot be reached from any later stop are still
    /// appended, in the order they were added.
    ///
    /// `true`: building the route fails with
    /// [`RouteError::UnreachableDestination`](crate::RouteError::UnreachableDestination) instead.
    pub require_reachable: bool,
}

impl RouterConfig {
    /// The default behaviour, spelled out
    pub const COMPATIBLE: RouterConfig = RouterConfig {
        scoring: RouteScoring::StraightLine,
        return_to_origin: true,
        require_reachable: false,
    };
    /// Ranks Destinations by the same Road lengths that A* minimizes
    ///
    /// Values:
    /// ```
    /// # use road_graph::{RouterConfig, RouteScoring};
    /// assert_eq!(
    ///     RouterConfig {
    ///         scoring: RouteScoring::RoadLength,
    ///         return_to_origin: true,
    ///         require_reachable: false,
    ///     },
    ///     RouterConfig::ROAD_LENGTH
    /// );
    /// ```
    pub const ROAD_LENGTH: RouterConfig = RouterConfig {
        scoring: RouteScoring::RoadLength,
        return_to_origin: true,
        require_reachable: false,
    };
}

impl Default for RouterConfig {
    fn default() -> RouterConfig {
        RouterConfig::COMPATIBLE
    }
}
