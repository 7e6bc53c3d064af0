//! The Points a [`RoadGraph`](crate::RoadGraph) is built from

use std::fmt::Debug;
use std::hash::{Hash, Hasher};

/// Defines what a Road Graph can use as the Position of an Intersection.
///
/// A Location identifies a Node in the Graph, so it has to be comparable and hashable, and it
/// provides the straight-line Distance used as the Heuristic of the A* search.
///
/// The Distance has to be non-negative and symmetric. For A* to return optimal Paths it must also
/// never be larger than the length of the Roads between two Locations.
///
/// [`GeographicPoint`] is the provided implementation.
pub trait Location: Copy + Eq + Hash + Debug + Send + Sync {
    /// The straight-line Distance between `self` and `other`
    fn distance(&self, other: &Self) -> f64;

    /// `false` if this Location cannot be part of a Graph.
    ///
    /// Invalid Locations are rejected by [`add_vertex`](crate::RoadGraph::add_vertex).
    fn is_valid(&self) -> bool {
        true
    }
}

/// A 2D coordinate of an Intersection.
///
/// `x` is the latitude and `y` the longitude in the usual map data, but the Distance between two
/// Points is simply the Euclidean one.
///
/// ## Examples
/// ```
/// use road_graph::{GeographicPoint, Location};
///
/// let a = GeographicPoint::new(1.0, 1.0);
/// let b = GeographicPoint::new(4.0, 5.0);
///
/// assert_eq!(a.distance(&b), 5.0);
/// assert_eq!(a, GeographicPoint::from((1.0, 1.0)));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GeographicPoint {
    /// the first coordinate (latitude)
    pub x: f64,
    /// the second coordinate (longitude)
    pub y: f64,
}

impl GeographicPoint {
    /// Creates a new Point
    pub const fn new(x: f64, y: f64) -> GeographicPoint {
        GeographicPoint { x, y }
    }

    // -0.0 and 0.0 are the same coordinate
    fn key(&self) -> (u64, u64) {
        ((self.x + 0.0).to_bits(), (self.y + 0.0).to_bits())
    }
}

impl Location for GeographicPoint {
    fn distance(&self, other: &GeographicPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl PartialEq for GeographicPoint {
    fn eq(&self, other: &GeographicPoint) -> bool {
        self.key() == other.key()
    }
}
impl Eq for GeographicPoint {}

impl Hash for GeographicPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state)
    }
}

impl From<(f64, f64)> for GeographicPoint {
    fn from((x, y): (f64, f64)) -> GeographicPoint {
        GeographicPoint::new(x, y)
    }
}

use std::fmt;
impl fmt::Display for GeographicPoint {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;

    #[test]
    fn negative_zero() {
        let a = GeographicPoint::new(0.0, 1.0);
        let b = GeographicPoint::new(-0.0, 1.0);
        assert_eq!(a, b);

        let set: HashSet<GeographicPoint> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn validity() {
        assert!(GeographicPoint::new(32.8, -117.2).is_valid());
        assert!(!GeographicPoint::new(f64::NAN, 0.0).is_valid());
        assert!(!GeographicPoint::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(&format!("{}", GeographicPoint::new(6.5, 0.0)), "(6.5, 0)");
    }
}
