//! The Search Algorithms behind [`RoadGraph`](crate::RoadGraph)'s queries.
//!
//! - a breadth first search finds the Path with the fewest Edges
//! - a single weighted frontier expansion becomes Dijkstra's Algorithm with
//!   [`Heuristic::Zero`] and A* with [`Heuristic::StraightLine`]

pub(crate) mod a_star;
pub(crate) mod bfs;

use crate::graph::NodeID;
use crate::{Location, Path};
use std::cmp::Ordering;

/// The estimate of the remaining Distance to the goal that orders the frontier of a weighted search
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Always `0`, which turns the search into Dijkstra's Algorithm
    Zero,
    /// The [`distance`](Location::distance) between a Location and the goal, which makes the
    /// search A*
    StraightLine,
}

impl Heuristic {
    /// Estimates the remaining Distance from `location` to `goal`
    pub fn estimate<P: Location>(self, location: &P, goal: &P) -> f64 {
        match self {
            Heuristic::Zero => 0.0,
            Heuristic::StraightLine => location.distance(goal),
        }
    }
}

/// The result of a weighted search
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome<P> {
    /// the Path from start to goal, or `None` if the goal is unreachable
    pub path: Option<Path<P>>,
    /// the Nodes taken off the frontier, in the order they were closed
    pub visited: Vec<NodeID>,
}

/// An entry of the frontier: `(node, distance, priority, sequence)`.
///
/// The [`BinaryHeap`](std::collections::BinaryHeap) pops the lowest priority first; equal
/// priorities come out in the order they were pushed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HeuristicElement(pub NodeID, pub f64, pub f64, pub usize);

impl PartialEq for HeuristicElement {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for HeuristicElement {}
impl PartialOrd for HeuristicElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for HeuristicElement {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.2.total_cmp(&self.2).then_with(|| rhs.3.cmp(&self.3))
    }
}

/// Follows the predecessor links from `goal` back to `start`.
///
/// Returns the Nodes in walking order, `start` first.
pub(crate) fn walk_back(
    start: NodeID,
    goal: NodeID,
    predecessor: impl Fn(NodeID) -> NodeID,
) -> Vec<NodeID> {
    let mut steps = vec![];
    let mut current = goal;

    while current != start {
        steps.push(current);
        current = predecessor(current);
    }
    steps.push(start);
    steps.reverse();
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeographicPoint;
    use std::collections::BinaryHeap;

    #[test]
    fn lowest_priority_first() {
        let mut heap = BinaryHeap::new();
        heap.push(HeuristicElement(0, 0.0, 3.5, 0));
        heap.push(HeuristicElement(1, 0.0, 1.25, 1));
        heap.push(HeuristicElement(2, 0.0, 2.0, 2));

        let order: Vec<NodeID> = std::iter::from_fn(|| heap.pop()).map(|e| e.0).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn ties_in_push_order() {
        let mut heap = BinaryHeap::new();
        for (sequence, id) in [7, 3, 5].into_iter().enumerate() {
            heap.push(HeuristicElement(id, 1.0, 4.0, sequence));
        }

        let order: Vec<NodeID> = std::iter::from_fn(|| heap.pop()).map(|e| e.0).collect();
        assert_eq!(order, vec![7, 3, 5]);
    }

    #[test]
    fn walk_back_order() {
        // 4 -> 2 -> 9 -> 1
        let predecessor = |id| match id {
            1 => 9,
            9 => 2,
            2 => 4,
            _ => unreachable!(),
        };
        assert_eq!(walk_back(4, 1, predecessor), vec![4, 2, 9, 1]);
        assert_eq!(walk_back(4, 4, predecessor), vec![4]);
    }

    #[test]
    fn heuristics() {
        let a = GeographicPoint::new(0.0, 0.0);
        let b = GeographicPoint::new(3.0, 4.0);
        assert_eq!(Heuristic::Zero.estimate(&a, &b), 0.0);
        assert_eq!(Heuristic::StraightLine.estimate(&a, &b), 5.0);
    }
}
