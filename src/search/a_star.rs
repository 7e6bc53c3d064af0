use super::{walk_back, Heuristic, HeuristicElement, SearchOutcome};
use crate::graph::{EdgeKey, NodeID, NodeIDMap, NodeIDSet, RoadGraph};
use crate::utils::{start_timer, trace};
use crate::{GraphError, Location, Path};

use std::collections::BinaryHeap;

/// Expands the frontier from `start` in order of `distance + heuristic` until `goal` is closed.
///
/// With [`Heuristic::Zero`] this is Dijkstra's Algorithm, with [`Heuristic::StraightLine`] it is
/// A*. Nodes are closed the first time they are popped; later entries for a closed Node are
/// skipped. A Neighbor is only pushed again if the new distance is strictly shorter.
///
/// `on_discover` is called with a Location every time its distance is improved.
///
/// ## Errors
/// [`GraphError::MissingEdge`] if a Node lists a Neighbor without a matching Edge.
pub(crate) fn weighted_search<P: Location>(
    graph: &RoadGraph<P>,
    start: NodeID,
    goal: NodeID,
    heuristic: Heuristic,
    mut on_discover: impl FnMut(P),
) -> Result<SearchOutcome<P>, GraphError> {
    start_timer!(timer);
    let nodes = graph.nodes();
    let goal_location = nodes[goal].location();
    trace!(
        "{:?} search from {:?} to {:?}",
        heuristic,
        nodes[start].location(),
        goal_location
    );

    // distance and predecessor of every discovered Node
    let mut known: NodeIDMap<(f64, NodeID)> = NodeIDMap::default();
    let mut closed = NodeIDSet::default();
    let mut visited = vec![];
    let mut next = BinaryHeap::new();
    let mut sequence = 0;

    known.insert(start, (0.0, start));
    next.push(HeuristicElement(start, 0.0, 0.0, sequence));

    let mut found = false;
    while let Some(HeuristicElement(current_id, current_cost, _, _)) = next.pop() {
        if !closed.insert(current_id) {
            continue;
        }
        visited.push(current_id);
        if current_id == goal {
            found = true;
            break;
        }

        let current = &nodes[current_id];
        for &other_id in current.outgoing_neighbors() {
            if closed.contains(&other_id) {
                continue;
            }
            let other = &nodes[other_id];
            let edge = graph
                .edge_by_key(EdgeKey::new(current_id, other_id))
                .ok_or_else(|| GraphError::missing_edge(&current.location(), &other.location()))?;
            let other_cost = current_cost + edge.length();

            let mut needs_visit = true;
            if let Some((prev_cost, prev_id)) = known.get_mut(&other_id) {
                if *prev_cost > other_cost {
                    *prev_cost = other_cost;
                    *prev_id = current_id;
                } else {
                    needs_visit = false;
                }
            } else {
                known.insert(other_id, (other_cost, current_id));
            }

            if needs_visit {
                let location = other.location();
                let priority = other_cost + heuristic.estimate(&location, &goal_location);
                sequence += 1;
                next.push(HeuristicElement(other_id, other_cost, priority, sequence));
                on_discover(location);
            }
        }
    }

    trace!(
        "{:?} search closed {} nodes in {:?}, goal reached: {}",
        heuristic,
        visited.len(),
        timer.elapsed(),
        found
    );

    let path = if found {
        let steps = walk_back(start, goal, |id| known[&id].1);
        let locations = steps.into_iter().map(|id| nodes[id].location()).collect();
        Some(Path::new(locations, known[&goal].0))
    } else {
        None
    };

    Ok(SearchOutcome { path, visited })
}
