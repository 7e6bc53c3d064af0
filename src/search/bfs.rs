use super::walk_back;
use crate::graph::{NodeID, NodeIDMap, NodeIDSet, RoadGraph};
use crate::utils::{start_timer, trace};
use crate::Location;

use std::collections::VecDeque;

/// Searches for the Path with the fewest Edges from `start` to `goal`.
///
/// Neighbors are enqueued in the order their Edges were added, which decides between several
/// Paths of the same length. `on_discover` is called with every newly discovered Location.
///
/// Returns the Nodes of the Path, `start` first, or `None` if `goal` is unreachable.
pub(crate) fn breadth_first_search<P: Location>(
    graph: &RoadGraph<P>,
    start: NodeID,
    goal: NodeID,
    mut on_discover: impl FnMut(P),
) -> Option<Vec<NodeID>> {
    start_timer!(timer);
    let nodes = graph.nodes();

    let mut predecessors = NodeIDMap::default();
    let mut visited = NodeIDSet::default();
    let mut next = VecDeque::new();
    next.push_back(start);
    visited.insert(start);

    let mut found = false;
    while let Some(current_id) = next.pop_front() {
        if current_id == goal {
            found = true;
            break;
        }
        for &other_id in nodes[current_id].outgoing_neighbors() {
            if visited.insert(other_id) {
                predecessors.insert(other_id, current_id);
                next.push_back(other_id);
                on_discover(nodes[other_id].location());
            }
        }
    }

    trace!(
        "bfs discovered {} nodes in {:?}, goal reached: {}",
        visited.len(),
        timer.elapsed(),
        found
    );

    if !found {
        return None;
    }
    Some(walk_back(start, goal, |id| predecessors[&id]))
}
