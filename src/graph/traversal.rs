//! Breadth-first reachability over the graph's seen flags.

use std::collections::VecDeque;

use crate::types::{MapError, MapResult};

use super::CityGraph;

/// Is `destination` reachable from `origin` along directed edges?
///
/// Expects every seen flag to be clear on entry. Nodes are marked seen before
/// they are enqueued, so each reachable node is queued once. The flags are
/// left set on return; call [`CityGraph::reset_seen`] before the next search.
pub fn bfs_is_reachable(
    graph: &mut CityGraph,
    origin: usize,
    destination: usize,
) -> MapResult<bool> {
    if graph.node(destination).is_none() {
        return Err(MapError::NodeNotFound(destination));
    }
    mark_reachable(graph, origin, |_| {})?;
    Ok(graph.node_is_seen(destination))
}

/// Every node reachable from `origin`, origin first, in BFS discovery order.
///
/// Same flag contract as [`bfs_is_reachable`].
pub fn bfs_reachable_set(graph: &mut CityGraph, origin: usize) -> MapResult<Vec<usize>> {
    let mut order = Vec::new();
    mark_reachable(graph, origin, |index| order.push(index))?;
    Ok(order)
}

fn mark_reachable(
    graph: &mut CityGraph,
    origin: usize,
    mut on_visit: impl FnMut(usize),
) -> MapResult<()> {
    graph.set_seen(origin, true)?;
    on_visit(origin);

    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(origin);

    while let Some(current) = queue.pop_front() {
        // Indices are copied out so the flags can be written while iterating.
        let neighbours: Vec<usize> = graph.neighbours(current)?.iter().copied().collect();
        for neighbour in neighbours {
            if graph.node_is_seen(neighbour) {
                continue;
            }
            graph.set_seen(neighbour, true)?;
            on_visit(neighbour);
            queue.push_back(neighbour);
        }
    }

    Ok(())
}
