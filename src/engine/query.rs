//! Query executor: validated reachability questions against a route map.

use serde::Serialize;

use crate::graph::traversal::{bfs_is_reachable, bfs_reachable_set};
use crate::graph::RouteMap;
use crate::types::{MapError, MapResult};

/// Result of a reachability query between two known cities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteAnswer {
    /// Where the query started.
    pub origin: String,
    /// Where the query was headed.
    pub destination: String,
    /// True if a directed path exists.
    pub connected: bool,
}

impl std::fmt::Display for RouteAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.connected {
            write!(f, "There is a path from {} to {}.", self.origin, self.destination)
        } else {
            write!(
                f,
                "There is no path from {} to {}.",
                self.origin, self.destination
            )
        }
    }
}

/// Result of a reachable-set query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReachResult {
    /// Where the search started.
    pub origin: String,
    /// Every reachable city, origin first, in BFS order.
    pub reachable: Vec<String>,
}

/// Answers queries against a route map.
///
/// Identifiers are checked against the map's registry before any search
/// runs, and the graph's seen flags are cleared after every search.
pub struct QueryEngine;

impl QueryEngine {
    /// Create a new query engine.
    pub fn new() -> Self {
        Self
    }

    /// Is there a directed path from `origin` to `destination`?
    ///
    /// Returns [`MapError::UnknownCity`] without touching the graph if either
    /// identifier is not in the map.
    pub fn is_connected(
        &self,
        map: &mut RouteMap,
        origin: &str,
        destination: &str,
    ) -> MapResult<RouteAnswer> {
        let from = self.resolve(map, origin)?;
        let to = self.resolve(map, destination)?;

        let graph = map.graph_mut();
        let result = bfs_is_reachable(graph, from, to);
        graph.reset_seen();
        let connected = result?;

        log::debug!("{} -> {}: connected={}", origin, destination, connected);
        Ok(RouteAnswer {
            origin: origin.to_string(),
            destination: destination.to_string(),
            connected,
        })
    }

    /// All cities reachable from `origin`, including itself.
    pub fn reachable_from(&self, map: &mut RouteMap, origin: &str) -> MapResult<ReachResult> {
        let from = self.resolve(map, origin)?;

        let graph = map.graph_mut();
        let result = bfs_reachable_set(graph, from);
        graph.reset_seen();
        let indices = result?;

        let graph = map.graph();
        let reachable = indices
            .into_iter()
            .filter_map(|i| graph.node(i).map(|n| n.name().to_string()))
            .collect();
        Ok(ReachResult {
            origin: origin.to_string(),
            reachable,
        })
    }

    fn resolve(&self, map: &RouteMap, name: &str) -> MapResult<usize> {
        if !map.registry().contains(name) {
            return Err(MapError::UnknownCity(name.to_string()));
        }
        map.graph()
            .find_index(name)
            .ok_or_else(|| MapError::UnknownCity(name.to_string()))
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}
