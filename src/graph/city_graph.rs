//! Core graph structure: fixed-capacity nodes with head-inserted adjacency lists.

use std::collections::VecDeque;

use crate::types::{MapError, MapResult};

/// One location in the graph.
#[derive(Debug, Clone)]
pub struct CityNode {
    name: String,
    index: usize,
    /// Outgoing neighbours, most recently inserted first.
    neighbours: VecDeque<usize>,
    seen: bool,
}

impl CityNode {
    /// The identifier this node was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insertion index within the graph.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Outgoing neighbour indices in iteration order.
    pub fn neighbours(&self) -> &VecDeque<usize> {
        &self.neighbours
    }

    /// Current value of the traversal flag.
    pub fn is_seen(&self) -> bool {
        self.seen
    }
}

/// A directed graph of named cities with a capacity fixed at construction.
///
/// Nodes are addressed by their insertion index. Each node carries a `seen`
/// flag that the reachability search sets and the caller clears with
/// [`CityGraph::reset_seen`] between queries.
#[derive(Debug, Clone, Default)]
pub struct CityGraph {
    nodes: Vec<CityNode>,
    capacity: usize,
}

impl CityGraph {
    /// Create an empty graph that can hold up to `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Declared maximum number of nodes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of nodes inserted so far.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of stored edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.neighbours.len()).sum()
    }

    /// True if no nodes have been inserted.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True if at least one node has an outgoing edge.
    pub fn has_edges(&self) -> bool {
        self.nodes.iter().any(|n| !n.neighbours.is_empty())
    }

    /// Insert a new node and return its index.
    pub fn insert_node(&mut self, name: &str) -> MapResult<usize> {
        if self.nodes.len() >= self.capacity {
            return Err(MapError::CapacityExceeded(self.capacity));
        }
        if self.find_index(name).is_some() {
            return Err(MapError::DuplicateCity(name.to_string()));
        }

        let index = self.nodes.len();
        self.nodes.push(CityNode {
            name: name.to_string(),
            index,
            neighbours: VecDeque::new(),
            seen: false,
        });
        Ok(index)
    }

    /// Find a node by identifier (linear scan).
    pub fn find_node(&self, name: &str) -> Option<&CityNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Find a node's index by identifier.
    pub fn find_index(&self, name: &str) -> Option<usize> {
        self.find_node(name).map(CityNode::index)
    }

    /// Get a node by index.
    pub fn node(&self, index: usize) -> Option<&CityNode> {
        self.nodes.get(index)
    }

    /// All nodes in index order.
    pub fn nodes(&self) -> &[CityNode] {
        &self.nodes
    }

    /// Add a directed edge `origin -> destination`.
    ///
    /// The destination goes to the head of the origin's neighbour list, so
    /// neighbours are iterated in reverse insertion order. Duplicate edges
    /// are kept.
    pub fn insert_edge(&mut self, origin: usize, destination: usize) -> MapResult<()> {
        if destination >= self.nodes.len() {
            return Err(MapError::NodeNotFound(destination));
        }
        let node = self
            .nodes
            .get_mut(origin)
            .ok_or(MapError::NodeNotFound(origin))?;
        node.neighbours.push_front(destination);
        Ok(())
    }

    /// Outgoing neighbours of a node.
    pub fn neighbours(&self, index: usize) -> MapResult<&VecDeque<usize>> {
        self.node(index)
            .map(CityNode::neighbours)
            .ok_or(MapError::NodeNotFound(index))
    }

    /// Seen flag of a node. Unknown indices read as unseen.
    pub fn node_is_seen(&self, index: usize) -> bool {
        self.nodes.get(index).is_some_and(|n| n.seen)
    }

    /// Set the seen flag of a node.
    pub fn set_seen(&mut self, index: usize, seen: bool) -> MapResult<()> {
        let node = self
            .nodes
            .get_mut(index)
            .ok_or(MapError::NodeNotFound(index))?;
        node.seen = seen;
        Ok(())
    }

    /// Clear the seen flag on every node.
    pub fn reset_seen(&mut self) {
        for node in &mut self.nodes {
            node.seen = false;
        }
    }

    /// Release all node storage. Equivalent to dropping the graph.
    pub fn destroy(self) {
        log::debug!("Releasing graph with {} nodes", self.nodes.len());
    }
}
