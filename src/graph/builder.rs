//! Fluent API for building route maps from records.

use crate::index::CityRegistry;
use crate::types::{MapError, MapResult, Record};

use super::{CityGraph, RouteMap};

/// Collects records and populates a graph in two passes: nodes, then edges.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    records: Vec<Record>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from already parsed records.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Add a directed connection between two identifiers.
    pub fn route(&mut self, origin: &str, destination: &str) -> &mut Self {
        self.records.push(Record::new(origin, destination));
        self
    }

    /// Build the final RouteMap.
    pub fn build(self) -> MapResult<RouteMap> {
        let registry = CityRegistry::from_records(&self.records);
        let graph = populate(&registry, &self.records)?;
        log::info!(
            "Built graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(RouteMap::from_parts(graph, registry))
    }
}

/// Insert every registry name as a node, then every record as an edge.
pub fn populate(registry: &CityRegistry, records: &[Record]) -> MapResult<CityGraph> {
    let mut graph = CityGraph::with_capacity(registry.len());
    for name in registry.iter() {
        graph.insert_node(name)?;
    }

    for record in records {
        let origin = graph
            .find_index(&record.origin)
            .ok_or_else(|| MapError::UnknownCity(record.origin.clone()))?;
        let destination = graph
            .find_index(&record.destination)
            .ok_or_else(|| MapError::UnknownCity(record.destination.clone()))?;
        graph.insert_edge(origin, destination)?;
    }

    Ok(graph)
}
