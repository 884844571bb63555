//! A loaded map: the static graph together with its identifier registry.

use std::path::Path;

use crate::format::MapReader;
use crate::index::CityRegistry;
use crate::types::MapResult;

use super::{CityGraph, GraphBuilder};

/// The graph built from a map file and the registry it was sized from.
#[derive(Debug, Clone, Default)]
pub struct RouteMap {
    graph: CityGraph,
    registry: CityRegistry,
}

impl RouteMap {
    /// Combine a populated graph with its registry.
    pub fn from_parts(graph: CityGraph, registry: CityRegistry) -> Self {
        Self { graph, registry }
    }

    /// Load a map file from disk.
    pub fn load(path: &Path) -> MapResult<Self> {
        let records = MapReader::read_from_file(path)?;
        GraphBuilder::from_records(records).build()
    }

    /// Load a map from in-memory text.
    pub fn parse(text: &str) -> MapResult<Self> {
        let records = MapReader::read_from_str(text)?;
        GraphBuilder::from_records(records).build()
    }

    /// The graph (immutable).
    pub fn graph(&self) -> &CityGraph {
        &self.graph
    }

    /// The graph (mutable), for searches and flag resets.
    pub fn graph_mut(&mut self) -> &mut CityGraph {
        &mut self.graph
    }

    /// The identifier registry.
    pub fn registry(&self) -> &CityRegistry {
        &self.registry
    }

    /// Number of distinct cities.
    pub fn city_count(&self) -> usize {
        self.registry.len()
    }
}
