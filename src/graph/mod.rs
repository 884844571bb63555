//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod city_graph;
pub mod route_map;
pub mod traversal;

pub use builder::GraphBuilder;
pub use city_graph::{CityGraph, CityNode};
pub use route_map::RouteMap;
pub use traversal::{bfs_is_reachable, bfs_reachable_set};
