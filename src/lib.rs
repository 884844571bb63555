//! airmap — directed route maps with reachability queries.
//!
//! Reads a plain-text list of `origin destination` connections, builds a
//! directed graph of the distinct cities, and answers "is there a path from A
//! to B?" with a breadth-first search.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{QueryEngine, ReachResult, RouteAnswer};
pub use format::{LineKind, MapReader};
pub use graph::{
    bfs_is_reachable, bfs_reachable_set, CityGraph, CityNode, GraphBuilder, RouteMap,
};
pub use index::CityRegistry;
pub use types::{MapError, MapResult, Record, COMMENT_MARKER, QUIT_COMMAND};
