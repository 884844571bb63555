//! Error types for the airmap library.

use thiserror::Error;

/// All errors that can occur while loading or querying a route map.
#[derive(Error, Debug)]
pub enum MapError {
    /// Record line without both an origin and a destination.
    #[error("Malformed record on line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },

    /// Query identifier that is not part of the map.
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// Node index outside the graph.
    #[error("Node index {0} not found")]
    NodeNotFound(usize),

    /// Identifier inserted into the graph twice.
    #[error("City {0} is already in the graph")]
    DuplicateCity(String),

    /// More nodes inserted than the graph was created for.
    #[error("Graph capacity of {0} nodes exceeded")]
    CapacityExceeded(usize),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for airmap operations.
pub type MapResult<T> = Result<T, MapError>;
