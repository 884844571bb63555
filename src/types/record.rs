//! The parsed form of one map line.

use serde::Serialize;

/// One directed connection request: `origin -> destination`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Record {
    /// Identifier the connection leaves from.
    pub origin: String,
    /// Identifier the connection arrives at.
    pub destination: String,
}

impl Record {
    /// Create a record from two identifiers.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}
