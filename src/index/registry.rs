//! Unique-city extraction: the deduplicated identifier set of a map.

use std::collections::HashSet;

use crate::types::Record;

/// Distinct identifiers seen across a set of records, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct CityRegistry {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl CityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from records, scanning each origin before its destination.
    pub fn from_records(records: &[Record]) -> Self {
        let mut registry = Self::new();
        for record in records {
            registry.register(&record.origin);
            registry.register(&record.destination);
        }
        registry
    }

    /// Add an identifier if it has not been seen. Returns true if it was new.
    pub fn register(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        self.names.push(name.to_string());
        true
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if no identifiers were registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// All identifiers in first-seen order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate identifiers in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
