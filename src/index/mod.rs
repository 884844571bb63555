//! Lookup structures built from parsed records.

pub mod registry;

pub use registry::CityRegistry;
