//! All data types for the airmap library.

pub mod error;
pub mod record;

pub use error::{MapError, MapResult};
pub use record::Record;

/// Marker that starts a comment, either on its own line or after a record.
pub const COMMENT_MARKER: char = '#';

/// Query token that ends an interactive session.
pub const QUIT_COMMAND: &str = "quit";
