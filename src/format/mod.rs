//! Plain-text map file input.

pub mod parser;
pub mod reader;

pub use parser::{classify_line, parse_record, strip_comment, LineKind};
pub use reader::{read_line_lossy, MapReader};
