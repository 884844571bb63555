//! Line classification and record parsing for map files.

use crate::types::{MapError, MapResult, Record, COMMENT_MARKER};

/// What a single map line contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only.
    Blank,
    /// First non-whitespace character is `#`.
    Comment,
    /// Leading count/metadata line (first character is a digit).
    Count,
    /// Anything else; must parse as a record.
    Record,
}

/// True if the line contains only whitespace.
pub fn line_is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// True if the first non-whitespace character is the comment marker.
pub fn line_is_comment(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_MARKER)
}

/// True if the very first character is a decimal digit.
pub fn line_is_count(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Decide how a line should be treated by the reader.
pub fn classify_line(line: &str) -> LineKind {
    if line_is_blank(line) {
        LineKind::Blank
    } else if line_is_comment(line) {
        LineKind::Comment
    } else if line_is_count(line) {
        LineKind::Count
    } else {
        LineKind::Record
    }
}

/// Strip an inline comment: everything from the first `#` onward.
pub fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse one record line into an origin/destination pair.
///
/// The line is cut at the first `#`, then split on whitespace runs. The first
/// two tokens become the record; anything after them is ignored. Fewer than
/// two tokens is a [`MapError::MalformedRecord`] reported against `line_no`.
pub fn parse_record(line_no: usize, line: &str) -> MapResult<Record> {
    let mut tokens = strip_comment(line).split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(origin), Some(destination)) => Ok(Record::new(origin, destination)),
        _ => Err(MapError::MalformedRecord {
            line: line_no,
            content: line.trim_end().to_string(),
        }),
    }
}
