//! Reads map files into parsed records.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::types::{MapResult, Record};

use super::parser::{classify_line, parse_record, LineKind};

/// Reader for plain-text map files.
pub struct MapReader;

impl MapReader {
    /// Read a map file into its records.
    pub fn read_from_file(path: &Path) -> MapResult<Vec<Record>> {
        let file = File::open(path)?;
        log::debug!("Reading map from {}", path.display());
        Self::read_from(BufReader::new(file))
    }

    /// Read from any buffered reader into records, in file order.
    ///
    /// Blank, comment and count lines are skipped. The first malformed
    /// record aborts the read. Bytes that are not UTF-8 are kept as
    /// replacement characters inside the identifier.
    pub fn read_from(mut reader: impl BufRead) -> MapResult<Vec<Record>> {
        let mut records = Vec::new();
        let mut skipped = 0usize;
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        while let Some(line) = read_line_lossy(&mut reader, &mut buf)? {
            line_no += 1;
            match classify_line(&line) {
                LineKind::Record => records.push(parse_record(line_no, &line)?),
                LineKind::Blank | LineKind::Comment | LineKind::Count => skipped += 1,
            }
        }

        log::debug!(
            "Parsed {} records, skipped {} lines",
            records.len(),
            skipped
        );
        Ok(records)
    }

    /// Read records from an in-memory string.
    pub fn read_from_str(text: &str) -> MapResult<Vec<Record>> {
        Self::read_from(text.as_bytes())
    }
}

/// Read the next line without its terminator, decoding invalid UTF-8 lossily.
///
/// Returns `None` at end of input. `buf` is scratch space reused between calls.
pub fn read_line_lossy(
    reader: &mut impl BufRead,
    buf: &mut Vec<u8>,
) -> std::io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}
