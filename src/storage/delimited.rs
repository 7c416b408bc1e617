//! Semicolon-delimited record format
//!
//! One record per line, positional fields, no header and no escaping. A
//! field that contains the delimiter shifts the remaining fields and makes
//! the line unreadable.

use std::path::Path;

use crate::error::{LedgerError, LedgerResult};

/// Field separator used by both ledger files
pub const DELIMITER: char = ';';

/// A type stored as one delimited line
pub trait DelimitedRecord: Sized {
    /// Parse a record from the fields of one line
    fn from_fields(fields: &[&str]) -> Result<Self, String>;

    /// Fields of this record in file order
    fn to_fields(&self) -> Vec<String>;

    fn to_line(&self) -> String {
        self.to_fields().join(&DELIMITER.to_string())
    }
}

/// Parse every line, failing on the first malformed one
///
/// Line numbers in errors are 1-based.
pub fn parse_records<T: DelimitedRecord>(path: &Path, lines: &[String]) -> LedgerResult<Vec<T>> {
    let path_text = path.display().to_string();
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let fields: Vec<&str> = line.split(DELIMITER).collect();
            T::from_fields(&fields)
                .map_err(|reason| LedgerError::file_parse(&path_text, i + 1, reason))
        })
        .collect()
}
