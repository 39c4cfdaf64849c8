//! Public API for parsing record documents.

use std::io::BufRead;

use crate::ast::Document;
use crate::error::ParseError;
use crate::parser::builder::TreeBuilder;

/// Name given to documents when the caller has nothing better.
pub const DEFAULT_DOCUMENT_NAME: &str = "New Document";

/// Parse a record document from a line source.
///
/// The reader is taken by value and dropped before this function returns,
/// so the source is released on every exit path, success or failure.
/// Parsing halts at the first error; errors carry the 1-based line number
/// they occurred at.
pub fn parse<R: BufRead>(reader: R, name: impl Into<String>) -> Result<Document, ParseError> {
    let mut builder = TreeBuilder::new(name);
    for line in reader.lines() {
        let line = line.map_err(|source| ParseError::Io {
            line: builder.lines_fed() + 1,
            source,
        })?;
        builder.feed_line(&line)?;
    }
    Ok(builder.finish())
}

/// Parse a record document from an in-memory string.
pub fn parse_str(source: &str, name: impl Into<String>) -> Result<Document, ParseError> {
    parse(source.as_bytes(), name)
}
