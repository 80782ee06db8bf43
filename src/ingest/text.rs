//! Plain-text quote parsing: one `body - author` record per line.

use super::QuoteParser;
use crate::error::MemeForgeError;
use crate::quote::{split_quote_line, QuoteRecord};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parser for newline-delimited `.txt` quote files.
///
/// Lines that are blank or carry no separator are skipped silently — stray
/// headers and decorative rules are normal in hand-edited quote files. Only
/// an I/O failure on the file itself is an error, and it aborts the whole
/// parse: a half-read file would silently lose quotes.
pub(crate) struct TextParser;

impl QuoteParser for TextParser {
    fn name(&self) -> &'static str {
        "text"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["txt"]
    }

    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>, MemeForgeError> {
        let content = fs::read_to_string(path).map_err(|e| MemeForgeError::ParseFailure {
            parser: self.name(),
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;

        let records: Vec<QuoteRecord> = content.lines().filter_map(split_quote_line).collect();
        debug!(path = %path.display(), count = records.len(), "text parse complete");
        Ok(records)
    }
}
