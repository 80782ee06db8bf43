//! CSV quote parsing: header-mapped columns with a positional fallback.
//!
//! Real quote CSVs are inconsistently labelled — `body,author`,
//! `Quote,Speaker`, or no meaningful header at all. Column resolution tries
//! the known name pairs in a fixed priority order and then falls back to the
//! first two columns positionally. The looseness is intentional forgiveness:
//! a header that accidentally wins positionally is preferable to rejecting a
//! file a human can read at a glance.

use super::QuoteParser;
use crate::error::MemeForgeError;
use crate::quote::QuoteRecord;
use std::path::Path;
use tracing::{debug, warn};

/// Known `(body, author)` header pairs, in resolution priority order.
const COLUMN_PAIRS: [(&str, &str); 4] = [
    ("body", "author"),
    ("quote", "speaker"),
    ("body", "speaker"),
    ("quote", "author"),
];

/// Parser for `.csv` quote files with a header row.
pub(crate) struct CsvParser;

impl QuoteParser for CsvParser {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["csv"]
    }

    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>, MemeForgeError> {
        let parse_failure = |detail: String| MemeForgeError::ParseFailure {
            parser: "csv",
            path: path.to_path_buf(),
            detail,
        };

        // flexible: rows with the wrong field count are data to skip, not a
        // reason to abandon the file.
        let mut reader = ::csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| parse_failure(e.to_string()))?;

        let headers = reader
            .headers()
            .map_err(|e| parse_failure(e.to_string()))?
            .clone();
        let lowered: Vec<String> = headers.iter().map(|h| h.to_ascii_lowercase()).collect();

        let (body_idx, author_idx) = match resolve_columns(&lowered) {
            Some(indices) => indices,
            None => {
                debug!(path = %path.display(), "no named column pair, using positional fallback");
                (0, 1)
            }
        };

        let mut records = Vec::new();
        for row in reader.records() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    warn!(path = %path.display(), "skipping unreadable CSV row: {e}");
                    continue;
                }
            };
            // Short rows have no value at one of the indices: skip.
            let (Some(body), Some(author)) = (row.get(body_idx), row.get(author_idx)) else {
                continue;
            };
            if let Some(record) = QuoteRecord::new(body, author) {
                records.push(record);
            }
        }

        debug!(path = %path.display(), count = records.len(), "csv parse complete");
        Ok(records)
    }
}

/// Find `(body, author)` column indices from lowercased header names.
///
/// The first [`COLUMN_PAIRS`] entry whose two names both appear wins.
fn resolve_columns(lowered_headers: &[String]) -> Option<(usize, usize)> {
    for (body_name, author_name) in COLUMN_PAIRS {
        let body_idx = lowered_headers.iter().position(|h| h == body_name);
        let author_idx = lowered_headers.iter().position(|h| h == author_name);
        if let (Some(body_idx), Some(author_idx)) = (body_idx, author_idx) {
            return Some((body_idx, author_idx));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("create temp file");
        f.write_all(content.as_bytes()).expect("write fixture");
        f
    }

    fn owned(headers: &[&str]) -> Vec<String> {
        headers.iter().map(|h| h.to_string()).collect()
    }

    #[test]
    fn resolution_priority_order() {
        // body/author beats quote/speaker even when all four are present.
        let headers = owned(&["quote", "speaker", "body", "author"]);
        assert_eq!(resolve_columns(&headers), Some((2, 3)));
        // quote/speaker beats body/speaker.
        let headers = owned(&["body", "quote", "speaker"]);
        assert_eq!(resolve_columns(&headers), Some((1, 2)));
        // Mixed pair resolves when no full pair exists.
        let headers = owned(&["quote", "author"]);
        assert_eq!(resolve_columns(&headers), Some((0, 1)));
        assert_eq!(resolve_columns(&owned(&["foo", "bar"])), None);
    }

    #[test]
    fn named_columns_in_any_position() {
        let f = write_fixture("id,author,body\n1,Jobs,Stay hungry\n");
        let records = CsvParser.parse(f.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].body(), "Stay hungry");
        assert_eq!(records[0].author(), "Jobs");
    }

    #[test]
    fn quote_speaker_header() {
        let f = write_fixture("quote,speaker\nStay hungry,Jobs\n");
        let records = CsvParser.parse(f.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].body(), "Stay hungry");
        assert_eq!(records[0].author(), "Jobs");
    }

    #[test]
    fn header_matching_is_case_insensitive() {
        let f = write_fixture("Body,Author\nChase the ball,Dog\n");
        let records = CsvParser.parse(f.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].author(), "Dog");
    }

    #[test]
    fn positional_fallback_for_unnamed_columns() {
        let f = write_fixture("text,who,year\nNever settle,Jobs,2005\n");
        let records = CsvParser.parse(f.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].body(), "Never settle");
        assert_eq!(records[0].author(), "Jobs");
    }

    #[test]
    fn short_rows_are_skipped_not_fatal() {
        let f = write_fixture("body,author\nFirst,One\nonly-a-body\nThird,Three\n");
        let records = CsvParser.parse(f.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].author(), "One");
        assert_eq!(records[1].author(), "Three");
    }

    #[test]
    fn rows_with_empty_fields_are_skipped() {
        let f = write_fixture("body,author\n,NoBody\nNoAuthor,\nGood,Yes\n");
        let records = CsvParser.parse(f.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].body(), "Good");
    }

    #[test]
    fn unopenable_file_is_parse_failure() {
        let err = CsvParser.parse(Path::new("/no/such/quotes.csv")).unwrap_err();
        assert!(matches!(err, MemeForgeError::ParseFailure { parser: "csv", .. }));
    }
}
