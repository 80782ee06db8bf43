//! Quote ingestion: one facade over four format-specific parsers.
//!
//! Each submodule parses exactly one file format into [`QuoteRecord`]s.
//! Keeping formats separate makes each independently testable and lets a
//! format grow its own recovery heuristics without touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! path ──▶ dispatch ──▶ text | csv | docx | pdf ──▶ Vec<QuoteRecord>
//!          (extension)   (format-specific parse + per-line recovery)
//! ```
//!
//! 1. [`parse`] — validate the file exists, pick a parser by extension
//! 2. [`text`]  — newline-delimited `body - author` lines
//! 3. [`csv`]   — header-mapped or positional tabular records
//! 4. [`docx`]  — paragraphs out of the OOXML zip container
//! 5. [`pdf`]   — line text via an external extraction tool
//!
//! Dispatch is deliberately dumb: first parser whose extension set contains
//! the file's extension wins, and a failure from the chosen parser is final.
//! Guessing a second format after a parse failure would turn one corrupt CSV
//! into a confusing cascade of four different error messages.

pub mod csv;
pub mod docx;
pub mod pdf;
pub mod text;

use crate::error::MemeForgeError;
use crate::quote::QuoteRecord;
use once_cell::sync::Lazy;
use std::path::Path;
use tracing::{debug, info};

/// A format-specific quote parser.
///
/// Implementations are stateless unit structs; the facade owns the only
/// instances, in [`PARSERS`].
pub(crate) trait QuoteParser: Send + Sync {
    /// Short identifier used in error messages and logs ("text", "csv", …).
    fn name(&self) -> &'static str;

    /// Lowercase extensions (without dot) this parser accepts.
    fn extensions(&self) -> &'static [&'static str];

    /// Parse the whole file into records.
    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>, MemeForgeError>;

    /// Whether this parser handles the given lowercase extension.
    fn matches(&self, extension: &str) -> bool {
        self.extensions().contains(&extension)
    }
}

/// The fixed parser table, in dispatch priority order.
///
/// Initialized once, never mutated, safe to share read-only across threads.
static PARSERS: Lazy<[&'static (dyn QuoteParser); 4]> = Lazy::new(|| {
    [
        &text::TextParser,
        &csv::CsvParser,
        &docx::DocxParser,
        &pdf::PdfParser,
    ]
});

/// Parse a quote file, dispatching to the parser matching its extension.
///
/// This is the single entry point for all callers — CLI, web handlers, and
/// tests alike.
///
/// # Errors
/// * [`MemeForgeError::NotFound`] — `path` does not reference an existing file
/// * [`MemeForgeError::UnsupportedFormat`] — no parser claims the extension
/// * Any classified failure from the selected parser; the facade never falls
///   through to a second parser, so a wrong guess surfaces as a hard error
///   naming the parser and path.
///
/// # Example
/// ```rust,no_run
/// let quotes = memeforge::parse("data/DogQuotes.csv")?;
/// for q in &quotes {
///     println!("{q}");
/// }
/// # Ok::<(), memeforge::MemeForgeError>(())
/// ```
pub fn parse(path: impl AsRef<Path>) -> Result<Vec<QuoteRecord>, MemeForgeError> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(MemeForgeError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .ok_or_else(|| MemeForgeError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

    for parser in PARSERS.iter() {
        if parser.matches(&extension) {
            debug!(parser = parser.name(), path = %path.display(), "dispatching parse");
            let records = parser.parse(path)?;
            info!(
                parser = parser.name(),
                path = %path.display(),
                count = records.len(),
                "parsed quote file"
            );
            return Ok(records);
        }
    }

    Err(MemeForgeError::UnsupportedFormat {
        path: path.to_path_buf(),
    })
}
