//! The quote record and the separator rule shared by the line-oriented parsers.
//!
//! A quote file in the wild is a loose thing: `Chase the ball - Dog`,
//! `"Stay hungry" - Jobs`, or an author glued on with a bare hyphen. The
//! text, docx, and pdf parsers all reduce their input to lines or paragraphs
//! and then apply the single rule in [`split_quote_line`], so the three
//! formats cannot drift apart in what they accept.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A quote extracted from a source file: body text plus author.
///
/// Both fields are non-empty and whitespace-trimmed — [`QuoteRecord::new`]
/// refuses anything else, so a constructed record is always displayable.
/// Records are plain values: cheap to clone, freely shareable, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    body: String,
    author: String,
}

impl QuoteRecord {
    /// Build a record, trimming both fields.
    ///
    /// Returns `None` when either field is empty after trimming — the one
    /// invariant every consumer relies on.
    pub fn new(body: impl Into<String>, author: impl Into<String>) -> Option<Self> {
        let body = body.into().trim().to_string();
        let author = author.into().trim().to_string();
        if body.is_empty() || author.is_empty() {
            return None;
        }
        Some(Self { body, author })
    }

    /// The quote text, without enclosing quotation marks.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The attributed author.
    pub fn author(&self) -> &str {
        &self.author
    }
}

impl fmt::Display for QuoteRecord {
    /// Canonical display form: `"<body>" - <author>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.body, self.author)
    }
}

/// Split one line into a quote record, or `None` if the line is not a quote.
///
/// The rule, applied identically by the text, docx, and pdf parsers:
///
/// 1. Blank lines and lines without any `-` are skipped.
/// 2. Split on the **last** occurrence of `" - "` when present, otherwise on
///    the last `-`. Splitting from the right keeps hyphenated quote bodies
///    (`well-known`, `self-control`) intact.
/// 3. The body is trimmed of whitespace and one layer of enclosing double
///    quotes; the author is trimmed of whitespace.
/// 4. A record is produced only when both parts survive non-empty.
pub(crate) fn split_quote_line(line: &str) -> Option<QuoteRecord> {
    let line = line.trim();
    if line.is_empty() || !line.contains('-') {
        return None;
    }

    let (raw_body, raw_author) = match line.rfind(" - ") {
        Some(idx) => (&line[..idx], &line[idx + 3..]),
        None => {
            let idx = line.rfind('-')?;
            (&line[..idx], &line[idx + 1..])
        }
    };

    QuoteRecord::new(strip_enclosing_quotes(raw_body), raw_author)
}

/// Trim whitespace, then at most one leading and one trailing `"`.
fn strip_enclosing_quotes(s: &str) -> &str {
    let s = s.trim();
    let s = s.strip_prefix('"').unwrap_or(s);
    let s = s.strip_suffix('"').unwrap_or(s);
    s.trim()
}
