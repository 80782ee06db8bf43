//! PDF quote parsing via an external text-extraction tool.
//!
//! ## Why shell out instead of linking a PDF library?
//!
//! Text extraction is the only thing this parser needs from a PDF, and
//! `pdftotext` (poppler/xpdf) and `mutool` (mupdf) do it better than any
//! embedded reimplementation would. Delegating keeps the dependency tree
//! small and makes PDF support an environment capability: present when a
//! tool is on PATH, reported as [`MemeForgeError::UnavailableCapability`]
//! when not.
//!
//! ## Tool resolution
//!
//! Resolved once per process, in this order:
//! 1. `MEMEFORGE_PDFTOTEXT` — explicit path to a pdftotext-compatible binary
//! 2. `pdftotext` on PATH
//! 3. `mutool` on PATH
//!
//! `pdftotext` writes extracted text to a file we name; the intermediate is
//! a [`tempfile::NamedTempFile`] so it is removed on every exit path —
//! success, tool failure, or a later parse error. `mutool draw` writes to
//! stdout and needs no intermediate at all.

use super::QuoteParser;
use crate::error::MemeForgeError;
use crate::quote::{split_quote_line, QuoteRecord};
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// The extraction tool found on this system, probed once at first use.
enum ExtractionTool {
    Pdftotext(PathBuf),
    Mutool(PathBuf),
}

impl ExtractionTool {
    fn name(&self) -> &'static str {
        match self {
            ExtractionTool::Pdftotext(_) => "pdftotext",
            ExtractionTool::Mutool(_) => "mutool",
        }
    }
}

static EXTRACTION_TOOL: Lazy<Option<ExtractionTool>> = Lazy::new(|| {
    if let Ok(override_path) = std::env::var("MEMEFORGE_PDFTOTEXT") {
        let path = PathBuf::from(&override_path);
        if path.is_file() {
            info!("using pdftotext override: {}", path.display());
            return Some(ExtractionTool::Pdftotext(path));
        }
    }
    if let Ok(path) = which::which("pdftotext") {
        debug!("found pdftotext: {}", path.display());
        return Some(ExtractionTool::Pdftotext(path));
    }
    if let Ok(path) = which::which("mutool") {
        debug!("found mutool: {}", path.display());
        return Some(ExtractionTool::Mutool(path));
    }
    None
});

/// Parser for `.pdf` files, line-oriented over extracted text.
pub(crate) struct PdfParser;

impl QuoteParser for PdfParser {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["pdf"]
    }

    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>, MemeForgeError> {
        let tool = EXTRACTION_TOOL
            .as_ref()
            .ok_or_else(|| MemeForgeError::UnavailableCapability {
                capability: "pdf-text-extraction",
                hint: "Install pdftotext (poppler-utils or xpdf) or mutool (mupdf-tools),\n\
                       or point MEMEFORGE_PDFTOTEXT at a compatible binary."
                    .into(),
            })?;

        let text = extract_text(tool, path)?;
        let records: Vec<QuoteRecord> = text.lines().filter_map(split_quote_line).collect();
        debug!(path = %path.display(), count = records.len(), "pdf parse complete");
        Ok(records)
    }
}

/// Run the extraction tool and return the PDF's plain text.
fn extract_text(tool: &ExtractionTool, path: &Path) -> Result<String, MemeForgeError> {
    let tool_failure = |detail: String| MemeForgeError::ToolFailure {
        tool: tool.name().to_string(),
        detail,
    };
    let parse_failure = |detail: String| MemeForgeError::ParseFailure {
        parser: "pdf",
        path: path.to_path_buf(),
        detail,
    };

    match tool {
        ExtractionTool::Pdftotext(bin) => {
            // Dropped on every return below, deleting the intermediate.
            let intermediate = tempfile::Builder::new()
                .suffix(".txt")
                .tempfile()
                .map_err(|e| parse_failure(format!("intermediate file: {e}")))?;

            let output = Command::new(bin)
                .arg(path)
                .arg(intermediate.path())
                .output()
                .map_err(|e| tool_failure(format!("failed to spawn: {e}")))?;

            if !output.status.success() {
                return Err(tool_failure(format!(
                    "{}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                )));
            }

            std::fs::read_to_string(intermediate.path())
                .map_err(|e| parse_failure(format!("extracted text unreadable: {e}")))
        }
        ExtractionTool::Mutool(bin) => {
            let output = Command::new(bin)
                .args(["draw", "-F", "txt"])
                .arg(path)
                .output()
                .map_err(|e| tool_failure(format!("failed to spawn: {e}")))?;

            if !output.status.success() {
                return Err(tool_failure(format!(
                    "{}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                )));
            }

            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        }
    }
}
