//! Error types for the memeforge library.
//!
//! One enum covers the whole crate, but its variants split along a line that
//! matters to callers aggregating many quote files:
//!
//! * **Whole-file failures** ([`MemeForgeError::NotFound`],
//!   [`MemeForgeError::ParseFailure`], …) name the offending path so a caller
//!   looping over a data directory can log the file and continue with the
//!   rest.
//!
//! * **Environment failures** ([`MemeForgeError::UnavailableCapability`],
//!   [`MemeForgeError::ToolFailure`]) describe something missing or broken on
//!   the host — no other file will fare better, and the hint tells the user
//!   what to install.
//!
//! Line- and row-level problems inside a file (a quote without a separator,
//! a CSV row with too few fields) are not errors at all: parsers skip them
//! and keep going.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the memeforge library.
#[derive(Debug, Error)]
pub enum MemeForgeError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Quote file not found: '{path}'\nCheck the path exists and is readable.")]
    NotFound { path: PathBuf },

    /// No parser recognises the file's extension.
    #[error("No parser for '{path}': unsupported extension\nSupported: .txt, .csv, .docx, .pdf")]
    UnsupportedFormat { path: PathBuf },

    // ── Environment errors ────────────────────────────────────────────────
    /// A required optional capability is missing from the runtime environment.
    #[error("Capability '{capability}' is unavailable in this environment.\n{hint}")]
    UnavailableCapability {
        capability: &'static str,
        hint: String,
    },

    /// An external extraction tool was invoked but exited abnormally.
    #[error("External tool '{tool}' failed: {detail}")]
    ToolFailure { tool: String, detail: String },

    // ── Parse errors ──────────────────────────────────────────────────────
    /// A format parser hit a structural failure on a whole file.
    #[error("{parser} parser failed on '{path}': {detail}")]
    ParseFailure {
        parser: &'static str,
        path: PathBuf,
        detail: String,
    },

    // ── Render errors ─────────────────────────────────────────────────────
    /// The source image could not be opened or decoded.
    #[error("Image not found or undecodable: '{path}': {detail}")]
    ImageNotFound { path: PathBuf, detail: String },

    /// Could not create the output directory or write the rendered image.
    #[error("Failed to write output '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
