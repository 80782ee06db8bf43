//! # memeforge
//!
//! Ingest short quotations from heterogeneous document formats and composite
//! them onto images.
//!
//! ## Why this crate?
//!
//! Quote collections in the wild arrive as whatever their curators had to
//! hand — plain text, spreadsheet exports, word-processor documents, PDFs.
//! Each format needs its own recovery heuristics (header guessing, container
//! cracking, external extraction tools), but callers should not care: one
//! facade turns any supported file into uniform [`QuoteRecord`]s, and one
//! compositor turns a record plus an image into a finished meme.
//!
//! ## Pipeline Overview
//!
//! ```text
//! quote file                          image
//!  │                                   │
//!  ├─ 1. Dispatch  pick a parser by extension (txt/csv/docx/pdf)
//!  ├─ 2. Parse     format-specific read, per-line/row recovery
//!  │                                   │
//!  └──────────▶ QuoteRecord ◀──────────┤
//!                    │                 │
//!                    ├─ 3. Layout  wrap + fit the caption to the image
//!                    ├─ 4. Draw    outlined text, centred lines
//!                    └─ 5. Save    randomized filename under output_dir
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use memeforge::{parse, render, CaptionConfig};
//!
//! fn main() -> Result<(), memeforge::MemeForgeError> {
//!     let quotes = parse("quotes.txt")?;
//!     let config = CaptionConfig::builder().output_dir("./memes").build()?;
//!     let path = render("dog.jpg", quotes[0].body(), quotes[0].author(), &config)?;
//!     println!("{}", path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `memeforge` binary (clap + anyhow + tracing-subscriber) |
//! | `docx`  | on      | DOCX container reading (zip + quick-xml); without it `.docx` inputs report UnavailableCapability |
//!
//! Disable both when embedding only the library:
//! ```toml
//! memeforge = { version = "0.3", default-features = false }
//! ```
//!
//! ## Environment capabilities
//!
//! Two capabilities are probed at first use rather than assumed:
//!
//! * **PDF text extraction** — `pdftotext` or `mutool` on PATH (override
//!   with `MEMEFORGE_PDFTOTEXT`)
//! * **Font rendering** — a system TTF/OTF (override with `MEMEFORGE_FONT`
//!   or [`CaptionConfig::font_path`])
//!
//! A missing capability surfaces as
//! [`MemeForgeError::UnavailableCapability`] with an installation hint, so
//! embedding applications can degrade gracefully.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod caption;
pub mod config;
pub mod error;
pub mod ingest;
pub mod quote;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use caption::{render, render_record};
pub use config::{CaptionConfig, CaptionConfigBuilder};
pub use error::MemeForgeError;
pub use ingest::parse;
pub use quote::QuoteRecord;
