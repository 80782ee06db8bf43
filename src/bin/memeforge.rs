//! CLI binary for memeforge.
//!
//! A thin shim over the library crate: flag parsing, data-directory
//! scanning, and random selection live here; all parsing and rendering goes
//! through [`memeforge::parse`] and [`memeforge::render_record`]. Per-file
//! parse failures are warnings, not aborts — one corrupt CSV should not
//! sink a directory of good quote files.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use memeforge::{parse, render_record, CaptionConfig, QuoteRecord};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Quote file extensions the data-directory scan picks up.
const QUOTE_EXTENSIONS: [&str; 4] = ["txt", "csv", "docx", "pdf"];
/// Image extensions the data-directory scan picks up.
const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn yellow(s: &str) -> String {
    format!("\x1b[33m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}

// ── CLI definition ───────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "memeforge",
    version,
    about = "Generate captioned quote images from txt/csv/docx/pdf quote files"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a meme; quote and image are picked at random when omitted
    Generate {
        /// Source image file; random pick from the data dir when omitted
        #[arg(long)]
        image: Option<PathBuf>,

        /// Quote body text (requires --author)
        #[arg(long, requires = "author")]
        body: Option<String>,

        /// Quote author (requires --body)
        #[arg(long, requires = "body")]
        author: Option<String>,

        /// Directory scanned for quote files and images
        #[arg(long, default_value = "./data", env = "MEMEFORGE_DATA_DIR")]
        data_dir: PathBuf,

        /// Directory rendered memes are written into
        #[arg(long, default_value = "./memes")]
        output_dir: PathBuf,

        /// Maximum output image width in pixels
        #[arg(long, default_value_t = 500)]
        width: u32,
    },

    /// Parse quote files and print their records
    List {
        /// Quote files (txt/csv/docx/pdf)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Emit records as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Generate {
            image,
            body,
            author,
            data_dir,
            output_dir,
            width,
        } => generate(image, body, author, &data_dir, output_dir, width),
        Command::List { files, json } => list(&files, json),
    }
}

// ── generate ─────────────────────────────────────────────────────────────────

fn generate(
    image: Option<PathBuf>,
    body: Option<String>,
    author: Option<String>,
    data_dir: &Path,
    output_dir: PathBuf,
    width: u32,
) -> Result<()> {
    let quote = match (body, author) {
        (Some(body), Some(author)) => QuoteRecord::new(body, author)
            .context("--body and --author must be non-empty")?,
        // clap's `requires` rules make any other combination all-or-nothing.
        _ => {
            let quotes = load_quotes(data_dir);
            pick(&quotes)
                .cloned()
                .with_context(|| format!("no quotes found under {}", data_dir.display()))?
        }
    };

    let image = match image {
        Some(path) => path,
        None => {
            let images = scan_files(data_dir, &IMAGE_EXTENSIONS);
            pick(&images)
                .cloned()
                .with_context(|| format!("no images found under {}", data_dir.display()))?
        }
    };

    let config = CaptionConfig::builder()
        .output_dir(output_dir)
        .max_width(width)
        .build()?;

    let path = render_record(&image, &quote, &config)?;
    println!("{} {}", green("✓"), path.display());
    println!("  {}", dim(&quote.to_string()));
    Ok(())
}

/// Aggregate quotes from every supported file under the data directory,
/// tolerating per-file failures.
fn load_quotes(data_dir: &Path) -> Vec<QuoteRecord> {
    let mut quotes = Vec::new();
    for file in scan_files(data_dir, &QUOTE_EXTENSIONS) {
        match parse(&file) {
            Ok(records) => {
                eprintln!(
                    "{} {} {}",
                    green("✓"),
                    file.display(),
                    dim(&format!("({} quotes)", records.len()))
                );
                quotes.extend(records);
            }
            Err(e) => eprintln!("{} {}: {e}", yellow("⚠"), file.display()),
        }
    }
    quotes
}

// ── list ─────────────────────────────────────────────────────────────────────

fn list(files: &[PathBuf], json: bool) -> Result<()> {
    let mut all = Vec::new();
    let mut failures = 0usize;

    for file in files {
        match parse(file) {
            Ok(records) => all.extend(records),
            Err(e) => {
                eprintln!("{} {}: {e}", yellow("⚠"), file.display());
                failures += 1;
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&all)?);
    } else {
        for quote in &all {
            println!("{quote}");
        }
    }

    if failures == files.len() {
        bail!("all {failures} input file(s) failed to parse");
    }
    Ok(())
}

// ── helpers ──────────────────────────────────────────────────────────────────

/// Recursively collect files under `dir` whose extension (lowercased) is in
/// `extensions`. Unreadable directories are simply skipped.
fn scan_files(dir: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let Ok(entries) = std::fs::read_dir(dir) else {
        return found;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            found.extend(scan_files(&path, extensions));
        } else if path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| extensions.contains(&e.to_ascii_lowercase().as_str()))
        {
            found.push(path);
        }
    }
    found.sort();
    found
}

/// Uniform-ish random pick backed by UUID entropy — plenty for "surprise me"
/// selection without another dependency.
fn pick<T>(items: &[T]) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    let index = (Uuid::new_v4().as_u128() % items.len() as u128) as usize;
    items.get(index)
}
