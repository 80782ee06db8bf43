//! Font discovery: the caption compositor's capability probe.
//!
//! Glyph rasterisation needs a real TTF/OTF file, and there is no portable
//! way to be handed one — so resolution mirrors how external binaries are
//! found elsewhere in the crate: explicit config first, then an environment
//! variable, then well-known system locations. The system search runs once
//! per process; its outcome (either the parsed font or the reason nothing
//! loaded) is cached so repeated renders don't re-walk the filesystem.
//!
//! A machine with no usable font at all fails fast with
//! [`MemeForgeError::UnavailableCapability`] before any image is touched.

use crate::config::CaptionConfig;
use crate::error::MemeForgeError;
use ab_glyph::{FontArc, FontVec};
use once_cell::sync::Lazy;
use std::path::Path;
use tracing::debug;

/// Well-known font locations, tried in order.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    // macOS
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
];

static SYSTEM_FONT: Lazy<Result<FontArc, String>> = Lazy::new(|| {
    if let Ok(env_path) = std::env::var("MEMEFORGE_FONT") {
        return load_font_file(Path::new(&env_path))
            .map_err(|e| format!("MEMEFORGE_FONT='{env_path}': {e}"));
    }
    for candidate in SYSTEM_FONT_CANDIDATES {
        let path = Path::new(candidate);
        if path.is_file() {
            match load_font_file(path) {
                Ok(font) => {
                    debug!("loaded system font: {candidate}");
                    return Ok(font);
                }
                Err(e) => debug!("skipping font {candidate}: {e}"),
            }
        }
    }
    Err(format!(
        "No usable TTF/OTF font found.\n\
         Set MEMEFORGE_FONT to a font file, or install one of:\n  {}",
        SYSTEM_FONT_CANDIDATES.join("\n  ")
    ))
});

/// Resolve the font to render with: config override, else the cached
/// system probe.
pub(crate) fn resolve_font(config: &CaptionConfig) -> Result<FontArc, MemeForgeError> {
    if let Some(ref path) = config.font_path {
        return load_font_file(path).map_err(|detail| MemeForgeError::UnavailableCapability {
            capability: "font-rendering",
            hint: format!("Configured font '{}' failed to load: {detail}", path.display()),
        });
    }

    SYSTEM_FONT
        .clone()
        .map_err(|hint| MemeForgeError::UnavailableCapability {
            capability: "font-rendering",
            hint,
        })
}

/// Read and parse one font file. Index 0 is used for .ttc collections.
fn load_font_file(path: &Path) -> Result<FontArc, String> {
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
    let font = FontVec::try_from_vec_and_index(bytes, 0).map_err(|e| e.to_string())?;
    Ok(FontArc::new(font))
}
