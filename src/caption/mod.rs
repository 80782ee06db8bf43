//! Caption compositing: draw a wrapped, outlined quote onto an image.
//!
//! ## Data Flow
//!
//! ```text
//! image ──▶ resize ──▶ layout ──▶ draw ──▶ save
//! (decode)  (downscale  (wrap +    (outline   (jpg under
//!            only)       fit size)  + fill)    output_dir)
//! ```
//!
//! 1. [`font`]   — resolve the render font, the one hard capability
//! 2. [`layout`] — wrap words and pick a font size that fits
//! 3. [`render`] — the entry point tying the stages together
//!
//! Text is drawn twice: an outline pass offset one pixel in all eight
//! directions in black, then the line itself in white. Against an arbitrary
//! photo background neither plain white nor plain black alone stays
//! readable; the ring does.

pub(crate) mod font;
pub(crate) mod layout;

use crate::config::CaptionConfig;
use crate::error::MemeForgeError;
use crate::quote::QuoteRecord;
use image::imageops::FilterType;
use image::Rgb;
use imageproc::drawing::{draw_text_mut, text_size};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

const OUTLINE_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
const FILL_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// One-pixel offsets for the eight-direction outline pass.
const OUTLINE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Composite a quote onto an image and save the result.
///
/// The source is downscaled (never upscaled) to `config.max_width`, the
/// caption is wrapped and size-fitted, and the output lands in
/// `config.output_dir` (created if absent) under a randomized filename.
/// Returns the path of the written file.
///
/// Filenames carry a v4 UUID; collisions are not checked beyond that id
/// space, which is an accepted weakness of this contract.
///
/// # Errors
/// * [`MemeForgeError::UnavailableCapability`] — no usable font; checked
///   before any image work
/// * [`MemeForgeError::ImageNotFound`] — source unreadable or undecodable
/// * [`MemeForgeError::OutputWriteFailed`] — output dir or file unwritable
///
/// # Example
/// ```rust,no_run
/// use memeforge::CaptionConfig;
///
/// let config = CaptionConfig::builder().output_dir("./memes").build()?;
/// let path = memeforge::render("dog.jpg", "Chase the ball", "Rex", &config)?;
/// println!("meme at {}", path.display());
/// # Ok::<(), memeforge::MemeForgeError>(())
/// ```
pub fn render(
    image_path: impl AsRef<Path>,
    body: &str,
    author: &str,
    config: &CaptionConfig,
) -> Result<PathBuf, MemeForgeError> {
    let image_path = image_path.as_ref();

    // Fail fast on a fontless environment before touching the image.
    let font = font::resolve_font(config)?;

    let source = image::open(image_path).map_err(|e| MemeForgeError::ImageNotFound {
        path: image_path.to_path_buf(),
        detail: e.to_string(),
    })?;

    // Downscale only: scale = min(1, max_width / source_width).
    let source = if source.width() > config.max_width {
        let ratio = config.max_width as f64 / source.width() as f64;
        let height = ((source.height() as f64 * ratio).round() as u32).max(1);
        debug!(
            from = source.width(),
            to = config.max_width,
            "downscaling source image"
        );
        source.resize_exact(config.max_width, height, FilterType::Lanczos3)
    } else {
        source
    };

    // JPEG output has no alpha channel; flatten up front.
    let mut canvas = source.to_rgb8();
    let (width, height) = canvas.dimensions();

    let layout = layout::layout_caption(body, author, &font, config, width, height);
    let anchor = (height as f32 * config.vertical_anchor) as i32;
    let y_start = anchor - (layout.block_height() / 2) as i32;

    for (i, line) in layout.lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let (line_width, _) = text_size(layout.scale, &font, line);
        let x = (width as i32 - line_width as i32) / 2;
        let y = y_start + i as i32 * layout.line_step as i32;

        for (dx, dy) in OUTLINE_OFFSETS {
            draw_text_mut(
                &mut canvas,
                OUTLINE_COLOR,
                x + dx,
                y + dy,
                layout.scale,
                &font,
                line,
            );
        }
        draw_text_mut(&mut canvas, FILL_COLOR, x, y, layout.scale, &font, line);
    }

    std::fs::create_dir_all(&config.output_dir).map_err(|e| {
        MemeForgeError::OutputWriteFailed {
            path: config.output_dir.clone(),
            source: e,
        }
    })?;
    let output_path = config
        .output_dir
        .join(format!("meme_{}.jpg", Uuid::new_v4().simple()));
    canvas
        .save(&output_path)
        .map_err(|e| MemeForgeError::OutputWriteFailed {
            path: output_path.clone(),
            source: std::io::Error::other(e),
        })?;

    info!(
        output = %output_path.display(),
        width,
        height,
        "rendered captioned image"
    );
    Ok(output_path)
}

/// Convenience wrapper: render a [`QuoteRecord`] directly.
pub fn render_record(
    image_path: impl AsRef<Path>,
    quote: &QuoteRecord,
    config: &CaptionConfig,
) -> Result<PathBuf, MemeForgeError> {
    render(image_path, quote.body(), quote.author(), config)
}
