//! Caption layout: greedy word wrap and the shrink-to-fit font size search.
//!
//! Both algorithms work in *rendered pixel widths*, not character counts —
//! `W` and `i` differ by a factor of four in most fonts, so counting
//! characters wraps badly. Measurement goes through the same font and scale
//! that the draw pass uses, so what fits in the layout fits on the image.

use crate::config::CaptionConfig;
use ab_glyph::{FontArc, PxScale};
use imageproc::drawing::text_size;

/// A fully decided caption: the lines to draw and the scale to draw them at.
pub(crate) struct CaptionLayout {
    /// Body lines, one blank separator line, then author lines.
    pub lines: Vec<String>,
    /// Font scale chosen by the fit search.
    pub scale: PxScale,
    /// Vertical advance per line: glyph height plus configured spacing.
    pub line_step: u32,
}

impl CaptionLayout {
    /// Total pixel height of the caption block.
    pub fn block_height(&self) -> u32 {
        self.lines.len() as u32 * self.line_step
    }
}

/// Greedily pack words into lines no wider than `max_width` rendered pixels.
///
/// A word that alone exceeds `max_width` still gets its own line — dropping
/// or splitting it would corrupt the quote. Overlong lines simply overflow
/// the padding; the quote stays intact.
pub(crate) fn wrap_words(
    text: &str,
    font: &FontArc,
    scale: PxScale,
    max_width: u32,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        let (width, _) = text_size(scale, font, &candidate);
        if width <= max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Lay out the caption for an image of the given dimensions.
///
/// Starts at `min(font_size_cap, height / 10)` and shrinks in
/// `font_size_step` decrements until the wrapped body + author block is
/// under half the image height, or the floor is reached. The floor always
/// renders — a cramped caption beats an error.
pub(crate) fn layout_caption(
    body: &str,
    author: &str,
    font: &FontArc,
    config: &CaptionConfig,
    image_width: u32,
    image_height: u32,
) -> CaptionLayout {
    let max_text_width = image_width.saturating_sub(2 * config.padding).max(1);
    let quoted_body = format!("\"{body}\"");
    let author_line = format!("- {author}");

    let mut size = config
        .font_size_cap
        .min(image_height / 10)
        .max(config.font_size_floor);

    loop {
        let scale = PxScale::from(size as f32);
        let body_lines = wrap_words(&quoted_body, font, scale, max_text_width);
        let author_lines = wrap_words(&author_line, font, scale, max_text_width);

        // "Ay" spans ascender and descender: a stable per-line height.
        let (_, glyph_height) = text_size(scale, font, "Ay");
        let line_step = glyph_height + config.line_spacing;
        let block = (body_lines.len() + author_lines.len()) as u32 * line_step;

        if block < image_height / 2 || size <= config.font_size_floor {
            let mut lines = body_lines;
            lines.push(String::new());
            lines.extend(author_lines);
            return CaptionLayout {
                lines,
                scale,
                line_step,
            };
        }
        size = size
            .saturating_sub(config.font_size_step)
            .max(config.font_size_floor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caption::font::resolve_font;

    /// Tests in this module need a real font; skip quietly on bare systems.
    macro_rules! font_or_skip {
        () => {
            match resolve_font(&CaptionConfig::default()) {
                Ok(font) => font,
                Err(_) => {
                    println!("SKIP — no system font available");
                    return;
                }
            }
        };
    }

    #[test]
    fn wrap_respects_max_width() {
        let font = font_or_skip!();
        let scale = PxScale::from(20.0);
        let lines = wrap_words(
            "the quick brown fox jumps over the lazy dog",
            &font,
            scale,
            120,
        );
        assert!(lines.len() > 1, "expected wrapping, got {lines:?}");
        for line in &lines {
            let (w, _) = text_size(scale, &font, line);
            assert!(w <= 120, "line '{line}' is {w}px wide");
        }
        // No words lost or reordered.
        assert_eq!(
            lines.join(" "),
            "the quick brown fox jumps over the lazy dog"
        );
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        let font = font_or_skip!();
        let scale = PxScale::from(20.0);
        let lines = wrap_words("a Donaudampfschifffahrtsgesellschaft b", &font, scale, 40);
        assert!(lines.contains(&"Donaudampfschifffahrtsgesellschaft".to_string()));
        // Nothing truncated.
        assert_eq!(lines.join(" "), "a Donaudampfschifffahrtsgesellschaft b");
    }

    #[test]
    fn layout_keeps_block_under_half_height_when_it_can() {
        let font = font_or_skip!();
        let config = CaptionConfig::default();
        let layout = layout_caption("Short quote", "Author", &font, &config, 500, 400);
        assert!(layout.block_height() < 200);
        // body + separator + author
        assert!(layout.lines.len() >= 3);
        assert_eq!(layout.lines[0], "\"Short quote\"");
        assert!(layout.lines.contains(&String::new()));
        assert_eq!(layout.lines.last().unwrap(), "- Author");
    }

    #[test]
    fn layout_bottoms_out_at_floor_instead_of_failing() {
        let font = font_or_skip!();
        let config = CaptionConfig::default();
        let long_body = "word ".repeat(200);
        let layout = layout_caption(long_body.trim(), "Author", &font, &config, 200, 100);
        assert!((layout.scale.y - config.font_size_floor as f32).abs() < f32::EPSILON);
    }

    #[test]
    fn start_size_scales_with_image_height() {
        let font = font_or_skip!();
        let config = CaptionConfig::default();
        // 200px tall image: search starts at 20, not the 40 cap.
        let layout = layout_caption("Hi", "Yo", &font, &config, 500, 200);
        assert!(layout.scale.y <= 20.0);
    }
}
