//! Configuration for caption rendering.
//!
//! Every layout knob lives in [`CaptionConfig`], built via its
//! [`CaptionConfigBuilder`]. Keeping the knobs in one struct makes it trivial
//! to share a config across calls and to understand why two renders differ.
//!
//! The defaults reproduce the classic meme look — white text with a black
//! outline, wrapped to the image, sitting just below centre — and most
//! callers will only ever set `output_dir`.

use crate::error::MemeForgeError;
use std::path::PathBuf;

/// Configuration for compositing a quote onto an image.
///
/// # Example
/// ```rust
/// use memeforge::CaptionConfig;
///
/// let config = CaptionConfig::builder()
///     .output_dir("./out")
///     .max_width(500)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CaptionConfig {
    /// Directory the rendered image is written into (created if absent).
    pub output_dir: PathBuf,

    /// Maximum output width in pixels. Default: 500.
    ///
    /// Sources wider than this are scaled down preserving aspect ratio;
    /// narrower sources are left at their native size — upscaling a photo
    /// only blurs it.
    pub max_width: u32,

    /// Horizontal padding inside the image, in pixels. Default: 20.
    ///
    /// Text wraps against `image_width - 2 * padding`, keeping glyphs off
    /// the edges where the outline pass would be clipped.
    pub padding: u32,

    /// Upper bound for the font size search, in pixels. Default: 40.
    ///
    /// The search actually starts at `min(font_size_cap, image_height / 10)`
    /// so captions stay proportionate on small images.
    pub font_size_cap: u32,

    /// Lower bound for the font size search, in pixels. Default: 10.
    ///
    /// When even the floor cannot fit the caption into half the image
    /// height, the caption is rendered at the floor anyway — an oversized
    /// quote produces an ugly meme, not an error.
    pub font_size_floor: u32,

    /// Step by which the search shrinks the font, in pixels. Default: 2.
    pub font_size_step: u32,

    /// Extra vertical space between lines, in pixels. Default: 4.
    pub line_spacing: u32,

    /// Vertical anchor for the caption block centre, as a fraction of image
    /// height from the top. Default: 0.6.
    ///
    /// Slightly below centre keeps the caption out of the subject's face in
    /// typical photos.
    pub vertical_anchor: f32,

    /// Explicit TTF/OTF font file to use, tried before the system search.
    ///
    /// When `None`, the `MEMEFORGE_FONT` environment variable and then a
    /// list of well-known system font locations are probed.
    pub font_path: Option<PathBuf>,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./memes"),
            max_width: 500,
            padding: 20,
            font_size_cap: 40,
            font_size_floor: 10,
            font_size_step: 2,
            line_spacing: 4,
            vertical_anchor: 0.6,
            font_path: None,
        }
    }
}

impl CaptionConfig {
    /// Create a new builder for `CaptionConfig`.
    pub fn builder() -> CaptionConfigBuilder {
        CaptionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`CaptionConfig`].
#[derive(Debug)]
pub struct CaptionConfigBuilder {
    config: CaptionConfig,
}

impl CaptionConfigBuilder {
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn max_width(mut self, px: u32) -> Self {
        self.config.max_width = px.max(1);
        self
    }

    pub fn padding(mut self, px: u32) -> Self {
        self.config.padding = px;
        self
    }

    pub fn font_size_cap(mut self, px: u32) -> Self {
        self.config.font_size_cap = px.max(1);
        self
    }

    pub fn font_size_floor(mut self, px: u32) -> Self {
        self.config.font_size_floor = px.max(1);
        self
    }

    pub fn font_size_step(mut self, px: u32) -> Self {
        self.config.font_size_step = px.max(1);
        self
    }

    pub fn line_spacing(mut self, px: u32) -> Self {
        self.config.line_spacing = px;
        self
    }

    pub fn vertical_anchor(mut self, fraction: f32) -> Self {
        self.config.vertical_anchor = fraction.clamp(0.0, 1.0);
        self
    }

    pub fn font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.font_path = Some(path.into());
        self
    }

    /// Build the configuration, validating cross-field constraints.
    pub fn build(self) -> Result<CaptionConfig, MemeForgeError> {
        let c = &self.config;
        if c.font_size_floor > c.font_size_cap {
            return Err(MemeForgeError::InvalidConfig(format!(
                "font_size_floor ({}) must not exceed font_size_cap ({})",
                c.font_size_floor, c.font_size_cap
            )));
        }
        if !(0.0..=1.0).contains(&c.vertical_anchor) {
            return Err(MemeForgeError::InvalidConfig(format!(
                "vertical_anchor must be within 0.0–1.0, got {}",
                c.vertical_anchor
            )));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = CaptionConfig::builder().build().unwrap();
        assert_eq!(c.max_width, 500);
        assert_eq!(c.padding, 20);
        assert_eq!(c.font_size_cap, 40);
        assert_eq!(c.font_size_floor, 10);
    }

    #[test]
    fn floor_above_cap_rejected() {
        let err = CaptionConfig::builder()
            .font_size_floor(50)
            .font_size_cap(40)
            .build()
            .unwrap_err();
        assert!(matches!(err, MemeForgeError::InvalidConfig(_)));
    }

    #[test]
    fn anchor_is_clamped() {
        let c = CaptionConfig::builder().vertical_anchor(3.0).build().unwrap();
        assert_eq!(c.vertical_anchor, 1.0);
    }
}
