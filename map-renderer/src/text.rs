//! Label text rendering with ab_glyph.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use tracing::{debug, info, warn};

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::error::{RenderError, Result};

const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// A loaded TrueType/OpenType font used for map labels.
#[derive(Clone)]
pub struct LabelFont {
    font: Arc<FontVec>,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFont").finish_non_exhaustive()
    }
}

impl LabelFont {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let font = FontVec::try_from_vec(data).map_err(|e| RenderError::Font(e.to_string()))?;
        Ok(Self {
            font: Arc::new(font),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_bytes(data)
            .map_err(|e| RenderError::Font(format!("{}: {}", path.display(), e)))
    }

    /// Tries `configured` first, then well-known system font locations.
    /// Returns `None` when nothing loads; callers render without labels.
    pub fn discover(configured: Option<&Path>) -> Option<Self> {
        if let Some(path) = configured {
            match Self::from_file(path) {
                Ok(font) => {
                    info!(path = %path.display(), "Loaded label font");
                    return Some(font);
                }
                Err(e) => warn!(error = %e, "Configured label font unusable, trying system fonts"),
            }
        }

        for candidate in SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from) {
            if !candidate.is_file() {
                continue;
            }
            match Self::from_file(&candidate) {
                Ok(font) => {
                    info!(path = %candidate.display(), "Loaded system label font");
                    return Some(font);
                }
                Err(e) => debug!(error = %e, "Skipping font candidate"),
            }
        }

        warn!("No label font found, map labels will be skipped");
        None
    }

    /// Width in pixels of `text` at `size`.
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        let mut width = 0.0;
        let mut prev: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        width
    }

    /// Draws `text` with its baseline starting at pixel (`x`, `y`).
    pub(crate) fn draw(&self, canvas: &mut Canvas, text: &str, x: f32, y: f32, size: f32, color: Rgba) {
        let scale = PxScale::from(size);
        let scaled = self.font.as_scaled(scale);
        let mut caret = x;
        let mut prev: Option<GlyphId> = None;

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, point(caret, y));
            caret += scaled.h_advance(id);
            prev = Some(id);

            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i32 + gx as i32;
                let py = bounds.min.y as i32 + gy as i32;
                canvas.blend_pixel(px, py, color, coverage);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = LabelFont::from_bytes(vec![0, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, RenderError::Font(_)));
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let err = LabelFont::from_file(Path::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
    }

    #[test]
    fn test_discover_falls_back_past_bad_configured_path() {
        // must not panic whether or not a system font exists
        let font = LabelFont::discover(Some(Path::new("/nonexistent/font.ttf")));
        if let Some(font) = font {
            assert!(font.measure("Paris", 12.5) > 0.0);
        }
    }
}
