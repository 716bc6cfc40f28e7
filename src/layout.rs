//! Canvas geometry: sizing and per-line placement.
//!
//! Geometry is derived fresh from options and a wrapped line count on every
//! render; nothing here is cached or mutated. Content dimensions are in
//! logical units; pixel dimensions apply the density and export scale and
//! round to whole pixels.

use crate::options::{LayoutOptions, VerticalAnchor};

/// Derived canvas measurements for one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasGeometry {
    /// Logical width, padding included.
    pub content_width: f32,
    /// Logical height, padding included. Never below one line height.
    pub content_height: f32,
    /// Physical raster width in pixels.
    pub pixel_width: u32,
    /// Physical raster height in pixels.
    pub pixel_height: u32,
    /// Logical Y of the first line's glyph-box top.
    pub origin_y: f32,
    /// Logical X of every line's left edge.
    pub origin_x: f32,
    /// Logical distance between consecutive line tops.
    pub line_height: f32,
    /// Number of wrapped lines this geometry was computed for.
    pub line_count: usize,
}

impl CanvasGeometry {
    /// Logical (x, y) of line `i`'s glyph-box top-left corner.
    ///
    /// The Y anchor is the top of the glyph box, not the alphabetic
    /// baseline, so spacing stays uniform across scripts.
    #[must_use]
    pub fn line_origin(&self, i: usize) -> (f32, f32) {
        (self.origin_x, self.origin_y + i as f32 * self.line_height)
    }

    /// Width available to text, padding excluded.
    #[must_use]
    pub fn max_text_width(&self) -> f32 {
        (self.content_width - 2.0 * self.origin_x).max(0.0)
    }
}

/// Compute geometry for `line_count` wrapped lines at `content_width`.
///
/// `content_height` is `max(line_height, line_count * line_height)` plus
/// vertical padding on both sides, floored at `options.min_height`; the
/// single-line floor keeps empty text from collapsing to a zero-height
/// canvas. Pixel dimensions are content dimensions times
/// `density * output_scale`, rounded, and at least one pixel each.
#[must_use]
pub fn compute_geometry(
    line_count: usize,
    content_width: f32,
    options: &LayoutOptions,
) -> CanvasGeometry {
    let line_height = options.line_height_units();
    let padding_y = options.effective_padding_y();

    let text_height = line_height.max(line_count as f32 * line_height);
    let mut content_height = text_height + 2.0 * padding_y;
    if let Some(min_height) = options.min_height {
        content_height = content_height.max(min_height);
    }

    let origin_y = match options.anchor {
        VerticalAnchor::Top => padding_y,
        VerticalAnchor::Center => (content_height - line_count as f32 * line_height) / 2.0,
    };

    let scale = options.pixel_scale();
    CanvasGeometry {
        content_width,
        content_height,
        pixel_width: to_pixels(content_width, scale),
        pixel_height: to_pixels(content_height, scale),
        origin_y,
        origin_x: options.effective_padding_x(),
        line_height,
        line_count,
    }
}

/// Round a logical dimension to physical pixels, clamped to at least 1.
fn to_pixels(logical: f32, scale: f32) -> u32 {
    let px = (logical * scale).round();
    if px.is_finite() && px >= 1.0 {
        px as u32
    } else {
        1
    }
}
