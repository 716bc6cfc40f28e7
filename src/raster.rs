//! RGBA pixel surface and text painting.
//!
//! [`PixelBuffer`] is a plain row-major RGBA grid with checked indexing.
//! [`paint`] renders wrapped lines onto a fresh buffer: the surface is
//! fully overwritten every render (background fill, then glyph coverage
//! blended in the text color) — partial repaint is not supported, so an
//! interrupted render can never leave stale pixels behind.

use crate::color::Rgba;
use crate::layout::CanvasGeometry;
use crate::measure::{ResolvedFont, fallback_advance};
use crate::options::LayoutOptions;

/// A 2D pixel buffer for rasterized output.
///
/// Each pixel has an RGBA color. Coordinates are (x, y) with (0, 0) at the
/// top-left; X grows right, Y grows down.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data in row-major order.
    pub pixels: Vec<Rgba>,
}

impl PixelBuffer {
    /// Create a new pixel buffer filled with transparent black.
    ///
    /// Zero dimensions are clamped to 1.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let size = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; size],
        }
    }

    /// Compute pixel index with overflow protection.
    ///
    /// Returns `None` if coordinates are out of bounds or the index
    /// calculation would overflow.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let row_offset = (y as usize).checked_mul(self.width as usize)?;
        let idx = row_offset.checked_add(x as usize)?;
        if idx < self.pixels.len() { Some(idx) } else { None }
    }

    /// Get pixel at (x, y).
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        self.pixel_index(x, y).map(|idx| self.pixels[idx])
    }

    /// Set pixel at (x, y). Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(idx) = self.pixel_index(x, y) {
            self.pixels[idx] = color;
        }
    }

    /// Alpha-blend `color` over the existing pixel at (x, y).
    pub fn blend(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(idx) = self.pixel_index(x, y) {
            self.pixels[idx] = color.blend_over(self.pixels[idx]);
        }
    }

    /// Fill the entire buffer with a color.
    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Pack into 8-bit RGBA bytes, row-major, 4 bytes per pixel.
    #[must_use]
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&pixel.to_rgba_u8());
        }
        bytes
    }
}

/// Paint wrapped lines onto a fresh pixel buffer.
///
/// Pure with respect to its inputs: the same lines, geometry, options, and
/// resolved font produce the same buffer. Glyphs are rasterized at the
/// device pixel size (`font_size * density * output_scale`) so scaled
/// exports stay crisp instead of upsampling a logical-resolution raster.
#[must_use]
pub fn paint(
    lines: &[String],
    geometry: &CanvasGeometry,
    options: &LayoutOptions,
    font: &ResolvedFont<'_>,
) -> PixelBuffer {
    let scale = options.pixel_scale();
    let px_size = options.font_size * scale;

    let mut buffer = PixelBuffer::new(geometry.pixel_width, geometry.pixel_height);
    buffer.fill(options.background);

    let ascent = font.ascent_at(px_size);

    for (i, line) in lines.iter().enumerate() {
        let (origin_x, origin_y) = geometry.line_origin(i);
        let pen_x = origin_x * scale;
        // Glyph box is top-anchored; the baseline sits one ascent below.
        let top_y = origin_y * scale;

        match font.font() {
            Some(face) => draw_glyph_line(
                &mut buffer,
                face,
                line,
                px_size,
                pen_x,
                top_y + ascent,
                options.foreground,
            ),
            None => draw_fallback_line(
                &mut buffer,
                line,
                px_size,
                pen_x,
                top_y,
                ascent,
                options.foreground,
            ),
        }
    }

    buffer
}

/// Rasterize one line's glyphs and blend their coverage into the buffer.
fn draw_glyph_line(
    buffer: &mut PixelBuffer,
    face: &fontdue::Font,
    line: &str,
    px_size: f32,
    mut pen_x: f32,
    baseline_y: f32,
    color: Rgba,
) {
    for ch in line.chars() {
        if ch == '\t' {
            pen_x += face.metrics(' ', px_size).advance_width * 4.0;
            continue;
        }

        let (metrics, bitmap) = face.rasterize(ch, px_size);
        let glyph_left = pen_x + metrics.xmin as f32;
        // Bitmap row 0 is the top of the glyph's bounding box.
        let glyph_top = baseline_y - (metrics.ymin + metrics.height as i32) as f32;

        for row in 0..metrics.height {
            for col in 0..metrics.width {
                let coverage = bitmap[row * metrics.width + col];
                if coverage == 0 {
                    continue;
                }
                let x = glyph_left + col as f32;
                let y = glyph_top + row as f32;
                if x < 0.0 || y < 0.0 {
                    continue;
                }
                let alpha = color.a * f32::from(coverage) / 255.0;
                buffer.blend(x.round() as u32, y.round() as u32, color.with_alpha(alpha));
            }
        }

        pen_x += metrics.advance_width;
    }
}

/// Degraded rendering without a font: one coverage box per visible
/// character, so the layout remains legible as blocks.
fn draw_fallback_line(
    buffer: &mut PixelBuffer,
    line: &str,
    px_size: f32,
    mut pen_x: f32,
    top_y: f32,
    ascent: f32,
    color: Rgba,
) {
    // A small gutter keeps adjacent boxes distinguishable.
    let gutter = (px_size * 0.1).max(1.0);

    for ch in line.chars() {
        let advance = fallback_advance(ch, px_size);
        if !ch.is_whitespace() && advance > 0.0 {
            let box_left = pen_x;
            let box_right = pen_x + (advance - gutter).max(1.0);
            let box_top = top_y + (px_size - ascent).max(0.0);
            let box_bottom = top_y + ascent;
            fill_rect(buffer, box_left, box_top, box_right, box_bottom, color);
        }
        pen_x += advance;
    }
}

fn fill_rect(buffer: &mut PixelBuffer, left: f32, top: f32, right: f32, bottom: f32, color: Rgba) {
    let x0 = left.max(0.0).round() as u32;
    let y0 = top.max(0.0).round() as u32;
    let x1 = right.max(0.0).round() as u32;
    let y1 = bottom.max(0.0).round() as u32;
    for y in y0..y1 {
        for x in x0..x1 {
            buffer.blend(x, y, color);
        }
    }
}
