//! The render pipeline: options snapshot to painted pixels.
//!
//! One `render` call is the whole cycle from the original design: resolve
//! the font to a terminal state (once), wrap the text, compute geometry,
//! and paint. The wrapping and sizing stages are pure, so overlapping
//! in-flight renders cannot observe each other; only the final paint
//! produces a surface, and that surface is owned by the returned
//! [`RenderOutput`].
//!
//! # Supersede policy
//!
//! Hosts that trigger renders faster than they can present them (live
//! preview on keystroke) need the last-started render to be the last one
//! painted to their shared surface. Each render is stamped with a
//! monotonically increasing generation; before presenting, a host checks
//! [`Renderer::is_current`] and drops stale outputs.

use crate::error::Result;
use crate::event::{LogLevel, emit_log};
use crate::layout::{CanvasGeometry, compute_geometry};
use crate::measure::{FontReadiness, FontStore};
use crate::options::LayoutOptions;
use crate::raster::{PixelBuffer, paint};
use crate::wrap::wrap_lines;
use std::sync::atomic::{AtomicU64, Ordering};

/// Everything one render cycle produced.
#[derive(Debug)]
pub struct RenderOutput {
    /// The wrapped lines, in paint order.
    pub lines: Vec<String>,
    /// The derived canvas geometry.
    pub geometry: CanvasGeometry,
    /// The painted surface.
    pub pixels: PixelBuffer,
    /// Whether real font metrics or fallback estimates were used.
    pub readiness: FontReadiness,
    /// Stamp for the supersede policy; compare with
    /// [`Renderer::is_current`].
    pub generation: u64,
}

/// Stateless-per-invocation renderer.
///
/// The only state carried across renders is the font store (fonts are
/// loaded once, not per render) and the generation counter.
///
/// # Examples
///
/// ```
/// use textplate::{LayoutOptions, FontStore, Renderer};
///
/// let renderer = Renderer::new(FontStore::new());
/// let output = renderer.render("hello world", &LayoutOptions::default()).unwrap();
/// assert!(!output.lines.is_empty());
/// assert!(renderer.is_current(output.generation));
/// ```
pub struct Renderer {
    fonts: FontStore,
    generation: AtomicU64,
}

impl Renderer {
    /// Create a renderer over a font store.
    #[must_use]
    pub fn new(fonts: FontStore) -> Self {
        Self {
            fonts,
            generation: AtomicU64::new(0),
        }
    }

    /// Access the font store.
    #[must_use]
    pub fn fonts(&self) -> &FontStore {
        &self.fonts
    }

    /// Add fonts after construction.
    pub fn fonts_mut(&mut self) -> &mut FontStore {
        &mut self.fonts
    }

    /// Run one full render cycle.
    ///
    /// Reads the options snapshot synchronously, resolves the font exactly
    /// once, then wraps, sizes, and paints. Pure over its inputs apart from
    /// the generation stamp.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidOptions`] when the snapshot fails
    /// validation. Missing fonts are not an error; they degrade to
    /// [`FontReadiness::Fallback`].
    pub fn render(&self, text: &str, options: &LayoutOptions) -> Result<RenderOutput> {
        options.validate()?;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let font = self.fonts.resolve(&options.font_family, options.font_size);
        if font.readiness() == FontReadiness::Fallback {
            emit_log(
                LogLevel::Info,
                "rendering with fallback metrics; output uses coverage boxes",
            );
        }

        let content_width = options.content_width.resolve();
        let max_text_width = (content_width - 2.0 * options.effective_padding_x()).max(0.0);

        let lines = wrap_lines(text, max_text_width, &font);
        let geometry = compute_geometry(lines.len(), content_width, options);
        let pixels = paint(&lines, &geometry, options, &font);

        Ok(RenderOutput {
            lines,
            geometry,
            pixels,
            readiness: font.readiness(),
            generation,
        })
    }

    /// The generation stamp of the most recently started render.
    #[must_use]
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Whether an output's generation is still the most recent one.
    ///
    /// A host presenting outputs asynchronously drops any output for which
    /// this returns `false`: a newer render has started, and the newer one
    /// must win on the shared surface.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest_generation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ContentWidth;

    #[test]
    fn test_render_empty_text() {
        let renderer = Renderer::new(FontStore::new());
        let options = LayoutOptions::default();
        let output = renderer.render("", &options).unwrap();

        assert_eq!(output.lines, vec![String::new()]);
        // Minimum-height canvas: one line height plus both paddings.
        let expected =
            options.line_height_units() + 2.0 * options.effective_padding_y();
        assert!((output.geometry.content_height - expected).abs() < 0.001);
    }

    #[test]
    fn test_render_rejects_invalid_options() {
        let renderer = Renderer::new(FontStore::new());
        let options = LayoutOptions::default().with_font_size(-1.0);
        assert!(renderer.render("x", &options).is_err());
    }

    #[test]
    fn test_render_reports_fallback_readiness() {
        let renderer = Renderer::new(FontStore::new());
        let output = renderer
            .render("x", &LayoutOptions::default())
            .unwrap();
        assert_eq!(output.readiness, FontReadiness::Fallback);
    }

    #[test]
    fn test_generations_supersede() {
        let renderer = Renderer::new(FontStore::new());
        let options = LayoutOptions::default();

        let first = renderer.render("a", &options).unwrap();
        let second = renderer.render("b", &options).unwrap();

        assert!(second.generation > first.generation);
        assert!(!renderer.is_current(first.generation));
        assert!(renderer.is_current(second.generation));
    }

    #[test]
    fn test_render_is_idempotent_apart_from_generation() {
        let renderer = Renderer::new(FontStore::new());
        let options = LayoutOptions::default()
            .with_content_width(ContentWidth::Fixed(400.0));

        let first = renderer.render("some wrapped text here", &options).unwrap();
        let second = renderer.render("some wrapped text here", &options).unwrap();

        assert_eq!(first.lines, second.lines);
        assert_eq!(first.geometry, second.geometry);
        assert_eq!(first.pixels, second.pixels);
    }

    #[test]
    fn test_wrapped_count_respects_input_lines() {
        let renderer = Renderer::new(FontStore::new());
        let options = LayoutOptions::default();
        let text = "one\ntwo\n\nthree";
        let output = renderer.render(text, &options).unwrap();
        assert!(output.lines.len() >= text.split('\n').count());
    }
}
