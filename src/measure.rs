//! Text width measurement.
//!
//! The wrapper treats measurement as an opaque synchronous oracle: a
//! function from string to width in logical units. Two implementations are
//! provided:
//!
//! - [`ResolvedFont`]: real glyph advances from a loaded font (fontdue),
//!   with a per-character advance cache. When no font resolves it degrades
//!   to cell-based estimates rather than failing.
//! - [`FixedAdvance`]: deterministic per-cell widths for tests and hosts
//!   without fonts.
//!
//! A [`FontStore`] holds parsed fonts keyed by family name and resolves an
//! ordered fallback list to a terminal state exactly once per render:
//! [`FontReadiness::Loaded`] or [`FontReadiness::Fallback`]. Resolution is
//! never retried mid-layout; measuring against a half-loaded font would
//! silently produce wrong widths.

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Fraction of the font size one terminal-style cell occupies in fallback
/// measurement. A wide (2-cell) CJK cluster comes out at one em.
const FALLBACK_CELL_ADVANCE: f32 = 0.5;

/// Ascent as a fraction of font size when the font carries no line metrics.
const FALLBACK_ASCENT: f32 = 0.8;

/// Tab advance in space widths.
const TAB_SPACES: f32 = 4.0;

/// Synchronous width oracle in logical units.
///
/// Implementations must be pure: the same input yields the same width for
/// the lifetime of the measurer.
pub trait TextMeasure {
    /// Width of `text` rendered on a single line.
    fn width(&self, text: &str) -> f32;
}

/// Terminal state of font resolution for a render cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontReadiness {
    /// A requested (or stored) font backs the measurements.
    Loaded,
    /// No font available; cell-based estimates back the measurements.
    Fallback,
}

/// Deterministic measurer: a constant advance per display cell.
///
/// Display cells follow `unicode-width`, so ASCII is one cell and wide CJK
/// is two. Used by tests and as the arithmetic behind degraded rendering.
#[derive(Clone, Copy, Debug)]
pub struct FixedAdvance {
    advance: f32,
}

impl FixedAdvance {
    /// Create a measurer charging `advance` units per display cell.
    #[must_use]
    pub const fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl TextMeasure for FixedAdvance {
    fn width(&self, text: &str) -> f32 {
        UnicodeWidthStr::width(text) as f32 * self.advance
    }
}

/// Parsed fonts keyed by family name.
#[derive(Default)]
pub struct FontStore {
    fonts: Vec<(String, fontdue::Font)>,
}

impl FontStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse font bytes and register them under a family name.
    ///
    /// # Errors
    /// Returns [`Error::FontParse`] when the bytes are not a usable font.
    pub fn load_bytes(&mut self, family: impl Into<String>, bytes: &[u8]) -> Result<()> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| Error::FontParse(e.to_string()))?;
        self.fonts.push((family.into(), font));
        Ok(())
    }

    /// Read a font file and register it under a family name.
    ///
    /// # Errors
    /// Returns [`Error::Io`] for read failures and [`Error::FontParse`] for
    /// unusable font data.
    pub fn load_file(&mut self, family: impl Into<String>, path: impl AsRef<Path>) -> Result<()> {
        let bytes = std::fs::read(path)?;
        self.load_bytes(family, &bytes)
    }

    /// Number of registered fonts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Whether the store holds no fonts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Resolve an ordered family fallback list to a measurer for one render.
    ///
    /// Families are matched case-insensitively in order. An empty list, or a
    /// list naming no stored family, falls back to the first stored font;
    /// an empty store resolves to cell-based fallback metrics. All paths are
    /// terminal states, so a render never re-resolves mid-layout.
    #[must_use]
    pub fn resolve(&self, families: &[String], size: f32) -> ResolvedFont<'_> {
        for family in families {
            if let Some((_, font)) = self
                .fonts
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(family))
            {
                return ResolvedFont::loaded(font, size);
            }
        }

        if let Some((name, font)) = self.fonts.first() {
            if !families.is_empty() {
                emit_log(
                    LogLevel::Warn,
                    &format!("no font matched {families:?}; using \"{name}\""),
                );
            }
            return ResolvedFont::loaded(font, size);
        }

        emit_log(
            LogLevel::Warn,
            "no fonts loaded; measuring with fixed-advance fallback metrics",
        );
        ResolvedFont::fallback(size)
    }
}

/// A font (or fallback metrics) bound to a size for one render cycle.
pub struct ResolvedFont<'a> {
    font: Option<&'a fontdue::Font>,
    size: f32,
    advance_cache: RefCell<HashMap<char, f32>>,
}

impl<'a> ResolvedFont<'a> {
    fn loaded(font: &'a fontdue::Font, size: f32) -> Self {
        Self {
            font: Some(font),
            size,
            advance_cache: RefCell::new(HashMap::new()),
        }
    }

    /// Fallback metrics with no backing font.
    #[must_use]
    pub fn fallback(size: f32) -> ResolvedFont<'static> {
        ResolvedFont {
            font: None,
            size,
            advance_cache: RefCell::new(HashMap::new()),
        }
    }

    /// Which terminal state this resolution reached.
    #[must_use]
    pub fn readiness(&self) -> FontReadiness {
        if self.font.is_some() {
            FontReadiness::Loaded
        } else {
            FontReadiness::Fallback
        }
    }

    /// The backing font, if one resolved.
    #[must_use]
    pub fn font(&self) -> Option<&'a fontdue::Font> {
        self.font
    }

    /// Font size in logical units.
    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Ascent above the top-anchored baseline at an arbitrary pixel size.
    #[must_use]
    pub fn ascent_at(&self, px: f32) -> f32 {
        self.font
            .and_then(|font| font.horizontal_line_metrics(px))
            .map_or(px * FALLBACK_ASCENT, |metrics| metrics.ascent)
    }

    /// Advance width of one character at the resolved size.
    fn advance(&self, ch: char) -> f32 {
        if ch == '\t' {
            return self.advance(' ') * TAB_SPACES;
        }
        if let Some(cached) = self.advance_cache.borrow().get(&ch) {
            return *cached;
        }
        let advance = match self.font {
            Some(font) => font.metrics(ch, self.size).advance_width,
            None => fallback_advance(ch, self.size),
        };
        self.advance_cache.borrow_mut().insert(ch, advance);
        advance
    }
}

impl TextMeasure for ResolvedFont<'_> {
    fn width(&self, text: &str) -> f32 {
        text.chars()
            .filter(|ch| *ch != '\r' && *ch != '\n')
            .map(|ch| self.advance(ch))
            .sum()
    }
}

/// Cell-based advance estimate for one character at a pixel size.
pub(crate) fn fallback_advance(ch: char, px: f32) -> f32 {
    let cells = if ch == '\t' {
        TAB_SPACES
    } else {
        UnicodeWidthChar::width(ch).unwrap_or(0) as f32
    };
    cells * px * FALLBACK_CELL_ADVANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_advance_per_cell() {
        let measure = FixedAdvance::new(10.0);
        assert!((measure.width("hello") - 50.0).abs() < f32::EPSILON);
        // Wide CJK counts two cells per cluster.
        assert!((measure.width("こん") - 40.0).abs() < f32::EPSILON);
        assert!(measure.width("").abs() < f32::EPSILON);
    }

    #[test]
    fn test_empty_store_resolves_to_fallback() {
        let store = FontStore::new();
        let resolved = store.resolve(&["Nonexistent".to_string()], 48.0);
        assert_eq!(resolved.readiness(), FontReadiness::Fallback);
        assert!(resolved.font().is_none());
    }

    #[test]
    fn test_fallback_width_is_cell_based() {
        let resolved = ResolvedFont::fallback(48.0);
        // One ASCII cell = half an em.
        assert!((resolved.width("ab") - 48.0).abs() < 0.001);
        // Wide cluster = one em.
        assert!((resolved.width("こ") - 48.0).abs() < 0.001);
    }

    #[test]
    fn test_fallback_tab_is_four_spaces() {
        let resolved = ResolvedFont::fallback(10.0);
        assert!((resolved.width("\t") - resolved.width("    ")).abs() < 0.001);
    }

    #[test]
    fn test_fallback_ascent() {
        let resolved = ResolvedFont::fallback(100.0);
        assert!((resolved.ascent_at(100.0) - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_measure_ignores_line_breaks() {
        let resolved = ResolvedFont::fallback(10.0);
        assert!((resolved.width("a\nb") - resolved.width("ab")).abs() < 0.001);
    }

    #[test]
    fn test_load_bytes_rejects_garbage() {
        let mut store = FontStore::new();
        let err = store.load_bytes("Bogus", &[0u8; 16]).unwrap_err();
        assert!(matches!(err, Error::FontParse(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_width_is_idempotent() {
        let resolved = ResolvedFont::fallback(12.0);
        let first = resolved.width("repeatable input");
        let second = resolved.width("repeatable input");
        assert!((first - second).abs() < f32::EPSILON);
    }
}
