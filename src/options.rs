//! Immutable per-render layout configuration.
//!
//! A [`LayoutOptions`] value is a snapshot: the host owns whatever mutable
//! settings it likes (sliders, config files) and constructs a fresh snapshot
//! for each render call. The layout pipeline never mutates it.

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Floor for resolved content width in logical units.
pub const MIN_CONTENT_WIDTH: f32 = 200.0;

/// Floor for horizontal padding in logical units.
pub const MIN_PADDING_X: f32 = 16.0;

/// Default fraction of a container width used when deriving content width.
pub const DEFAULT_CONTAINER_FRACTION: f32 = 0.9;

/// How the target content width is chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContentWidth {
    /// Fixed logical width.
    Fixed(f32),
    /// Fraction of a host-measured container width.
    OfContainer { container: f32, fraction: f32 },
}

impl ContentWidth {
    /// Resolve to a concrete logical width, applying the
    /// [`MIN_CONTENT_WIDTH`] floor.
    #[must_use]
    pub fn resolve(self) -> f32 {
        let width = match self {
            Self::Fixed(w) => w,
            Self::OfContainer {
                container,
                fraction,
            } => container * fraction,
        };
        width.max(MIN_CONTENT_WIDTH)
    }
}

/// Vertical placement policy for the wrapped text block.
///
/// Both policies exist in the wild for this kind of canvas; the choice is
/// explicit rather than implied by the geometry math. With the default
/// content-driven height they coincide; they diverge once
/// [`LayoutOptions::min_height`] raises the canvas above its content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalAnchor {
    /// First line sits at `padding_y` from the top.
    #[default]
    Top,
    /// Text block is centered in the available height.
    Center,
}

/// Immutable options for one render invocation.
///
/// # Examples
///
/// ```
/// use textplate::{ContentWidth, LayoutOptions};
///
/// let options = LayoutOptions::default()
///     .with_font_size(32.0)
///     .with_content_width(ContentWidth::Fixed(600.0));
/// assert!(options.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutOptions {
    /// Font size in logical (device-independent) units.
    pub font_size: f32,
    /// Line height as a multiplier of `font_size`.
    pub line_height: f32,
    /// Ordered font-family fallback list, resolved against a `FontStore`.
    pub font_family: Vec<String>,
    /// Horizontal padding in logical units (floored at [`MIN_PADDING_X`]).
    pub padding_x: f32,
    /// Vertical padding in logical units.
    pub padding_y: f32,
    /// Replace `padding_y` with `font_size * 2` at render time.
    pub scale_padding_with_font: bool,
    /// Background fill color.
    pub background: Rgba,
    /// Text color.
    pub foreground: Rgba,
    /// Target content width policy.
    pub content_width: ContentWidth,
    /// Optional floor for content height in logical units.
    pub min_height: Option<f32>,
    /// Device pixel density (physical pixels per logical unit).
    pub density: f32,
    /// Export-time resolution multiplier, >= 1.
    pub output_scale: f32,
    /// Vertical placement policy.
    pub anchor: VerticalAnchor,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            font_size: 48.0,
            line_height: 1.3,
            font_family: Vec::new(),
            padding_x: 42.0,
            padding_y: 96.0,
            scale_padding_with_font: false,
            background: Rgba::WHITE,
            foreground: Rgba::BLACK,
            content_width: ContentWidth::Fixed(800.0),
            min_height: None,
            density: 1.0,
            output_scale: 1.0,
            anchor: VerticalAnchor::Top,
        }
    }
}

impl LayoutOptions {
    /// Set the font size.
    #[must_use]
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the line height multiplier.
    #[must_use]
    pub fn with_line_height(mut self, multiplier: f32) -> Self {
        self.line_height = multiplier;
        self
    }

    /// Set the ordered font-family fallback list.
    #[must_use]
    pub fn with_font_family<I, S>(mut self, families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.font_family = families.into_iter().map(Into::into).collect();
        self
    }

    /// Set horizontal and vertical padding.
    #[must_use]
    pub fn with_padding(mut self, x: f32, y: f32) -> Self {
        self.padding_x = x;
        self.padding_y = y;
        self
    }

    /// Set background and text colors.
    #[must_use]
    pub fn with_colors(mut self, background: Rgba, foreground: Rgba) -> Self {
        self.background = background;
        self.foreground = foreground;
        self
    }

    /// Set the content width policy.
    #[must_use]
    pub fn with_content_width(mut self, width: ContentWidth) -> Self {
        self.content_width = width;
        self
    }

    /// Derive content width from a container measurement with the default
    /// fraction.
    #[must_use]
    pub fn with_container_width(self, container: f32) -> Self {
        self.with_content_width(ContentWidth::OfContainer {
            container,
            fraction: DEFAULT_CONTAINER_FRACTION,
        })
    }

    /// Set a content height floor.
    #[must_use]
    pub fn with_min_height(mut self, min_height: f32) -> Self {
        self.min_height = Some(min_height);
        self
    }

    /// Set the device pixel density.
    #[must_use]
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Set the export resolution multiplier.
    #[must_use]
    pub fn with_output_scale(mut self, scale: f32) -> Self {
        self.output_scale = scale;
        self
    }

    /// Set the vertical placement policy.
    #[must_use]
    pub fn with_anchor(mut self, anchor: VerticalAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Line height in logical units.
    #[must_use]
    pub fn line_height_units(&self) -> f32 {
        self.font_size * self.line_height
    }

    /// Effective horizontal padding after the [`MIN_PADDING_X`] floor.
    #[must_use]
    pub fn effective_padding_x(&self) -> f32 {
        self.padding_x.max(MIN_PADDING_X)
    }

    /// Effective vertical padding, honoring `scale_padding_with_font`.
    #[must_use]
    pub fn effective_padding_y(&self) -> f32 {
        if self.scale_padding_with_font {
            self.font_size * 2.0
        } else {
            self.padding_y
        }
    }

    /// Combined density and export scale applied to pixel dimensions.
    #[must_use]
    pub fn pixel_scale(&self) -> f32 {
        self.density * self.output_scale
    }

    /// Validate option values before layout.
    ///
    /// # Errors
    /// Returns [`Error::InvalidOptions`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(self.font_size > 0.0 && self.font_size.is_finite()) {
            return Err(Error::InvalidOptions(format!(
                "font_size must be positive, got {}",
                self.font_size
            )));
        }
        if !(self.line_height > 0.0 && self.line_height.is_finite()) {
            return Err(Error::InvalidOptions(format!(
                "line_height must be positive, got {}",
                self.line_height
            )));
        }
        if self.padding_x < 0.0 || self.padding_y < 0.0 {
            return Err(Error::InvalidOptions(format!(
                "padding must be non-negative, got ({}, {})",
                self.padding_x, self.padding_y
            )));
        }
        if !(self.density > 0.0 && self.density.is_finite()) {
            return Err(Error::InvalidOptions(format!(
                "density must be positive, got {}",
                self.density
            )));
        }
        if !(self.output_scale >= 1.0 && self.output_scale.is_finite()) {
            return Err(Error::InvalidOptions(format!(
                "output_scale must be >= 1, got {}",
                self.output_scale
            )));
        }
        Ok(())
    }
}
