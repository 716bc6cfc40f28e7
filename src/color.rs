//! RGBA color type with parsing and alpha blending.
//!
//! This module provides the [`Rgba`] type, which represents colors using
//! floating-point RGBA components. It supports:
//!
//! - **Color creation**: From f32/u8 components or hex strings
//! - **String parsing**: `#rgb`/`#rrggbb`/`#rrggbbaa` hex and CSS-style names
//! - **Alpha blending**: Porter-Duff "over" compositing for glyph coverage
//! - **Raster output**: Conversion to packed 8-bit RGBA
//!
//! # Examples
//!
//! ```
//! use textplate::Rgba;
//!
//! let bg = Rgba::parse("#ffffff").unwrap();
//! let fg = Rgba::parse("black").unwrap();
//!
//! // Blend 50% coverage of fg over bg
//! let edge = fg.with_alpha(0.5).blend_over(bg);
//! assert_eq!(edge.to_rgba_u8(), [128, 128, 128, 255]);
//! ```

use crate::error::{Error, Result};
use std::fmt;

/// RGBA color with f32 components in range [0.0, 1.0].
///
/// Colors are stored as floating-point values for precision while blending
/// antialiased glyph coverage; raster output converts to packed 8-bit RGBA.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Recognized color names and their hex expansions.
///
/// Small on purpose: enough to cover the named-color strings the options
/// surface accepts. Anything else should be spelled as hex.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("white", "#ffffff"),
    ("red", "#ff0000"),
    ("green", "#008000"),
    ("blue", "#0000ff"),
    ("yellow", "#ffff00"),
    ("cyan", "#00ffff"),
    ("magenta", "#ff00ff"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("orange", "#ffa500"),
    ("purple", "#800080"),
    ("transparent", "#00000000"),
];

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Opaque black.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Create a new RGBA color from f32 components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from f32 RGB components.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from u8 RGB components.
    #[must_use]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: 1.0,
        }
    }

    /// Create a color from u8 RGBA components.
    #[must_use]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Parse a hex color string: `#rgb`, `#rrggbb`, or `#rrggbbaa`.
    ///
    /// The leading `#` is optional. Returns `None` for malformed input.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self::from_rgb_u8(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::from_rgb_u8(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self::from_rgba_u8(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Parse a color from a hex string or a recognized color name.
    ///
    /// # Errors
    /// Returns [`Error::InvalidColor`] when the input is neither valid hex
    /// nor a known name.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Some(color) = Self::from_hex(trimmed) {
            return Ok(color);
        }
        let lower = trimmed.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .and_then(|(_, hex)| Self::from_hex(hex))
            .ok_or_else(|| Error::InvalidColor(s.to_string()))
    }

    /// Return this color with a different alpha.
    #[must_use]
    pub const fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Porter-Duff "over" compositing: blend `self` over `other`.
    #[must_use]
    pub fn blend_over(self, other: Self) -> Self {
        // Values below this threshold are treated as fully transparent to
        // avoid dividing by a vanishing output alpha.
        const ALPHA_EPSILON: f32 = 1e-6;

        if self.a >= 1.0 {
            return self;
        }
        if self.a <= 0.0 {
            return other;
        }

        let inv_alpha = 1.0 - self.a;
        let out_a = other.a.mul_add(inv_alpha, self.a);

        if out_a <= ALPHA_EPSILON {
            return Self::TRANSPARENT;
        }

        Self {
            r: (other.r * other.a).mul_add(inv_alpha, self.r * self.a) / out_a,
            g: (other.g * other.a).mul_add(inv_alpha, self.g * self.a) / out_a,
            b: (other.b * other.a).mul_add(inv_alpha, self.b * self.a) / out_a,
            a: out_a,
        }
    }

    /// Convert to packed 8-bit RGBA, clamping components to [0, 1].
    #[must_use]
    pub fn to_rgba_u8(self) -> [u8; 4] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba_u8();
        if a == 255 {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_six_digit() {
        let c = Rgba::from_hex("#1a1a2e").unwrap();
        assert_eq!(c.to_rgba_u8(), [0x1a, 0x1a, 0x2e, 255]);
    }

    #[test]
    fn test_from_hex_three_digit() {
        let c = Rgba::from_hex("#fff").unwrap();
        assert_eq!(c, Rgba::WHITE);
    }

    #[test]
    fn test_from_hex_with_alpha() {
        let c = Rgba::from_hex("ff000080").unwrap();
        assert_eq!(c.to_rgba_u8(), [255, 0, 0, 128]);
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Rgba::from_hex("#12345").is_none());
        assert!(Rgba::from_hex("zzz").is_none());
        assert!(Rgba::from_hex("").is_none());
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(Rgba::parse("white").unwrap(), Rgba::WHITE);
        assert_eq!(Rgba::parse("Black").unwrap(), Rgba::BLACK);
        assert_eq!(Rgba::parse("grey").unwrap(), Rgba::parse("gray").unwrap());
        assert!((Rgba::parse("transparent").unwrap().a).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = Rgba::parse("not-a-color").unwrap_err();
        assert!(err.to_string().contains("not-a-color"));
    }

    #[test]
    fn test_blend_over_opaque() {
        assert_eq!(Rgba::BLACK.blend_over(Rgba::WHITE), Rgba::BLACK);
    }

    #[test]
    fn test_blend_over_transparent() {
        assert_eq!(Rgba::TRANSPARENT.blend_over(Rgba::WHITE), Rgba::WHITE);
    }

    #[test]
    fn test_blend_over_half() {
        let half = Rgba::BLACK.with_alpha(0.5).blend_over(Rgba::WHITE);
        assert!((half.r - 0.5).abs() < 0.01);
        assert!((half.a - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_display_roundtrip() {
        let c = Rgba::from_hex("#336699").unwrap();
        assert_eq!(c.to_string(), "#336699");
    }
}
