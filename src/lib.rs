//! `textplate` - Text-to-image layout and rasterization engine
//!
//! Measures text against a width budget, wraps it at word or
//! grapheme-cluster boundaries, lays the lines out vertically, and paints
//! the result onto an RGBA pixel buffer exportable as PNG at arbitrary
//! resolution scale.
//!
//! # Pipeline
//!
//! ```
//! use textplate::{export, FontStore, LayoutOptions, Renderer};
//!
//! let renderer = Renderer::new(FontStore::new());
//! let options = LayoutOptions::default();
//! let output = renderer.render("hello world", &options).unwrap();
//! let png = export::to_png_bytes(&output.pixels).unwrap();
//! assert!(!png.is_empty());
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_precision_loss)] // Intentional for layout math
#![allow(clippy::module_name_repetitions)] // Allow LayoutOptions etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod color;
pub mod error;
pub mod event;
pub mod export;
pub mod layout;
pub mod measure;
pub mod options;
pub mod raster;
pub mod render;
pub mod segment;
pub mod wrap;

// Re-export core types at crate root
pub use color::Rgba;
pub use error::{Error, Result};
pub use event::{LogLevel, emit_log, set_log_callback};
pub use layout::{CanvasGeometry, compute_geometry};
pub use measure::{FixedAdvance, FontReadiness, FontStore, ResolvedFont, TextMeasure};
pub use options::{ContentWidth, LayoutOptions, VerticalAnchor};
pub use raster::{PixelBuffer, paint};
pub use render::{RenderOutput, Renderer};
pub use segment::{Granularity, segment, segment_with};
pub use wrap::{wrap_lines, wrap_lines_with};
