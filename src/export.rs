//! PNG export: encoded bytes, files, and default filenames.
//!
//! The raster surface exports losslessly as PNG, either as in-memory bytes
//! (for hosts that hand them to a clipboard or download sink) or straight
//! to a file. Encode and I/O failures surface as [`Error`] values; they
//! never poison the renderer, and the next render proceeds normally.

use crate::error::{Error, Result};
use crate::raster::PixelBuffer;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Encode a pixel buffer as PNG bytes.
///
/// # Errors
/// Returns [`Error::Encode`] when the buffer cannot be encoded.
pub fn to_png_bytes(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let image = RgbaImage::from_raw(buffer.width, buffer.height, buffer.to_rgba_bytes())
        .ok_or_else(|| Error::Encode("pixel data does not match dimensions".to_string()))?;

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Encode a pixel buffer and write it to `path`.
///
/// # Errors
/// Returns [`Error::Encode`] for encode failures and [`Error::Io`] for
/// write failures.
pub fn write_png(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<()> {
    let bytes = to_png_bytes(buffer)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Timestamp-based default filename: `text-image-<stamp>.png`.
///
/// The stamp is UTC ISO-8601 with colons and the fractional dot replaced by
/// dashes, millisecond precision.
#[must_use]
pub fn default_filename() -> String {
    let stamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S-%3fZ");
    format!("text-image-{stamp}.png")
}

/// Normalize a user-supplied filename: blank input falls back to
/// [`default_filename`], and a missing `.png` suffix is appended.
#[must_use]
pub fn normalize_filename(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return default_filename();
    }
    if trimmed.to_ascii_lowercase().ends_with(".png") {
        trimmed.to_string()
    } else {
        format!("{trimmed}.png")
    }
}
