//! Error types for textplate.

use std::fmt;
use std::io;

/// Result type alias for textplate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for textplate operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from font loading or image export.
    Io(io::Error),
    /// Invalid color format (e.g., malformed hex string or unknown name).
    InvalidColor(String),
    /// Layout options failed validation (e.g., non-positive font size).
    InvalidOptions(String),
    /// Raster dimension error (e.g., zero width/height after scaling).
    InvalidDimensions { width: u32, height: u32 },
    /// Font data could not be parsed.
    FontParse(String),
    /// PNG encoding failed.
    Encode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::InvalidOptions(s) => write!(f, "invalid layout options: {s}"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid raster dimensions: {width}x{height}")
            }
            Self::FontParse(s) => write!(f, "font parse error: {s}"),
            Self::Encode(s) => write!(f, "PNG encode error: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Self::Encode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidColor("not-a-color".to_string());
        assert!(err.to_string().contains("invalid color format"));

        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("0x100"));

        let err = Error::InvalidOptions("font_size must be positive".to_string());
        assert!(err.to_string().contains("font_size"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
