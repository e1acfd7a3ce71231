//! Error types for the fileconv library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fileconv operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during a conversion operation.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading inputs or writing output files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source file does not exist.
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Requested output dimensions are not positive.
    #[error("Invalid output dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The SVG rasterizer rejected the document or could not allocate a
    /// render target.
    #[error("SVG render error: {0}")]
    Render(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted and cannot be read.
    #[error("Document is encrypted")]
    Encrypted,

    /// The image library could not decode the source image.
    #[error("Image decode error: {0}")]
    Decode(String),

    /// Output encoding failed.
    #[error("Encoding error: {0}")]
    Encode(String),

    /// A node was handed a request variant it does not handle.
    #[error("Node '{node}' does not handle '{request}' requests")]
    UnsupportedRequest {
        node: &'static str,
        request: &'static str,
    },
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Error::Io(e),
            _ => Error::Encode(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InputNotFound(PathBuf::from("missing.svg"));
        assert_eq!(err.to_string(), "Input file not found: missing.svg");

        let err = Error::InvalidDimensions {
            width: 0,
            height: 600,
        };
        assert_eq!(err.to_string(), "Invalid output dimensions: 0x600");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
