//! Error types for artwork backend.

use seedmedia_spec::BackendError;
use thiserror::Error;

/// Result type for artwork operations.
pub type ArtworkResult<T> = Result<T, ArtworkError>;

/// Errors that can occur while rendering or encoding a cover.
#[derive(Debug, Error)]
pub enum ArtworkError {
    /// Width or height is zero or too large to encode.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// JPEG quality outside 1..=100.
    #[error("invalid JPEG quality: {0}")]
    InvalidQuality(u8),

    /// The encoder rejected the image.
    #[error("JPEG encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

impl BackendError for ArtworkError {
    fn code(&self) -> &'static str {
        match self {
            ArtworkError::InvalidDimensions { .. } => "ARTWORK_001",
            ArtworkError::InvalidQuality(_) => "ARTWORK_002",
            ArtworkError::Encode(_) => "ARTWORK_003",
        }
    }

    fn category(&self) -> &'static str {
        "artwork"
    }
}
