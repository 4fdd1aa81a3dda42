//! JPEG encoding.
//!
//! Baseline JPEG through the `image` crate's encoder. The encoder has no
//! timestamps or metadata, so identical pixels at the same quality encode to
//! identical bytes.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::canvas::Canvas;
use crate::error::{ArtworkError, ArtworkResult};

/// Largest side a JPEG frame header can describe.
pub const MAX_JPEG_SIDE: u32 = u16::MAX as u32;

/// Checks that a cover of this size can be rendered and encoded.
pub fn validate_dimensions(width: u32, height: u32) -> ArtworkResult<()> {
    if width == 0 || height == 0 || width > MAX_JPEG_SIDE || height > MAX_JPEG_SIDE {
        return Err(ArtworkError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Encodes a canvas as JPEG at `quality` (1-100).
pub fn encode_jpeg(canvas: &Canvas, quality: u8) -> ArtworkResult<Vec<u8>> {
    validate_dimensions(canvas.width, canvas.height)?;
    if !(1..=100).contains(&quality) {
        return Err(ArtworkError::InvalidQuality(quality));
    }

    let rgb = canvas.to_rgb8();
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality).write_image(
        &rgb,
        canvas.width,
        canvas.height,
        ExtendedColorType::Rgb8,
    )?;
    Ok(buffer)
}
