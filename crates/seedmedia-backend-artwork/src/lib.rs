//! SeedMedia Artwork Backend
//!
//! Renders placeholder album covers and encodes them as JPEG. Output is
//! byte-identical for the same filename, parameters, and seed.
//!
//! # Variants
//!
//! - **Basic**: vertical two-swatch gradient, half-transparent banner, and
//!   the album's display name
//! - **Enhanced**: blurred radial gradient in a genre palette, a random
//!   overlay of circles, lines, or rectangles, and title plus artist on a
//!   darker banner
//!
//! # Example
//!
//! ```
//! use seedmedia_backend_artwork::{generate_enhanced_artwork, CoverParams};
//! use seedmedia_spec::{ArtworkDescriptor, PaletteMode};
//!
//! let desc = ArtworkDescriptor::parse("album-jasmine-chen-neon-nights.jpg");
//! let params = CoverParams {
//!     width: 120,
//!     height: 120,
//!     ..CoverParams::enhanced(42, PaletteMode::Genre)
//! };
//! let result = generate_enhanced_artwork(&desc, &params).unwrap();
//! assert_eq!(result.genre, Some("electronic"));
//! assert_eq!(&result.jpeg_data[..2], &[0xFF, 0xD8]);
//! ```
//!
//! # Determinism
//!
//! - PCG32 RNG seeded per target via BLAKE3 seed derivation
//! - All drawing is integer-positioned with no anti-aliasing
//! - The JPEG encoder writes no timestamps or metadata

pub mod blur;
pub mod canvas;
pub mod color;
pub mod error;
pub mod font;
pub mod generate;
pub mod gradient;
pub mod jpeg;
pub mod overlay;
pub mod rng;

pub use canvas::Canvas;
pub use color::Color;
pub use error::{ArtworkError, ArtworkResult};
pub use generate::{
    generate_basic_artwork, generate_enhanced_artwork, render_basic_cover, render_enhanced_cover,
    CoverParams, GenerateResult, RenderedCover,
};
pub use jpeg::encode_jpeg;
pub use overlay::OverlayPattern;
pub use rng::DeterministicRng;
