//! SeedMedia Catalog Library
//!
//! This crate holds the read-only tables and shared types that both media
//! backends and the CLI depend on. Nothing here performs I/O except loading
//! an optional configuration file.
//!
//! # Overview
//!
//! - **Artwork targets**: the single list of album-cover filenames the demo
//!   store expects, plus a parser that turns a filename into display labels
//! - **Genre profiles**: palette, tempo, tonal center, and chords per genre
//! - **Note table**: note names to frequencies for melody synthesis
//! - **Configuration**: generator settings with serde defaults
//!
//! # Example
//!
//! ```
//! use seedmedia_spec::{ArtworkDescriptor, GenreProfile};
//!
//! let desc = ArtworkDescriptor::parse("album-jasmine-chen-neon-nights.jpg");
//! assert_eq!(desc.artist, "Jasmine Chen");
//! assert_eq!(desc.title, "Neon Nights");
//!
//! // Unknown genres fall back to the default profile.
//! assert_eq!(GenreProfile::lookup("polka").key, "pop");
//! ```
//!
//! # Modules
//!
//! - [`artwork`]: Target filename table and descriptor parsing
//! - [`config`]: Generator configuration
//! - [`error`]: Backend error trait and the unified generation error
//! - [`genre`]: Genre profile table
//! - [`hash`]: Seed derivation and content hashing
//! - [`notes`]: Note frequency table and melody pattern

pub mod artwork;
pub mod config;
pub mod error;
pub mod genre;
pub mod hash;
pub mod notes;

// Re-export commonly used types at the crate root
pub use artwork::{
    expected_artworks, title_case, truncate_label, ArtistEntry, ArtworkDescriptor, ARTISTS,
    EXPECTED_ARTWORKS, MAX_LABEL_CHARS,
};
pub use config::{BasicConfig, ConfigError, EnhancedConfig, GeneratorConfig, PaletteMode};
pub use error::{BackendError, GenerationError};
pub use genre::{GenreProfile, Rgb, BASIC_SWATCHES, DEFAULT_GENRE, ENHANCED_GENRE_CYCLE, GENRES};
pub use hash::{content_hash, derive_target_seed};
pub use notes::{note_frequency, MELODY_PATTERN, NOTE_TABLE};
