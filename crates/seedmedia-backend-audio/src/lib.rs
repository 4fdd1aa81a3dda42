//! SeedMedia Audio Backend
//!
//! Synthesizes the placeholder clips the demo store plays. Two variants are
//! provided:
//!
//! - **Placeholder tone** - a short 440 Hz sine followed by silence
//! - **Genre melody** - an eight-note pattern at the genre's tempo, with a
//!   per-note envelope, three harmonics, peak normalization and a fade-out
//!
//! # Determinism
//!
//! Clip synthesis uses no randomness at all: the same parameters always
//! produce byte-identical WAV files.
//!
//! # Example
//!
//! ```
//! use seedmedia_backend_audio::{generate_melody, MelodyParams};
//!
//! let result = generate_melody(&MelodyParams::new(1.0, 8000, "jazz")).unwrap();
//! assert_eq!(result.wav.num_samples, 8000);
//! assert!(result.peak <= 0.8 + 1e-9);
//! ```

pub mod envelope;
pub mod error;
pub mod generate;
pub mod processing;
pub mod synthesis;
pub mod wav;

pub use error::{AudioError, AudioResult};
pub use generate::{
    generate_melody, generate_placeholder_tone, render_melody, render_placeholder_tone,
    GenerateResult, MelodyParams, ToneParams,
};
pub use wav::WavResult;
