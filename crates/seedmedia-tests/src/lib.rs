//! SeedMedia End-to-End Test Infrastructure
//!
//! This crate runs whole generation passes against temporary project roots
//! and checks what lands on disk:
//!
//! - Generation: every target cover and clip is written with the configured
//!   dimensions and sample counts
//! - Idempotence: basic runs keep existing files, enhanced runs replace them
//! - **Determinism**: identical seeds produce byte-identical files
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p seedmedia-tests
//! ```
//!
//! Runs use a small configuration (tiny covers, short clips at a low sample
//! rate) so a full pass takes well under a second.

pub mod format_validators;
pub mod harness;

pub use format_validators::{validate_jpeg, validate_wav, FormatError, JpegInfo, WavInfo};
pub use harness::{TestHarness, SMALL_CONFIG};
