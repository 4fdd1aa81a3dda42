//! Error types for audio backend.

use seedmedia_spec::BackendError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during audio generation.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Tempo too low or too high to yield a beat of at least one sample.
    #[error("invalid tempo: {tempo} BPM at {sample_rate} Hz")]
    InvalidTempo {
        /// The tempo in beats per minute.
        tempo: u32,
        /// Sample rate the beat was computed against.
        sample_rate: u32,
    },

    /// A note name is missing from the note table.
    #[error("unknown note '{note}'")]
    UnknownNote {
        /// The note name.
        note: String,
    },
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidSampleRate { .. } => "AUDIO_001",
            AudioError::InvalidDuration { .. } => "AUDIO_002",
            AudioError::InvalidTempo { .. } => "AUDIO_003",
            AudioError::UnknownNote { .. } => "AUDIO_004",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}
