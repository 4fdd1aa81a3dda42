//! Deterministic WAV file writer.
//!
//! This module writes mono 16-bit PCM WAV files with a canonical 44-byte
//! header and no extra chunks, so identical samples always encode to
//! identical bytes. The hash of the PCM data identifies a clip's content.

mod format;
mod result;
mod writer;


pub use format::WavFormat;
pub use result::WavResult;
pub use writer::{pcm16_to_bytes, wav_header, write_wav_to_vec, WAV_HEADER_LEN};
