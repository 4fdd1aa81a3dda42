//! WAV file format validator.

use super::FormatError;

/// Information extracted from a WAV file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavInfo {
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Total number of samples (per channel).
    pub num_samples: usize,
    /// Audio format code (1 = PCM).
    pub audio_format: u16,
    /// Byte rate (sample_rate * channels * bits_per_sample / 8).
    pub byte_rate: u32,
    /// Block alignment (channels * bits_per_sample / 8).
    pub block_align: u16,
    /// Offset of the first sample byte.
    pub data_offset: usize,
    /// Length of the data chunk in bytes.
    pub data_len: usize,
}

fn le_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn le_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

/// Validate WAV file format and extract header information.
///
/// Walks the RIFF chunk list, requiring a `fmt ` chunk before `data`.
pub fn validate_wav(data: &[u8]) -> Result<WavInfo, FormatError> {
    const MIN_HEADER_SIZE: usize = 44;

    if data.len() < MIN_HEADER_SIZE {
        return Err(FormatError::new(
            "WAV",
            format!(
                "File too short: {} bytes (minimum {} required)",
                data.len(),
                MIN_HEADER_SIZE
            ),
        ));
    }
    if &data[0..4] != b"RIFF" {
        return Err(FormatError::at_offset("WAV", "Invalid RIFF header", 0));
    }
    if le_u32(data, 4) as usize != data.len() - 8 {
        return Err(FormatError::at_offset(
            "WAV",
            format!("RIFF size {} does not match file length {}", le_u32(data, 4), data.len()),
            4,
        ));
    }
    if &data[8..12] != b"WAVE" {
        return Err(FormatError::at_offset("WAV", "Invalid WAVE format", 8));
    }

    let mut offset = 12;
    let mut fmt: Option<(u16, u16, u32, u32, u16, u16)> = None;

    while offset + 8 <= data.len() {
        let chunk_id = &data[offset..offset + 4];
        let chunk_size = le_u32(data, offset + 4) as usize;

        if chunk_id == b"fmt " {
            if chunk_size < 16 || offset + 8 + 16 > data.len() {
                return Err(FormatError::at_offset("WAV", "Truncated fmt chunk", offset));
            }
            let at = offset + 8;
            fmt = Some((
                le_u16(data, at),
                le_u16(data, at + 2),
                le_u32(data, at + 4),
                le_u32(data, at + 8),
                le_u16(data, at + 12),
                le_u16(data, at + 14),
            ));
        }

        if chunk_id == b"data" {
            let Some((audio_format, channels, sample_rate, byte_rate, block_align, bits)) = fmt
            else {
                return Err(FormatError::at_offset(
                    "WAV",
                    "data chunk found before fmt chunk",
                    offset,
                ));
            };
            let data_offset = offset + 8;
            if data_offset + chunk_size > data.len() {
                return Err(FormatError::at_offset("WAV", "Truncated data chunk", offset));
            }
            let num_samples = if block_align > 0 {
                chunk_size / block_align as usize
            } else {
                0
            };
            return Ok(WavInfo {
                channels,
                sample_rate,
                bits_per_sample: bits,
                num_samples,
                audio_format,
                byte_rate,
                block_align,
                data_offset,
                data_len: chunk_size,
            });
        }

        // Chunks are word-aligned
        let padded_size = (chunk_size + 1) & !1;
        offset += 8 + padded_size;
    }

    if fmt.is_none() {
        return Err(FormatError::new("WAV", "Missing fmt chunk"));
    }
    Err(FormatError::new("WAV", "Missing data chunk"))
}

/// Decodes the data chunk of a 16-bit PCM file.
pub fn pcm16_samples(data: &[u8]) -> Result<Vec<i16>, FormatError> {
    let info = validate_wav(data)?;
    if info.audio_format != 1 || info.bits_per_sample != 16 {
        return Err(FormatError::new(
            "WAV",
            format!(
                "expected 16-bit PCM, got format {} with {} bits",
                info.audio_format, info.bits_per_sample
            ),
        ));
    }
    Ok(data[info.data_offset..info.data_offset + info.data_len]
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Peak absolute level of 16-bit samples, scaled to 0.0..=1.0.
pub fn peak_level(samples: &[i16]) -> f64 {
    samples
        .iter()
        .map(|&s| (s as f64).abs() / i16::MAX as f64)
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_wav(samples: &[i16]) -> Vec<u8> {
        let data_len = samples.len() * 2;
        let mut out = Vec::new();
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&((36 + data_len) as u32).to_le_bytes());
        out.extend_from_slice(b"WAVEfmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&8000u32.to_le_bytes());
        out.extend_from_slice(&16000u32.to_le_bytes());
        out.extend_from_slice(&2u16.to_le_bytes());
        out.extend_from_slice(&16u16.to_le_bytes());
        out.extend_from_slice(b"data");
        out.extend_from_slice(&(data_len as u32).to_le_bytes());
        for s in samples {
            out.extend_from_slice(&s.to_le_bytes());
        }
        out
    }

    #[test]
    fn test_validate_minimal() {
        let wav = minimal_wav(&[0, 100, -200]);
        let info = validate_wav(&wav).unwrap();
        assert_eq!(info.sample_rate, 8000);
        assert_eq!(info.num_samples, 3);
        assert_eq!(pcm16_samples(&wav).unwrap(), vec![0, 100, -200]);
    }

    #[test]
    fn test_rejects_bad_magic() {
        let mut wav = minimal_wav(&[0; 4]);
        wav[0] = b'X';
        assert_eq!(validate_wav(&wav).unwrap_err().offset, Some(0));
    }

    #[test]
    fn test_rejects_short_file() {
        assert!(validate_wav(&[0u8; 10]).is_err());
    }

    #[test]
    fn test_peak_level() {
        assert_eq!(peak_level(&[]), 0.0);
        assert!((peak_level(&[0, -32767, 100]) - 1.0).abs() < 1e-12);
    }
}
