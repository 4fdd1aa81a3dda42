//! Clip generation entry points.
//!
//! Both variants render floating-point samples first, then quantize and
//! encode them. The rendering functions are public so callers (and tests)
//! can inspect a clip before it is reduced to 16-bit PCM.

use seedmedia_spec::{note_frequency, GenreProfile, MELODY_PATTERN};

use crate::envelope::{linspace, NoteEnvelope};
use crate::error::{AudioError, AudioResult};
use crate::processing::{apply_fade_out, normalize_to_peak, peak, quantize_pcm16};
use crate::synthesis::{harmonic_tone, sine};
use crate::wav::WavResult;

/// Peak level melodies are normalized to.
pub const NORMALIZE_HEADROOM: f64 = 0.8;
/// Length of the closing fade-out on melodies.
pub const FADE_SECONDS: f64 = 2.0;
/// Gain applied to each melody note after its envelope.
pub const MELODY_NOTE_GAIN: f64 = 0.3;

/// Parameters for the single-tone placeholder clip.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneParams {
    /// Clip length in seconds.
    pub duration_seconds: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Tone frequency in Hz.
    pub frequency: f64,
    /// Tone amplitude (0.0 to 1.0).
    pub amplitude: f64,
    /// How long the tone sounds before silence.
    pub tone_seconds: f64,
}

impl ToneParams {
    /// A 440 Hz tone at amplitude 0.1 for two seconds, then silence.
    pub fn new(duration_seconds: f64, sample_rate: u32) -> Self {
        Self {
            duration_seconds,
            sample_rate,
            frequency: 440.0,
            amplitude: 0.1,
            tone_seconds: 2.0,
        }
    }
}

/// Parameters for a genre melody clip.
#[derive(Debug, Clone, PartialEq)]
pub struct MelodyParams {
    /// Clip length in seconds.
    pub duration_seconds: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Genre name; unknown genres use the default profile.
    pub genre: String,
}

impl MelodyParams {
    /// Creates melody parameters.
    pub fn new(duration_seconds: f64, sample_rate: u32, genre: impl Into<String>) -> Self {
        Self {
            duration_seconds,
            sample_rate,
            genre: genre.into(),
        }
    }
}

/// Result of clip generation.
#[derive(Debug)]
pub struct GenerateResult {
    /// Encoded WAV file.
    pub wav: WavResult,
    /// Genre profile the melody used, if any.
    pub genre: Option<&'static str>,
    /// Tempo in BPM, if any.
    pub tempo: Option<u32>,
    /// Peak absolute level before quantization.
    pub peak: f64,
}

/// Renders and encodes the single-tone placeholder clip.
pub fn generate_placeholder_tone(params: &ToneParams) -> AudioResult<GenerateResult> {
    let samples = render_placeholder_tone(params)?;
    let pcm = quantize_pcm16(&samples);

    Ok(GenerateResult {
        wav: WavResult::from_pcm16(&pcm, params.sample_rate),
        genre: None,
        tempo: None,
        peak: peak(&samples),
    })
}

/// Renders the single-tone clip as floating-point samples.
///
/// The tone's time axis spans `[0, tone_seconds]` inclusive; clips shorter
/// than the tone are cut off.
pub fn render_placeholder_tone(params: &ToneParams) -> AudioResult<Vec<f64>> {
    let total = total_samples(params.duration_seconds, params.sample_rate)?;
    let tone_len = (params.tone_seconds.max(0.0) * params.sample_rate as f64) as usize;

    let times = linspace(0.0, params.tone_seconds, tone_len);
    let mut samples = sine(params.frequency, params.amplitude, &times);
    samples.resize(total, 0.0);
    Ok(samples)
}

/// Renders and encodes a genre melody clip.
pub fn generate_melody(params: &MelodyParams) -> AudioResult<GenerateResult> {
    let profile = GenreProfile::lookup(&params.genre);
    let samples = render_melody(params)?;
    let pcm = quantize_pcm16(&samples);

    Ok(GenerateResult {
        wav: WavResult::from_pcm16(&pcm, params.sample_rate),
        genre: Some(profile.key),
        tempo: Some(profile.tempo),
        peak: peak(&samples),
    })
}

/// Renders a genre melody as floating-point samples, normalized and faded.
pub fn render_melody(params: &MelodyParams) -> AudioResult<Vec<f64>> {
    let profile = GenreProfile::lookup(&params.genre);
    let total = total_samples(params.duration_seconds, params.sample_rate)?;
    let beat = beat_samples(profile.tempo, params.sample_rate)?;
    let rate = params.sample_rate as f64;
    let envelope = NoteEnvelope::default();

    let mut samples = vec![0.0; total];
    for (beat_index, start) in (0..total).step_by(beat).enumerate() {
        let note = MELODY_PATTERN[beat_index % MELODY_PATTERN.len()];
        let frequency = note_frequency(note).ok_or_else(|| AudioError::UnknownNote {
            note: note.to_string(),
        })?;

        let len = beat.min(total - start);
        let times = linspace(0.0, len as f64 / rate, len);
        let tone = harmonic_tone(frequency, &times);
        let gains = envelope.render(len);

        for ((out, sample), gain) in samples[start..start + len].iter_mut().zip(tone).zip(gains) {
            *out += sample * gain * MELODY_NOTE_GAIN;
        }
    }

    normalize_to_peak(&mut samples, NORMALIZE_HEADROOM);
    apply_fade_out(&mut samples, (FADE_SECONDS * rate) as usize);
    Ok(samples)
}

/// Samples per beat, rounded down.
pub fn beat_samples(tempo: u32, sample_rate: u32) -> AudioResult<usize> {
    let beat = if tempo == 0 {
        0
    } else {
        sample_rate as u64 * 60 / tempo as u64
    };
    if beat == 0 {
        return Err(AudioError::InvalidTempo { tempo, sample_rate });
    }
    Ok(beat as usize)
}

fn total_samples(duration_seconds: f64, sample_rate: u32) -> AudioResult<usize> {
    if sample_rate == 0 {
        return Err(AudioError::InvalidSampleRate { rate: sample_rate });
    }
    if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
        return Err(AudioError::InvalidDuration {
            duration: duration_seconds,
        });
    }
    Ok((duration_seconds * sample_rate as f64) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_length_and_silence() {
        let samples = render_placeholder_tone(&ToneParams::new(3.0, 1000)).unwrap();
        assert_eq!(samples.len(), 3000);
        assert!(samples[2000..].iter().all(|&s| s == 0.0));
        assert!(samples[..2000].iter().any(|&s| s.abs() > 0.09));
        assert!(samples.iter().all(|s| s.abs() <= 0.1 + 1e-12));
    }

    #[test]
    fn test_short_tone_is_cut_off() {
        let samples = render_placeholder_tone(&ToneParams::new(1.0, 1000)).unwrap();
        assert_eq!(samples.len(), 1000);
    }

    #[test]
    fn test_tone_rejects_bad_params() {
        let err = render_placeholder_tone(&ToneParams::new(1.0, 0)).unwrap_err();
        assert!(matches!(err, AudioError::InvalidSampleRate { rate: 0 }));

        for duration in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = render_placeholder_tone(&ToneParams::new(duration, 44100)).unwrap_err();
            assert!(matches!(err, AudioError::InvalidDuration { .. }));
        }
    }

    #[test]
    fn test_beat_samples() {
        assert_eq!(beat_samples(120, 44100).unwrap(), 22050);
        assert_eq!(beat_samples(140, 44100).unwrap(), 18900);
        assert_eq!(beat_samples(128, 44100).unwrap(), 20671);
        assert!(beat_samples(0, 44100).is_err());
        assert!(beat_samples(120, 1).is_err());
    }

    #[test]
    fn test_melody_peak_and_fade() {
        let params = MelodyParams::new(5.0, 8000, "jazz");
        let samples = render_melody(&params).unwrap();

        assert_eq!(samples.len(), 40000);
        let max = peak(&samples);
        assert!(max <= NORMALIZE_HEADROOM + 1e-12);
        assert!(max > 0.5);
        assert_eq!(*samples.last().unwrap(), 0.0);
    }

    #[test]
    fn test_melody_without_fade_when_short() {
        // One second at 8 kHz is shorter than the fade window
        let samples = render_melody(&MelodyParams::new(1.0, 8000, "pop")).unwrap();
        assert_eq!(samples.len(), 8000);
        assert!((peak(&samples) - NORMALIZE_HEADROOM).abs() < 1e-9);
    }

    #[test]
    fn test_melody_reports_profile() {
        let result = generate_melody(&MelodyParams::new(1.0, 8000, "Rock")).unwrap();
        assert_eq!(result.genre, Some("rock"));
        assert_eq!(result.tempo, Some(140));
        assert_eq!(result.wav.num_samples, 8000);
    }

    #[test]
    fn test_unknown_genre_matches_default() {
        let unknown = generate_melody(&MelodyParams::new(1.0, 8000, "sea shanty")).unwrap();
        let pop = generate_melody(&MelodyParams::new(1.0, 8000, "pop")).unwrap();
        assert_eq!(unknown.genre, Some("pop"));
        assert_eq!(unknown.wav.pcm_hash, pop.wav.pcm_hash);
    }

    #[test]
    fn test_genres_differ() {
        let pop = generate_melody(&MelodyParams::new(1.0, 8000, "pop")).unwrap();
        let rock = generate_melody(&MelodyParams::new(1.0, 8000, "rock")).unwrap();
        assert_ne!(pop.wav.pcm_hash, rock.wav.pcm_hash);
    }
}
