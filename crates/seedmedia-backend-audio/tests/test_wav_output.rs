//! Decodes generated clips with an independent WAV reader.

use std::io::Cursor;

use seedmedia_backend_audio::{
    generate_melody, generate_placeholder_tone, MelodyParams, ToneParams,
};

fn decode(wav: &[u8]) -> (hound::WavSpec, Vec<i16>) {
    let mut reader = hound::WavReader::new(Cursor::new(wav)).unwrap();
    let spec = reader.spec();
    let samples = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    (spec, samples)
}

#[test]
fn test_placeholder_tone_decodes() {
    let result = generate_placeholder_tone(&ToneParams::new(4.0, 44100)).unwrap();
    let (spec, samples) = decode(&result.wav.wav_data);

    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(samples.len(), 4 * 44100);

    // 0.1 * 32767 truncated
    let max = samples.iter().map(|s| s.unsigned_abs()).max().unwrap();
    assert!(max <= 3276);
    assert!(max > 3000);
    assert!(samples[2 * 44100..].iter().all(|&s| s == 0));
}

#[test]
fn test_melody_decodes_within_headroom() {
    let result = generate_melody(&MelodyParams::new(6.0, 22050, "electronic")).unwrap();
    let (spec, samples) = decode(&result.wav.wav_data);

    assert_eq!(spec.sample_rate, 22050);
    assert_eq!(samples.len(), 6 * 22050);

    let limit = (0.8 * 32767.0) as u16;
    let max = samples.iter().map(|s| s.unsigned_abs()).max().unwrap();
    assert!(max <= limit);
    assert!(max >= limit - 1);
    assert_eq!(*samples.last().unwrap(), 0);
}

#[test]
fn test_melody_is_deterministic() {
    let params = MelodyParams::new(3.0, 22050, "folk");
    let a = generate_melody(&params).unwrap();
    let b = generate_melody(&params).unwrap();
    assert_eq!(a.wav.wav_data, b.wav.wav_data);
    assert_eq!(a.wav.pcm_hash, b.wav.pcm_hash);
}

#[test]
fn test_every_cycle_genre_renders() {
    for genre in seedmedia_spec::ENHANCED_GENRE_CYCLE {
        let result = generate_melody(&MelodyParams::new(1.0, 8000, *genre)).unwrap();
        assert_eq!(result.genre, Some(*genre));
        assert!(result.peak > 0.0, "silent clip for {}", genre);
    }
}
