//! Post-processing applied to a finished clip before quantization.

/// Returns the largest absolute sample value.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0_f64, f64::max)
}

/// Scales the buffer so its peak equals `target_peak`.
///
/// Silent buffers are left untouched.
pub fn normalize_to_peak(samples: &mut [f64], target_peak: f64) {
    let current_peak = peak(samples);
    if current_peak > 0.0 {
        let gain = target_peak / current_peak;
        for sample in samples.iter_mut() {
            *sample *= gain;
        }
    }
}

/// Multiplies the final `fade_len` samples by a linear ramp from 1 to 0.
///
/// Buffers not longer than `fade_len` are left untouched.
pub fn apply_fade_out(samples: &mut [f64], fade_len: usize) {
    if samples.len() <= fade_len || fade_len == 0 {
        return;
    }
    let start = samples.len() - fade_len;
    let ramp = crate::envelope::linspace(1.0, 0.0, fade_len);
    for (sample, gain) in samples[start..].iter_mut().zip(ramp) {
        *sample *= gain;
    }
}

/// Converts samples to signed 16-bit PCM.
///
/// Samples are clamped to [-1.0, 1.0] and scaled by 32767, truncating
/// toward zero.
pub fn quantize_pcm16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * 32767.0) as i16)
        .collect()
}
