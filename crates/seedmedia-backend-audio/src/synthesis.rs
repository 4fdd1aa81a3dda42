//! Additive tone synthesis.

use std::f64::consts::PI;

/// Harmonic partials as `(multiple of the fundamental, relative amplitude)`.
pub const HARMONIC_PARTIALS: &[(f64, f64)] = &[(1.0, 1.0), (2.0, 0.3), (3.0, 0.1)];

/// Fills a buffer with a sine at `frequency`, evaluated at each time in `times`.
pub fn sine(frequency: f64, amplitude: f64, times: &[f64]) -> Vec<f64> {
    times
        .iter()
        .map(|&t| amplitude * (2.0 * PI * frequency * t).sin())
        .collect()
}

/// Sums the harmonic partials of `frequency` at each time in `times`.
///
/// The result is not normalized; its peak can reach the sum of the partial
/// amplitudes.
pub fn harmonic_tone(frequency: f64, times: &[f64]) -> Vec<f64> {
    times
        .iter()
        .map(|&t| {
            HARMONIC_PARTIALS
                .iter()
                .map(|&(multiple, amplitude)| {
                    amplitude * (2.0 * PI * frequency * multiple * t).sin()
                })
                .sum()
        })
        .collect()
}
