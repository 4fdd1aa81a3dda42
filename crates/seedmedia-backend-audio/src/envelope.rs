//! Per-note amplitude envelopes.
//!
//! Envelope stages are expressed as fractions of the note length rather than
//! absolute times, so every note in a melody gets the same shape regardless
//! of tempo. Ramps are linear and include both endpoints.

/// ADSR envelope shape as fractions of the note length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEnvelope {
    /// Attack length as a fraction of the note (ramp 0 -> 1).
    pub attack: f64,
    /// Decay length as a fraction of the note (ramp 1 -> sustain).
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release length as a fraction of the note (ramp sustain -> 0).
    pub release: f64,
}

impl Default for NoteEnvelope {
    fn default() -> Self {
        Self {
            attack: 0.1,
            decay: 0.2,
            sustain: 0.7,
            release: 0.3,
        }
    }
}

impl NoteEnvelope {
    /// Stage lengths in samples for a note of `len` samples:
    /// `(attack, decay, release)`, each rounded down. Later stages are cut
    /// so the three never exceed `len`.
    pub fn stage_lengths(&self, len: usize) -> (usize, usize, usize) {
        let n = len as f64;
        let stage = |fraction: f64| (n * fraction.max(0.0)) as usize;
        let attack = stage(self.attack).min(len);
        let decay = stage(self.decay).min(len - attack);
        let release = stage(self.release).min(len - attack - decay);
        (attack, decay, release)
    }

    /// Renders the envelope for a note of `len` samples.
    ///
    /// The sustain plateau only exists between decay and release. When the
    /// release stage rounds to zero samples there is no plateau and the note
    /// holds full level after its decay.
    pub fn render(&self, len: usize) -> Vec<f64> {
        let (attack, decay, release) = self.stage_lengths(len);
        let mut envelope = vec![1.0; len];

        envelope[..attack].copy_from_slice(&linspace(0.0, 1.0, attack));
        envelope[attack..attack + decay].copy_from_slice(&linspace(1.0, self.sustain, decay));
        if release > 0 {
            let start = len - release;
            envelope[attack + decay..start].fill(self.sustain);
            envelope[start..].copy_from_slice(&linspace(self.sustain, 0.0, release));
        }

        envelope
    }
}

/// `count` evenly spaced values from `start` to `end`, both included.
///
/// A single value is `start`; zero values is an empty vector.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            values[count - 1] = end;
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let values = linspace(0.0, 2.0, 5);
        assert_eq!(values, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_stage_lengths_round_down() {
        let env = NoteEnvelope::default();
        assert_eq!(env.stage_lengths(100), (10, 20, 30));
        assert_eq!(env.stage_lengths(9), (0, 1, 2));
        assert_eq!(env.stage_lengths(3), (0, 0, 0));
    }

    #[test]
    fn test_render_shape() {
        let env = NoteEnvelope::default();
        let curve = env.render(100);

        assert_eq!(curve.len(), 100);
        // Attack starts silent and reaches full level
        assert_eq!(curve[0], 0.0);
        assert_eq!(curve[9], 1.0);
        // Decay lands on sustain
        assert_eq!(curve[10], 1.0);
        assert!((curve[29] - 0.7).abs() < 1e-12);
        // Plateau
        assert!(curve[30..70].iter().all(|&v| (v - 0.7).abs() < 1e-12));
        // Release ends silent
        assert!((curve[70] - 0.7).abs() < 1e-12);
        assert_eq!(curve[99], 0.0);
    }

    #[test]
    fn test_render_without_release_holds_full_level() {
        let env = NoteEnvelope::default();
        for len in 1..=3 {
            assert_eq!(env.stage_lengths(len).2, 0);
            assert!(env.render(len).iter().all(|&v| v == 1.0));
        }
        // Four samples get a one-sample release and a sustain plateau
        let curve = env.render(4);
        assert_eq!(env.stage_lengths(4), (0, 0, 1));
        assert!(curve[..3].iter().all(|&v| (v - 0.7).abs() < 1e-12));
        assert_eq!(curve[3], 0.7);
    }

    #[test]
    fn test_oversized_stages_are_cut() {
        let env = NoteEnvelope {
            attack: 0.6,
            decay: 0.6,
            sustain: 0.5,
            release: 0.6,
        };
        assert_eq!(env.stage_lengths(10), (6, 4, 0));
        assert_eq!(env.render(10).len(), 10);
    }

    #[test]
    fn test_render_bounds() {
        let env = NoteEnvelope::default();
        for len in [0, 1, 2, 7, 10, 33, 1000, 22050] {
            let curve = env.render(len);
            assert_eq!(curve.len(), len);
            assert!(curve.iter().all(|&v| (0.0..=1.0).contains(&v)));
        }
    }
}
