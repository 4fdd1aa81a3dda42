//! Deterministic RNG wrapper using PCG32.
//!
//! Every random choice made while rendering a cover goes through this type,
//! seeded from the run's base seed and the target filename.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating it into both halves.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Create an RNG for one target from the run's base seed.
    pub fn for_target(base_seed: u32, key: &str) -> Self {
        Self::new(seedmedia_spec::derive_target_seed(base_seed, key))
    }

    /// Generate a random value in the given range.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.inner.gen_range(range)
    }

    /// Picks one element of a slice, or `None` when it is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_output() {
        let mut rng1 = DeterministicRng::new(42);
        let mut rng2 = DeterministicRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range(0..1000u32), rng2.gen_range(0..1000u32));
        }
    }

    #[test]
    fn test_targets_get_independent_streams() {
        let mut a = DeterministicRng::for_target(0, "album-voltage-electric-soul.jpg");
        let mut b = DeterministicRng::for_target(0, "album-echo-valley-horizons.jpg");

        let xs: Vec<u32> = (0..10).map(|_| a.gen_range(0..u32::MAX)).collect();
        let ys: Vec<u32> = (0..10).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_choose() {
        let mut rng = DeterministicRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        for _ in 0..20 {
            assert!([1, 2, 3].contains(rng.choose(&[1, 2, 3]).unwrap()));
        }

        let mut a = DeterministicRng::new(9);
        let mut b = DeterministicRng::new(9);
        let items = ["pop", "rock", "jazz", "folk"];
        for _ in 0..20 {
            assert_eq!(a.choose(&items), b.choose(&items));
        }
    }
}
