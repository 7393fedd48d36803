//! Seeded random number generation for simulation runs.
//!
//! [`SimRng`] wraps a seeded PRNG for reproducible sampling. For
//! parallel Monte Carlo, every run owns its own generator seeded through
//! [`derive_stream_seed`], so the ensemble is independent of execution
//! order and identical under sequential and parallel execution.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Simulation random number generator.
///
/// Seeded, reproducible generation of standard normal variates. The seed
/// is always an explicit input; there is no ambient global generator
/// anywhere in the engine.
///
/// # Examples
///
/// ```
/// use advisor_simulation::SimRng;
///
/// let mut a = SimRng::from_seed(42);
/// let mut b = SimRng::from_seed(42);
/// assert_eq!(a.gen_normal(), b.gen_normal());
/// ```
pub struct SimRng {
    inner: StdRng,
    seed: u64,
}

impl SimRng {
    /// Creates a generator initialised with the given seed.
    ///
    /// The same seed always produces the same sequence.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single standard normal variate (mean 0, std 1).
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with standard normal variates.
    ///
    /// Zero-allocation; the buffer is pre-allocated by the caller.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}

/// Derives an independent stream seed from a top-level seed and a stream
/// index.
///
/// SplitMix64 finalisation over `base + index · golden-ratio` gives
/// well-separated streams even for adjacent indices, so per-run
/// generators in a parallel fan-out never share state and the ensemble
/// stays reproducible from the top-level seed alone.
///
/// # Examples
///
/// ```
/// use advisor_simulation::derive_stream_seed;
///
/// assert_eq!(derive_stream_seed(42, 0), derive_stream_seed(42, 0));
/// assert_ne!(derive_stream_seed(42, 0), derive_stream_seed(42, 1));
/// ```
#[inline]
pub fn derive_stream_seed(base: u64, index: u64) -> u64 {
    let mut z = base.wrapping_add(index.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SimRng::from_seed(1234);
        let mut b = SimRng::from_seed(1234);
        for _ in 0..100 {
            assert_eq!(a.gen_normal(), b.gen_normal());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SimRng::from_seed(1);
        let mut b = SimRng::from_seed(2);
        let same = (0..10).filter(|_| a.gen_normal() == b.gen_normal()).count();
        assert!(same < 10);
    }

    #[test]
    fn test_fill_normal_matches_single_draws() {
        let mut a = SimRng::from_seed(7);
        let mut b = SimRng::from_seed(7);

        let mut buffer = vec![0.0; 16];
        a.fill_normal(&mut buffer);

        for &value in &buffer {
            assert_eq!(value, b.gen_normal());
        }
    }

    #[test]
    fn test_stream_seeds_deterministic_and_distinct() {
        let seeds: Vec<u64> = (0..64).map(|i| derive_stream_seed(42, i)).collect();
        let distinct: std::collections::BTreeSet<u64> = seeds.iter().copied().collect();
        assert_eq!(distinct.len(), seeds.len());
    }

    #[test]
    fn test_normal_sample_magnitude_is_sane() {
        let mut rng = SimRng::from_seed(99);
        let mut buffer = vec![0.0; 10_000];
        rng.fill_normal(&mut buffer);

        let mean: f64 = buffer.iter().sum::<f64>() / buffer.len() as f64;
        assert!(mean.abs() < 0.05, "sample mean {mean} too far from 0");
    }
}
