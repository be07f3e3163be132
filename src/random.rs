use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of uniform random indices, supplied to the generator at
/// construction time and advanced by it on every draw.
///
/// `bound` is always at least 1. Implementations must return a value in
/// `[0, bound)`; the generator indexes its pool with the result.
pub trait RandomSource {
    /// Returns a uniformly distributed index in `[0, bound)`.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// The process-wide default source, a handle to `rand`'s thread-local
/// generator. Its statistical quality and seeding strategy are the
/// `rand` crate's responsibility.
#[derive(Clone, Debug)]
pub struct DefaultRandom(ThreadRng);

impl DefaultRandom {
    /// Creates a source backed by [`rand::rng`].
    pub fn new() -> Self {
        Self(rand::rng())
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for DefaultRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}

/// A deterministic source seeded from a single integer. Identical seeds
/// yield identical index streams, for reproducible phrases and tests;
/// not a substitute for [`DefaultRandom`] when unpredictability matters.
#[derive(Clone, Debug)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Seeds a [`StdRng`] from `seed`.
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_random_stays_below_bound() {
        let mut source = DefaultRandom::new();
        for bound in [1, 2, 7, 7776] {
            for _ in 0..100 {
                assert!(source.next_index(bound) < bound);
            }
        }
    }

    #[test]
    fn bound_of_one_always_yields_zero() {
        let mut source = DefaultRandom::new();
        assert_eq!(source.next_index(1), 0);
    }

    #[test]
    fn identical_seeds_yield_identical_streams() {
        let mut a = SeededRandom::new(7);
        let mut b = SeededRandom::new(7);
        for _ in 0..64 {
            assert_eq!(a.next_index(1000), b.next_index(1000));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeededRandom::new(1);
        let mut b = SeededRandom::new(2);
        let stream_a: Vec<usize> = (0..64).map(|_| a.next_index(1000)).collect();
        let stream_b: Vec<usize> = (0..64).map(|_| b.next_index(1000)).collect();
        assert_ne!(stream_a, stream_b);
    }

    #[test]
    fn seeded_source_stays_below_bound() {
        let mut source = SeededRandom::new(42);
        for _ in 0..100 {
            assert!(source.next_index(6) < 6);
        }
    }
}
