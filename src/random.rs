//! Randomness sources used for fixture synthesis.
//!
//! Prices and identifiers are drawn from a [`RandomSource`] handed to the
//! catalog at construction time instead of from ambient process state. The
//! server uses [`ThreadRandom`]; tests substitute a [`SeededRandom`] so runs
//! are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// A source of non-cryptographic randomness.
pub trait RandomSource: Send + Sync + fmt::Debug {
    /// Returns a float uniformly distributed in `[0, 1)`.
    fn next_f64(&self) -> f64;

    /// Fills `dest` with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]);
}

/// Draws from the calling thread's generator. Holds no state of its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&self) -> f64 {
        rand::rng().random::<f64>()
    }

    fn fill_bytes(&self, dest: &mut [u8]) {
        rand::rng().fill_bytes(dest);
    }
}

/// A deterministic source seeded from a `u64`.
///
/// Two instances built from the same seed yield the same sequence, but
/// successive draws from one instance still differ.
pub struct SeededRandom {
    seed: u64,
    inner: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

// StdRng state is not worth printing
impl fmt::Debug for SeededRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededRandom")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&self) -> f64 {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random::<f64>()
    }

    fn fill_bytes(&self, dest: &mut [u8]) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .fill_bytes(dest);
    }
}
