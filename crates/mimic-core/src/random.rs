// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Injectable randomness for candidate selection and style mutation.
//!
//! Every probabilistic branch in the responder goes through a
//! [`RandomSource`], so tests can force each branch deterministically.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform samples.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    fn index(&mut self, len: usize) -> usize;

    /// True with the given probability. A probability of 0 never fires and
    /// does not consume a sample.
    fn chance(&mut self, probability: f64) -> bool {
        if probability <= 0.0 {
            return false;
        }
        self.roll() < probability
    }
}

/// Pick one element uniformly, or `None` for an empty slice.
pub fn choose<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let i = rng.index(items.len()).min(items.len() - 1);
    items.get(i)
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Unseeded, thread-local generator for production use.
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn roll(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}
