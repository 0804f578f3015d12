// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic [`RandomSource`] for tests.

use std::collections::VecDeque;

use mimic_core::RandomSource;

/// Replays queued rolls and indices in order.
///
/// Once a queue runs dry the fallback value is returned forever. The default
/// fallback roll is `0.99`, so `chance(p)` is false for every `p < 0.99` and
/// all optional branches stay off unless a test asks for them.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    rolls: VecDeque<f64>,
    indices: VecDeque<usize>,
    fallback_roll: f64,
    fallback_index: usize,
}

impl Default for ScriptedRandom {
    fn default() -> Self {
        Self {
            rolls: VecDeque::new(),
            indices: VecDeque::new(),
            fallback_roll: 0.99,
            fallback_index: 0,
        }
    }
}

impl ScriptedRandom {
    /// Every `chance` is false and every pick is the first element.
    pub fn quiet() -> Self {
        Self::default()
    }

    /// Every `chance` with a positive probability is true.
    pub fn eager() -> Self {
        Self {
            fallback_roll: 0.0,
            ..Self::default()
        }
    }

    /// Queue roll samples, consumed before the fallback.
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = f64>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Queue index picks, consumed before the fallback.
    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }

    /// Index returned once the queue is empty.
    pub fn with_fallback_index(mut self, index: usize) -> Self {
        self.fallback_index = index;
        self
    }

    /// Samples still queued, as `(rolls, indices)`.
    pub fn remaining(&self) -> (usize, usize) {
        (self.rolls.len(), self.indices.len())
    }
}

impl RandomSource for ScriptedRandom {
    fn roll(&mut self) -> f64 {
        self.rolls.pop_front().unwrap_or(self.fallback_roll)
    }

    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.indices.pop_front().unwrap_or(self.fallback_index) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_then_falls_back() {
        let mut rng = ScriptedRandom::quiet()
            .with_rolls([0.1, 0.7])
            .with_indices([3]);
        assert!(rng.chance(0.5));
        assert!(!rng.chance(0.5));
        assert!(!rng.chance(0.5));
        assert_eq!(rng.index(5), 3);
        assert_eq!(rng.index(5), 0);
        assert_eq!(rng.remaining(), (0, 0));
    }

    #[test]
    fn eager_fires_every_positive_chance() {
        let mut rng = ScriptedRandom::eager();
        assert!(rng.chance(0.01));
        assert!(!rng.chance(0.0));
    }

    #[test]
    fn index_wraps_into_range() {
        let mut rng = ScriptedRandom::quiet().with_indices([7]);
        assert_eq!(rng.index(3), 1);
    }
}
