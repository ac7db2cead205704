//! Random sampling behind an injectable source.
//!
//! The generator only ever asks for "a uniform integer below `n`", so tests
//! can swap in a [`ScriptedSource`] and assert exact shuffles and picks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform random integers.
pub trait RandomSource {
    /// A uniform integer in `0..upper`. `upper` is always at least 1.
    fn below(&mut self, upper: usize) -> usize;

    /// A fair coin flip.
    fn coin(&mut self) -> bool {
        self.below(2) == 0
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn below(&mut self, upper: usize) -> usize {
        (**self).below(upper)
    }
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    /// Reproducible source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        RngSource(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn below(&mut self, upper: usize) -> usize {
        self.0.random_range(0..upper)
    }
}

/// Deterministic source that replays a fixed script.
///
/// Each call consumes the next value and reduces it modulo `upper`; once the
/// script runs out it cycles from the start. An empty script always yields 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: Vec<usize>,
    position: usize,
}

impl ScriptedSource {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            position: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedSource {
    fn below(&mut self, upper: usize) -> usize {
        if self.script.is_empty() {
            self.position += 1;
            return 0;
        }
        let value = self.script[self.position % self.script.len()];
        self.position += 1;
        value % upper
    }
}

/// Uniform in-place Fisher–Yates shuffle.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

/// Draw `count` distinct elements without replacement.
///
/// Shuffles a copy of `items` and truncates it to `min(count, items.len())`.
pub fn pick_unique<T: Clone>(items: &[T], count: usize, rng: &mut dyn RandomSource) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle(&mut copy, rng);
    copy.truncate(count.min(items.len()));
    copy
}

/// One element chosen uniformly, or `None` for an empty slice.
pub fn pick<'a, T>(items: &'a [T], rng: &mut dyn RandomSource) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        items.get(rng.below(items.len()))
    }
}
