// Random choices: the first-pick coin flip and timeout auto-fill.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::participant::TurnSide;

/// A source of uniform random choices.
///
/// The session never talks to a generator directly so that tests can swap in
/// a seeded or scripted source.
pub trait RandomSource: Send {
    /// A fair coin.
    fn coin(&mut self) -> bool;
    /// A uniform index in `0..upper`. `upper` is never zero.
    fn index_below(&mut self, upper: usize) -> usize;
}

/// Adapts any `rand` generator into a [`RandomSource`].
pub struct RngSource<R>(pub R);

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn coin(&mut self) -> bool {
        self.0.random_bool(0.5)
    }

    fn index_below(&mut self, upper: usize) -> usize {
        self.0.random_range(0..upper)
    }
}

/// Uniform random selection over sides and pools.
pub struct RandomSelector {
    source: Box<dyn RandomSource>,
}

impl RandomSelector {
    /// Selector backed by an OS-seeded generator. Every call is independent;
    /// no seed is kept.
    pub fn new() -> Self {
        Self::with_source(RngSource(StdRng::from_os_rng()))
    }

    /// Reproducible selector for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(RngSource(ChaCha8Rng::seed_from_u64(seed)))
    }

    pub fn with_source(source: impl RandomSource + 'static) -> Self {
        RandomSelector {
            source: Box::new(source),
        }
    }

    /// 50/50 choice of the side that picks first.
    pub fn flip_coin(&mut self) -> TurnSide {
        if self.source.coin() {
            TurnSide::Side1
        } else {
            TurnSide::Side2
        }
    }

    /// Draw `min(n, pool.len())` items uniformly without repetition.
    ///
    /// Returns `(selected, remaining)`. `selected` is in draw order;
    /// `remaining` keeps the pool's original relative order.
    pub fn sample_without_replacement<T>(&mut self, pool: Vec<T>, n: usize) -> (Vec<T>, Vec<T>) {
        let mut remaining = pool;
        let take = n.min(remaining.len());
        let mut selected = Vec::with_capacity(take);
        for _ in 0..take {
            let idx = self.source.index_below(remaining.len());
            selected.push(remaining.remove(idx));
        }
        (selected, remaining)
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RandomSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomSelector").finish_non_exhaustive()
    }
}
