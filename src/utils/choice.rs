/*!
# Choice Strategies

Some algorithms have to make an arbitrary choice, e.g. the start vertex of a connectivity check
or the next unused edge during Hierholzer's algorithm. Any choice is valid, so the decision is
delegated to an injected [`ChoiceStrategy`]. Tests can thereby force deterministic behavior
while the default draws uniformly at random.
*/

use rand::{Rng, rngs::ThreadRng};

/// Picks one index out of `0..len`
pub trait ChoiceStrategy {
    /// Returns an index in `0..len`.
    /// ** Panics if `len == 0` **
    fn choose(&mut self, len: usize) -> usize;
}

impl<C: ChoiceStrategy + ?Sized> ChoiceStrategy for &mut C {
    fn choose(&mut self, len: usize) -> usize {
        (**self).choose(len)
    }
}

/// Chooses uniformly at random
#[derive(Debug, Clone)]
pub struct RandomChoice<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomChoice<ThreadRng> {
    /// Creates a strategy drawing from the thread-local generator
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomChoice<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomChoice<R> {
    /// Creates a strategy drawing from the given generator, e.g. a seeded one
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ChoiceStrategy for RandomChoice<R> {
    fn choose(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot choose from an empty range");
        self.rng.random_range(0..len)
    }
}

/// Always chooses the first index
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChoice;

impl ChoiceStrategy for FirstChoice {
    fn choose(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot choose from an empty range");
        0
    }
}

/// Always chooses the last index
#[derive(Debug, Clone, Copy, Default)]
pub struct LastChoice;

impl ChoiceStrategy for LastChoice {
    fn choose(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot choose from an empty range");
        len - 1
    }
}
