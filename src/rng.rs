//! The injected random-number capability. `next(n)` returns a value in
//! `[0, n)`, and `0` when `n == 0`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait NumberGenerator {
    fn next(&mut self, bound: usize) -> usize;
}

/// The default capability, backed by `rand`'s `StdRng`. Seeded
/// deterministically when a seed is supplied, otherwise seeded from entropy.
pub struct StdRngSource {
    rng: StdRng,
}

impl StdRngSource {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        StdRngSource { rng }
    }
}

impl NumberGenerator for StdRngSource {
    fn next(&mut self, bound: usize) -> usize {
        if bound == 0 {
            0
        } else {
            self.rng.gen_range(0..bound)
        }
    }
}

#[cfg(test)]
pub(crate) struct SequenceRng {
    values: Vec<usize>,
    pos: usize,
}

#[cfg(test)]
impl SequenceRng {
    pub(crate) fn new(values: Vec<usize>) -> Self {
        SequenceRng { values, pos: 0 }
    }
}

#[cfg(test)]
impl NumberGenerator for SequenceRng {
    fn next(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        let value = self.values.get(self.pos).copied().unwrap_or(0);
        self.pos += 1;
        value % bound
    }
}
