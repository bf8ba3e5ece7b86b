use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Source of shuffles for random sampling, swappable for deterministic tests.
pub trait RandomSource: Send + Sync {
    /// Returns a permutation of `0..len`.
    fn permutation(&self, len: usize) -> Vec<usize>;
}

pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

impl RandomSource for SeededRandom {
    fn permutation(&self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        order.shuffle(&mut *rng);
        order
    }
}

/// Keeps the original order.
#[derive(Debug, Default, Clone, Copy)]
pub struct InOrder;

impl RandomSource for InOrder {
    fn permutation(&self, len: usize) -> Vec<usize> {
        (0..len).collect()
    }
}
