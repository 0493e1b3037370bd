//! Random source implementations.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::infrastructure::ports::RandomPort;

/// System random - uses the thread-local RNG.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn next_below(&self, bound: i32) -> i32 {
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Seeded random - the same seed replays the same sequence of rolls.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomPort for SeededRandom {
    fn next_below(&self, bound: i32) -> i32 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0..bound)
    }
}

/// Replays fixed values for testing, repeating the last one when exhausted.
#[cfg(test)]
pub struct SequenceRandom {
    values: Vec<i32>,
    position: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl SequenceRandom {
    pub fn new(values: Vec<i32>) -> Self {
        Self {
            values,
            position: std::sync::atomic::AtomicUsize::new(0),
        }
    }
}

#[cfg(test)]
impl RandomPort for SequenceRandom {
    fn next_below(&self, _bound: i32) -> i32 {
        let index = self
            .position
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst)
            .min(self.values.len().saturating_sub(1));
        self.values.get(index).copied().unwrap_or(0)
    }
}
