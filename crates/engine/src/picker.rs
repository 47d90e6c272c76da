//! Phrase variant selection
//!
//! Response templates come in pools of equivalent phrasings. Which variant
//! gets used is the only randomness in the engine, so it sits behind this
//! trait: production picks at random, tests inject a fixed or seeded
//! picker and become deterministic.

use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub trait PhrasePicker: Send + Sync {
    /// Choose an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Thread-local entropy, the production default.
#[derive(Debug, Default)]
pub struct RandomPicker;

impl PhrasePicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible sequence from a fixed seed.
pub struct SeededPicker {
    rng: Mutex<SmallRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }
}

impl PhrasePicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        self.rng.lock().gen_range(0..len)
    }
}

/// Always the same index, clamped to the pool. Tests use index 0 to get
/// the first variant of every pool.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl PhrasePicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}
