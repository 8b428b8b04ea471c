//! Phrase selection for blocks with several phrasings (greeting, farewell).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// "Pick one of N" capability injected into the responder.
pub trait PhrasePicker: Send + Sync {
    /// Returns an index in `0..count`. Only called with `count >= 1`.
    fn pick(&self, count: usize) -> usize;
}

/// Uniform choice from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl PhrasePicker for RandomPicker {
    fn pick(&self, count: usize) -> usize {
        rand::thread_rng().gen_range(0..count)
    }
}

/// Uniform choice from a seeded RNG; the same seed yields the same sequence.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl PhrasePicker for SeededPicker {
    fn pick(&self, count: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..count)
    }
}

/// Always picks the same index (wrapped into range).
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl PhrasePicker for FixedPicker {
    fn pick(&self, count: usize) -> usize {
        self.0 % count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_picker_is_reproducible() {
        let a = SeededPicker::new(7);
        let b = SeededPicker::new(7);
        let first: Vec<usize> = (0..100).map(|_| a.pick(3)).collect();
        let second: Vec<usize> = (0..100).map(|_| b.pick(3)).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|&i| i < 3));
    }

    #[test]
    fn test_random_picker_in_range() {
        let picker = RandomPicker;
        for _ in 0..200 {
            assert!(picker.pick(3) < 3);
        }
        assert_eq!(picker.pick(1), 0);
    }

    #[test]
    fn test_fixed_picker_wraps() {
        assert_eq!(FixedPicker(1).pick(3), 1);
        assert_eq!(FixedPicker(4).pick(3), 1);
        assert_eq!(FixedPicker(9).pick(1), 0);
    }
}
