//! Shuffle selection
//!
//! Shuffle here does not reorder the queue. Each "next" while shuffling
//! picks a fresh uniformly random position, repeats included.

use rand::{Rng, RngCore};

/// Pick a random queue position in `[0, len)`
///
/// An empty queue yields 0, matching the index of a cleared session.
pub fn random_index(rng: &mut dyn RngCore, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    rng.gen_range(0..len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn empty_queue_yields_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_index(&mut rng, 0), 0);
    }

    #[test]
    fn single_episode_always_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(random_index(&mut rng, 1), 0);
        }
    }

    #[test]
    fn stays_in_bounds_and_covers_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();

        for _ in 0..500 {
            let index = random_index(&mut rng, 5);
            assert!(index < 5);
            seen.insert(index);
        }

        // 500 draws over 5 slots: every slot shows up
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(1);

        let first: Vec<usize> = (0..10).map(|_| random_index(&mut a, 12)).collect();
        let second: Vec<usize> = (0..10).map(|_| random_index(&mut b, 12)).collect();
        assert_eq!(first, second);
    }
}
