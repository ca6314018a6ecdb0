//! Sampling strategies.
//!
//! Every bounded lookup and every traversal step narrows a candidate list
//! with "pick k distinct of n". The strategy is injected so tests can swap
//! the random source for a deterministic one.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Picks `amount` distinct indices out of `0..len`.
///
/// Only called with `amount < len`. Implementations must not repeat an
/// index; out-of-range indices are ignored by [`sample`].
pub trait Sampler: Send + Sync {
    fn choose(&self, len: usize, amount: usize) -> Vec<usize>;
}

impl<S: Sampler + ?Sized> Sampler for &S {
    fn choose(&self, len: usize, amount: usize) -> Vec<usize> {
        (**self).choose(len, amount)
    }
}

impl<S: Sampler + ?Sized> Sampler for std::sync::Arc<S> {
    fn choose(&self, len: usize, amount: usize) -> Vec<usize> {
        (**self).choose(len, amount)
    }
}

// ============================================================================
// RandomSampler
// ============================================================================

/// Uniform sampling without replacement.
pub struct RandomSampler {
    rng: Mutex<StdRng>,
}

impl RandomSampler {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self { rng: Mutex::new(StdRng::from_entropy()) }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RandomSampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomSampler").finish_non_exhaustive()
    }
}

impl Sampler for RandomSampler {
    fn choose(&self, len: usize, amount: usize) -> Vec<usize> {
        let mut rng = self.rng.lock();
        rand::seq::index::sample(&mut *rng, len, amount.min(len)).into_vec()
    }
}

// ============================================================================
// Sequential
// ============================================================================

/// Deterministic: always keeps the first `amount` items in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl Sampler for Sequential {
    fn choose(&self, len: usize, amount: usize) -> Vec<usize> {
        (0..amount.min(len)).collect()
    }
}

// ============================================================================
// Helper
// ============================================================================

/// Keep at most `amount` items. Lists that already fit are returned as-is;
/// longer ones are narrowed by `sampler`.
pub fn sample<T, S: Sampler + ?Sized>(sampler: &S, items: Vec<T>, amount: usize) -> Vec<T> {
    if items.len() <= amount {
        return items;
    }
    let picks = sampler.choose(items.len(), amount);
    tracing::trace!(len = items.len(), amount, "sampling candidates");
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    picks
        .into_iter()
        .filter_map(|i| slots.get_mut(i).and_then(Option::take))
        .take(amount)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_short_list_untouched() {
        let items = vec!["a", "b"];
        assert_eq!(sample(&RandomSampler::new(), items.clone(), 5), items);
    }

    #[test]
    fn test_random_sample_is_distinct_subset() {
        let sampler = RandomSampler::seeded(7);
        let items: Vec<u32> = (0..20).collect();
        for _ in 0..50 {
            let picked = sample(&sampler, items.clone(), 5);
            assert_eq!(picked.len(), 5);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), 5);
            assert!(picked.iter().all(|p| items.contains(p)));
        }
    }

    #[test]
    fn test_seeded_sampler_is_reproducible() {
        let a = RandomSampler::seeded(42);
        let b = RandomSampler::seeded(42);
        let items: Vec<u32> = (0..30).collect();
        assert_eq!(sample(&a, items.clone(), 4), sample(&b, items, 4));
    }

    #[test]
    fn test_sequential_keeps_prefix() {
        let items = vec![1, 2, 3, 4, 5, 6, 7];
        assert_eq!(sample(&Sequential, items, 3), vec![1, 2, 3]);
    }

    struct Repeating;

    impl Sampler for Repeating {
        fn choose(&self, _len: usize, amount: usize) -> Vec<usize> {
            vec![0; amount]
        }
    }

    #[test]
    fn test_repeated_indices_are_dropped() {
        let picked = sample(&Repeating, vec!['x', 'y', 'z'], 2);
        assert_eq!(picked, vec!['x']);
    }
}
