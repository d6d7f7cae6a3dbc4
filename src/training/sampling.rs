//! Index sampling for stochastic gradient estimates.

use std::collections::HashMap;

use rand::Rng;

/// Draw `k` distinct indices from `0..n` without replacement.
///
/// Partial Fisher-Yates shuffle over `0..n`. Only displaced positions are
/// stored, so a draw costs O(k) regardless of `n`. The result is sorted so
/// batches are visited in insertion order.
///
/// # Panics
///
/// Panics if `k > n`; callers validate the batch size first.
pub fn sample_without_replacement<R: Rng + ?Sized>(rng: &mut R, n: usize, k: usize) -> Vec<usize> {
    assert!(k <= n, "cannot sample {} of {} indices", k, n);

    if k == n {
        return (0..n).collect();
    }

    // Position -> value for every slot that differs from the identity.
    let mut displaced: HashMap<usize, usize> = HashMap::with_capacity(k);
    let mut indices = Vec::with_capacity(k);
    for i in 0..k {
        let j = rng.gen_range(i..n);
        let at_j = displaced.get(&j).copied().unwrap_or(j);
        let at_i = displaced.get(&i).copied().unwrap_or(i);
        displaced.insert(j, at_i);
        indices.push(at_j);
    }

    indices.sort_unstable();
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn samples_distinct_sorted_indices() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        for _ in 0..50 {
            let sample = sample_without_replacement(&mut rng, 20, 8);
            assert_eq!(sample.len(), 8);
            assert!(sample.windows(2).all(|w| w[0] < w[1]));
            assert!(sample.iter().all(|&i| i < 20));
        }
    }

    #[test]
    fn full_sample_is_identity() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        assert_eq!(sample_without_replacement(&mut rng, 5, 5), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn same_seed_same_sample() {
        let a = sample_without_replacement(&mut Xoshiro256PlusPlus::seed_from_u64(1), 100, 10);
        let b = sample_without_replacement(&mut Xoshiro256PlusPlus::seed_from_u64(1), 100, 10);
        assert_eq!(a, b);
    }

    #[test]
    fn every_index_reachable() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let mut seen = [false; 10];
        for _ in 0..200 {
            for i in sample_without_replacement(&mut rng, 10, 2) {
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn small_sample_from_large_range() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
        let sample = sample_without_replacement(&mut rng, 1_000_000, 16);
        assert_eq!(sample.len(), 16);
        assert!(sample.windows(2).all(|w| w[0] < w[1]));
        assert!(sample.iter().all(|&i| i < 1_000_000));
    }

    #[test]
    fn near_full_sample_is_a_permutation_prefix() {
        // k = n - 1 exercises long displacement chains.
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        for _ in 0..50 {
            let sample = sample_without_replacement(&mut rng, 9, 8);
            assert_eq!(sample.len(), 8);
            assert!(sample.windows(2).all(|w| w[0] < w[1]));
            assert!(sample.iter().all(|&i| i < 9));
        }
    }

    #[test]
    #[should_panic(expected = "cannot sample")]
    fn oversized_sample_panics() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        sample_without_replacement(&mut rng, 3, 4);
    }
}
