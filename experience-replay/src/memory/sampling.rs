use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rustc_hash::FxHashSet;

/// Below this ratio of requested indices to available indices
/// (`count * SPARSE_RATIO <= len`) rejection sampling is used,
/// above it a partial Fisher-Yates shuffle.
const SPARSE_RATIO: usize = 4;

/// Draws `min(count, len)` distinct indices out of `0..len`, uniformly at random.
///
/// The order of the returned indices carries no meaning.
pub fn distinct_random_indices<R: Rng>(
    rng: &mut R,
    len: usize,
    count: usize,
) -> Vec<usize> {
    let count = usize::min(count, len);
    if count == 0 {
        return vec![];
    }
    if count.saturating_mul(SPARSE_RATIO) <= len {
        rejection_sample(rng, len, count)
    } else {
        partial_shuffle(rng, len, count)
    }
}

fn rejection_sample<R: Rng>(
    rng: &mut R,
    len: usize,
    count: usize,
) -> Vec<usize> {
    debug_assert!(count <= len);
    let distribution = Uniform::from(0..len);
    let mut seen = FxHashSet::default();
    seen.reserve(count);
    let mut result = Vec::with_capacity(count);
    while result.len() < count {
        let x = distribution.sample(rng);
        if seen.insert(x) {
            result.push(x);
        }
    }
    result
}

fn partial_shuffle<R: Rng>(
    rng: &mut R,
    len: usize,
    count: usize,
) -> Vec<usize> {
    debug_assert!(count <= len);
    let mut indices: Vec<usize> = (0..len).collect();
    for i in 0..count {
        let j = rng.gen_range(i..len);
        indices.swap(i, j);
    }
    indices.truncate(count);
    indices
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    use super::*;

    fn assert_distinct_in_range(indices: &[usize], len: usize) {
        let mut r = Vec::from(indices);
        r.sort();
        r.dedup();
        assert_eq!(r.len(), indices.len());
        assert!(r.iter().all(|e| (0..len).contains(e)));
    }

    #[rstest]
    #[case::sparse(1_000, 10)]
    #[case::sparse_boundary(100, 25)]
    #[case::dense(100, 26)]
    #[case::all(100, 100)]
    #[case::more_than_available(7, 50)]
    fn test_distinct_random_indices(
        #[case] len: usize,
        #[case] count: usize,
    ) {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let indices = distinct_random_indices(&mut rng, len, count);
            assert_eq!(indices.len(), usize::min(len, count));
            assert_distinct_in_range(&indices, len);
        }
    }

    #[test]
    fn test_nothing_to_draw() {
        let mut rng = rand::thread_rng();
        assert!(distinct_random_indices(&mut rng, 0, 5).is_empty());
        assert!(distinct_random_indices(&mut rng, 5, 0).is_empty());
    }

    #[test]
    fn test_both_strategies_cover_the_whole_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut hits_sparse = [0_usize; 20];
        let mut hits_dense = [0_usize; 20];
        for _ in 0..2_000 {
            for i in rejection_sample(&mut rng, 20, 2) {
                hits_sparse[i] += 1;
            }
            for i in partial_shuffle(&mut rng, 20, 15) {
                hits_dense[i] += 1;
            }
        }
        assert!(hits_sparse.iter().all(|&h| h > 0));
        assert!(hits_dense.iter().all(|&h| h > 0));
    }

    /// Each index of `0..len` is expected in `count / len` of the draws.
    #[rstest]
    #[case::one_of_three(3, 1, 90_000)]
    #[case::half(10, 5, 60_000)]
    #[case::all_but_one(8, 7, 20_000)]
    fn test_partial_shuffle_is_uniform(
        #[case] len: usize,
        #[case] count: usize,
        #[case] trials: usize,
    ) {
        assert!(count * SPARSE_RATIO > len, "case must take the shuffle path");
        let mut rng = StdRng::seed_from_u64(99);
        let mut hits = vec![0_usize; len];
        for _ in 0..trials {
            for i in distinct_random_indices(&mut rng, len, count) {
                hits[i] += 1;
            }
        }
        let expected = count as f64 / len as f64;
        for (i, h) in hits.into_iter().enumerate() {
            let frequency = h as f64 / trials as f64;
            assert!(
                (frequency - expected).abs() < 0.01,
                "index {}: frequency {} too far from {}",
                i,
                frequency,
                expected
            );
        }
    }
}
