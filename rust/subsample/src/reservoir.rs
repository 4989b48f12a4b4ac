//! Uniform random index sampling without replacement.

use std::ops::Range;

use subsample_common::{Result, verify_arg};

/// Draws `count` pairwise distinct values from `range`, each chosen with
/// probability `count / range.len()`.
///
/// A single-pass reservoir: the first `count` candidates seed the result and
/// every later candidate displaces a random slot with decreasing probability.
/// The order of the returned values is an artifact of those displacements and
/// is not itself uniformly random; callers that need a random permutation
/// must shuffle the result.
///
/// The draw is fully determined by the `rng` state, so a seeded generator
/// reproduces the same sample.
///
/// # Errors
///
/// Fails if the range is inverted or `count` exceeds the range length.
///
/// ```
/// let mut rng = fastrand::Rng::with_seed(42);
/// let picked = subsample::sample_indices(3, 10..20, &mut rng)?;
/// assert_eq!(picked.len(), 3);
/// assert!(picked.iter().all(|index| (10..20).contains(index)));
/// # Ok::<(), subsample::Error>(())
/// ```
pub fn sample_indices(
    count: usize,
    range: Range<usize>,
    rng: &mut fastrand::Rng,
) -> Result<Vec<usize>> {
    verify_arg!(range, range.start <= range.end);
    verify_arg!(count, count <= range.end - range.start);
    Ok(reservoir_fill(count, range, rng))
}

/// Reservoir draw with the preconditions already checked: `range` is not
/// inverted and `count` does not exceed its length.
///
/// Consumes one bounded draw per candidate beyond the first `count`, also
/// when `count` is zero, so seeded sequences stay aligned across sample
/// sizes.
pub(crate) fn reservoir_fill(
    count: usize,
    range: Range<usize>,
    rng: &mut fastrand::Rng,
) -> Vec<usize> {
    let mut reservoir: Vec<usize> = (range.start..range.start + count).collect();
    for candidate in count..range.end - range.start {
        let slot = rng.usize(0..=candidate);
        if slot < count {
            reservoir[slot] = range.start + candidate;
        }
    }
    reservoir
}

#[cfg(test)]
mod tests {
    use super::*;
    use subsample_common::error::ErrorKind;

    #[test]
    fn test_sample_is_distinct_and_in_range() {
        for seed in 0..50 {
            let mut rng = fastrand::Rng::with_seed(seed);
            let mut picked = sample_indices(10, 0..100, &mut rng).unwrap();
            assert_eq!(picked.len(), 10);
            assert!(picked.iter().all(|&value| value < 100));
            picked.sort_unstable();
            picked.dedup();
            assert_eq!(picked.len(), 10, "duplicate values for seed {seed}");
        }
    }

    #[test]
    fn test_sample_respects_range_offset() {
        let mut rng = fastrand::Rng::with_seed(7);
        let picked = sample_indices(4, 50..60, &mut rng).unwrap();
        assert_eq!(picked.len(), 4);
        assert!(picked.iter().all(|value| (50..60).contains(value)));
    }

    #[test]
    fn test_sample_of_whole_range_keeps_order() {
        // With nothing left to displace, the seeded reservoir comes back as is.
        let mut rng = fastrand::Rng::with_seed(0);
        let picked = sample_indices(10, 5..15, &mut rng).unwrap();
        assert_eq!(picked, (5..15).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_sample_and_empty_range() {
        let mut rng = fastrand::Rng::with_seed(0);
        assert_eq!(sample_indices(0, 0..100, &mut rng).unwrap(), vec![]);
        assert_eq!(sample_indices(0, 3..3, &mut rng).unwrap(), vec![]);
    }

    #[test]
    fn test_inverted_range_fails() {
        let mut rng = fastrand::Rng::with_seed(0);
        let err = sample_indices(0, 10..5, &mut rng).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::InvalidArgument { name, .. } if name == "range"
        ));
    }

    #[test]
    fn test_oversized_count_fails() {
        let mut rng = fastrand::Rng::with_seed(0);
        let err = sample_indices(11, 0..10, &mut rng).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::InvalidArgument { name, .. } if name == "count"
        ));
    }

    #[test]
    fn test_same_seed_reproduces_the_sample() {
        let mut first = fastrand::Rng::with_seed(123);
        let mut second = fastrand::Rng::with_seed(123);
        assert_eq!(
            sample_indices(20, 0..1000, &mut first).unwrap(),
            sample_indices(20, 0..1000, &mut second).unwrap()
        );

        let mut third = fastrand::Rng::with_seed(124);
        assert_ne!(
            sample_indices(20, 0..1000, &mut second).unwrap(),
            sample_indices(20, 0..1000, &mut third).unwrap()
        );
    }

    #[test]
    fn test_selection_frequencies_are_roughly_uniform() {
        const RUNS: u64 = 10_000;
        const RANGE: usize = 100;
        const COUNT: usize = 10;

        let mut hits = [0u32; RANGE];
        for seed in 0..RUNS {
            let mut rng = fastrand::Rng::with_seed(seed);
            for value in sample_indices(COUNT, 0..RANGE, &mut rng).unwrap() {
                hits[value] += 1;
            }
        }

        let mean = (RUNS as usize * COUNT / RANGE) as f64;
        for (value, &count) in hits.iter().enumerate() {
            let deviation = (count as f64 - mean).abs() / mean;
            assert!(
                deviation < 0.2,
                "value {value} selected {count} times, expected about {mean}"
            );
        }
    }
}
