//! Repeated random sampling of a slice, and the sampling policies behind it.
//!
//! [`sample_views`] is the engine: given a validated sample size it produces
//! an unbounded stream of independent random samples, each a non-copying
//! selection view of the input. [`ListSampler`] wraps the engine behind a
//! reusable policy object that derives the per-input sample size itself, so
//! one configured sampler serves inputs of any length without further
//! validation.

use subsample_common::{Result, verify_arg};
use subsample_views::SliceView;

use crate::reservoir;

/// An unbounded iterator of sample views over one input slice.
///
/// `next()` never returns `None`; bound consumption with
/// [`Iterator::take`] or [`ListSampler::collect_samples`]. Each produced
/// sample draws fresh randomness, so consecutive samples are independent and
/// generally overlap.
#[derive(Debug)]
pub struct Samples<'r, 'a, T> {
    input: &'a [T],
    mode: SampleMode<'r>,
}

#[derive(Debug)]
enum SampleMode<'r> {
    /// Every produced view covers the whole input.
    Whole,
    /// Every produced view selects `sample_size` random elements.
    Draw {
        sample_size: usize,
        rng: &'r mut fastrand::Rng,
    },
}

impl<'r, 'a, T> Iterator for Samples<'r, 'a, T> {
    type Item = SliceView<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(match &mut self.mode {
            SampleMode::Whole => SliceView::full(self.input),
            SampleMode::Draw { sample_size, rng } => {
                let indices = reservoir::reservoir_fill(*sample_size, 0..self.input.len(), rng);
                SliceView::selection(self.input, indices)
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Creates an unbounded stream of independent random samples of `input`,
/// each a selection view of exactly `sample_size` distinct elements.
///
/// The stream borrows `rng` for its lifetime; every produced sample advances
/// the generator, so draw order matters and two streams cannot share one
/// generator concurrently.
///
/// # Errors
///
/// Fails if `sample_size` is zero or exceeds the input length.
pub fn sample_views<'a, 'r, T>(
    input: &'a [T],
    sample_size: usize,
    rng: &'r mut fastrand::Rng,
) -> Result<Samples<'r, 'a, T>> {
    verify_arg!(sample_size, sample_size >= 1);
    verify_arg!(sample_size, sample_size <= input.len());
    Ok(Samples {
        input,
        mode: SampleMode::Draw { sample_size, rng },
    })
}

/// Draws one random sample of `sample_size` distinct elements of `input` and
/// returns it as a selection view.
///
/// # Errors
///
/// Fails if `sample_size` is zero or exceeds the input length.
pub fn sample_view<'a, T>(
    input: &'a [T],
    sample_size: usize,
    rng: &mut fastrand::Rng,
) -> Result<SliceView<'a, T>> {
    verify_arg!(sample_size, sample_size >= 1);
    verify_arg!(sample_size, sample_size <= input.len());
    let indices = reservoir::reservoir_fill(sample_size, 0..input.len(), rng);
    Ok(SliceView::selection(input, indices))
}

/// A reusable sampling policy with its own random generator.
///
/// The policy fixes how the sample size is derived from the input length;
/// parameter validation happens once at construction, so producing streams
/// is infallible. Sampling policies degrade rather than fail: an absolute
/// sampler asked for more elements than the input has yields whole-input
/// views, and a relative sampler over an empty input yields empty views.
///
/// ```
/// use subsample::ListSampler;
///
/// let data: Vec<u32> = (0..100).collect();
/// let mut sampler = ListSampler::with_absolute_size(5, fastrand::Rng::with_seed(42))?;
/// for sample in sampler.create_samples(&data).take(10) {
///     assert_eq!(sample.len(), 5);
/// }
/// # Ok::<(), subsample::Error>(())
/// ```
#[derive(Debug)]
pub struct ListSampler {
    policy: Policy,
}

#[derive(Debug)]
enum Policy {
    /// Every sample is the whole input.
    Full,
    /// Sample size is `ceil(input_len * fraction)`.
    Relative { fraction: f64, rng: fastrand::Rng },
    /// Sample size is `size`, degrading to the whole input when it is shorter.
    Absolute { size: usize, rng: fastrand::Rng },
}

impl ListSampler {
    /// Creates a sampler whose samples are always the whole input.
    pub fn full() -> ListSampler {
        ListSampler {
            policy: Policy::Full,
        }
    }

    /// Creates a sampler that draws `ceil(input_len * relative_size)`
    /// elements from each input; over an empty input it produces empty
    /// views.
    ///
    /// # Errors
    ///
    /// Fails unless `0.0 < relative_size <= 1.0` (NaN is rejected).
    pub fn with_relative_size(relative_size: f64, rng: fastrand::Rng) -> Result<ListSampler> {
        verify_arg!(relative_size, relative_size > 0.0 && relative_size <= 1.0);
        Ok(ListSampler {
            policy: Policy::Relative {
                fraction: relative_size,
                rng,
            },
        })
    }

    /// Creates a sampler that draws `absolute_size` elements from each
    /// input; inputs with no more than `absolute_size` elements are returned
    /// whole.
    ///
    /// # Errors
    ///
    /// Fails if `absolute_size` is zero.
    pub fn with_absolute_size(absolute_size: usize, rng: fastrand::Rng) -> Result<ListSampler> {
        verify_arg!(absolute_size, absolute_size >= 1);
        Ok(ListSampler {
            policy: Policy::Absolute {
                size: absolute_size,
                rng,
            },
        })
    }

    /// Creates an unbounded stream of sample views over `input` under this
    /// sampler's policy.
    ///
    /// The stream mutably borrows the sampler (its generator advances with
    /// every produced sample), so one sampler serves one stream at a time.
    pub fn create_samples<'s, 'a, T>(&'s mut self, input: &'a [T]) -> Samples<'s, 'a, T> {
        let mode = match &mut self.policy {
            Policy::Full => SampleMode::Whole,
            Policy::Relative { fraction, rng } => {
                if input.is_empty() {
                    SampleMode::Whole
                } else {
                    SampleMode::Draw {
                        sample_size: relative_sample_size(input.len(), *fraction),
                        rng,
                    }
                }
            }
            Policy::Absolute { size, rng } => {
                if input.len() <= *size {
                    SampleMode::Whole
                } else {
                    SampleMode::Draw {
                        sample_size: *size,
                        rng,
                    }
                }
            }
        };
        Samples { input, mode }
    }

    /// Materializes the first `count` samples of [`create_samples`] into a
    /// vector of views.
    ///
    /// [`create_samples`]: ListSampler::create_samples
    pub fn collect_samples<'a, T>(
        &mut self,
        input: &'a [T],
        count: usize,
    ) -> Vec<SliceView<'a, T>> {
        self.create_samples(input).take(count).collect()
    }
}

/// Per-input sample size of a relative policy: `ceil(len * fraction)`,
/// kept within `1..=len` against float rounding. `len` is non-zero here.
fn relative_sample_size(len: usize, fraction: f64) -> usize {
    ((len as f64 * fraction).ceil() as usize).clamp(1, len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use subsample_common::error::ErrorKind;

    fn distinct(sample: &SliceView<'_, u32>) -> bool {
        let mut values = sample.to_vec();
        values.sort_unstable();
        values.dedup();
        values.len() == sample.len()
    }

    #[test]
    fn test_absolute_sampler_draws_fixed_size() {
        let data: Vec<u32> = (0..100).collect();
        let mut sampler =
            ListSampler::with_absolute_size(5, fastrand::Rng::with_seed(0)).unwrap();
        for sample in sampler.create_samples(&data).take(20) {
            assert_eq!(sample.len(), 5);
            assert!(distinct(&sample));
            assert!(sample.iter().all(|value| data.contains(value)));
        }
    }

    #[test]
    fn test_absolute_sampler_degrades_to_whole_input() {
        let data: Vec<u32> = (0..10).collect();
        let mut sampler =
            ListSampler::with_absolute_size(25, fastrand::Rng::with_seed(0)).unwrap();
        for sample in sampler.create_samples(&data).take(5) {
            assert_eq!(sample.to_vec(), data);
        }
    }

    #[test]
    fn test_relative_sampler_rounds_up() {
        let data: Vec<u32> = (0..10).collect();
        let mut sampler =
            ListSampler::with_relative_size(0.51, fastrand::Rng::with_seed(0)).unwrap();
        for sample in sampler.create_samples(&data).take(10) {
            assert_eq!(sample.len(), 6);
            assert!(distinct(&sample));
        }
    }

    #[test]
    fn test_relative_sampler_sizes() {
        let data: Vec<u32> = (0..100).collect();
        for (fraction, expected) in [(0.05, 5), (0.25, 25), (1.0, 100)] {
            let mut sampler =
                ListSampler::with_relative_size(fraction, fastrand::Rng::with_seed(1)).unwrap();
            let samples = sampler.collect_samples(&data, 3);
            assert_eq!(samples.len(), 3);
            assert!(samples.iter().all(|sample| sample.len() == expected));
        }
    }

    #[test]
    fn test_relative_sampler_over_empty_input() {
        let data: [u32; 0] = [];
        let mut sampler =
            ListSampler::with_relative_size(0.5, fastrand::Rng::with_seed(0)).unwrap();
        for sample in sampler.create_samples(&data).take(3) {
            assert!(sample.is_empty());
        }
    }

    #[test]
    fn test_full_sampler_returns_the_input() {
        let data: Vec<u32> = (0..7).collect();
        let mut sampler = ListSampler::full();
        let samples = sampler.collect_samples(&data, 4);
        assert_eq!(samples.len(), 4);
        assert!(samples.iter().all(|sample| sample.to_vec() == data));
    }

    #[test]
    fn test_invalid_relative_size_fails() {
        for fraction in [0.0, -0.5, 1.1, f64::NAN] {
            let err =
                ListSampler::with_relative_size(fraction, fastrand::Rng::with_seed(0)).unwrap_err();
            assert!(matches!(
                err.kind(),
                ErrorKind::InvalidArgument { name, .. } if name == "relative_size"
            ));
        }
    }

    #[test]
    fn test_zero_absolute_size_fails() {
        let err = ListSampler::with_absolute_size(0, fastrand::Rng::with_seed(0)).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::InvalidArgument { name, .. } if name == "absolute_size"
        ));
    }

    #[test]
    fn test_sample_views_validates_eagerly() {
        let data: Vec<u32> = (0..10).collect();
        let mut rng = fastrand::Rng::with_seed(0);
        assert!(sample_views(&data, 0, &mut rng).is_err());
        assert!(sample_views(&data, 11, &mut rng).is_err());
        assert!(sample_views::<u32>(&[], 1, &mut rng).is_err());
        assert!(sample_views(&data, 10, &mut rng).is_ok());
    }

    #[test]
    fn test_sample_views_streams_independent_draws() {
        let data: Vec<u32> = (0..50).collect();
        let mut rng = fastrand::Rng::with_seed(9);
        let stream = sample_views(&data, 8, &mut rng).unwrap();
        assert_eq!(stream.size_hint(), (usize::MAX, None));

        let samples: Vec<_> = stream.take(10).collect();
        assert_eq!(samples.len(), 10);
        assert!(samples.iter().all(|sample| sample.len() == 8));
        assert!(samples.iter().all(distinct));
        // Ten draws of 8 out of 50 almost surely differ somewhere.
        assert!(samples.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn test_single_sample_view() {
        let data: Vec<u32> = (0..20).collect();
        let mut rng = fastrand::Rng::with_seed(3);
        let sample = sample_view(&data, 5, &mut rng).unwrap();
        assert_eq!(sample.len(), 5);
        assert!(distinct(&sample));
        assert!(sample_view(&data, 0, &mut rng).is_err());
        assert!(sample_view(&data, 21, &mut rng).is_err());
    }

    #[test]
    fn test_same_seed_reproduces_the_stream() {
        let data: Vec<u32> = (0..30).collect();
        let mut first =
            ListSampler::with_absolute_size(6, fastrand::Rng::with_seed(77)).unwrap();
        let mut second =
            ListSampler::with_absolute_size(6, fastrand::Rng::with_seed(77)).unwrap();
        let lhs: Vec<Vec<u32>> = first
            .create_samples(&data)
            .take(5)
            .map(|sample| sample.to_vec())
            .collect();
        let rhs: Vec<Vec<u32>> = second
            .create_samples(&data)
            .take(5)
            .map(|sample| sample.to_vec())
            .collect();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_sampler_reuse_across_inputs() {
        let short: Vec<u32> = (0..4).collect();
        let long: Vec<u32> = (0..40).collect();
        let mut sampler =
            ListSampler::with_absolute_size(8, fastrand::Rng::with_seed(5)).unwrap();

        let whole = sampler.collect_samples(&short, 2);
        assert!(whole.iter().all(|sample| sample.to_vec() == short));

        let drawn = sampler.collect_samples(&long, 2);
        assert!(drawn.iter().all(|sample| sample.len() == 8));
    }

    #[test]
    fn test_collect_samples_zero_count() {
        let data = [1, 2, 3];
        let mut sampler = ListSampler::full();
        assert!(sampler.collect_samples(&data, 0).is_empty());
    }
}
