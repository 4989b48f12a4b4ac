//! Extensions for deriving views directly from slices.
//!
//! This module provides the [`SampleSliceExt`] trait, which adds the window,
//! chunk and sampling operations of this crate as methods on `[T]`, so call
//! sites can stay in method-chain style. Each method delegates to the free
//! function of the same shape.

use subsample_common::Result;
use subsample_views::SliceView;

use crate::chunks::{self, Chunks, OmitChunks};
use crate::sampler;
use crate::windows::{self, SlidingWindows};

/// Extension trait adding sampling, windowing and chunking views on slices.
pub trait SampleSliceExt<T> {
    /// Sliding-window views fully inside the slice; see
    /// [`closed_sliding_windows`](crate::closed_sliding_windows).
    fn closed_windows(&self, window_size: usize, step_size: usize)
    -> Result<SlidingWindows<'_, T>>;

    /// Sliding-window views clamped at the slice edges; see
    /// [`open_sliding_windows`](crate::open_sliding_windows).
    fn open_windows(&self, window_size: usize, step_size: usize) -> Result<SlidingWindows<'_, T>>;

    /// View of one chunk of a partition; see [`extract_chunk`](crate::extract_chunk).
    fn extract_chunk(&self, num_chunks: usize, chunk_index: usize) -> Result<SliceView<'_, T>>;

    /// View of everything except one chunk; see [`omit_chunk`](crate::omit_chunk).
    fn omit_chunk(&self, num_chunks: usize, chunk_index: usize) -> Result<SliceView<'_, T>>;

    /// Views of all chunks in order; see [`extract_chunks`](crate::extract_chunks).
    fn extract_chunks(&self, num_chunks: usize) -> Result<Chunks<'_, T>>;

    /// Complement views of all chunks in order; see [`omit_chunks`](crate::omit_chunks).
    fn omit_chunks(&self, num_chunks: usize) -> Result<OmitChunks<'_, T>>;

    /// One random sample of `sample_size` distinct elements; see
    /// [`sample_view`](crate::sample_view).
    fn sample(&self, sample_size: usize, rng: &mut fastrand::Rng) -> Result<SliceView<'_, T>>;
}

impl<T> SampleSliceExt<T> for [T] {
    fn closed_windows(
        &self,
        window_size: usize,
        step_size: usize,
    ) -> Result<SlidingWindows<'_, T>> {
        windows::closed_sliding_windows(self, window_size, step_size)
    }

    fn open_windows(&self, window_size: usize, step_size: usize) -> Result<SlidingWindows<'_, T>> {
        windows::open_sliding_windows(self, window_size, step_size)
    }

    fn extract_chunk(&self, num_chunks: usize, chunk_index: usize) -> Result<SliceView<'_, T>> {
        chunks::extract_chunk(self, num_chunks, chunk_index)
    }

    fn omit_chunk(&self, num_chunks: usize, chunk_index: usize) -> Result<SliceView<'_, T>> {
        chunks::omit_chunk(self, num_chunks, chunk_index)
    }

    fn extract_chunks(&self, num_chunks: usize) -> Result<Chunks<'_, T>> {
        chunks::extract_chunks(self, num_chunks)
    }

    fn omit_chunks(&self, num_chunks: usize) -> Result<OmitChunks<'_, T>> {
        chunks::omit_chunks(self, num_chunks)
    }

    fn sample(&self, sample_size: usize, rng: &mut fastrand::Rng) -> Result<SliceView<'_, T>> {
        sampler::sample_view(self, sample_size, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_methods_match_free_functions() {
        let data: Vec<u32> = (0..12).collect();

        let windows: Vec<_> = data.closed_windows(4, 2).unwrap().map(|w| w.to_vec()).collect();
        let expected: Vec<_> = windows::closed_sliding_windows(&data, 4, 2)
            .unwrap()
            .map(|w| w.to_vec())
            .collect();
        assert_eq!(windows, expected);

        assert_eq!(
            data.extract_chunk(3, 1).unwrap(),
            chunks::extract_chunk(&data, 3, 1).unwrap()
        );
        assert_eq!(
            data.omit_chunk(3, 1).unwrap(),
            chunks::omit_chunk(&data, 3, 1).unwrap()
        );
        assert_eq!(data.extract_chunks(4).unwrap().count(), 4);
        assert_eq!(data.omit_chunks(4).unwrap().count(), 4);
    }

    #[test]
    fn test_open_windows_on_vec() {
        let data = vec![0, 1, 2];
        let windows: Vec<_> = data.open_windows(2, 1).unwrap().map(|w| w.to_vec()).collect();
        assert_eq!(windows, vec![vec![0], vec![0, 1], vec![1, 2], vec![2]]);
    }

    #[test]
    fn test_sample_method() {
        let data: Vec<u32> = (0..30).collect();
        let mut rng = fastrand::Rng::with_seed(11);
        let sample = data.sample(6, &mut rng).unwrap();
        assert_eq!(sample.len(), 6);
        assert!(data.sample(0, &mut rng).is_err());
    }
}
