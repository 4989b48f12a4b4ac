//! Sliding-window views over a slice.
//!
//! Thin composition of the window-range enumeration from `subsample-ranges`
//! with the range views of `subsample-views`: each emitted window is a
//! non-copying view of a contiguous run of the input.

use subsample_common::Result;
use subsample_ranges::windows::{self, WindowRanges};
use subsample_views::SliceView;

/// An iterator over sliding-window views of a slice.
#[derive(Debug, Clone)]
pub struct SlidingWindows<'a, T> {
    /// Sequence the windows are cut from.
    input: &'a [T],
    /// Underlying enumeration of window ranges, already clamped to the input.
    ranges: WindowRanges,
}

/// Creates an iterator over sliding-window views with explicit bounds.
///
/// A window is produced for every cursor position `p` in
/// `start, start + step_size, ...` satisfying `p < input.len()` and
/// `p + window_size <= max_end`; the view covers `p..p + window_size` clamped
/// to the input, so overhanging windows come out shorter.
///
/// # Errors
///
/// Fails if `window_size` or `step_size` is zero.
pub fn sliding_windows<'a, T>(
    input: &'a [T],
    window_size: usize,
    start: isize,
    max_end: isize,
    step_size: usize,
) -> Result<SlidingWindows<'a, T>> {
    Ok(SlidingWindows {
        input,
        ranges: windows::window_ranges(input.len(), window_size, start, max_end, step_size)?,
    })
}

/// Creates an iterator over "closed" sliding-window views: every window lies
/// fully inside the input and has exactly `window_size` elements.
///
/// # Errors
///
/// Fails if `window_size` or `step_size` is zero.
///
/// ```
/// use subsample::closed_sliding_windows;
///
/// let data = [0, 1, 2, 3, 4];
/// let windows: Vec<Vec<i32>> = closed_sliding_windows(&data, 3, 1)?
///     .map(|window| window.to_vec())
///     .collect();
/// assert_eq!(windows, vec![vec![0, 1, 2], vec![1, 2, 3], vec![2, 3, 4]]);
/// # Ok::<(), subsample::Error>(())
/// ```
pub fn closed_sliding_windows<'a, T>(
    input: &'a [T],
    window_size: usize,
    step_size: usize,
) -> Result<SlidingWindows<'a, T>> {
    Ok(SlidingWindows {
        input,
        ranges: windows::closed_window_ranges(input.len(), window_size, step_size)?,
    })
}

/// Creates an iterator over "open" sliding-window views: windows may overhang
/// either edge of the input, so the first and last views are clamped and come
/// out shorter than `window_size`.
///
/// # Errors
///
/// Fails if `window_size` or `step_size` is zero.
pub fn open_sliding_windows<'a, T>(
    input: &'a [T],
    window_size: usize,
    step_size: usize,
) -> Result<SlidingWindows<'a, T>> {
    Ok(SlidingWindows {
        input,
        ranges: windows::open_window_ranges(input.len(), window_size, step_size)?,
    })
}

impl<'a, T> Iterator for SlidingWindows<'a, T> {
    type Item = SliceView<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let range = self.ranges.next()?;
        Some(SliceView::range(self.input, range))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ranges.size_hint()
    }
}

impl<T> ExactSizeIterator for SlidingWindows<'_, T> {}

impl<T> std::iter::FusedIterator for SlidingWindows<'_, T> {}
