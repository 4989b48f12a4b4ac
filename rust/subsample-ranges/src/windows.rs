//! Lazy enumeration of sliding-window index ranges.
//!
//! A window configuration is described by a window size, a (possibly negative)
//! start position, an exclusive logical end bound and a step size. The cursor
//! visits positions `start, start + step, ...` for as long as the position is
//! below the sequence length and the window starting there ends at or before
//! `max_end`. Each visited position yields the window range clamped to the
//! sequence bounds, so windows overhanging either edge come out shorter
//! instead of failing.

use std::ops::Range;

use subsample_common::{Result, verify_arg};

/// An iterator over the index ranges of a sliding-window traversal.
///
/// Yields one `Range<usize>` per window, already clamped to `0..len`. The
/// ranges of consecutive windows start `step_size` logical positions apart;
/// the emitted starts may repeat while a negative cursor is still being
/// clamped to the left edge.
#[derive(Debug, Clone)]
pub struct WindowRanges {
    /// Window length before edge clamping.
    window_size: usize,
    /// Exclusive upper bound emitted ranges are clamped to (the sequence
    /// length, saturated: positions past `isize::MAX` are unreachable since
    /// `max_end` is `isize`).
    len: isize,
    /// Cursor advance per emitted window.
    step_size: usize,
    /// Logical start position of the next window; negative while the window
    /// overhangs the left edge.
    cursor: isize,
    /// Number of windows not yet emitted.
    remaining: usize,
}

/// Creates an iterator over sliding-window ranges with explicit bounds.
///
/// A window is emitted for every cursor position `p` in `start, start + step_size, ...`
/// satisfying `p < len` and `p + window_size <= max_end`; the emitted range is
/// `p..p + window_size` clamped to `0..len`. [`closed_window_ranges`] and
/// [`open_window_ranges`] provide the two common bound choices.
///
/// # Errors
///
/// Fails if `window_size` or `step_size` is zero.
///
/// ```
/// use subsample_ranges::window_ranges;
///
/// let windows: Vec<_> = window_ranges(10, 2, 0, 100, 5)?.collect();
/// assert_eq!(windows, vec![0..2, 5..7]);
/// # Ok::<(), subsample_common::error::Error>(())
/// ```
pub fn window_ranges(
    len: usize,
    window_size: usize,
    start: isize,
    max_end: isize,
    step_size: usize,
) -> Result<WindowRanges> {
    verify_arg!(window_size, window_size >= 1);
    verify_arg!(step_size, step_size >= 1);
    Ok(WindowRanges {
        window_size,
        len: saturating_isize(len),
        step_size,
        cursor: start,
        remaining: count_windows(len, window_size, start, max_end, step_size),
    })
}

/// Creates an iterator over "closed" sliding-window ranges: every emitted
/// window lies fully inside `0..len` and has exactly `window_size` elements.
///
/// The iterator is empty when `window_size > len`.
///
/// # Errors
///
/// Fails if `window_size` or `step_size` is zero.
///
/// ```
/// use subsample_ranges::closed_window_ranges;
///
/// let windows: Vec<_> = closed_window_ranges(5, 3, 1)?.collect();
/// assert_eq!(windows, vec![0..3, 1..4, 2..5]);
/// # Ok::<(), subsample_common::error::Error>(())
/// ```
pub fn closed_window_ranges(
    len: usize,
    window_size: usize,
    step_size: usize,
) -> Result<WindowRanges> {
    window_ranges(len, window_size, 0, saturating_isize(len), step_size)
}

/// Creates an iterator over "open" sliding-window ranges: the window may
/// overhang either edge of the sequence, so the first and last windows are
/// clamped and come out shorter than `window_size`.
///
/// The cursor starts at `-(window_size - 1)` and windows are admitted up to a
/// logical end of `len + window_size - 1`, so the emitted windows grow from a
/// single element up to full size and shrink back down at the far edge.
///
/// # Errors
///
/// Fails if `window_size` or `step_size` is zero.
///
/// ```
/// use subsample_ranges::open_window_ranges;
///
/// let windows: Vec<_> = open_window_ranges(8, 5, 2)?.collect();
/// assert_eq!(windows, vec![0..1, 0..3, 0..5, 2..7, 4..8, 6..8]);
/// # Ok::<(), subsample_common::error::Error>(())
/// ```
pub fn open_window_ranges(
    len: usize,
    window_size: usize,
    step_size: usize,
) -> Result<WindowRanges> {
    let overhang = window_size.saturating_sub(1);
    window_ranges(
        len,
        window_size,
        -saturating_isize(overhang),
        saturating_isize(len.saturating_add(overhang)),
        step_size,
    )
}

/// Exact number of windows a cursor starting at `start` will emit: positions
/// `start, start + step_size, ...` while `p < len && p + window_size <= max_end`.
/// Computed in `i128` so extreme bound combinations cannot wrap.
fn count_windows(
    len: usize,
    window_size: usize,
    start: isize,
    max_end: isize,
    step_size: usize,
) -> usize {
    let last_start = i128::min(len as i128 - 1, max_end as i128 - window_size as i128);
    let span = last_start - start as i128;
    if span < 0 {
        0
    } else {
        usize::try_from(span as u128 / step_size as u128 + 1).unwrap_or(usize::MAX)
    }
}

fn saturating_isize(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

impl Iterator for WindowRanges {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let from = self.cursor.max(0) as usize;
        let to = self
            .cursor
            .saturating_add_unsigned(self.window_size)
            .clamp(0, self.len) as usize;
        self.cursor = self.cursor.saturating_add_unsigned(self.step_size);
        Some(from..to)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for WindowRanges {}

impl std::iter::FusedIterator for WindowRanges {}
