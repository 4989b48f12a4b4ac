//! Chunk-partition views over a slice.
//!
//! A slice is split into `num_chunks` contiguous chunks whose sizes differ by
//! at most one element (leading chunks carry the remainder). Every chunk can
//! be viewed on its own ([`extract_chunk`]) or as its complement, the whole
//! input without it ([`omit_chunk`]), which makes the hold-out/kept pairs of
//! cross-validation style splits cheap to enumerate.

use subsample_common::Result;
use subsample_ranges::chunks::{self, ChunkRanges};
use subsample_views::SliceView;

/// Returns a view of chunk `chunk_index` out of `num_chunks`.
///
/// For a fixed `num_chunks`, the extracted chunks are adjacent, do not
/// overlap and jointly cover the input.
///
/// # Errors
///
/// Fails if `num_chunks` is zero or `chunk_index >= num_chunks`.
///
/// ```
/// use subsample::extract_chunk;
///
/// let data: Vec<u32> = (0..10).collect();
/// assert_eq!(extract_chunk(&data, 3, 0)?.to_vec(), vec![0, 1, 2, 3]);
/// assert_eq!(extract_chunk(&data, 3, 1)?.to_vec(), vec![4, 5, 6]);
/// assert_eq!(extract_chunk(&data, 3, 2)?.to_vec(), vec![7, 8, 9]);
/// # Ok::<(), subsample::Error>(())
/// ```
pub fn extract_chunk<'a, T>(
    input: &'a [T],
    num_chunks: usize,
    chunk_index: usize,
) -> Result<SliceView<'a, T>> {
    let range = chunks::chunk_range(input.len(), num_chunks, chunk_index)?;
    Ok(SliceView::range(input, range))
}

/// Returns a view of everything except chunk `chunk_index`, preserving the
/// input order of the remaining elements.
///
/// Together, `extract_chunk` and `omit_chunk` for the same index partition
/// the input.
///
/// # Errors
///
/// Fails if `num_chunks` is zero or `chunk_index >= num_chunks`.
pub fn omit_chunk<'a, T>(
    input: &'a [T],
    num_chunks: usize,
    chunk_index: usize,
) -> Result<SliceView<'a, T>> {
    let range = chunks::chunk_range(input.len(), num_chunks, chunk_index)?;
    Ok(SliceView::complement(input, range))
}

/// Creates an iterator over the views of all `num_chunks` chunks, in order.
///
/// # Errors
///
/// Fails if `num_chunks` is zero.
pub fn extract_chunks<'a, T>(input: &'a [T], num_chunks: usize) -> Result<Chunks<'a, T>> {
    Ok(Chunks {
        input,
        ranges: chunks::chunk_ranges(input.len(), num_chunks)?,
    })
}

/// Creates an iterator over the complement views of all `num_chunks` chunks,
/// in order: the `i`-th item is the input without its `i`-th chunk.
///
/// # Errors
///
/// Fails if `num_chunks` is zero.
pub fn omit_chunks<'a, T>(input: &'a [T], num_chunks: usize) -> Result<OmitChunks<'a, T>> {
    Ok(OmitChunks {
        input,
        ranges: chunks::chunk_ranges(input.len(), num_chunks)?,
    })
}

/// An iterator over the chunk views of a slice.
#[derive(Debug, Clone)]
pub struct Chunks<'a, T> {
    /// Sequence the chunks are cut from.
    input: &'a [T],
    /// Underlying enumeration of chunk ranges.
    ranges: ChunkRanges,
}

impl<'a, T> Iterator for Chunks<'a, T> {
    type Item = SliceView<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let range = self.ranges.next()?;
        Some(SliceView::range(self.input, range))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ranges.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Chunks<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let range = self.ranges.next_back()?;
        Some(SliceView::range(self.input, range))
    }
}

impl<T> ExactSizeIterator for Chunks<'_, T> {}

impl<T> std::iter::FusedIterator for Chunks<'_, T> {}

/// An iterator over the chunk-complement views of a slice.
#[derive(Debug, Clone)]
pub struct OmitChunks<'a, T> {
    /// Sequence the chunks are omitted from.
    input: &'a [T],
    /// Underlying enumeration of the omitted chunk ranges.
    ranges: ChunkRanges,
}

impl<'a, T> Iterator for OmitChunks<'a, T> {
    type Item = SliceView<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let range = self.ranges.next()?;
        Some(SliceView::complement(self.input, range))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ranges.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for OmitChunks<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let range = self.ranges.next_back()?;
        Some(SliceView::complement(self.input, range))
    }
}

impl<T> ExactSizeIterator for OmitChunks<'_, T> {}

impl<T> std::iter::FusedIterator for OmitChunks<'_, T> {}
