//! Chunk-partition boundaries for a sequence.
//!
//! A sequence of length `len` is split into `num_chunks` contiguous chunks
//! covering it completely, in order and without overlap. When `len` is not a
//! multiple of `num_chunks`, the remainder is spread over the leading chunks:
//! the first `len % num_chunks` chunks are one element longer than the rest.
//! More chunks than elements is allowed; the trailing chunks are then empty.

use std::ops::Range;

use subsample_common::{Result, verify_arg};

/// Returns the index range of chunk `chunk_index` out of `num_chunks`.
///
/// # Errors
///
/// Fails if `num_chunks` is zero or `chunk_index >= num_chunks`.
///
/// ```
/// use subsample_ranges::chunk_range;
///
/// assert_eq!(chunk_range(10, 3, 0)?, 0..4);
/// assert_eq!(chunk_range(10, 3, 1)?, 4..7);
/// assert_eq!(chunk_range(10, 3, 2)?, 7..10);
/// # Ok::<(), subsample_common::error::Error>(())
/// ```
pub fn chunk_range(len: usize, num_chunks: usize, chunk_index: usize) -> Result<Range<usize>> {
    verify_arg!(num_chunks, num_chunks >= 1);
    verify_arg!(chunk_index, chunk_index < num_chunks);
    Ok(chunk_bounds(len, num_chunks, chunk_index))
}

/// Creates an iterator over the ranges of all `num_chunks` chunks, in order.
///
/// The emitted ranges partition `0..len`: they are adjacent, non-overlapping
/// and cover every index exactly once.
///
/// # Errors
///
/// Fails if `num_chunks` is zero.
pub fn chunk_ranges(len: usize, num_chunks: usize) -> Result<ChunkRanges> {
    verify_arg!(num_chunks, num_chunks >= 1);
    Ok(ChunkRanges {
        len,
        num_chunks,
        front_chunk: 0,
        back_chunk: num_chunks,
    })
}

/// An iterator over the index ranges of a chunk partition.
#[derive(Debug, Clone)]
pub struct ChunkRanges {
    /// Length of the partitioned sequence.
    len: usize,
    /// Total number of chunks in the partition.
    num_chunks: usize,
    /// Next chunk to emit from the front.
    front_chunk: usize,
    /// One past the next chunk to emit from the back.
    back_chunk: usize,
}

fn chunk_bounds(len: usize, num_chunks: usize, chunk_index: usize) -> Range<usize> {
    let base = len / num_chunks;
    // The first `extended` chunks carry one element of the remainder each.
    let extended = len % num_chunks;
    if chunk_index < extended {
        let from = chunk_index * (base + 1);
        from..from + base + 1
    } else {
        let from = extended * (base + 1) + (chunk_index - extended) * base;
        from..from + base
    }
}

impl Iterator for ChunkRanges {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front_chunk == self.back_chunk {
            return None;
        }
        let range = chunk_bounds(self.len, self.num_chunks, self.front_chunk);
        self.front_chunk += 1;
        Some(range)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back_chunk - self.front_chunk;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for ChunkRanges {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front_chunk == self.back_chunk {
            return None;
        }
        self.back_chunk -= 1;
        Some(chunk_bounds(self.len, self.num_chunks, self.back_chunk))
    }
}

impl ExactSizeIterator for ChunkRanges {}

impl std::iter::FusedIterator for ChunkRanges {}
