//! Index-range calculus for sliding windows and chunk partitioning.
//!
//! This crate computes the index ranges behind windowed and chunked traversals
//! of a sequence, without touching the sequence itself. It offers:
//!
//! - **Sliding windows**: lazy enumeration of fixed-stride window ranges,
//!   including windows that overhang the sequence edges and are clamped to it
//! - **Chunk partitioning**: boundaries of `n` contiguous chunks whose sizes
//!   differ by at most one element and jointly cover the sequence
//!
//! # Key Types
//!
//! - [`WindowRanges`] - Iterator over sliding-window ranges
//! - [`ChunkRanges`] - Iterator over the ranges of a chunk partition

pub mod chunks;
pub mod windows;

pub use chunks::{ChunkRanges, chunk_range, chunk_ranges};
pub use windows::{WindowRanges, closed_window_ranges, open_window_ranges, window_ranges};
