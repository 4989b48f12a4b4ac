//! # Subsample: non-copying sampling, windowing and chunking views
//!
//! Subsample derives sub-sequences from an in-memory slice without copying or
//! mutating it: random samples, sliding windows and chunk partitions are all
//! exposed as read-only [`SliceView`]s that store indices, never elements.
//! The intended consumers are data-processing pipelines that repeatedly
//! partition or sample large sequences (cross-validation folds, windowed
//! signal analysis, bootstrap-style sub-sampling) and cannot afford a copy
//! per derived sequence.
//!
//! ## Operations
//!
//! * [`sample_indices`] - uniform random index sample without replacement
//! * [`sample_view`] / [`sample_views`] - one random sample view, or an
//!   unbounded stream of independent ones
//! * [`ListSampler`] - reusable sampling policy (full, relative or absolute
//!   size) owning its random generator
//! * [`closed_sliding_windows`] / [`open_sliding_windows`] /
//!   [`sliding_windows`] - lazy sliding-window views
//! * [`extract_chunk`] / [`omit_chunk`] and the [`extract_chunks`] /
//!   [`omit_chunks`] iterators - chunk partition views and their complements
//! * [`SampleSliceExt`] - the same operations as methods on `[T]`
//!
//! Randomness comes from a caller-supplied [`fastrand::Rng`], so seeded
//! generators make every draw reproducible. All parameters are validated
//! eagerly and return [`Result`]; view production itself never fails.
//!
//! ## Module Organization
//!
//! The crate re-exports its building blocks, so the sub-crates are reachable
//! through a single dependency:
//!
//! * [`ranges`] - window and chunk index calculus, with no view layer on top
//! * [`views`] - the [`SliceView`] projection type
//!
//! ## Example
//!
//! ```
//! use subsample::{ListSampler, SampleSliceExt};
//!
//! let data: Vec<u32> = (0..100).collect();
//!
//! // Hold-out split: chunk 0 of 3 and everything else.
//! let held_out = data.extract_chunk(3, 0)?;
//! let kept = data.omit_chunk(3, 0)?;
//! assert_eq!(held_out.len() + kept.len(), data.len());
//!
//! // Five independent random samples of 10 elements each.
//! let mut sampler = ListSampler::with_absolute_size(10, fastrand::Rng::with_seed(42))?;
//! for sample in sampler.create_samples(&data).take(5) {
//!     assert_eq!(sample.len(), 10);
//! }
//! # Ok::<(), subsample::Error>(())
//! ```

pub mod chunks;
pub mod reservoir;
pub mod sampler;
pub mod slice_ext;
pub mod windows;

pub use subsample_common::error::{Error, ErrorKind};
pub use subsample_common::result::Result;
pub use subsample_ranges as ranges;
pub use subsample_views as views;

pub use chunks::{Chunks, OmitChunks, extract_chunk, extract_chunks, omit_chunk, omit_chunks};
pub use reservoir::sample_indices;
pub use sampler::{ListSampler, Samples, sample_view, sample_views};
pub use slice_ext::SampleSliceExt;
pub use subsample_views::SliceView;
pub use windows::{SlidingWindows, closed_sliding_windows, open_sliding_windows, sliding_windows};
