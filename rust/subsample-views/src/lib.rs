//! Read-only, non-copying views over a borrowed slice.
//!
//! A [`SliceView`] projects a subset of a backing slice through one of three
//! shapes: a contiguous range, an explicit index selection, or the complement
//! of a contiguous range (everything except it). The view stores indices only,
//! never cloned elements, and hands out references with the lifetime of the
//! backing slice.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, Range};

/// A read-only projection of a borrowed slice.
///
/// Elements are addressed by their position within the view; the projection
/// maps view positions to backing-slice indices. Cloning a view never clones
/// elements (a selection view clones its index vector).
pub struct SliceView<'a, T> {
    backing: &'a [T],
    projection: Projection,
}

/// Maps view positions to indices of the backing slice.
#[derive(Debug, Clone)]
enum Projection {
    /// The contiguous run `range.start..range.end`.
    Range(Range<usize>),
    /// Explicitly listed backing indices, in view order.
    Selection(Vec<usize>),
    /// Everything except the contiguous run `range.start..range.end`.
    Complement(Range<usize>),
}

impl Projection {
    fn len(&self, backing_len: usize) -> usize {
        match self {
            Projection::Range(range) => range.len(),
            Projection::Selection(indices) => indices.len(),
            Projection::Complement(omitted) => backing_len - omitted.len(),
        }
    }

    fn get<'a, T>(&self, backing: &'a [T], index: usize) -> Option<&'a T> {
        match self {
            Projection::Range(range) => {
                if index < range.len() {
                    Some(&backing[range.start + index])
                } else {
                    None
                }
            }
            Projection::Selection(indices) => indices.get(index).map(|&i| &backing[i]),
            Projection::Complement(omitted) => {
                if index >= backing.len() - omitted.len() {
                    None
                } else if index < omitted.start {
                    Some(&backing[index])
                } else {
                    Some(&backing[index + omitted.len()])
                }
            }
        }
    }
}

impl<'a, T> SliceView<'a, T> {
    /// Creates a view of the entire backing slice.
    pub fn full(backing: &'a [T]) -> Self {
        SliceView {
            backing,
            projection: Projection::Range(0..backing.len()),
        }
    }

    /// Creates a view of the contiguous run `range` of the backing slice.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    pub fn range(backing: &'a [T], range: Range<usize>) -> Self {
        assert!(
            range.start <= range.end && range.end <= backing.len(),
            "range out of bounds"
        );
        SliceView {
            backing,
            projection: Projection::Range(range),
        }
    }

    /// Creates a view of the listed backing indices, in the given order.
    ///
    /// Indices may repeat; the view then aliases the repeated element.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn selection(backing: &'a [T], indices: Vec<usize>) -> Self {
        assert!(
            indices.iter().all(|&index| index < backing.len()),
            "selection index out of bounds"
        );
        SliceView {
            backing,
            projection: Projection::Selection(indices),
        }
    }

    /// Creates a view of everything except the contiguous run `omitted`,
    /// preserving the backing order of the remaining elements.
    ///
    /// # Panics
    ///
    /// Panics if the omitted range is out of bounds.
    pub fn complement(backing: &'a [T], omitted: Range<usize>) -> Self {
        assert!(
            omitted.start <= omitted.end && omitted.end <= backing.len(),
            "omitted range out of bounds"
        );
        SliceView {
            backing,
            projection: Projection::Complement(omitted),
        }
    }

    /// Returns an empty view.
    pub fn empty() -> Self {
        SliceView {
            backing: &[],
            projection: Projection::Range(0..0),
        }
    }

    /// Returns the number of elements visible through the view.
    pub fn len(&self) -> usize {
        self.projection.len(self.backing.len())
    }

    /// Returns true if the view exposes no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at the given view position, or
    /// `None` if out of bounds. The reference carries the backing slice
    /// lifetime, not the view borrow.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.projection.get(self.backing, index)
    }

    /// Returns a reference to the first element, or `None` if empty.
    pub fn first(&self) -> Option<&'a T> {
        self.get(0)
    }

    /// Returns a reference to the last element, or `None` if empty.
    pub fn last(&self) -> Option<&'a T> {
        let len = self.len();
        if len == 0 { None } else { self.get(len - 1) }
    }

    /// Returns the backing slice this view projects.
    pub fn backing(&self) -> &'a [T] {
        self.backing
    }

    /// Returns an iterator over the visible elements.
    pub fn iter(&self) -> SliceViewIter<'_, T> {
        SliceViewIter {
            view: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Copies the visible elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Clone for SliceView<'_, T> {
    fn clone(&self) -> Self {
        SliceView {
            backing: self.backing,
            projection: self.projection.clone(),
        }
    }
}

impl<T> Default for SliceView<'_, T> {
    fn default() -> Self {
        SliceView::empty()
    }
}

impl<'a, T> From<&'a [T]> for SliceView<'a, T> {
    fn from(backing: &'a [T]) -> Self {
        SliceView::full(backing)
    }
}

impl<T: fmt::Debug> fmt::Debug for SliceView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SliceView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for SliceView<'_, T> {}

impl<T: PartialOrd> PartialOrd for SliceView<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}
impl<T: Ord> Ord for SliceView<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for SliceView<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self {
            item.hash(state);
        }
    }
}

impl<T> Index<usize> for SliceView<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!("index {index} out of bounds in view of length {}", self.len()),
        }
    }
}

/// Borrowing iterator over the visible elements of a [`SliceView`].
#[derive(Debug, Clone)]
pub struct SliceViewIter<'v, T> {
    view: &'v SliceView<'v, T>,
    front: usize,
    back: usize,
}

impl<'v, T> Iterator for SliceViewIter<'v, T> {
    type Item = &'v T;

    fn next(&mut self) -> Option<&'v T> {
        if self.front == self.back {
            return None;
        }
        let item = self.view.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'v, T> DoubleEndedIterator for SliceViewIter<'v, T> {
    fn next_back(&mut self) -> Option<&'v T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.view.get(self.back)
    }
}

impl<T> ExactSizeIterator for SliceViewIter<'_, T> {}

impl<T> std::iter::FusedIterator for SliceViewIter<'_, T> {}

impl<'v, 'a, T> IntoIterator for &'v SliceView<'a, T> {
    type Item = &'v T;
    type IntoIter = SliceViewIter<'v, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// By-value iterator over a [`SliceView`]; owns the projection and yields
/// references with the backing slice lifetime.
#[derive(Debug, Clone)]
pub struct SliceViewIntoIter<'a, T> {
    backing: &'a [T],
    projection: Projection,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for SliceViewIntoIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.projection.get(self.backing, self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for SliceViewIntoIter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.projection.get(self.backing, self.back)
    }
}

impl<T> ExactSizeIterator for SliceViewIntoIter<'_, T> {}

impl<T> std::iter::FusedIterator for SliceViewIntoIter<'_, T> {}

impl<'a, T> IntoIterator for SliceView<'a, T> {
    type Item = &'a T;
    type IntoIter = SliceViewIntoIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let back = self.len();
        SliceViewIntoIter {
            backing: self.backing,
            projection: self.projection,
            front: 0,
            back,
        }
    }
}
