//! Ready-made [`Container`] implementations
//!
//! - `Vec<T>` for any `T: Ord`, ordered by `T`'s natural order. Wrap
//!   elements in [`std::cmp::Reverse`] to flip it.
//! - [`VecBy`]: a `Vec<T>` paired with a caller-supplied comparator, for
//!   orders that are not `T`'s `Ord` (by key, by float total order, ...).

use std::cmp::Ordering;
use std::fmt;

use crate::traits::Container;

impl<T: Ord> Container for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }

    #[inline]
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
}

/// A vector ordered by a comparator closure
///
/// # Example
///
/// ```rust
/// use minmax_heap::container::VecBy;
/// use minmax_heap::ops;
///
/// // Order words by length.
/// let mut words = VecBy::from_vec(vec!["kiwi", "fig", "banana"], |a: &&str, b: &&str| {
///     a.len().cmp(&b.len())
/// });
/// ops::init(&mut words);
///
/// assert_eq!(ops::pop_max(&mut words), Some("banana"));
/// assert_eq!(ops::pop_min(&mut words), Some("fig"));
/// ```
#[derive(Clone)]
pub struct VecBy<T, F> {
    data: Vec<T>,
    cmp: F,
}

impl<T, F> VecBy<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty container ordered by `cmp`
    pub fn new(cmp: F) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Wraps an existing vector. The elements are not reordered; call
    /// [`ops::init`](crate::ops::init) before using it as a heap.
    pub fn from_vec(data: Vec<T>, cmp: F) -> Self {
        Self { data, cmp }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the elements
    ///
    /// Changing an element's order breaks the heap invariant at that index;
    /// follow up with [`ops::fix`](crate::ops::fix).
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, F> Container for VecBy<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        (self.cmp)(&self.data[i], &self.data[j]) == Ordering::Less
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.data.as_mut_slice().swap(i, j);
    }

    #[inline]
    fn push(&mut self, item: T) {
        self.data.push(item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for VecBy<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VecBy").field("data", &self.data).finish()
    }
}
