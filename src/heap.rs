//! Min-Max Heap
//!
//! An owned double-ended priority queue backed by a `Vec<T>`. All
//! reordering is delegated to the free functions in [`ops`](crate::ops), so
//! this type is a thin, `BinaryHeap`-shaped shell around them.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `push`        | O(log n)   |
//! | `pop_min`     | O(log n)   |
//! | `pop_max`     | O(log n)   |
//! | `peek_min`    | O(1)       |
//! | `peek_max`    | O(1)       |
//! | `remove`      | O(log n)   |
//! | `replace_min` | O(log n)   |
//! | `from(Vec)`   | O(n)       |
//! | `merge`       | O(n + m)   |
//!
//! # Example
//!
//! ```rust
//! use minmax_heap::DoubleEndedHeap;
//! use minmax_heap::heap::MinMaxHeap;
//!
//! let mut heap: MinMaxHeap<i32> = vec![2, 1, 5].into();
//! heap.push(3);
//!
//! assert_eq!(heap.pop_min(), Some(1));
//! assert_eq!(heap.pop_max(), Some(5));
//! assert_eq!(heap.into_sorted_vec(), vec![2, 3]);
//! ```

use std::iter::FusedIterator;
use std::slice;
use std::vec;

use crate::ops;
use crate::traits::DoubleEndedHeap;

/// A min-max heap over `T`'s natural order
///
/// Use [`std::cmp::Reverse`] or [`VecBy`](crate::container::VecBy) with the
/// [`ops`](crate::ops) functions for other orders.
#[derive(Debug, Clone)]
pub struct MinMaxHeap<T: Ord> {
    /// Elements in implicit-tree order
    data: Vec<T>,
}

impl<T: Ord> DoubleEndedHeap<T> for MinMaxHeap<T> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) {
        ops::push(&mut self.data, item);
    }

    fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    fn peek_max(&self) -> Option<&T> {
        ops::peek_max_index(&self.data).map(|i| &self.data[i])
    }

    fn pop_min(&mut self) -> Option<T> {
        ops::pop_min(&mut self.data)
    }

    fn pop_max(&mut self) -> Option<T> {
        ops::pop_max(&mut self.data)
    }

    fn merge(&mut self, mut other: Self) {
        if other.data.len() > self.data.len() {
            std::mem::swap(&mut self.data, &mut other.data);
        }
        // Pushing the smaller side is cheaper than a rebuild when it is
        // small relative to the total.
        if other.data.len() * 8 < self.data.len() {
            for item in other.data {
                ops::push(&mut self.data, item);
            }
        } else {
            self.data.append(&mut other.data);
            ops::init(&mut self.data);
        }
    }
}

impl<T: Ord> MinMaxHeap<T> {
    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over the elements in heap (not sorted) order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// The underlying storage in heap order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Removes the element at position `i` of [`as_slice`](Self::as_slice)
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn remove(&mut self, i: usize) -> T {
        ops::remove(&mut self.data, i)
    }

    /// Replaces the minimum with `item` and returns the old minimum
    ///
    /// On an empty heap, `item` is pushed and `None` is returned.
    pub fn replace_min(&mut self, item: T) -> Option<T> {
        match self.data.first_mut() {
            None => {
                self.data.push(item);
                None
            }
            Some(slot) => {
                let old = std::mem::replace(slot, item);
                ops::fix(&mut self.data, 0);
                Some(old)
            }
        }
    }

    /// Replaces the maximum with `item` and returns the old maximum
    ///
    /// On an empty heap, `item` is pushed and `None` is returned.
    pub fn replace_max(&mut self, item: T) -> Option<T> {
        match ops::peek_max_index(&self.data) {
            None => {
                self.data.push(item);
                None
            }
            Some(i) => {
                let old = std::mem::replace(&mut self.data[i], item);
                ops::fix(&mut self.data, i);
                Some(old)
            }
        }
    }

    /// Returns the underlying vector in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = ops::pop_min(&mut self.data) {
            sorted.push(item);
        }
        sorted
    }

    /// Removes every element, yielding them in ascending order from the
    /// front and descending order from the back
    ///
    /// Elements not yet yielded when the iterator is dropped are discarded.
    ///
    /// ```rust
    /// use minmax_heap::heap::MinMaxHeap;
    ///
    /// let mut heap: MinMaxHeap<i32> = (1..=5).collect();
    /// let mut drain = heap.drain_sorted();
    /// assert_eq!(drain.next(), Some(1));
    /// assert_eq!(drain.next_back(), Some(5));
    /// assert_eq!(drain.collect::<Vec<_>>(), vec![2, 3, 4]);
    /// assert!(heap.as_slice().is_empty());
    /// ```
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T> {
        DrainSorted { heap: self }
    }
}

impl<T: Ord> Default for MinMaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for MinMaxHeap<T> {
    /// Builds a heap from arbitrary contents in O(n)
    fn from(mut data: Vec<T>) -> Self {
        ops::init(&mut data);
        Self { data }
    }
}

impl<T: Ord> From<MinMaxHeap<T>> for Vec<T> {
    fn from(heap: MinMaxHeap<T>) -> Self {
        heap.data
    }
}

impl<T: Ord> FromIterator<T> for MinMaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord> Extend<T> for MinMaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            ops::push(&mut self.data, item);
        }
    }
}

impl<T: Ord> IntoIterator for MinMaxHeap<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    /// Consumes the heap, yielding elements in heap order
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a MinMaxHeap<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Sorted draining iterator returned by [`MinMaxHeap::drain_sorted`]
#[derive(Debug)]
pub struct DrainSorted<'a, T: Ord> {
    heap: &'a mut MinMaxHeap<T>,
}

impl<T: Ord> Iterator for DrainSorted<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        ops::pop_min(&mut self.heap.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.heap.data.len();
        (n, Some(n))
    }
}

impl<T: Ord> DoubleEndedIterator for DrainSorted<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        ops::pop_max(&mut self.heap.data)
    }
}

impl<T: Ord> ExactSizeIterator for DrainSorted<'_, T> {}

impl<T: Ord> FusedIterator for DrainSorted<'_, T> {}

impl<T: Ord> Drop for DrainSorted<'_, T> {
    fn drop(&mut self) {
        self.heap.data.clear();
    }
}
