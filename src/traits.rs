//! Common traits for min-max heaps
//!
//! This module provides the two seams of the crate:
//!
//! - [`Container`]: the capability set the heap algorithms in [`ops`](crate::ops)
//!   operate through. Any indexable, growable sequence with an ordering
//!   predicate can be turned into a min-max heap by implementing it.
//! - [`DoubleEndedHeap`]: an owned priority-queue API with access to both
//!   extremes, implemented by [`MinMaxHeap`](crate::heap::MinMaxHeap).

/// An ordered, growable sequence the heap algorithms can rearrange in place
///
/// The algorithms only ever call these five methods. They never allocate,
/// clone, or compare elements on their own, so the container is free to keep
/// its elements wherever it likes (a `Vec`, a slab indexed elsewhere, a pair
/// of parallel vectors, ...).
///
/// `less` must be a strict weak ordering for as long as the elements are
/// under heap management. An inconsistent predicate is not detected; it
/// leaves the heap invariant silently broken (see
/// [`verify::check`](crate::verify::check)).
///
/// # Example
///
/// ```rust
/// use minmax_heap::{ops, Container};
///
/// /// Tasks ordered by deadline, stored as two parallel vectors.
/// struct Tasks {
///     deadlines: Vec<u64>,
///     names: Vec<&'static str>,
/// }
///
/// impl Container for Tasks {
///     type Item = (u64, &'static str);
///
///     fn len(&self) -> usize {
///         self.deadlines.len()
///     }
///
///     fn less(&self, i: usize, j: usize) -> bool {
///         self.deadlines[i] < self.deadlines[j]
///     }
///
///     fn swap(&mut self, i: usize, j: usize) {
///         self.deadlines.swap(i, j);
///         self.names.swap(i, j);
///     }
///
///     fn push(&mut self, (deadline, name): Self::Item) {
///         self.deadlines.push(deadline);
///         self.names.push(name);
///     }
///
///     fn pop(&mut self) -> Option<Self::Item> {
///         Some((self.deadlines.pop()?, self.names.pop()?))
///     }
/// }
///
/// let mut tasks = Tasks { deadlines: Vec::new(), names: Vec::new() };
/// ops::push(&mut tasks, (30, "deploy"));
/// ops::push(&mut tasks, (10, "review"));
/// ops::push(&mut tasks, (20, "test"));
///
/// assert_eq!(ops::pop_min(&mut tasks), Some((10, "review")));
/// assert_eq!(ops::pop_max(&mut tasks), Some((30, "deploy")));
/// ```
pub trait Container {
    /// The element type moved in and out by [`push`](Container::push) and
    /// [`pop`](Container::pop)
    type Item;

    /// Returns the number of elements
    fn len(&self) -> usize;

    /// Returns true if the container holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true iff the element at `i` strictly precedes the element at `j`
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j`
    fn swap(&mut self, i: usize, j: usize);

    /// Appends an element at the end
    fn push(&mut self, item: Self::Item);

    /// Removes and returns the last element, or `None` if empty
    fn pop(&mut self) -> Option<Self::Item>;
}

/// Owned double-ended priority queue
///
/// Like `BinaryHeap`, the elements are their own priority. Unlike
/// `BinaryHeap`, both the minimum and the maximum are available in O(1)
/// and removable in O(log n).
///
/// # Example
///
/// ```rust
/// use minmax_heap::DoubleEndedHeap;
/// use minmax_heap::heap::MinMaxHeap;
///
/// let mut heap = MinMaxHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek_min(), Some(&1));
/// assert_eq!(heap.peek_max(), Some(&3));
/// assert_eq!(heap.pop_max(), Some(3));
/// assert_eq!(heap.pop_min(), Some(1));
/// ```
pub trait DoubleEndedHeap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the smallest element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_min(&self) -> Option<&T>;

    /// Returns the largest element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_max(&self) -> Option<&T>;

    /// Removes and returns the smallest element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop_min(&mut self) -> Option<T>;

    /// Removes and returns the largest element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop_max(&mut self) -> Option<T>;

    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// O(n + m), by rebuilding over the combined storage
    fn merge(&mut self, other: Self);
}
