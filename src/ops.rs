//! Min-max heap operations over any [`Container`]
//!
//! A min-max heap (double-ended priority queue) is an implicit binary tree
//! whose levels alternate between *min levels*, where an element is no
//! greater than any descendant, and *max levels*, where it is no less. The
//! root therefore holds the minimum and one of its children holds the
//! maximum.
//!
//! These functions hold no state of their own. The container owns the
//! elements; the functions only rearrange them through [`Container`]'s
//! `len`/`less`/`swap`/`push`/`pop`.
//!
//! Based on "Min-Max Heaps and Generalized Priority Queues" by Atkinson,
//! Sack, Santoro and Strothotte (CACM, 1986).
//!
//! # Time Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | [`init`]         | O(n)       |
//! | [`push`]         | O(log n)   |
//! | [`pop_min`]      | O(log n)   |
//! | [`pop_max`]      | O(log n)   |
//! | [`remove`]       | O(log n)   |
//! | [`fix`]          | O(log n)   |
//! | [`peek_max_index`] | O(1)     |
//!
//! # Example
//!
//! ```rust
//! use minmax_heap::ops;
//!
//! let mut h = vec![2, 1, 5];
//! ops::init(&mut h);
//! ops::push(&mut h, 3);
//!
//! assert_eq!(ops::pop_min(&mut h), Some(1));
//! assert_eq!(ops::pop_max(&mut h), Some(5));
//! ```

use crate::index::{lchild, rchild};
use crate::sift::{down, restore, up};
use crate::traits::Container;

/// Establishes the heap invariant over arbitrary contents
///
/// Bottom-up construction: every internal node, from the last one back to
/// the root, is sifted down into the already-valid subtrees below it.
/// Costs at most 7n/3 comparisons.
pub fn init<H: Container + ?Sized>(h: &mut H) {
    let n = h.len();
    for i in (0..n / 2).rev() {
        down(h, i, n);
    }
}

/// Pushes `item` onto the heap
///
/// The container appends it, then it is sifted up from the new last slot.
pub fn push<H: Container + ?Sized>(h: &mut H, item: H::Item) {
    h.push(item);
    let last = h.len() - 1;
    up(h, last);
}

/// Removes and returns the minimum element, or `None` if the heap is empty
pub fn pop_min<H: Container + ?Sized>(h: &mut H) -> Option<H::Item> {
    let n = h.len();
    if n == 0 {
        return None;
    }
    h.swap(0, n - 1);
    down(h, 0, n - 1);
    h.pop()
}

/// Alias for [`pop_min`]
pub fn pop<H: Container + ?Sized>(h: &mut H) -> Option<H::Item> {
    pop_min(h)
}

/// Returns the index of the maximum element, or `None` if the heap is empty
///
/// For one or two elements this is the last index. Otherwise it is the
/// larger of the root's two children, preferring the right child on ties.
pub fn peek_max_index<H: Container + ?Sized>(h: &H) -> Option<usize> {
    match h.len() {
        0 => None,
        n @ (1 | 2) => Some(n - 1),
        _ => {
            let (l, r) = (lchild(0), rchild(0));
            Some(if h.less(r, l) { l } else { r })
        }
    }
}

/// Removes and returns the maximum element, or `None` if the heap is empty
pub fn pop_max<H: Container + ?Sized>(h: &mut H) -> Option<H::Item> {
    let n = h.len();
    let i = peek_max_index(h)?;
    if n > 2 {
        h.swap(i, n - 1);
        down(h, i, n - 1);
    }
    h.pop()
}

/// Removes and returns the element at index `i`
///
/// The last element moves into slot `i` and is sifted whichever way it
/// belongs.
///
/// # Panics
///
/// Panics if `i >= h.len()`.
pub fn remove<H: Container + ?Sized>(h: &mut H, i: usize) -> H::Item {
    let n = h.len();
    assert!(
        i < n,
        "index out of bounds: the len is {} but the index is {}",
        n,
        i
    );
    let last = n - 1;
    if i != last {
        h.swap(i, last);
    }
    let item = h.pop().expect("non-empty container must yield its last element");
    if i != last {
        restore(h, i);
    }
    item
}

/// Re-establishes the heap ordering after the element at index `i` has
/// changed its value
///
/// Equivalent to, but cheaper than, calling [`remove`] followed by
/// [`push`] of the new value.
///
/// # Panics
///
/// Panics if `i >= h.len()`.
pub fn fix<H: Container + ?Sized>(h: &mut H, i: usize) {
    let n = h.len();
    assert!(
        i < n,
        "index out of bounds: the len is {} but the index is {}",
        n,
        i
    );
    restore(h, i);
}
