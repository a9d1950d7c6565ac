//! Index arithmetic for the implicit binary tree
//!
//! The heap is stored breadth-first in a flat sequence: the element at
//! index `i` has children `2i+1` and `2i+2` and parent `(i-1)/2`. Depth 0
//! (the root) and every even depth is a *min level*; odd depths are *max
//! levels*.
//!
//! These helpers use plain `usize` arithmetic. Indices are always below the
//! container length, so `2i+2` only overflows for containers longer than
//! `usize::MAX / 2`, which is not guarded against.

use std::ops::Range;

/// Depth of index `i` in the tree, with the root at depth 0.
#[inline]
pub fn level(i: usize) -> u32 {
    usize::BITS - (i + 1).leading_zeros() - 1
}

/// Returns true if index `i` sits on a min level (even depth).
#[inline]
pub fn is_min_level(i: usize) -> bool {
    level(i) % 2 == 0
}

/// Parent of `i`. Only meaningful for `i > 0`.
#[inline]
pub fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
pub fn has_parent(i: usize) -> bool {
    i > 0
}

#[inline]
pub fn has_grandparent(i: usize) -> bool {
    i > 2
}

#[inline]
pub fn lchild(i: usize) -> usize {
    2 * i + 1
}

#[inline]
pub fn rchild(i: usize) -> usize {
    2 * i + 2
}

/// Returns true if `i` has at least one child in a tree of `n` elements.
#[inline]
pub fn has_children(i: usize, n: usize) -> bool {
    lchild(i) < n
}

/// Grandchildren of `i` in a tree of `n` elements.
///
/// The four grandchildren `4i+3..=4i+6` are contiguous, so this is a
/// range clipped to `n` (possibly empty).
#[inline]
pub fn grandchildren(i: usize, n: usize) -> Range<usize> {
    let first = lchild(lchild(i));
    let end = (rchild(rchild(i)) + 1).min(n);
    first.min(end)..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(level(0), 0);
        assert_eq!(level(1), 1);
        assert_eq!(level(2), 1);
        assert_eq!(level(3), 2);
        assert_eq!(level(6), 2);
        assert_eq!(level(7), 3);
        assert_eq!(level(14), 3);
        assert_eq!(level(15), 4);
    }

    #[test]
    fn test_min_levels_alternate() {
        assert!(is_min_level(0));
        assert!(!is_min_level(1));
        assert!(!is_min_level(2));
        for i in 3..=6 {
            assert!(is_min_level(i));
        }
        for i in 7..=14 {
            assert!(!is_min_level(i));
        }
    }

    #[test]
    fn test_parent_child_round_trip() {
        for i in 0..1000 {
            assert_eq!(parent(lchild(i)), i);
            assert_eq!(parent(rchild(i)), i);
            assert_eq!(level(lchild(i)), level(i) + 1);
        }
    }

    #[test]
    fn test_ancestry_predicates() {
        assert!(!has_parent(0));
        assert!(has_parent(1));
        assert!(!has_grandparent(2));
        assert!(has_grandparent(3));
        assert!(has_children(0, 2));
        assert!(!has_children(0, 1));
        assert!(!has_children(3, 7));
    }

    #[test]
    fn test_grandchildren_clipped() {
        assert_eq!(grandchildren(0, 100), 3..7);
        assert_eq!(grandchildren(0, 5), 3..5);
        assert_eq!(grandchildren(0, 3), 3..3);
        assert!(grandchildren(0, 2).is_empty());
        assert!(grandchildren(5, 10).is_empty());
        assert_eq!(grandchildren(1, 9), 7..9);
    }
}
