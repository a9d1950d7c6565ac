//! Sift primitives
//!
//! Each primitive repairs the min-max invariant around a single misplaced
//! element. `min` selects the direction: on a min level "more extreme" means
//! smaller, on a max level it means larger.
//!
//! All loops are iterative so the stack depth stays constant regardless of
//! the heap size.

use crate::index::{
    grandchildren, has_children, has_grandparent, has_parent, is_min_level, lchild, parent, rchild,
};
use crate::traits::Container;

/// Returns true if the element at `a` is strictly more extreme than the
/// element at `b` in the given direction.
#[inline]
fn more_extreme<H: Container + ?Sized>(h: &H, a: usize, b: usize, min: bool) -> bool {
    if min {
        h.less(a, b)
    } else {
        h.less(b, a)
    }
}

/// Sifts the element at `i` down through the first `n` elements.
///
/// Returns true if the element moved.
pub(crate) fn down<H: Container + ?Sized>(h: &mut H, i: usize, n: usize) -> bool {
    down_min_max(h, i, n, is_min_level(i))
}

/// Sift-down with an explicit level kind for `m`.
///
/// Assumes both subtrees below `m` already satisfy the invariant.
pub(crate) fn down_min_max<H: Container + ?Sized>(
    h: &mut H,
    mut m: usize,
    n: usize,
    min: bool,
) -> bool {
    let mut moved = false;
    while has_children(m, n) {
        let mut best = lchild(m);
        let mut is_child = true;
        if rchild(m) < n && more_extreme(h, rchild(m), best, min) {
            best = rchild(m);
        }
        for j in grandchildren(m, n) {
            if more_extreme(h, j, best, min) {
                best = j;
                is_child = false;
            }
        }

        if !more_extreme(h, best, m, min) {
            break;
        }
        h.swap(best, m);
        moved = true;
        if is_child {
            break;
        }

        // The value that moved into `best` may now sit on the wrong side of
        // its new parent, which lives on a level of the opposite kind.
        if more_extreme(h, parent(best), best, min) {
            h.swap(best, parent(best));
        }
        m = best;
    }
    moved
}

/// Sifts the element at `i` up towards the root.
///
/// Used after appending at a leaf. A leaf has no descendants to disturb,
/// so a single parent check picks the direction and the rest of the walk
/// follows grandparents only.
pub(crate) fn up<H: Container + ?Sized>(h: &mut H, i: usize) {
    let min = is_min_level(i);
    if has_parent(i) && more_extreme(h, parent(i), i, min) {
        h.swap(i, parent(i));
        up_min_max(h, parent(i), !min);
    } else {
        up_min_max(h, i, min);
    }
}

/// Moves the element at `i` up along same-kind levels while it is more
/// extreme than its grandparent.
pub(crate) fn up_min_max<H: Container + ?Sized>(h: &mut H, mut i: usize, min: bool) -> bool {
    let start = i;
    while has_grandparent(i) {
        let gp = parent(parent(i));
        if !more_extreme(h, i, gp, min) {
            break;
        }
        h.swap(i, gp);
        i = gp;
    }
    i != start
}

/// Restores the invariant after the element at `i` changed arbitrarily.
///
/// Unlike [`up`], `i` may have descendants. When the new value belongs
/// above its parent, the parent's old value is pushed into `i`'s subtree,
/// which needs a sift-down of its own.
pub(crate) fn restore<H: Container + ?Sized>(h: &mut H, i: usize) {
    let n = h.len();
    let min = is_min_level(i);
    if has_parent(i) && more_extreme(h, parent(i), i, min) {
        let p = parent(i);
        h.swap(i, p);
        down_min_max(h, i, n, min);
        up_min_max(h, p, !min);
    } else if !up_min_max(h, i, min) {
        down_min_max(h, i, n, min);
    }
}
