//! Proofs for the implicit-tree index helpers
//!
//! To run these proofs:
//!   cargo kani

use minmax_heap::index::{grandchildren, is_min_level, lchild, level, parent, rchild};

/// Proof that children map back to their parent one level down
#[cfg(kani)]
#[kani::proof]
fn verify_parent_child_inverse() {
    let i: usize = kani::any();
    kani::assume(i < (1 << 20));

    assert!(parent(lchild(i)) == i);
    assert!(parent(rchild(i)) == i);
    assert!(level(lchild(i)) == level(i) + 1);
    assert!(level(rchild(i)) == level(i) + 1);
    assert!(is_min_level(lchild(i)) != is_min_level(i));
}

/// Proof that the grandchildren range never exceeds the bound or four slots
#[cfg(kani)]
#[kani::proof]
fn verify_grandchildren_bounded() {
    let i: usize = kani::any();
    let n: usize = kani::any();
    kani::assume(i < (1 << 20));
    kani::assume(n < (1 << 24));

    let range = grandchildren(i, n);
    assert!(range.end <= n);
    assert!(range.len() <= 4);
    if !range.is_empty() {
        assert!(parent(parent(range.start)) == i);
        assert!(parent(parent(range.end - 1)) == i);
    }
}
