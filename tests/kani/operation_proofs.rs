//! Proofs for the heap operations on small symbolic inputs
//!
//! Every harness starts from arbitrary contents of a fixed small size, so
//! Kani explores every ordering of the elements.
//!
//! To run these proofs:
//!   cargo kani

use minmax_heap::ops;
use minmax_heap::verify::is_valid;

const N: usize = 6;

#[cfg(kani)]
fn any_heap() -> Vec<u8> {
    let values: [u8; N] = kani::any();
    let mut h = values.to_vec();
    ops::init(&mut h);
    h
}

/// Proof that init establishes the invariant on any input
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_init_valid() {
    let h = any_heap();
    assert!(h.len() == N);
    assert!(is_valid(&h));
}

/// Proof that push grows by one and keeps the invariant
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_push_valid() {
    let mut h = any_heap();
    let x: u8 = kani::any();

    ops::push(&mut h, x);

    assert!(h.len() == N + 1);
    assert!(is_valid(&h));
}

/// Proof that pop_min returns a lower bound of the remaining elements
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_pop_min_correct() {
    let mut h = any_heap();

    let min = ops::pop_min(&mut h).unwrap();

    assert!(h.len() == N - 1);
    assert!(is_valid(&h));
    for &x in &h {
        assert!(min <= x);
    }
}

/// Proof that pop_max returns an upper bound of the remaining elements
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_pop_max_correct() {
    let mut h = any_heap();

    let max = ops::pop_max(&mut h).unwrap();

    assert!(h.len() == N - 1);
    assert!(is_valid(&h));
    for &x in &h {
        assert!(max >= x);
    }
}

/// Proof that remove at any index keeps the invariant
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_remove_valid() {
    let mut h = any_heap();
    let i: usize = kani::any();
    kani::assume(i < N);
    let expected = h[i];

    let got = ops::remove(&mut h, i);

    assert!(got == expected);
    assert!(h.len() == N - 1);
    assert!(is_valid(&h));
}

/// Proof that fix after overwriting any slot keeps the invariant
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_fix_valid() {
    let mut h = any_heap();
    let i: usize = kani::any();
    kani::assume(i < N);
    h[i] = kani::any();

    ops::fix(&mut h, i);

    assert!(h.len() == N);
    assert!(is_valid(&h));
}
