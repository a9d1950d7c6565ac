//! Min-Max Heaps for Rust
//!
//! A min-max heap is a double-ended priority queue laid out as an implicit
//! binary tree in a flat sequence. Tree levels alternate between min levels
//! and max levels, which gives O(1) access and O(log n) removal at *both*
//! ends under a single ordering.
//!
//! # Layers
//!
//! - [`ops`]: the heap algorithms (`init`, `push`, `pop_min`, `pop_max`,
//!   `remove`, `fix`) as free functions over any [`Container`]. They keep no
//!   state and never allocate; the container owns the elements.
//! - [`container`]: `Container` for `Vec<T: Ord>` and for [`VecBy`](container::VecBy),
//!   a vector paired with a comparator.
//! - [`heap`]: [`MinMaxHeap`](heap::MinMaxHeap), an owned `BinaryHeap`-style
//!   type implementing [`DoubleEndedHeap`].
//! - [`verify`]: invariant checking for tests and out-of-band mutation.
//! - [`index`]: implicit-tree index arithmetic.
//!
//! Nothing here is synchronized. Sharing a container across threads needs
//! external locking.
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

pub mod container;
pub mod heap;
pub mod index;
pub mod ops;
mod sift;
pub mod traits;
pub mod verify;

// Re-export the main traits for convenience
pub use traits::{Container, DoubleEndedHeap};
