//! Min-max invariant checking
//!
//! [`check`] walks every index and compares it against its children and
//! grandchildren. It costs O(n) comparisons and is meant for tests and for
//! callers that mutate a container out of band and want to confirm the
//! result.

use std::fmt;

use crate::index::{grandchildren, is_min_level, lchild, rchild};
use crate::traits::Container;

/// A broken min-max ordering between an element and one of its descendants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantError {
    /// The element at `ancestor`, on a min level, is greater than the
    /// element at `descendant`
    MinLevel { ancestor: usize, descendant: usize },
    /// The element at `ancestor`, on a max level, is less than the element
    /// at `descendant`
    MaxLevel { ancestor: usize, descendant: usize },
}

impl InvariantError {
    /// Index of the element whose ordering constraint failed
    pub fn ancestor(&self) -> usize {
        match *self {
            InvariantError::MinLevel { ancestor, .. } | InvariantError::MaxLevel { ancestor, .. } => {
                ancestor
            }
        }
    }

    /// Index of the descendant it was compared against
    pub fn descendant(&self) -> usize {
        match *self {
            InvariantError::MinLevel { descendant, .. }
            | InvariantError::MaxLevel { descendant, .. } => descendant,
        }
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::MinLevel {
                ancestor,
                descendant,
            } => write!(
                f,
                "min-level element at {} is greater than descendant at {}",
                ancestor, descendant
            ),
            InvariantError::MaxLevel {
                ancestor,
                descendant,
            } => write!(
                f,
                "max-level element at {} is less than descendant at {}",
                ancestor, descendant
            ),
        }
    }
}

impl std::error::Error for InvariantError {}

/// Checks the min-max invariant over the whole container
///
/// Returns the first violation found, scanning indices in order and, for
/// each index, its children before its grandchildren.
///
/// # Example
///
/// ```rust
/// use minmax_heap::verify::{check, InvariantError};
///
/// assert!(check(&vec![1, 9, 8, 2, 3]).is_ok());
/// assert_eq!(
///     check(&vec![5, 9, 8, 2]),
///     Err(InvariantError::MinLevel { ancestor: 0, descendant: 3 }),
/// );
/// ```
pub fn check<H: Container + ?Sized>(h: &H) -> Result<(), InvariantError> {
    let n = h.len();
    for i in 0..n {
        let min = is_min_level(i);
        let children = lchild(i).min(n)..(rchild(i) + 1).min(n);
        for j in children.chain(grandchildren(i, n)) {
            if min && h.less(j, i) {
                return Err(InvariantError::MinLevel {
                    ancestor: i,
                    descendant: j,
                });
            }
            if !min && h.less(i, j) {
                return Err(InvariantError::MaxLevel {
                    ancestor: i,
                    descendant: j,
                });
            }
        }
    }
    Ok(())
}

/// Returns true if the container satisfies the min-max invariant
pub fn is_valid<H: Container + ?Sized>(h: &H) -> bool {
    check(h).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_singleton_are_valid() {
        assert!(is_valid(&Vec::<i32>::new()));
        assert!(is_valid(&vec![42]));
    }

    #[test]
    fn test_two_elements() {
        assert!(is_valid(&vec![1, 2]));
        assert!(is_valid(&vec![2, 2]));
        assert_eq!(
            check(&vec![2, 1]),
            Err(InvariantError::MinLevel {
                ancestor: 0,
                descendant: 1
            })
        );
    }

    #[test]
    fn test_max_level_violation() {
        // Index 1 (max level) is smaller than its child at index 3.
        let err = check(&vec![0, 5, 9, 6]).unwrap_err();
        assert_eq!(
            err,
            InvariantError::MaxLevel {
                ancestor: 1,
                descendant: 3
            }
        );
        assert_eq!(err.ancestor(), 1);
        assert_eq!(err.descendant(), 3);
    }

    #[test]
    fn test_grandchild_violation() {
        // Children of the root are fine but grandchild 3 is smaller.
        let v = vec![4, 9, 8, 3];
        assert_eq!(
            check(&v),
            Err(InvariantError::MinLevel {
                ancestor: 0,
                descendant: 3
            })
        );
    }

    #[test]
    fn test_display() {
        let err = InvariantError::MaxLevel {
            ancestor: 2,
            descendant: 5,
        };
        assert_eq!(
            err.to_string(),
            "max-level element at 2 is less than descendant at 5"
        );
    }
}
