//! # primer-sort
//!
//! In-place quicksort over slices.
//!
//! The partition step takes the first element as the pivot and walks two
//! cursors toward each other, moving the pivot's "hole" back and forth as
//! out-of-place elements are found. Sorting recurses into the smaller side
//! and loops on the larger, so stack depth stays O(log n). Time is O(n log n)
//! on typical input and O(n^2) on already-sorted input; no pivot selection
//! is attempted.
//!
//! The sort is not stable.
//!
//! # Example
//!
//! ```
//! let mut v = [5, 1, 4, 2, 3];
//! primer_sort::quick_sort(&mut v);
//! assert_eq!(v, [1, 2, 3, 4, 5]);
//!
//! // Sort only indices 1..=3.
//! let mut v = [9, 3, 2, 1, 0];
//! primer_sort::quick_sort_range(&mut v, 1, 3);
//! assert_eq!(v, [9, 1, 2, 3, 0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Sorts `v` in ascending order.
#[inline]
pub fn quick_sort<T: Ord>(v: &mut [T]) {
    quick_sort_by(v, &mut |a: &T, b: &T| a < b);
}

/// Sorts `v[low..=high]` in ascending order, leaving the rest untouched.
///
/// Does nothing if `low >= high`.
///
/// # Panics
///
/// Panics if `low < high` and `high` is out of bounds.
pub fn quick_sort_range<T: Ord>(v: &mut [T], low: usize, high: usize) {
    if low >= high {
        return;
    }
    assert!(
        high < v.len(),
        "range end {high} out of bounds for slice of length {}",
        v.len()
    );
    quick_sort(&mut v[low..=high]);
}

/// Sorts `v` with `is_less` as the strict ordering.
///
/// `is_less(a, b)` must return `true` iff `a` sorts before `b`. An
/// inconsistent ordering leaves `v` in an unspecified order but never panics.
pub fn quick_sort_by<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > 1 {
        let pivot = partition_by(v, is_less);
        let (left, rest) = std::mem::take(&mut v).split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort_by(left, is_less);
            v = right;
        } else {
            quick_sort_by(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around its first element and returns the pivot's final
/// index `p`.
///
/// Afterwards no element of `v[..p]` is greater than `v[p]` and no element of
/// `v[p + 1..]` is less than it.
///
/// # Panics
///
/// Panics if `v` is empty.
///
/// # Example
///
/// ```
/// let mut v = [3, 5, 1, 4, 2];
/// let p = primer_sort::partition(&mut v);
///
/// assert_eq!(v[p], 3);
/// assert!(v[..p].iter().all(|x| *x <= 3));
/// assert!(v[p + 1..].iter().all(|x| *x >= 3));
/// ```
pub fn partition<T: Ord>(v: &mut [T]) -> usize {
    partition_by(v, &mut |a: &T, b: &T| a < b)
}

fn partition_by<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(!v.is_empty(), "cannot partition an empty slice");

    // The pivot always sits at whichever cursor is the current hole.
    let mut left = 0;
    let mut right = v.len() - 1;

    while left < right {
        // Hole at `left`: find something on the right that belongs left.
        while left < right && is_less(&v[left], &v[right]) {
            right -= 1;
        }
        if left < right {
            v.swap(left, right);
            left += 1;
        }

        // Hole at `right`: find something on the left that belongs right.
        while left < right && is_less(&v[left], &v[right]) {
            left += 1;
        }
        if left < right {
            v.swap(left, right);
            right -= 1;
        }
    }

    left
}
