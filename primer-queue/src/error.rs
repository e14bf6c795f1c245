//! Error types for queue construction and enqueue.

use std::fmt;

/// Error returned by `enqueue` when the queue has no free slot.
///
/// Contains the item that could not be queued, so the caller can retry or
/// route it elsewhere.
///
/// # Example
///
/// ```
/// use primer_queue::LinearQueue;
///
/// let mut queue = LinearQueue::new(1).unwrap();
/// queue.enqueue(1).unwrap();
///
/// let err = queue.enqueue(2).unwrap_err();
/// assert_eq!(err.into_inner(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(
    /// The item that could not be queued.
    pub T,
);

impl<T> Full<T> {
    /// Returns the item that was rejected.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue is full")
    }
}

impl<T> fmt::Debug for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Full").finish_non_exhaustive()
    }
}

impl<T> std::error::Error for Full<T> {}

/// Error returned when a queue is constructed with an unusable capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCapacity {
    /// The capacity that was requested.
    pub requested: usize,
}

impl fmt::Display for InvalidCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "capacity must be at least 1, got {}", self.requested)
    }
}

impl std::error::Error for InvalidCapacity {}
