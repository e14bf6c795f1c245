//! # primer-queue
//!
//! Fixed-capacity FIFO queues over a single owned buffer.
//!
//! ## Variants
//!
//! - [`LinearQueue`]: dequeue advances a head cursor without moving data.
//!   When the tail runs off the end of the buffer, live elements are shifted
//!   back to index 0 once, so enqueue is amortized O(1).
//! - [`CircularQueue`]: head and tail wrap modulo the buffer length. One slot
//!   is always left unused, so a queue built with capacity `n` holds at most
//!   `n - 1` elements.
//!
//! Both implement [`BoundedQueue`].
//!
//! ## Design Goals
//!
//! - No allocations after construction
//! - Full and empty are ordinary return values, never panics
//! - Single contiguous buffer, never resized
//!
//! ## Threading
//!
//! Neither queue does any internal locking. Every mutating operation takes
//! `&mut self`; to share a queue between threads, wrap it in a
//! [`Mutex`](std::sync::Mutex) at the call site.
//!
//! ## Example
//!
//! ```
//! use primer_queue::{BoundedQueue, CircularQueue, LinearQueue};
//!
//! let mut linear = LinearQueue::new(3).unwrap();
//! linear.enqueue("a").unwrap();
//! linear.enqueue("b").unwrap();
//! assert_eq!(linear.dequeue(), Some("a"));
//!
//! // Capacity 3 leaves room for two elements.
//! let mut ring = CircularQueue::new(3).unwrap();
//! ring.enqueue("a").unwrap();
//! ring.enqueue("b").unwrap();
//! assert!(ring.enqueue("c").is_err());
//!
//! // Either variant works behind the trait.
//! fn drain<Q: BoundedQueue<&'static str>>(queue: &mut Q) -> Vec<&'static str> {
//!     std::iter::from_fn(|| queue.dequeue()).collect()
//! }
//! assert_eq!(drain(&mut linear), vec!["b"]);
//! assert_eq!(drain(&mut ring), vec!["a", "b"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod circular;
mod error;
pub mod linear;

pub use circular::CircularQueue;
pub use error::{Full, InvalidCapacity};
pub use linear::LinearQueue;

/// A FIFO queue over a fixed-size buffer.
///
/// Implementations never grow. A full queue rejects the item and hands it
/// back in [`Full`]; an empty queue yields `None`.
pub trait BoundedQueue<T> {
    /// Appends `item` at the back. Returns `Err(Full(item))` if there is no room.
    fn enqueue(&mut self, item: T) -> Result<(), Full<T>>;

    /// Removes and returns the front element, or `None` if empty.
    fn dequeue(&mut self) -> Option<T>;

    /// Returns the front element without removing it.
    fn peek(&self) -> Option<&T>;

    /// Number of slots in the backing buffer.
    fn capacity(&self) -> usize;

    /// Number of elements currently queued.
    fn len(&self) -> usize;

    /// Returns `true` if no elements are queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the next [`enqueue`](BoundedQueue::enqueue) would fail.
    fn is_full(&self) -> bool;
}
