//! Circular-buffer queue.
//!
//! Head and tail both wrap modulo the buffer length, so no element ever
//! moves once written. Every operation is O(1) worst case.
//!
//! The queue is empty when `head == tail` and full when advancing the tail
//! would land on the head. Keeping one slot unused is what lets those two
//! states be told apart without a separate length field, so a queue with
//! `capacity` slots holds at most `capacity - 1` elements.
//!
//! # Example
//!
//! ```
//! use primer_queue::CircularQueue;
//!
//! let mut queue = CircularQueue::new(3).unwrap();
//! assert_eq!(queue.usable_capacity(), 2);
//!
//! queue.enqueue("a").unwrap();
//! queue.enqueue("b").unwrap();
//! assert!(queue.enqueue("c").is_err());
//!
//! assert_eq!(queue.dequeue(), Some("a"));
//! queue.enqueue("c").unwrap();
//! ```

use std::fmt;

use crate::BoundedQueue;
use crate::error::{Full, InvalidCapacity};

/// A fixed-capacity FIFO ring buffer.
///
/// Holds up to `capacity - 1` elements.
pub struct CircularQueue<T> {
    /// Backing slots. Occupied slots run from `head` up to (not including)
    /// `tail`, wrapping at the end.
    buffer: Box<[Option<T>]>,
    /// Next slot to dequeue.
    head: usize,
    /// Next slot to enqueue into. Always `None`.
    tail: usize,
}

impl<T> CircularQueue<T> {
    /// Creates an empty ring with `capacity` slots.
    ///
    /// A capacity of 1 is accepted but can never hold an element.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, InvalidCapacity> {
        if capacity == 0 {
            return Err(InvalidCapacity {
                requested: capacity,
            });
        }

        Ok(Self {
            buffer: std::iter::repeat_with(|| None).take(capacity).collect(),
            head: 0,
            tail: 0,
        })
    }

    #[inline]
    fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.buffer.len()
    }

    /// Appends `item` at the back.
    ///
    /// # Errors
    ///
    /// Returns [`Full`] carrying `item` if `capacity - 1` elements are
    /// already queued.
    #[inline]
    pub fn enqueue(&mut self, item: T) -> Result<(), Full<T>> {
        let next_tail = self.next_index(self.tail);
        if next_tail == self.head {
            return Err(Full(item));
        }

        self.buffer[self.tail] = Some(item);
        self.tail = next_tail;
        Ok(())
    }

    /// Removes and returns the front element, or `None` if empty.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        if self.head == self.tail {
            return None;
        }

        let item = self.buffer[self.head].take();
        self.head = self.next_index(self.head);
        item
    }

    /// Returns the front element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        if self.head == self.tail {
            return None;
        }
        self.buffer[self.head].as_ref()
    }

    /// Iterates over queued elements, front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let (front, back) = if self.head <= self.tail {
            (&self.buffer[self.head..self.tail], &self.buffer[..0])
        } else {
            (&self.buffer[self.head..], &self.buffer[..self.tail])
        };
        front.iter().chain(back).flatten()
    }

    /// Drops every queued element and resets both cursors to 0.
    pub fn clear(&mut self) {
        while self.dequeue().is_some() {}
        self.head = 0;
        self.tail = 0;
    }

    /// Returns the number of buffer slots, including the reserved one.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the maximum number of elements the queue can hold at once.
    #[inline]
    pub fn usable_capacity(&self) -> usize {
        self.buffer.len() - 1
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        if self.tail >= self.head {
            self.tail - self.head
        } else {
            self.buffer.len() - self.head + self.tail
        }
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns `true` if the next enqueue would be rejected.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.next_index(self.tail) == self.head
    }
}

impl<T> BoundedQueue<T> for CircularQueue<T> {
    fn enqueue(&mut self, item: T) -> Result<(), Full<T>> {
        Self::enqueue(self, item)
    }

    fn dequeue(&mut self) -> Option<T> {
        Self::dequeue(self)
    }

    fn peek(&self) -> Option<&T> {
        Self::peek(self)
    }

    fn capacity(&self) -> usize {
        Self::capacity(self)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn is_full(&self) -> bool {
        Self::is_full(self)
    }
}

impl<T> fmt::Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish_non_exhaustive()
    }
}
