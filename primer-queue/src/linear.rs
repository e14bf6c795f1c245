//! Linear array-backed queue with lazy compaction.
//!
//! Dequeue only advances the head cursor. Enqueue writes at the tail until the
//! tail reaches the end of the buffer; at that point, if the head has moved,
//! the live range `[head, tail)` is shifted down to index 0 and the append
//! proceeds. Movement cost is paid once per run-off, so enqueue is amortized
//! O(1) over mixed workloads and O(len) in the worst case.
//!
//! # Example
//!
//! ```
//! use primer_queue::LinearQueue;
//!
//! let mut queue = LinearQueue::new(3).unwrap();
//! queue.enqueue('a').unwrap();
//! queue.enqueue('b').unwrap();
//! queue.enqueue('c').unwrap();
//!
//! // Tail is at the end and nothing has been dequeued: genuinely full.
//! assert!(queue.enqueue('d').is_err());
//!
//! // Freeing the front lets the next enqueue compact and succeed.
//! assert_eq!(queue.dequeue(), Some('a'));
//! queue.enqueue('d').unwrap();
//! assert_eq!(queue.compactions(), 1);
//! ```

use std::fmt;

use crate::BoundedQueue;
use crate::error::{Full, InvalidCapacity};

/// A fixed-capacity FIFO queue that compacts on demand.
///
/// Holds up to `capacity` elements.
pub struct LinearQueue<T> {
    /// Backing slots. `[head, tail)` are `Some`, everything else `None`.
    buffer: Box<[Option<T>]>,
    /// Next slot to dequeue.
    head: usize,
    /// Next slot to enqueue into.
    tail: usize,
    /// How many times the live range has been shifted down.
    compactions: u64,
}

impl<T> LinearQueue<T> {
    /// Creates an empty queue with room for `capacity` elements.
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
            compactions: 0,
        })
    }

    /// Appends `item` at the back.
    ///
    /// If the tail has reached the end of the buffer but the head has moved,
    /// the queue compacts first. Returns `Err(Full(item))` only when all
    /// `capacity` slots hold live elements.
    ///
    /// # Errors
    ///
    /// Returns [`Full`] carrying `item` if the queue is full.
    #[inline]
    pub fn enqueue(&mut self, item: T) -> Result<(), Full<T>> {
        if self.tail == self.buffer.len() {
            if self.head == 0 {
                return Err(Full(item));
            }
            self.compact();
        }

        self.buffer[self.tail] = Some(item);
        self.tail += 1;
        Ok(())
    }

    /// Removes and returns the front element, or `None` if empty.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        if self.head == self.tail {
            return None;
        }

        let item = self.buffer[self.head].take();
        self.head += 1;
        item
    }

    /// Shifts `[head, tail)` down to start at index 0.
    #[cold]
    fn compact(&mut self) {
        let live = self.tail - self.head;
        log::trace!(
            "compacting linear queue: moving {live} elements from head {}",
            self.head
        );

        // Slots before head are all `None`, so rotating them behind the live
        // range leaves `[live, capacity)` empty.
        self.buffer[..self.tail].rotate_left(self.head);
        self.tail = live;
        self.head = 0;
        self.compactions += 1;
    }

    /// Returns the front element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.buffer[self.head..self.tail]
            .first()
            .and_then(Option::as_ref)
    }

    /// Iterates over queued elements, front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer[self.head..self.tail].iter().flatten()
    }

    /// Drops every queued element and resets both cursors to 0.
    pub fn clear(&mut self) {
        for slot in &mut self.buffer[self.head..self.tail] {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
    }

    /// Returns the number of buffer slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the number of queued elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.tail - self.head
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns `true` if every slot holds a live element.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Returns how many times enqueue had to compact the buffer.
    #[inline]
    pub const fn compactions(&self) -> u64 {
        self.compactions
    }
}

impl<T> BoundedQueue<T> for LinearQueue<T> {
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

impl<T> fmt::Debug for LinearQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearQueue")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // Construction
    // ============================================================================

    #[test]
    fn zero_capacity_rejected() {
        let err = LinearQueue::<String>::new(0).unwrap_err();
        assert_eq!(err, InvalidCapacity { requested: 0 });
    }

    #[test]
    fn new_is_empty() {
        let mut queue = LinearQueue::<String>::new(4).unwrap();
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 4);
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.dequeue(), None);
    }

    // ============================================================================
    // Basic Operations
    // ============================================================================

    #[test]
    fn enqueue_dequeue_in_order() {
        let mut queue = LinearQueue::new(4).unwrap();

        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.enqueue(3).unwrap();

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn full_returns_item() {
        let mut queue = LinearQueue::new(2).unwrap();

        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        assert!(queue.is_full());

        assert_eq!(queue.enqueue(3), Err(Full(3)));
        assert_eq!(queue.compactions(), 0);
    }

    #[test]
    fn capacity_one() {
        let mut queue = LinearQueue::new(1).unwrap();

        for i in 0..10 {
            queue.enqueue(i).unwrap();
            assert!(queue.enqueue(i + 100).is_err());
            assert_eq!(queue.dequeue(), Some(i));
        }
        assert_eq!(queue.compactions(), 9);
    }

    // ============================================================================
    // Compaction
    // ============================================================================

    #[test]
    fn compacts_only_when_tail_hits_end() {
        let mut queue = LinearQueue::new(4).unwrap();

        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        assert_eq!(queue.dequeue(), Some(1));

        // Room at the tail: no compaction yet.
        queue.enqueue(3).unwrap();
        queue.enqueue(4).unwrap();
        assert_eq!(queue.compactions(), 0);
        assert_eq!((queue.head, queue.tail), (1, 4));

        queue.enqueue(5).unwrap();
        assert_eq!(queue.compactions(), 1);
        assert_eq!((queue.head, queue.tail), (0, 4));
        assert!(queue.is_full());

        let drained: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
        assert_eq!(drained, vec![2, 3, 4, 5]);
    }

    #[test]
    fn compaction_leaves_tail_slots_empty() {
        let mut queue = LinearQueue::new(4).unwrap();

        for i in 0..4 {
            queue.enqueue(i).unwrap();
        }
        queue.dequeue();
        queue.dequeue();
        queue.dequeue();
        queue.enqueue(4).unwrap();

        assert_eq!((queue.head, queue.tail), (0, 2));
        assert_eq!(&queue.buffer[..], &[Some(3), Some(4), None, None]);
    }

    #[test]
    fn compaction_after_drain() {
        let mut queue = LinearQueue::new(3).unwrap();

        for i in 0..3 {
            queue.enqueue(i).unwrap();
        }
        for _ in 0..3 {
            queue.dequeue();
        }
        assert!(queue.is_empty());

        // head == tail == capacity: compaction moves nothing.
        queue.enqueue(9).unwrap();
        assert_eq!((queue.head, queue.tail), (0, 1));
        assert_eq!(queue.peek(), Some(&9));
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    #[test]
    fn peek_and_iter() {
        let mut queue = LinearQueue::new(3).unwrap();

        queue.enqueue("a").unwrap();
        queue.enqueue("b").unwrap();
        queue.enqueue("c").unwrap();
        queue.dequeue();

        assert_eq!(queue.peek(), Some(&"b"));
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn clear_resets() {
        let mut queue = LinearQueue::new(3).unwrap();

        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.dequeue();
        queue.clear();

        assert!(queue.is_empty());
        assert_eq!((queue.head, queue.tail), (0, 0));
        assert!(queue.buffer.iter().all(Option::is_none));

        for i in 0..3 {
            queue.enqueue(i).unwrap();
        }
        assert_eq!(queue.compactions(), 0);
    }

    #[test]
    fn debug_output() {
        let mut queue = LinearQueue::new(2).unwrap();
        queue.enqueue(1u8).unwrap();
        assert_eq!(
            format!("{queue:?}"),
            "LinearQueue { capacity: 2, len: 1, head: 0, tail: 1, .. }"
        );
    }

    // ============================================================================
    // Drop
    // ============================================================================

    #[test]
    fn drop_remaining() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        let mut queue = LinearQueue::new(4).unwrap();

        for _ in 0..3 {
            queue.enqueue(Rc::clone(&tracker)).unwrap();
        }
        drop(queue.dequeue());
        assert_eq!(Rc::strong_count(&tracker), 3);

        drop(queue);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
