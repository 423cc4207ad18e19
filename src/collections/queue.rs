//! `Queue`: a bounded FIFO on top of [`RingBuffer`].

use crate::collections::RingBuffer;
use crate::error::CapacityError;

/// A first-in first-out queue holding up to `N` values.
#[derive(Clone)]
pub struct Queue<T: Copy, const N: usize> {
    ring: RingBuffer<T, N>,
}

impl<T: Copy, const N: usize> Queue<T, N> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            ring: RingBuffer::new(),
        }
    }

    /// Appends `value` at the back.
    ///
    /// # Errors
    /// Hands `value` back when the queue is full.
    #[inline]
    pub fn enqueue(&mut self, value: T) -> Result<(), CapacityError<T>> {
        self.ring.push(value)
    }

    /// Removes the element at the front.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.ring.pop()
    }

    /// The element that `dequeue` would return next.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.ring.peek()
    }

    /// Number of queued elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.ring.occupied()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns `true` if `enqueue` would fail.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Maximum number of queued elements.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Drops everything still queued.
    pub fn clear(&mut self) {
        self.ring.clear();
    }
}

impl<T: Copy, const N: usize> Default for Queue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + core::fmt::Debug, const N: usize> core::fmt::Debug for Queue<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Queue")
            .field("len", &self.len())
            .field("items", &self.ring)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut q: Queue<u16, 3> = Queue::new();
        assert!(q.is_empty());
        q.enqueue(10).unwrap();
        q.enqueue(20).unwrap();
        q.enqueue(30).unwrap();
        assert!(q.is_full());
        assert_eq!(q.enqueue(40), Err(CapacityError::new(40)));

        assert_eq!(q.peek(), Some(&10));
        assert_eq!(q.dequeue(), Some(10));
        q.enqueue(40).unwrap();
        assert_eq!(q.dequeue(), Some(20));
        assert_eq!(q.dequeue(), Some(30));
        assert_eq!(q.dequeue(), Some(40));
        assert_eq!(q.dequeue(), None);
    }
}
