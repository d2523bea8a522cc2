//! FIFO queues.
//!
//! [`CircularQueue`] addresses a slot array modulo its capacity so neither
//! end ever shifts elements:
//!
//! ```text
//!   capacity = 8, len = 5
//!
//!   index:  0   1   2   3   4   5   6   7
//!         [ d | e | _ | _ | _ | a | b | c ]
//!                   ^rear         ^front
//! ```
//!
//! Growth and shrink follow the same policy as
//! [`GrowableBuffer`](crate::GrowableBuffer): double when full, halve when
//! `0 < len < capacity / 4`, never below the floor. A resize linearizes the
//! live elements to start at slot 0.
//!
//! [`LinkQueue`] is the link-backed alternative over a
//! [`DoublyLinkedList`].

use core::fmt;

use crate::config::{DEFAULT_CAPACITY, DEFAULT_MIN_CAPACITY};
use crate::{DoublyLinkedList, Error, Result};

/// First-in, first-out container.
pub trait Queue<T> {
    /// Adds a value at the back.
    fn enqueue(&mut self, value: T);

    /// Removes and returns the front value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the queue is empty.
    fn dequeue(&mut self) -> Result<T>;

    /// Returns the front value without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the queue is empty.
    fn peek(&self) -> Result<&T>;

    /// Returns the number of values.
    fn len(&self) -> usize;

    /// Returns `true` if the queue holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ring-buffer queue that resizes on demand.
///
/// Besides FIFO use it supports removal and inspection at the back, which
/// makes it usable as a double-ended working set.
pub struct CircularQueue<T> {
    slots: Box<[Option<T>]>,
    front: usize,
    rear: usize,
    len: usize,
    min_capacity: usize,
}

fn alloc_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    (0..capacity).map(|_| None).collect()
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CircularQueue<T> {
    /// Creates an empty queue with 10 slots and a floor of 4.
    pub fn new() -> Self {
        Self::from_parts(DEFAULT_CAPACITY, DEFAULT_MIN_CAPACITY)
    }

    /// Creates an empty queue with `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self::from_parts(capacity, DEFAULT_MIN_CAPACITY.min(capacity))
    }

    pub(crate) fn from_parts(capacity: usize, min_capacity: usize) -> Self {
        debug_assert!(min_capacity > 0 && min_capacity <= capacity);
        Self {
            slots: alloc_slots(capacity),
            front: 0,
            rear: 0,
            len: 0,
            min_capacity,
        }
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the capacity floor below which the queue never shrinks.
    #[inline]
    pub const fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Returns the value `index` positions behind the front.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] unless `index < len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        Error::check_index(index, self.len)?;
        Ok(self.live(self.physical(index)))
    }

    /// Returns the most recently enqueued value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the queue is empty.
    pub fn peek_back(&self) -> Result<&T> {
        if self.len == 0 {
            return Err(Error::EmptyCollection);
        }
        Ok(self.live(self.physical(self.len - 1)))
    }

    /// Removes and returns the most recently enqueued value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the queue is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::EmptyCollection);
        }
        self.rear = (self.rear + self.capacity() - 1) % self.capacity();
        let value = self.take(self.rear);
        self.len -= 1;
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Drops every value. Capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.front = 0;
        self.rear = 0;
        self.len = 0;
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        (0..self.len).map(|i| self.live(self.physical(i)))
    }

    #[inline]
    fn physical(&self, index: usize) -> usize {
        (self.front + index) % self.capacity()
    }

    #[inline]
    fn live(&self, slot: usize) -> &T {
        match self.slots[slot].as_ref() {
            Some(value) => value,
            None => unreachable!("slot {slot} inside [front, rear) is occupied"),
        }
    }

    #[inline]
    fn take(&mut self, slot: usize) -> T {
        match self.slots[slot].take() {
            Some(value) => value,
            None => unreachable!("slot {slot} inside [front, rear) is occupied"),
        }
    }

    fn shrink_if_sparse(&mut self) {
        if self.len > 0 && self.len < self.capacity() / 4 {
            self.resize(self.capacity() / 2);
        }
    }

    fn resize(&mut self, new_capacity: usize) {
        let new_capacity = new_capacity.max(self.min_capacity).max(self.len);
        if new_capacity == self.capacity() {
            return;
        }
        tracing::trace!(
            from = self.capacity(),
            to = new_capacity,
            len = self.len,
            "queue resize"
        );

        let mut slots = alloc_slots(new_capacity);
        for (i, dst) in slots.iter_mut().take(self.len).enumerate() {
            let src = (self.front + i) % self.slots.len();
            *dst = self.slots[src].take();
        }
        self.slots = slots;
        self.front = 0;
        self.rear = self.len % new_capacity;
    }
}

impl<T> Queue<T> for CircularQueue<T> {
    fn enqueue(&mut self, value: T) {
        if self.len == self.capacity() {
            self.resize(2 * self.capacity());
        }
        self.slots[self.rear] = Some(value);
        self.rear = (self.rear + 1) % self.capacity();
        self.len += 1;
    }

    fn dequeue(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::EmptyCollection);
        }
        let value = self.take(self.front);
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        self.shrink_if_sparse();
        Ok(value)
    }

    fn peek(&self) -> Result<&T> {
        if self.len == 0 {
            return Err(Error::EmptyCollection);
        }
        Ok(self.live(self.front))
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FromIterator<T> for CircularQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for value in iter {
            queue.enqueue(value);
        }
        queue
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Queue over a [`DoublyLinkedList`]: enqueue at the tail, dequeue at the
/// head, both O(1).
#[derive(Debug)]
pub struct LinkQueue<T> {
    items: DoublyLinkedList<T>,
}

impl<T> Default for LinkQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: DoublyLinkedList::new(),
        }
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }
}

impl<T> Queue<T> for LinkQueue<T> {
    #[inline]
    fn enqueue(&mut self, value: T) {
        self.items.add_last(value);
    }

    #[inline]
    fn dequeue(&mut self) -> Result<T> {
        self.items.remove_first()
    }

    #[inline]
    fn peek(&self) -> Result<&T> {
        self.items.peek_first()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}
