//! Index-addressable, auto-resizing contiguous storage.
//!
//! # Capacity Policy
//!
//! ```text
//! append/insert with len == cap   ->  cap' = 2 * cap
//! remove leaving 0 < len < cap/4  ->  cap' = max(cap / 2, min_capacity)
//! ```
//!
//! Shrinking at a quarter and landing at a half leaves the buffer half full
//! after a shrink and half empty after a grow, so an insert/remove sequence
//! straddling either threshold pays for at most one reallocation per `cap/4`
//! operations.
//!
//! Slots in `[len, cap)` always hold `None`; removed values are moved out,
//! never left behind in a dead slot.
//!
//! # Example
//!
//! ```
//! use linea_collections::GrowableBuffer;
//!
//! let mut buf: GrowableBuffer<u32> = [1, 2, 3].into_iter().collect();
//! buf.insert_at(1, 9).unwrap();
//! assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec![1, 9, 2, 3]);
//!
//! assert_eq!(buf.remove_at(0), Ok(1));
//! assert_eq!(buf.get(0), Ok(&9));
//! ```

use core::fmt;

use crate::config::{DEFAULT_CAPACITY, DEFAULT_MIN_CAPACITY};
use crate::{Error, Result};

/// Growable array with explicit doubling/halving.
///
/// Every resize copies exactly `len` live elements in order into a freshly
/// allocated slot array; references obtained before a resize are therefore
/// invalidated, which the borrow checker enforces.
pub struct GrowableBuffer<T> {
    slots: Box<[Option<T>]>,
    len: usize,
    min_capacity: usize,
}

fn alloc_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    (0..capacity).map(|_| None).collect()
}

impl<T> Default for GrowableBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GrowableBuffer<T> {
    /// Creates an empty buffer with 10 slots and a floor of 4.
    pub fn new() -> Self {
        Self::from_parts(DEFAULT_CAPACITY, DEFAULT_MIN_CAPACITY)
    }

    /// Creates an empty buffer with `capacity` slots.
    ///
    /// The shrink floor is the smaller of 4 and `capacity`. Use
    /// [`BufferBuilder`](crate::BufferBuilder) to choose it explicitly.
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
            len: 0,
            min_capacity,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the capacity floor below which the buffer never shrinks.
    #[inline]
    pub const fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] unless `index < len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        Error::check_index(index, self.len)?;
        Ok(self.live(index))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] unless `index < len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        Error::check_index(index, self.len)?;
        match self.slots[index].as_mut() {
            Some(value) => Ok(value),
            None => unreachable!("slot {index} below len is occupied"),
        }
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] unless `index < len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, value))
    }

    /// Appends to the end, doubling capacity first if full. Amortized O(1).
    pub fn append_end(&mut self, value: T) {
        if self.len == self.capacity() {
            self.resize(2 * self.capacity());
        }
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    /// Inserts at `index`, shifting `[index, len)` one slot right. O(n).
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] unless `index <= len`.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        Error::check_position(index, self.len)?;
        if self.len == self.capacity() {
            self.resize(2 * self.capacity());
        }
        // Slot `len` is empty; rotating moves it down to `index`.
        self.slots[index..=self.len].rotate_right(1);
        self.slots[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// Shrinks to half capacity (never below the floor) when the remaining
    /// length is non-zero and under a quarter of capacity. O(n).
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] unless `index < len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        Error::check_index(index, self.len)?;
        let Some(removed) = self.slots[index].take() else {
            unreachable!("slot {index} below len is occupied");
        };
        // The emptied slot travels to `len - 1`, keeping `[len, cap)` clear.
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;

        if self.len > 0 && self.len < self.capacity() / 4 {
            self.resize(self.capacity() / 2);
        }
        Ok(removed)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the buffer is empty.
    pub fn pop_end(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::EmptyCollection);
        }
        self.remove_at(self.len - 1)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the buffer is empty.
    pub fn peek_end(&self) -> Result<&T> {
        if self.len == 0 {
            return Err(Error::EmptyCollection);
        }
        Ok(self.live(self.len - 1))
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Iterates live elements front to back.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.slots[..self.len].iter().map(|slot| match slot {
            Some(value) => value,
            None => unreachable!("live slot is occupied"),
        })
    }

    #[inline]
    fn live(&self, index: usize) -> &T {
        match self.slots[index].as_ref() {
            Some(value) => value,
            None => unreachable!("slot {index} below len is occupied"),
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
            "buffer resize"
        );

        let mut slots = alloc_slots(new_capacity);
        for (dst, src) in slots.iter_mut().zip(&mut self.slots[..self.len]) {
            *dst = src.take();
        }
        self.slots = slots;
    }
}

impl<T> FromIterator<T> for GrowableBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buf = Self::new();
        buf.extend(iter);
        buf
    }
}

impl<T> Extend<T> for GrowableBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append_end(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for GrowableBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BufferBuilder;

    fn contents<T: Clone>(buf: &GrowableBuffer<T>) -> Vec<T> {
        buf.iter().cloned().collect()
    }

    #[test]
    fn new_buffer_is_empty() {
        let buf: GrowableBuffer<u64> = GrowableBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 10);
        assert_eq!(buf.get(0), Err(Error::OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    #[should_panic(expected = "capacity must be > 0")]
    fn zero_capacity_panics() {
        let _ = GrowableBuffer::<u8>::with_capacity(0);
    }

    #[test]
    fn append_stores_value() {
        let mut buf = GrowableBuffer::new();
        buf.append_end(1);
        buf.append_end(2);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.get(0), Ok(&1));
        assert_eq!(buf.get(1), Ok(&2));
    }

    #[test]
    fn append_doubles_when_full() {
        let mut buf = GrowableBuffer::with_capacity(2);
        buf.append_end('a');
        buf.append_end('b');
        assert_eq!(buf.capacity(), 2);
        buf.append_end('c');
        assert_eq!(buf.capacity(), 4);
        assert_eq!(contents(&buf), vec!['a', 'b', 'c']);
    }

    #[test]
    fn insert_shifts_right() {
        let mut buf: GrowableBuffer<u32> = [1, 2, 3].into_iter().collect();
        buf.insert_at(1, 9).unwrap();
        assert_eq!(contents(&buf), vec![1, 9, 2, 3]);
        assert_eq!(buf.get(1), Ok(&9));
    }

    #[test]
    fn insert_at_ends() {
        let mut buf: GrowableBuffer<u32> = [2].into_iter().collect();
        buf.insert_at(0, 1).unwrap();
        buf.insert_at(2, 3).unwrap();
        assert_eq!(contents(&buf), vec![1, 2, 3]);
    }

    #[test]
    fn insert_when_full_grows() {
        let mut buf = GrowableBuffer::with_capacity(3);
        buf.extend([1, 2, 3]);
        buf.insert_at(0, 0).unwrap();
        assert_eq!(buf.capacity(), 6);
        assert_eq!(contents(&buf), vec![0, 1, 2, 3]);
    }

    #[test]
    fn insert_out_of_range_leaves_buffer_untouched() {
        let mut buf = GrowableBuffer::with_capacity(2);
        buf.extend([1, 2]);
        assert_eq!(buf.insert_at(3, 9), Err(Error::OutOfRange { index: 3, len: 2 }));
        assert_eq!(buf.capacity(), 2);
        assert_eq!(contents(&buf), vec![1, 2]);
    }

    #[test]
    fn set_replaces() {
        let mut buf: GrowableBuffer<u32> = [1, 2].into_iter().collect();
        assert_eq!(buf.set(1, 5), Ok(2));
        assert_eq!(contents(&buf), vec![1, 5]);
        assert_eq!(buf.set(2, 0), Err(Error::OutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn remove_shifts_left_and_clears_tail() {
        let mut buf: GrowableBuffer<u32> = [1, 2, 3, 4].into_iter().collect();
        assert_eq!(buf.remove_at(1), Ok(2));
        assert_eq!(contents(&buf), vec![1, 3, 4]);
        assert!(buf.slots[buf.len..].iter().all(Option::is_none));
    }

    #[test]
    fn remove_out_of_range() {
        let mut buf: GrowableBuffer<u32> = GrowableBuffer::new();
        assert_eq!(buf.remove_at(0), Err(Error::OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn shrinks_below_quarter() {
        let mut buf = GrowableBuffer::with_capacity(4);
        buf.extend(0..16);
        assert_eq!(buf.capacity(), 16);

        // 16 -> 3 live: 3 < 16/4 triggers halving to 8.
        for _ in 0..13 {
            buf.pop_end().unwrap();
        }
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.capacity(), 8);
        assert_eq!(contents(&buf), vec![0, 1, 2]);
    }

    #[test]
    fn shrink_respects_floor() {
        let mut buf = BufferBuilder::default()
            .capacity(16)
            .min_capacity(16)
            .build_buffer()
            .unwrap();
        buf.extend(0..5);
        while buf.len() > 1 {
            buf.pop_end().unwrap();
        }
        assert_eq!(buf.capacity(), 16);
    }

    #[test]
    fn never_shrinks_on_last_removal() {
        let mut buf = GrowableBuffer::with_capacity(8);
        buf.append_end(1);
        buf.remove_at(0).unwrap();
        assert_eq!(buf.capacity(), 8);
        assert!(buf.is_empty());
    }

    #[test]
    fn thrash_at_threshold_does_not_resize_each_op() {
        let mut buf = GrowableBuffer::with_capacity(4);
        buf.extend(0..32);
        assert_eq!(buf.capacity(), 32);
        while buf.len() > 8 {
            buf.pop_end().unwrap();
        }
        let cap = buf.capacity();
        for i in 0..100 {
            buf.append_end(i);
            buf.pop_end().unwrap();
            assert_eq!(buf.capacity(), cap);
        }
    }

    #[test]
    fn pop_and_peek_empty() {
        let mut buf: GrowableBuffer<u8> = GrowableBuffer::new();
        assert_eq!(buf.pop_end(), Err(Error::EmptyCollection));
        assert_eq!(buf.peek_end(), Err(Error::EmptyCollection));
        assert!(buf.is_empty());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buf: GrowableBuffer<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let cap = buf.capacity();
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn display_and_debug() {
        let buf: GrowableBuffer<u32> = [1, 2, 3].into_iter().collect();
        assert_eq!(buf.to_string(), "[1, 2, 3]");
        assert_eq!(format!("{buf:?}"), "[1, 2, 3]");
    }
}
