//! Capacity configuration for the array-backed containers.
//!
//! Both [`GrowableBuffer`] and [`CircularQueue`] double when full and halve
//! when occupancy drops below a quarter. The builder fixes the two numbers
//! that policy needs: the initial slot count and the floor that shrinking
//! never crosses.
//!
//! ```
//! use linea_collections::BufferBuilder;
//!
//! let buf = BufferBuilder::default()
//!     .capacity(64)
//!     .min_capacity(16)
//!     .build_buffer::<u32>()
//!     .unwrap();
//! assert_eq!(buf.capacity(), 64);
//! assert_eq!(buf.min_capacity(), 16);
//! ```

use crate::{CircularQueue, Error, GrowableBuffer, Result};

/// Initial slot count used by `new()` constructors.
pub const DEFAULT_CAPACITY: usize = 10;

/// Shrink floor used by `new()` constructors.
pub const DEFAULT_MIN_CAPACITY: usize = 4;

/// Builder for array-backed containers.
#[derive(Clone, Debug)]
pub struct BufferBuilder {
    capacity: usize,
    min_capacity: Option<usize>,
}

impl Default for BufferBuilder {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            min_capacity: None,
        }
    }
}

impl BufferBuilder {
    /// Initial number of slots. Default: 10.
    pub fn capacity(mut self, slots: usize) -> Self {
        self.capacity = slots;
        self
    }

    /// Capacity below which the container never shrinks.
    /// Default: the smaller of 4 and the initial capacity.
    pub fn min_capacity(mut self, slots: usize) -> Self {
        self.min_capacity = Some(slots);
        self
    }

    fn validate(&self) -> Result<(usize, usize)> {
        if self.capacity == 0 {
            return Err(Error::InvalidOperation("capacity cannot be zero"));
        }
        let floor = self
            .min_capacity
            .unwrap_or_else(|| DEFAULT_MIN_CAPACITY.min(self.capacity));
        if floor == 0 {
            return Err(Error::InvalidOperation("minimum capacity cannot be zero"));
        }
        if floor > self.capacity {
            return Err(Error::InvalidOperation(
                "minimum capacity exceeds initial capacity",
            ));
        }
        Ok((self.capacity, floor))
    }

    /// Builds a [`GrowableBuffer`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] if either capacity is zero or the floor
    /// exceeds the initial capacity.
    pub fn build_buffer<T>(self) -> Result<GrowableBuffer<T>> {
        let (capacity, floor) = self.validate()?;
        Ok(GrowableBuffer::from_parts(capacity, floor))
    }

    /// Builds a [`CircularQueue`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`build_buffer`](Self::build_buffer).
    pub fn build_queue<T>(self) -> Result<CircularQueue<T>> {
        let (capacity, floor) = self.validate()?;
        Ok(CircularQueue::from_parts(capacity, floor))
    }
}
