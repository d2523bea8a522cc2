//! Sliding-window extremum.
//!
//! [`MonotonicQueue`] keeps `(index, value)` entries in a
//! [`CircularQueue`] ordered so the values favor the front: for a maximum
//! queue they never increase front to back, for a minimum queue they never
//! decrease. The front entry is therefore the extremum of everything still
//! inside the window.
//!
//! The slice functions [`sliding_window_maximum`] and
//! [`sliding_window_minimum`] keep the same order over bare indices and
//! read values through the input slice.

use linea_collections::{CircularQueue, Error, Queue, Result};

/// Which end of the ordering a [`MonotonicQueue`] reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extremum {
    /// Front holds the largest value in the window.
    Max,
    /// Front holds the smallest value in the window.
    Min,
}

impl Extremum {
    /// `true` if `incoming` makes `resident` useless: it arrived later and
    /// is at least as extreme, so `resident` can never be reported again.
    #[inline]
    fn dominates<T: PartialOrd>(self, incoming: &T, resident: &T) -> bool {
        match self {
            Extremum::Max => resident < incoming,
            Extremum::Min => resident > incoming,
        }
    }
}

/// Streaming window extremum over indexed values.
///
/// Values are pushed in index order. [`evict_before`](Self::evict_before)
/// drops entries that slid out of the window, after which
/// [`front`](Self::front) is the window's extremum.
///
/// ```
/// use linea_monotonic::{Extremum, MonotonicQueue};
///
/// let mut window = MonotonicQueue::new(Extremum::Max);
/// window.push(0, 1);
/// window.push(1, 3);
/// window.push(2, -1);
/// assert_eq!(window.front(), Ok(&3));
///
/// window.evict_before(2);
/// assert_eq!(window.front(), Ok(&-1));
/// ```
#[derive(Debug)]
pub struct MonotonicQueue<T> {
    entries: CircularQueue<(usize, T)>,
    kind: Extremum,
}

impl<T: PartialOrd> MonotonicQueue<T> {
    /// Creates an empty queue reporting `kind`.
    pub fn new(kind: Extremum) -> Self {
        Self {
            entries: CircularQueue::new(),
            kind,
        }
    }

    /// Returns which extremum this queue reports.
    pub fn kind(&self) -> Extremum {
        self.kind
    }

    /// Number of entries still in the working set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the working set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds the value at `index`, discarding entries it dominates from the
    /// back.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] if `index` does not come after every index
    /// already pushed.
    pub fn push(&mut self, index: usize, value: T) -> Result<()> {
        if let Ok(&(last, _)) = self.entries.peek_back() {
            if index <= last {
                return Err(Error::InvalidOperation("indices must be pushed in increasing order"));
            }
        }
        while let Ok((_, resident)) = self.entries.peek_back() {
            if !self.kind.dominates(&value, resident) {
                break;
            }
            self.entries.pop_back()?;
        }
        self.entries.enqueue((index, value));
        Ok(())
    }

    /// Drops every entry whose index is below `start`.
    pub fn evict_before(&mut self, start: usize) {
        evict_front(&mut self.entries, |&(index, _)| index < start);
    }

    /// Returns the extremum of the current window.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if every entry has been evicted.
    pub fn front(&self) -> Result<&T> {
        self.entries.peek().map(|(_, value)| value)
    }

    /// Returns the index of the current extremum.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if every entry has been evicted.
    pub fn front_index(&self) -> Result<usize> {
        self.entries.peek().map(|&(index, _)| index)
    }
}

/// Dequeues from the front while `stale` holds for the front entry.
fn evict_front<E>(entries: &mut CircularQueue<E>, stale: impl Fn(&E) -> bool) {
    while entries.peek().is_ok_and(&stale) {
        if entries.dequeue().is_err() {
            unreachable!("front entry was just peeked");
        }
    }
}

/// Slice form of [`MonotonicQueue`]: the working set holds indices only and
/// compares through `nums`.
fn window_extremum<T: PartialOrd + Clone>(nums: &[T], k: usize, kind: Extremum) -> Result<Vec<T>> {
    if k == 0 {
        return Err(Error::InvalidOperation("window size must be positive"));
    }
    if k > nums.len() {
        return Ok(Vec::new());
    }

    let mut window: CircularQueue<usize> = CircularQueue::new();
    let mut out = Vec::with_capacity(nums.len() + 1 - k);
    for (i, value) in nums.iter().enumerate() {
        // Window ending at `i` covers `i + 1 - k ..= i`.
        let start = (i + 1).saturating_sub(k);
        evict_front(&mut window, |&index| index < start);
        while window
            .peek_back()
            .is_ok_and(|&back| kind.dominates(value, &nums[back]))
        {
            window.pop_back()?;
        }
        window.enqueue(i);
        if i + 1 >= k {
            out.push(nums[*window.peek()?].clone());
        }
    }
    Ok(out)
}

/// Maximum of every contiguous window of width `k`, left to right.
///
/// Returns an empty vector when `k` exceeds the input length.
///
/// # Errors
///
/// [`Error::InvalidOperation`] if `k` is 0.
pub fn sliding_window_maximum<T: PartialOrd + Clone>(nums: &[T], k: usize) -> Result<Vec<T>> {
    window_extremum(nums, k, Extremum::Max)
}

/// Minimum of every contiguous window of width `k`, left to right.
///
/// Returns an empty vector when `k` exceeds the input length.
///
/// # Errors
///
/// [`Error::InvalidOperation`] if `k` is 0.
pub fn sliding_window_minimum<T: PartialOrd + Clone>(nums: &[T], k: usize) -> Result<Vec<T>> {
    window_extremum(nums, k, Extremum::Min)
}
