//! LIFO stacks.
//!
//! | Type | Backing store | push | pop/peek |
//! |------|---------------|------|----------|
//! | [`ArrayStack`] | [`GrowableBuffer`] | O(1) amortized | O(1) |
//! | [`LinkStack`] | [`LinkedList`] head | O(1) | O(1) |
//! | [`MinStack`] | two [`ArrayStack`]s | O(1) amortized | O(1), plus O(1) `get_min` |

use crate::{GrowableBuffer, LinkedList, Result};

/// Last-in, first-out container.
pub trait Stack<T> {
    /// Pushes a value on top.
    fn push(&mut self, value: T);

    /// Removes and returns the top value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`](crate::Error::EmptyCollection) if the stack is empty.
    fn pop(&mut self) -> Result<T>;

    /// Returns the top value without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`](crate::Error::EmptyCollection) if the stack is empty.
    fn peek(&self) -> Result<&T>;

    /// Returns the number of values.
    fn len(&self) -> usize;

    /// Returns `true` if the stack holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Stack over a [`GrowableBuffer`]; the top is the buffer's end.
#[derive(Debug)]
pub struct ArrayStack<T> {
    items: GrowableBuffer<T>,
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            items: GrowableBuffer::new(),
        }
    }

    /// Wraps an existing buffer; its last element becomes the top.
    pub fn from_buffer(items: GrowableBuffer<T>) -> Self {
        Self { items }
    }

    /// Iterates from bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }

    /// Drops every value.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    #[inline]
    fn push(&mut self, value: T) {
        self.items.append_end(value);
    }

    #[inline]
    fn pop(&mut self) -> Result<T> {
        self.items.pop_end()
    }

    #[inline]
    fn peek(&self) -> Result<&T> {
        self.items.peek_end()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Stack over a [`LinkedList`]; push and pop work at the head.
#[derive(Debug)]
pub struct LinkStack<T> {
    items: LinkedList<T>,
}

impl<T> Default for LinkStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            items: LinkedList::new(),
        }
    }

    /// Iterates from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Stack<T> for LinkStack<T> {
    #[inline]
    fn push(&mut self, value: T) {
        self.items.add_first(value);
    }

    #[inline]
    fn pop(&mut self) -> Result<T> {
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

/// Stack with O(1) minimum query.
///
/// A second stack runs in lockstep with the values: entry `i` holds the
/// minimum of values `0..=i`. Pushing a value larger than the current minimum
/// repeats that minimum, so both stacks always have the same length and pop
/// together.
#[derive(Debug)]
pub struct MinStack<T> {
    values: ArrayStack<T>,
    minima: ArrayStack<T>,
}

impl<T: PartialOrd + Clone> Default for MinStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd + Clone> MinStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            values: ArrayStack::new(),
            minima: ArrayStack::new(),
        }
    }

    /// Returns the smallest value currently on the stack.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`](crate::Error::EmptyCollection) if the stack is empty.
    #[inline]
    pub fn get_min(&self) -> Result<&T> {
        self.minima.peek()
    }
}

impl<T: PartialOrd + Clone> Stack<T> for MinStack<T> {
    fn push(&mut self, value: T) {
        let min = match self.minima.peek() {
            Ok(current) if *current < value => current.clone(),
            _ => value.clone(),
        };
        self.values.push(value);
        self.minima.push(min);
    }

    fn pop(&mut self) -> Result<T> {
        let value = self.values.pop()?;
        self.minima.pop()?;
        Ok(value)
    }

    #[inline]
    fn peek(&self) -> Result<&T> {
        self.values.peek()
    }

    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }
}
