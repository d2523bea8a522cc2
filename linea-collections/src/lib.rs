//! Foundational linear containers with explicit capacity and link invariants.
//!
//! # Containers
//!
//! | Structure | Backing | Key Operations |
//! |-----------|---------|----------------|
//! | [`GrowableBuffer`] | slot array, doubles/halves | O(1) amortized append, O(n) insert/remove |
//! | [`LinkedList`] | node arena, forward links | O(1) push front, reverse, Floyd cycle check |
//! | [`DoublyLinkedList`] | node arena, two sentinels | O(1) insert/remove by [`NodeKey`] |
//! | [`ArrayStack`] / [`LinkStack`] | buffer / list | O(1) push/pop/peek |
//! | [`MinStack`] | two lockstep stacks | O(1) `get_min` |
//! | [`CircularQueue`] | ring of slots, doubles/halves | O(1) amortized enqueue/dequeue |
//! | [`LinkQueue`] | doubly linked list | O(1) enqueue/dequeue |
//!
//! # Errors
//!
//! Every fallible operation returns [`Result`] with one of three [`Error`]
//! kinds: an index outside its range, an empty collection, or structural
//! misuse such as removing a sentinel. Preconditions are checked before any
//! state changes, so a failed call leaves the container as it was.
//!
//! # Quick Start
//!
//! ```
//! use linea_collections::{CircularQueue, MinStack, Queue, Stack};
//!
//! let mut stack = MinStack::new();
//! for v in [5, 3, 7] {
//!     stack.push(v);
//! }
//! assert_eq!(stack.get_min(), Ok(&3));
//!
//! let mut queue = CircularQueue::with_capacity(2);
//! queue.enqueue('a');
//! queue.enqueue('b');
//! queue.enqueue('c'); // grows to 4 slots
//! assert_eq!(queue.capacity(), 4);
//! assert_eq!(queue.dequeue(), Ok('a'));
//! ```
//!
//! # Capacity Configuration
//!
//! Array-backed containers take their initial size and shrink floor from
//! [`BufferBuilder`]:
//!
//! ```
//! use linea_collections::BufferBuilder;
//!
//! let queue = BufferBuilder::default()
//!     .capacity(32)
//!     .min_capacity(8)
//!     .build_queue::<u64>()
//!     .unwrap();
//! assert_eq!(queue.capacity(), 32);
//! ```
//!
//! # Logging
//!
//! Reallocations and cycle construction emit [`tracing`] events at `TRACE`
//! and `DEBUG`. Nothing is logged on the push/pop paths.

#![warn(missing_docs)]

pub mod buffer;
pub mod config;
pub mod dlist;
pub mod error;
pub mod key;
pub mod list;
pub mod queue;
pub mod stack;

pub use buffer::GrowableBuffer;
pub use config::BufferBuilder;
pub use dlist::DoublyLinkedList;
pub use error::{Error, Result};
pub use key::NodeKey;
pub use list::{CyclicList, LinkedList};
pub use queue::{CircularQueue, LinkQueue, Queue};
pub use stack::{ArrayStack, LinkStack, MinStack, Stack};
