//! Doubly linked list anchored by two permanent sentinel nodes.
//!
//! ```text
//!  head sentinel <-> n0 <-> n1 <-> ... <-> n(len-1) <-> tail sentinel
//! ```
//!
//! Both sentinels are allocated at construction, live in the same arena as
//! the real nodes, and are never removed. Every real node therefore has a
//! predecessor and a successor, so insertion and removal are the same two
//! relinks everywhere, with no head/tail special cases.
//!
//! Nodes are stored in a [`slab::Slab`]; `prev` and `next` are plain
//! [`NodeKey`] indices, so back-references carry no ownership and the list
//! has no reference cycles to manage.
//!
//! # Example
//!
//! ```
//! use linea_collections::{DoublyLinkedList, Error};
//!
//! let mut list = DoublyLinkedList::new();
//! let a = list.add_last(1);
//! let b = list.add_last(2);
//! list.add_first(0);
//!
//! // O(1) removal by handle
//! assert_eq!(list.remove_node(b), Ok(2));
//! assert_eq!(list.to_string(), "0<->1");
//!
//! // Handles of removed nodes are rejected
//! assert!(matches!(list.remove_node(b), Err(Error::InvalidOperation(_))));
//! assert_eq!(list.get(a), Some(&1));
//! ```

use core::fmt;

use slab::Slab;

use crate::{Error, NodeKey, Result};

#[derive(Debug)]
enum Slot<T> {
    Sentinel,
    Value(T),
}

#[derive(Debug)]
struct DNode<T> {
    slot: Slot<T>,
    prev: NodeKey,
    next: NodeKey,
}

/// A sentinel-anchored doubly linked list with O(1) removal by key.
pub struct DoublyLinkedList<T> {
    nodes: Slab<DNode<T>>,
    head: NodeKey,
    tail: NodeKey,
    len: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list (two linked sentinels).
    pub fn new() -> Self {
        let mut nodes = Slab::with_capacity(2);
        let head = NodeKey::from_usize(nodes.insert(DNode {
            slot: Slot::Sentinel,
            prev: NodeKey::NONE,
            next: NodeKey::NONE,
        }));
        let tail = NodeKey::from_usize(nodes.insert(DNode {
            slot: Slot::Sentinel,
            prev: head,
            next: NodeKey::NONE,
        }));
        nodes[head.as_usize()].next = tail;
        Self {
            nodes,
            head,
            tail,
            len: 0,
        }
    }

    /// Returns the number of real nodes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no real nodes are linked.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the value of node `key`, or `None` for stale keys and
    /// sentinels.
    #[inline]
    pub fn get(&self, key: NodeKey) -> Option<&T> {
        match self.nodes.get(key.as_usize()) {
            Some(DNode {
                slot: Slot::Value(value),
                ..
            }) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value of node `key`.
    #[inline]
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut T> {
        match self.nodes.get_mut(key.as_usize()) {
            Some(DNode {
                slot: Slot::Value(value),
                ..
            }) => Some(value),
            _ => None,
        }
    }

    /// Returns the first value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the list is empty.
    pub fn peek_first(&self) -> Result<&T> {
        self.get(self.nodes[self.head.as_usize()].next)
            .ok_or(Error::EmptyCollection)
    }

    /// Returns the last value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the list is empty.
    pub fn peek_last(&self) -> Result<&T> {
        self.get(self.nodes[self.tail.as_usize()].prev)
            .ok_or(Error::EmptyCollection)
    }

    /// Links a new node right after the head sentinel.
    pub fn add_first(&mut self, value: T) -> NodeKey {
        let succ = self.nodes[self.head.as_usize()].next;
        self.insert_between(value, self.head, succ)
    }

    /// Links a new node right before the tail sentinel.
    pub fn add_last(&mut self, value: T) -> NodeKey {
        let pred = self.nodes[self.tail.as_usize()].prev;
        self.insert_between(value, pred, self.tail)
    }

    /// Links a new node directly after node `key`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] if `key` is stale or a sentinel.
    pub fn insert_after(&mut self, key: NodeKey, value: T) -> Result<NodeKey> {
        self.check_value_node(key)?;
        let succ = self.nodes[key.as_usize()].next;
        Ok(self.insert_between(value, key, succ))
    }

    /// Links a new node directly before node `key`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] if `key` is stale or a sentinel.
    pub fn insert_before(&mut self, key: NodeKey, value: T) -> Result<NodeKey> {
        self.check_value_node(key)?;
        let pred = self.nodes[key.as_usize()].prev;
        Ok(self.insert_between(value, pred, key))
    }

    /// Unlinks node `key` and returns its value. O(1).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] if `key` names a sentinel or a node that
    /// is no longer in the list.
    pub fn remove_node(&mut self, key: NodeKey) -> Result<T> {
        self.check_value_node(key)?;
        let node = self.nodes.remove(key.as_usize());
        self.nodes[node.prev.as_usize()].next = node.next;
        self.nodes[node.next.as_usize()].prev = node.prev;
        self.len -= 1;
        match node.slot {
            Slot::Value(value) => Ok(value),
            Slot::Sentinel => unreachable!("sentinels are rejected above"),
        }
    }

    /// Removes and returns the first value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the list is empty.
    pub fn remove_first(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::EmptyCollection);
        }
        self.remove_node(self.nodes[self.head.as_usize()].next)
    }

    /// Removes and returns the last value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the list is empty.
    pub fn remove_last(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::EmptyCollection);
        }
        self.remove_node(self.nodes[self.tail.as_usize()].prev)
    }

    /// Removes every real node, keeping the sentinels.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Iterates values from front to back; reversible.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.nodes[self.head.as_usize()].next,
            back: self.nodes[self.tail.as_usize()].prev,
            remaining: self.len,
        }
    }

    fn insert_between(&mut self, value: T, pred: NodeKey, succ: NodeKey) -> NodeKey {
        let key = NodeKey::from_usize(self.nodes.insert(DNode {
            slot: Slot::Value(value),
            prev: pred,
            next: succ,
        }));
        self.nodes[pred.as_usize()].next = key;
        self.nodes[succ.as_usize()].prev = key;
        self.len += 1;
        key
    }

    fn check_value_node(&self, key: NodeKey) -> Result<()> {
        match self.nodes.get(key.as_usize()) {
            Some(DNode {
                slot: Slot::Value(_),
                ..
            }) => Ok(()),
            Some(DNode {
                slot: Slot::Sentinel,
                ..
            }) => Err(Error::InvalidOperation("cannot remove or link around a sentinel node")),
            None => Err(Error::InvalidOperation("node is not in this list")),
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "<->")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Iterator over a [`DoublyLinkedList`].
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: NodeKey,
    back: NodeKey,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.front;
        self.front = self.list.nodes[key.as_usize()].next;
        self.remaining -= 1;
        self.list.get(key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.back;
        self.back = self.list.nodes[key.as_usize()].prev;
        self.remaining -= 1;
        self.list.get(key)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
