//! Singly linked list over an internal node arena.
//!
//! Nodes live in a [`slab::Slab`] owned by the list and are chained by
//! [`NodeKey`] links, with `NodeKey::NONE` terminating the chain. The list
//! owns every node; keys handed out (by [`find_middle`], [`key_at`], ...)
//! grant read access through [`value`] only.
//!
//! A plain [`LinkedList`] is acyclic by construction. To study cycles, close
//! one explicitly with [`LinkedList::close_cycle`], which consumes the list and
//! returns a [`CyclicList`]; [`CyclicList::open`] hands the plain list back.
//!
//! # Example
//!
//! ```
//! use linea_collections::LinkedList;
//!
//! let mut list: LinkedList<u32> = [1, 2, 3, 4].into_iter().collect();
//! list.reverse();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
//!
//! let cyclic = list.close_cycle(1).ok().unwrap();
//! assert!(cyclic.has_cycle());
//! let entry = cyclic.find_cycle_start().unwrap();
//! assert_eq!(cyclic.value(entry), Some(&3));
//! ```
//!
//! [`find_middle`]: LinkedList::find_middle
//! [`key_at`]: LinkedList::key_at
//! [`value`]: LinkedList::value

use core::fmt;
use core::mem;

use slab::Slab;

use crate::{Error, NodeKey, Result};

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: NodeKey,
}

/// Follows `key`'s forward link. `NONE` maps to `NONE`.
#[inline]
fn next_of<T>(nodes: &Slab<Node<T>>, key: NodeKey) -> NodeKey {
    nodes
        .get(key.as_usize())
        .map_or(NodeKey::NONE, |node| node.next)
}

/// Floyd's tortoise and hare. Returns the node where the two cursors meet,
/// or `None` once the hare runs off the end of the chain.
fn meeting_point<T>(nodes: &Slab<Node<T>>, head: NodeKey) -> Option<NodeKey> {
    let mut slow = head;
    let mut fast = head;
    loop {
        fast = next_of(nodes, next_of(nodes, fast).get()?).get()?;
        slow = next_of(nodes, slow);
        if slow == fast {
            return Some(slow);
        }
    }
}

/// Head-to-entry distance equals meeting-point-to-entry distance modulo
/// the cycle length, so two unit-stride cursors meet at the entry.
fn cycle_entry<T>(nodes: &Slab<Node<T>>, head: NodeKey) -> Option<NodeKey> {
    let mut fast = meeting_point(nodes, head)?;
    let mut slow = head;
    while slow != fast {
        slow = next_of(nodes, slow);
        fast = next_of(nodes, fast);
    }
    Some(slow)
}

fn reverse_from<T>(nodes: &mut Slab<Node<T>>, key: NodeKey) -> NodeKey {
    let next = nodes[key.as_usize()].next;
    if next.is_none() {
        return key;
    }
    let new_head = reverse_from(nodes, next);
    nodes[next.as_usize()].next = key;
    // Clearing here stops the old head from pointing back into the chain.
    nodes[key.as_usize()].next = NodeKey::NONE;
    new_head
}

/// A singly linked list.
pub struct LinkedList<T> {
    nodes: Slab<Node<T>>,
    head: NodeKey,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: NodeKey::NONE,
            len: 0,
        }
    }

    /// Creates an empty list whose arena holds `capacity` nodes before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: NodeKey::NONE,
            len: 0,
        }
    }

    /// Returns the number of nodes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns how many nodes the arena holds without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the head node's key, or `None` if empty.
    #[inline]
    pub fn head_key(&self) -> Option<NodeKey> {
        self.head.get()
    }

    /// Returns the value stored in the node `key`, if that node is live.
    #[inline]
    pub fn value(&self, key: NodeKey) -> Option<&T> {
        self.nodes.get(key.as_usize()).map(|node| &node.value)
    }

    /// Returns the key of the node at position `index`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] unless `index < len`.
    pub fn key_at(&self, index: usize) -> Result<NodeKey> {
        Error::check_index(index, self.len)?;
        Ok(self.nth_key(index))
    }

    /// Returns the value at position `index`. O(n).
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] unless `index < len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let key = self.key_at(index)?;
        Ok(&self.nodes[key.as_usize()].value)
    }

    /// Returns the first value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the list is empty.
    pub fn peek_first(&self) -> Result<&T> {
        let head = self.head.get().ok_or(Error::EmptyCollection)?;
        Ok(&self.nodes[head.as_usize()].value)
    }

    /// Prepends a node. O(1).
    pub fn add_first(&mut self, value: T) -> NodeKey {
        let key = NodeKey::from_usize(self.nodes.insert(Node {
            value,
            next: self.head,
        }));
        self.head = key;
        self.len += 1;
        key
    }

    /// Appends a node after walking to the current last node. O(n).
    pub fn add_last(&mut self, value: T) -> NodeKey {
        if self.len == 0 {
            return self.add_first(value);
        }
        let last = self.nth_key(self.len - 1);
        self.link_after(last, value)
    }

    /// Inserts so the new node ends up at position `index`. O(n).
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] unless `index <= len`.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<NodeKey> {
        Error::check_position(index, self.len)?;
        if index == 0 {
            return Ok(self.add_first(value));
        }
        let prev = self.nth_key(index - 1);
        Ok(self.link_after(prev, value))
    }

    /// Removes and returns the first value. O(1).
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the list is empty.
    pub fn remove_first(&mut self) -> Result<T> {
        let head = self.head.get().ok_or(Error::EmptyCollection)?;
        let node = self.nodes.remove(head.as_usize());
        self.head = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    /// Removes and returns the last value, walking to the second-to-last
    /// node. O(n).
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the list is empty.
    pub fn remove_last(&mut self) -> Result<T> {
        match self.len {
            0 => Err(Error::EmptyCollection),
            1 => self.remove_first(),
            len => {
                let prev = self.nth_key(len - 2);
                let last = mem::replace(&mut self.nodes[prev.as_usize()].next, NodeKey::NONE);
                self.len -= 1;
                Ok(self.nodes.remove(last.as_usize()).value)
            }
        }
    }

    /// Reverses the chain in place by re-pointing each link at its
    /// predecessor. O(n) time, O(1) space.
    pub fn reverse(&mut self) {
        let mut prev = NodeKey::NONE;
        let mut cur = self.head;
        while let Some(key) = cur.get() {
            let node = &mut self.nodes[key.as_usize()];
            cur = mem::replace(&mut node.next, prev);
            prev = key;
        }
        self.head = prev;
    }

    /// Reverses the chain by recursing to the tail and flipping links while
    /// unwinding.
    ///
    /// Returns the new head, or `None` for an empty list. Call depth equals
    /// the list length; prefer [`reverse`](Self::reverse) for long chains.
    pub fn reverse_recursive(&mut self) -> Option<NodeKey> {
        let head = self.head.get()?;
        self.head = reverse_from(&mut self.nodes, head);
        self.head.get()
    }

    /// Returns the middle node: the lower middle for even lengths.
    ///
    /// The hare starts one node ahead of the tortoise and advances two nodes
    /// per step.
    pub fn find_middle(&self) -> Option<NodeKey> {
        let mut slow = self.head.get()?;
        let mut fast = next_of(&self.nodes, slow);
        while fast.is_some() {
            let step = next_of(&self.nodes, fast);
            if step.is_none() {
                break;
            }
            slow = next_of(&self.nodes, slow);
            fast = next_of(&self.nodes, step);
        }
        Some(slow)
    }

    /// Runs Floyd's cycle check. Always `false` for a plain list, which can
    /// only become cyclic through [`close_cycle`](Self::close_cycle).
    pub fn has_cycle(&self) -> bool {
        meeting_point(&self.nodes, self.head).is_some()
    }

    /// Returns the node where a cycle begins, if any.
    pub fn find_cycle_start(&self) -> Option<NodeKey> {
        cycle_entry(&self.nodes, self.head)
    }

    /// Merges another list, sorted non-decreasing, into this sorted list.
    ///
    /// Both chains are interleaved by relinking; no value is cloned. The
    /// longer list keeps its arena and the shorter chain's values move into
    /// it, so the extra work is O(min(m, n)) and the arena only grows if the
    /// merged length exceeds its capacity. Keys into whichever list was
    /// shorter are invalidated. On ties this list's nodes come first.
    /// O(m + n).
    pub fn merge_sorted(&mut self, mut other: LinkedList<T>)
    where
        T: PartialOrd,
    {
        let self_first = self.len >= other.len;
        if !self_first {
            mem::swap(self, &mut other);
        }
        self.nodes.reserve(other.len);

        // Adopt the shorter chain into our arena, preserving order.
        let mut b = NodeKey::NONE;
        let mut b_tail = NodeKey::NONE;
        let mut cur = other.head;
        while let Some(key) = cur.get() {
            let node = other.nodes.remove(key.as_usize());
            cur = node.next;
            let adopted = NodeKey::from_usize(self.nodes.insert(Node {
                value: node.value,
                next: NodeKey::NONE,
            }));
            self.splice(&mut b, &mut b_tail, adopted);
        }

        let mut a = self.head;
        let mut head = NodeKey::NONE;
        let mut tail = NodeKey::NONE;
        while let (Some(ka), Some(kb)) = (a.get(), b.get()) {
            let va = &self.nodes[ka.as_usize()].value;
            let vb = &self.nodes[kb.as_usize()].value;
            // Ties go to whichever chain came from the receiver.
            let take_b = if self_first { vb < va } else { !(va < vb) };
            let take = if take_b {
                b = next_of(&self.nodes, kb);
                kb
            } else {
                a = next_of(&self.nodes, ka);
                ka
            };
            self.splice(&mut head, &mut tail, take);
        }

        let rest = if a.is_some() { a } else { b };
        if tail.is_none() {
            head = rest;
        } else {
            self.nodes[tail.as_usize()].next = rest;
        }

        self.head = head;
        self.len += other.len;
    }

    /// Closes the chain into a cycle whose tail links back to the node at
    /// position `entry`.
    ///
    /// Returns the list unchanged in `Err` when `entry >= len`.
    pub fn close_cycle(mut self, entry: usize) -> core::result::Result<CyclicList<T>, Self> {
        if entry >= self.len {
            return Err(self);
        }
        let entry_key = self.nth_key(entry);
        let tail = self.nth_key(self.len - 1);
        self.nodes[tail.as_usize()].next = entry_key;
        tracing::debug!(entry, len = self.len, "closed list into cycle");
        Ok(CyclicList { list: self, tail })
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = NodeKey::NONE;
        self.len = 0;
    }

    /// Iterates values front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            remaining: self.len,
        }
    }

    /// Walks `index` links from the head. Caller guarantees `index < len`.
    fn nth_key(&self, index: usize) -> NodeKey {
        debug_assert!(index < self.len);
        let mut key = self.head;
        for _ in 0..index {
            key = self.nodes[key.as_usize()].next;
        }
        key
    }

    fn link_after(&mut self, prev: NodeKey, value: T) -> NodeKey {
        let next = self.nodes[prev.as_usize()].next;
        let key = NodeKey::from_usize(self.nodes.insert(Node { value, next }));
        self.nodes[prev.as_usize()].next = key;
        self.len += 1;
        key
    }

    /// Appends `key` to the chain described by `head`/`tail`.
    fn splice(&mut self, head: &mut NodeKey, tail: &mut NodeKey, key: NodeKey) {
        if tail.is_none() {
            *head = key;
        } else {
            self.nodes[tail.as_usize()].next = key;
        }
        *tail = key;
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = match self.len {
            0 => NodeKey::NONE,
            len => self.nth_key(len - 1),
        };
        for value in iter {
            tail = if tail.is_none() {
                self.add_first(value)
            } else {
                self.link_after(tail, value)
            };
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    next: NodeKey,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.next.as_usize())?;
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// A singly linked list whose tail links back into the chain.
///
/// Produced by [`LinkedList::close_cycle`]. Only read-only queries are
/// offered; [`open`](Self::open) restores the plain list for mutation.
pub struct CyclicList<T> {
    list: LinkedList<T>,
    tail: NodeKey,
}

impl<T> CyclicList<T> {
    /// Returns the number of nodes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.list.len
    }

    /// Returns `true` if there are no nodes. Never true for a closed cycle.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.list.len == 0
    }

    /// Returns the value stored in node `key`.
    #[inline]
    pub fn value(&self, key: NodeKey) -> Option<&T> {
        self.list.value(key)
    }

    /// Returns the key of the node at position `index` along the chain.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] unless `index < len`.
    pub fn key_at(&self, index: usize) -> Result<NodeKey> {
        self.list.key_at(index)
    }

    /// Runs Floyd's cycle check.
    pub fn has_cycle(&self) -> bool {
        meeting_point(&self.list.nodes, self.list.head).is_some()
    }

    /// Returns the node where the cycle begins.
    pub fn find_cycle_start(&self) -> Option<NodeKey> {
        cycle_entry(&self.list.nodes, self.list.head)
    }

    /// Cuts the tail's back-link, returning the acyclic list.
    pub fn open(mut self) -> LinkedList<T> {
        self.list.nodes[self.tail.as_usize()].next = NodeKey::NONE;
        self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list: LinkedList<u64> = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.head_key().is_none());
        assert!(list.find_middle().is_none());
        assert!(!list.has_cycle());
        assert!(list.find_cycle_start().is_none());
    }

    #[test]
    fn add_first_and_last() {
        let mut list = LinkedList::new();
        list.add_last(2);
        list.add_first(1);
        list.add_last(3);
        assert_eq!(values(&list), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn insert_at_positions() {
        let mut list: LinkedList<u32> = [1, 3].into_iter().collect();
        list.insert_at(1, 2).unwrap();
        list.insert_at(0, 0).unwrap();
        list.insert_at(4, 4).unwrap();
        assert_eq!(values(&list), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn insert_out_of_range() {
        let mut list: LinkedList<u32> = [1].into_iter().collect();
        assert_eq!(
            list.insert_at(2, 9),
            Err(Error::OutOfRange { index: 2, len: 1 })
        );
        assert_eq!(values(&list), vec![1]);
    }

    #[test]
    fn remove_first_and_last() {
        let mut list: LinkedList<u32> = [1, 2, 3].into_iter().collect();
        assert_eq!(list.remove_last(), Ok(3));
        assert_eq!(list.remove_first(), Ok(1));
        assert_eq!(list.remove_last(), Ok(2));
        assert!(list.is_empty());
        assert_eq!(list.remove_first(), Err(Error::EmptyCollection));
        assert_eq!(list.remove_last(), Err(Error::EmptyCollection));
        assert!(list.is_empty());
    }

    #[test]
    fn get_and_peek() {
        let list: LinkedList<&str> = ["a", "b"].into_iter().collect();
        assert_eq!(list.peek_first(), Ok(&"a"));
        assert_eq!(list.get(1), Ok(&"b"));
        assert_eq!(list.get(2), Err(Error::OutOfRange { index: 2, len: 2 }));
        assert_eq!(LinkedList::<u8>::new().peek_first(), Err(Error::EmptyCollection));
    }

    #[test]
    fn reverse_iterative() {
        let mut list: LinkedList<u32> = (1..=5).collect();
        list.reverse();
        assert_eq!(values(&list), vec![5, 4, 3, 2, 1]);
        list.reverse();
        assert_eq!(values(&list), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn reverse_recursive_round_trip() {
        let mut list: LinkedList<u32> = (1..=4).collect();
        list.reverse_recursive();
        assert_eq!(values(&list), vec![4, 3, 2, 1]);
        assert!(!list.has_cycle());
        list.reverse_recursive();
        assert_eq!(values(&list), vec![1, 2, 3, 4]);
    }

    #[test]
    fn reverse_recursive_returns_new_head() {
        let mut list: LinkedList<u32> = (1..=3).collect();
        let last = list.key_at(2).unwrap();
        assert_eq!(list.reverse_recursive(), Some(last));
        assert_eq!(list.head_key(), Some(last));
        assert_eq!(list.value(last), Some(&3));

        let mut empty: LinkedList<u32> = LinkedList::new();
        assert_eq!(empty.reverse_recursive(), None);
    }

    #[test]
    fn reverse_empty_and_single() {
        let mut empty: LinkedList<u8> = LinkedList::new();
        empty.reverse();
        empty.reverse_recursive();
        assert!(empty.is_empty());

        let mut one: LinkedList<u8> = [7].into_iter().collect();
        one.reverse_recursive();
        assert_eq!(values(&one), vec![7]);
    }

    #[test]
    fn middle_odd_and_even() {
        let odd: LinkedList<u32> = (1..=5).collect();
        assert_eq!(odd.find_middle().and_then(|k| odd.value(k)), Some(&3));

        let even: LinkedList<u32> = (1..=4).collect();
        assert_eq!(even.find_middle().and_then(|k| even.value(k)), Some(&2));

        let one: LinkedList<u32> = [9].into_iter().collect();
        assert_eq!(one.find_middle(), one.head_key());
    }

    #[test]
    fn cycle_detection_at_every_entry() {
        for len in 1..8 {
            for entry in 0..len {
                let list: LinkedList<usize> = (0..len).collect();
                let expected = list.key_at(entry).unwrap();
                let cyclic = list.close_cycle(entry).ok().unwrap();
                assert!(cyclic.has_cycle(), "len={len} entry={entry}");
                assert_eq!(cyclic.find_cycle_start(), Some(expected));
                assert_eq!(cyclic.value(expected), Some(&entry));
            }
        }
    }

    #[test]
    fn close_cycle_out_of_range_returns_list() {
        let list: LinkedList<u32> = [1, 2].into_iter().collect();
        let list = match list.close_cycle(2) {
            Ok(_) => panic!("entry past the end must be rejected"),
            Err(list) => list,
        };
        assert_eq!(values(&list), vec![1, 2]);
    }

    #[test]
    fn open_restores_acyclic_list() {
        let list: LinkedList<u32> = (1..=3).collect();
        let mut list = list.close_cycle(0).ok().unwrap().open();
        assert!(!list.has_cycle());
        list.add_last(4);
        assert_eq!(values(&list), vec![1, 2, 3, 4]);
    }

    #[test]
    fn merge_sorted_interleaves() {
        let mut a: LinkedList<u32> = [1, 3, 5].into_iter().collect();
        let b: LinkedList<u32> = [2, 4, 6].into_iter().collect();
        a.merge_sorted(b);
        assert_eq!(values(&a), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(a.len(), 6);
    }

    #[test]
    fn merge_sorted_with_empty_sides() {
        let mut a: LinkedList<u32> = LinkedList::new();
        a.merge_sorted([1, 2].into_iter().collect());
        assert_eq!(values(&a), vec![1, 2]);

        a.merge_sorted(LinkedList::new());
        assert_eq!(values(&a), vec![1, 2]);
        assert_eq!(a.len(), 2);
    }

    /// Ordered by the number only, so ties keep their tag.
    #[derive(Debug, Clone, PartialEq)]
    struct Tagged(u32, char);

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }

    #[test]
    fn merge_sorted_uneven_and_ties() {
        let mut a: LinkedList<Tagged> = [Tagged(1, 'a'), Tagged(2, 'a')].into_iter().collect();
        let b: LinkedList<Tagged> = [Tagged(0, 'b'), Tagged(1, 'b'), Tagged(9, 'b')]
            .into_iter()
            .collect();
        a.merge_sorted(b);
        assert_eq!(
            values(&a),
            vec![
                Tagged(0, 'b'),
                Tagged(1, 'a'),
                Tagged(1, 'b'),
                Tagged(2, 'a'),
                Tagged(9, 'b'),
            ]
        );
        assert_eq!(a.len(), 5);
    }

    #[test]
    fn merge_sorted_ties_favor_shorter_receiver() {
        // The receiver is shorter, so its arena is swapped out; ties still
        // keep the receiver's nodes first.
        let mut a: LinkedList<Tagged> = [Tagged(1, 'a')].into_iter().collect();
        let b: LinkedList<Tagged> = [Tagged(1, 'b'), Tagged(1, 'b'), Tagged(3, 'b')]
            .into_iter()
            .collect();
        a.merge_sorted(b);
        assert_eq!(
            values(&a),
            vec![Tagged(1, 'a'), Tagged(1, 'b'), Tagged(1, 'b'), Tagged(3, 'b')]
        );
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn merge_sorted_reuses_larger_arena() {
        let mut long: LinkedList<u32> = LinkedList::with_capacity(64);
        long.extend((0..40).map(|v| v * 2));
        let cap = long.capacity();
        assert!(cap >= 60);

        let short: LinkedList<u32> = (0..20).map(|v| v * 2 + 1).collect();
        long.merge_sorted(short);
        assert_eq!(long.capacity(), cap);
        assert_eq!(long.len(), 60);
        assert!(long.iter().zip(long.iter().skip(1)).all(|(x, y)| x <= y));

        // Same when the receiver is the shorter list.
        let mut long: LinkedList<u32> = LinkedList::with_capacity(64);
        long.extend((0..40).map(|v| v * 2));
        let cap = long.capacity();
        let mut short: LinkedList<u32> = (0..20).map(|v| v * 2 + 1).collect();
        short.merge_sorted(long);
        assert_eq!(short.capacity(), cap);
        assert_eq!(short.len(), 60);
        assert!(short.iter().zip(short.iter().skip(1)).all(|(x, y)| x <= y));
    }

    #[test]
    fn display_and_debug() {
        let list: LinkedList<u32> = [1, 2, 3].into_iter().collect();
        assert_eq!(list.to_string(), "1 -> 2 -> 3");
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }
}
