//! Node handles for the arena-backed linked lists.
//!
//! Lists keep their nodes in a [`slab::Slab`] and link them by slot index.
//! A [`NodeKey`] is such an index, with a reserved sentinel (`NodeKey::NONE`)
//! standing in for a null link so nodes don't need `Option` link fields.

use core::fmt;

/// Stable handle to a node inside a list.
///
/// A key stays valid until the node it names is removed. Using a key after
/// its node was removed is detected and rejected; it never aliases another
/// node's storage until the slot is reused by a later insert.
///
/// # Example
///
/// ```
/// use linea_collections::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::new();
/// let key = list.add_last(7);
/// assert_eq!(list.get(key), Some(&7));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeKey(usize);

impl NodeKey {
    /// Sentinel value representing "no node".
    pub const NONE: Self = NodeKey(usize::MAX);

    #[inline]
    pub(crate) const fn from_usize(val: usize) -> Self {
        NodeKey(val)
    }

    /// Returns the slot index behind this key.
    #[inline]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// Returns `true` if this is the sentinel value.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.0 == usize::MAX
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Converts to `Option`, mapping the sentinel to `None`.
    #[inline]
    pub(crate) fn get(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}

impl fmt::Debug for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "NodeKey(NONE)")
        } else {
            write!(f, "NodeKey({})", self.0)
        }
    }
}
