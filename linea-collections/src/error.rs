//! Error type shared by every container in this crate.

/// Failure returned by a container operation.
///
/// A failed operation never mutates the container: preconditions are checked
/// before any length, capacity or link is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An index argument was outside its permitted range.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the container at the time of the call.
        len: usize,
    },
    /// The operation needs at least one element.
    #[error("operation on empty collection")]
    EmptyCollection,
    /// Structural misuse, such as removing a sentinel node.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Checks `index < len`.
    #[inline]
    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(Error::OutOfRange { index, len })
        }
    }

    /// Checks `index <= len` (insertion positions).
    #[inline]
    pub(crate) fn check_position(index: usize, len: usize) -> Result<()> {
        if index <= len {
            Ok(())
        } else {
            Err(Error::OutOfRange { index, len })
        }
    }
}
