//! Collection access errors.

/// Errors raised when reading from an [`OrderedContainer`](super::OrderedContainer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    #[error("Index {index} is out of bounds for a container of {len} item(s)")]
    OutOfBounds { index: isize, len: usize },
}
