//! Bidirectional cursor over an [`OrderedContainer`].
//!
//! The cursor borrows its container and tracks a signed position. Reads go
//! through [`OrderedContainer::get`], so any position outside `0..len`
//! surfaces as [`CollectionError::OutOfBounds`].
//!
//! Navigation is deliberately asymmetric:
//! - [`CursorIterator::next`] returns `Ok(None)` once the position lands on
//!   or past the last index, so the final item is never yielded by `next`.
//! - [`CursorIterator::previous`] has no lower-bound guard; stepping back
//!   from position 0 moves to -1 and returns `OutOfBounds`.

use super::container::OrderedContainer;
use super::error::CollectionError;

/// Stateful position tracker over a borrowed container.
#[derive(Debug)]
pub struct CursorIterator<'a, T> {
    container: &'a OrderedContainer<T>,
    position: isize,
}

// Manual impl: a derive would require `T: Clone`.
impl<T> Clone for CursorIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            container: self.container,
            position: self.position,
        }
    }
}

impl<'a, T> CursorIterator<'a, T> {
    /// Create a cursor at position 0.
    pub fn new(container: &'a OrderedContainer<T>) -> Self {
        Self {
            container,
            position: 0,
        }
    }

    /// The container this cursor walks.
    pub fn container(&self) -> &'a OrderedContainer<T> {
        self.container
    }

    /// Current position. May be negative or `>= len`.
    pub fn position(&self) -> isize {
        self.position
    }

    /// Index of the last item; -1 for an empty container.
    fn last_index(&self) -> isize {
        self.container.len() as isize - 1
    }

    /// Jump to index 0 and return that item.
    ///
    /// Fails with `OutOfBounds` on an empty container.
    pub fn first(&mut self) -> Result<&'a T, CollectionError> {
        self.position = 0;
        self.container.get(self.position)
    }

    /// Jump to the last index and return that item.
    ///
    /// Fails with `OutOfBounds` on an empty container (position becomes -1).
    pub fn last(&mut self) -> Result<&'a T, CollectionError> {
        self.position = self.last_index();
        self.container.get(self.position)
    }

    /// Advance one step.
    ///
    /// Returns `Ok(None)` when the new position is at or past the last index.
    /// Repeated calls at the terminal keep returning `Ok(None)`.
    // Not `Iterator::next`: the terminal sentinel fires one item early.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Option<&'a T>, CollectionError> {
        self.position += 1;
        if self.is_last() {
            tracing::trace!(position = self.position, "cursor reached terminal position");
            return Ok(None);
        }
        self.container.get(self.position).map(Some)
    }

    /// Step back one position and return the item there.
    ///
    /// No lower-bound guard: the position is decremented first, and a read
    /// below index 0 propagates `OutOfBounds`.
    pub fn previous(&mut self) -> Result<&'a T, CollectionError> {
        self.position -= 1;
        self.container.get(self.position)
    }

    /// Item at the current position, without moving.
    pub fn current_item(&self) -> Result<&'a T, CollectionError> {
        self.container.get(self.position)
    }

    /// Item at the current position, or `None` when the position is invalid.
    pub fn current(&self) -> Option<&'a T> {
        self.current_item().ok()
    }

    /// True once the position is at or past the last index.
    pub fn is_last(&self) -> bool {
        self.position >= self.last_index()
    }
}
