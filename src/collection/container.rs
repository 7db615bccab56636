//! Append-only ordered container.

use super::cursor::CursorIterator;
use super::error::CollectionError;

/// A growable sequence with stable positions `0..len`.
///
/// Items are only ever appended, so `len` never decreases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedContainer<T> {
    items: Vec<T>,
}

impl<T> OrderedContainer<T> {
    /// Create an empty container.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add an item at the end.
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Read the item at `index`.
    ///
    /// Takes a signed index because cursors may move below zero; any index
    /// outside `0..len` yields [`CollectionError::OutOfBounds`].
    pub fn get(&self, index: isize) -> Result<&T, CollectionError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.items.get(i))
            .ok_or(CollectionError::OutOfBounds {
                index,
                len: self.items.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Create a cursor positioned at index 0.
    pub fn cursor(&self) -> CursorIterator<'_, T> {
        CursorIterator::new(self)
    }
}

impl<T> Default for OrderedContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for OrderedContainer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for OrderedContainer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a OrderedContainer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
