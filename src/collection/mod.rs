//! Ordered containers and bidirectional cursors over them.
//!
//! # Module Structure
//!
//! - [`container`] - Append-only [`OrderedContainer`]
//! - [`cursor`] - [`CursorIterator`], a position tracker borrowing a container
//! - [`error`] - [`CollectionError`]
//!
//! # Usage
//!
//! ```
//! use patterns::collection::OrderedContainer;
//!
//! let letters: OrderedContainer<char> = "abc".chars().collect();
//! let mut cursor = letters.cursor();
//!
//! assert_eq!(cursor.first().unwrap(), &'a');
//! assert_eq!(cursor.next().unwrap(), Some(&'b'));
//! // Landing on the last index yields the terminal sentinel.
//! assert_eq!(cursor.next().unwrap(), None);
//! assert!(cursor.is_last());
//! ```

mod container;
mod cursor;
mod error;

pub use container::OrderedContainer;
pub use cursor::CursorIterator;
pub use error::CollectionError;
