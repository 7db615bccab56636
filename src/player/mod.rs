//! Playlist playback built on the collection cursor.
//!
//! # Architecture
//!
//! - `track`: the [`Named`] capability and the [`Track`] item type
//! - `controller`: [`PlaybackController`], which holds a
//!   [`CursorIterator`](crate::collection::CursorIterator) and adds `play`
//!
//! # Usage
//!
//! ```
//! use patterns::output::MemorySink;
//! use patterns::player::{playlist, PlaybackController};
//!
//! let tracks = playlist(2);
//! let out = MemorySink::new();
//! let mut controller = PlaybackController::new(&tracks, &out);
//!
//! controller.play();
//! controller.play();
//! controller.play();
//! assert_eq!(
//!     out.lines(),
//!     ["Playing track: Track 1", "Playing track: Track 2", "End of playlist"]
//! );
//! ```

mod controller;
mod track;

pub use controller::{PlaybackController, PlaybackState};
pub use track::{playlist, Named, Track};
