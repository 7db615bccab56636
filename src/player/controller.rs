//! Playback controller: a cursor plus a `play` action.

use crate::collection::{CollectionError, CursorIterator, OrderedContainer};
use crate::output::LineSink;

use super::track::Named;

/// Where the controller is in the playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// A track is available at this position
    Active(isize),
    /// No track at the current position; only `first`/`last` recover
    Ended,
}

/// Plays tracks from a playlist one at a time.
///
/// Holds its cursor rather than extending it, so navigation stays generic
/// and `play` is the only playlist-specific behaviour.
pub struct PlaybackController<'a, T> {
    cursor: CursorIterator<'a, T>,
    out: &'a dyn LineSink,
}

impl<'a, T: Named> PlaybackController<'a, T> {
    /// Create a controller at the start of `tracks`.
    pub fn new(tracks: &'a OrderedContainer<T>, out: &'a dyn LineSink) -> Self {
        Self {
            cursor: tracks.cursor(),
            out,
        }
    }

    /// Play the current track and advance.
    ///
    /// When there is no current track, reports `End of playlist` and leaves
    /// the cursor where it is.
    pub fn play(&mut self) {
        let Some(track) = self.cursor.current() else {
            tracing::debug!(position = self.cursor.position(), "playback ended");
            self.out.write_line("End of playlist");
            return;
        };

        self.out
            .write_line(&format!("Playing track: {}", track.name()));
        // Advancing only moves forward from a valid index, so this cannot fail
        let _ = self.cursor.next();
    }

    /// Rewind to the first track.
    pub fn first(&mut self) -> Result<&'a T, CollectionError> {
        self.cursor.first()
    }

    /// Jump to the last track.
    pub fn last(&mut self) -> Result<&'a T, CollectionError> {
        self.cursor.last()
    }

    pub fn is_last(&self) -> bool {
        self.cursor.is_last()
    }

    pub fn state(&self) -> PlaybackState {
        match self.cursor.current() {
            Some(_) => PlaybackState::Active(self.cursor.position()),
            None => PlaybackState::Ended,
        }
    }

    /// Read-only access to the underlying cursor.
    pub fn cursor(&self) -> &CursorIterator<'a, T> {
        &self.cursor
    }

    /// Mutable access for navigation beyond `first`/`last`.
    pub fn cursor_mut(&mut self) -> &mut CursorIterator<'a, T> {
        &mut self.cursor
    }
}
