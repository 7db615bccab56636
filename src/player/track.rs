//! Playlist items.

use crate::collection::OrderedContainer;

/// Anything with a display name.
pub trait Named {
    fn name(&self) -> &str;
}

/// A single playlist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    name: String,
}

impl Track {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Named for Track {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Build a playlist of `count` tracks named `Track 1` through `Track <count>`.
pub fn playlist(count: usize) -> OrderedContainer<Track> {
    (1..=count)
        .map(|number| Track::new(format!("Track {}", number)))
        .collect()
}
