// SPDX-License-Identifier: MPL-2.0
//! Playlist model owned by the engine.
//!
//! Navigation validates index bounds before acting; out-of-range input is a
//! silent no-op, never an error.

use log::debug;

/// One playable entry of the playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistItem {
    /// Source the playback surface can load.
    pub source: String,
    /// Optional display title.
    pub title: Option<String>,
}

impl PlaylistItem {
    /// Creates an item without a title.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            title: None,
        }
    }
}

/// Ordered list of sources with one active entry.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    items: Vec<PlaylistItem>,
    active: usize,
}

impl Playlist {
    /// Replaces the playlist. A no-op if `start` is out of range for a
    /// non-empty list.
    pub fn set_items(&mut self, items: Vec<PlaylistItem>, start: usize) -> bool {
        if !items.is_empty() && start >= items.len() {
            debug!("playlist start index {start} out of range; ignoring");
            return false;
        }
        self.items = items;
        self.active = start;
        true
    }

    /// All items, in order.
    #[must_use]
    pub fn items(&self) -> &[PlaylistItem] {
        &self.items
    }

    /// Index of the active item.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active item, if the playlist is non-empty.
    #[must_use]
    pub fn current(&self) -> Option<&PlaylistItem> {
        self.items.get(self.active)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Activates `index`; out-of-range input leaves the playlist unchanged.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            debug!("playlist index {index} out of range; ignoring");
            return false;
        }
        self.active = index;
        true
    }

    /// Moves to the next item, returning its index, or `None` at the end.
    pub fn advance(&mut self) -> Option<usize> {
        let next = self.active.checked_add(1)?;
        if next >= self.items.len() {
            return None;
        }
        self.active = next;
        Some(next)
    }

    /// Moves to the previous item, returning its index, or `None` at the
    /// start.
    pub fn retreat(&mut self) -> Option<usize> {
        let previous = self.active.checked_sub(1)?;
        self.active = previous;
        Some(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist() -> Playlist {
        let mut playlist = Playlist::default();
        playlist.set_items(
            vec![
                PlaylistItem::new("a.mp4"),
                PlaylistItem::new("b.mp4"),
                PlaylistItem::new("c.mp4"),
            ],
            0,
        );
        playlist
    }

    #[test]
    fn set_items_rejects_out_of_range_start() {
        let mut playlist = Playlist::default();
        assert!(!playlist.set_items(vec![PlaylistItem::new("a.mp4")], 3));
        assert!(playlist.is_empty());
    }

    #[test]
    fn select_ignores_out_of_range_index() {
        let mut playlist = playlist();
        assert!(!playlist.select(9));
        assert_eq!(playlist.active_index(), 0);
        assert!(playlist.select(2));
        assert_eq!(playlist.active_index(), 2);
    }

    #[test]
    fn advance_stops_at_the_end() {
        let mut playlist = playlist();
        assert_eq!(playlist.advance(), Some(1));
        assert_eq!(playlist.advance(), Some(2));
        assert_eq!(playlist.advance(), None);
        assert_eq!(playlist.active_index(), 2);
    }

    #[test]
    fn retreat_stops_at_the_start() {
        let mut playlist = playlist();
        playlist.select(1);
        assert_eq!(playlist.retreat(), Some(0));
        assert_eq!(playlist.retreat(), None);
    }

    #[test]
    fn current_follows_active_index() {
        let mut playlist = playlist();
        playlist.select(1);
        assert_eq!(playlist.current().map(|i| i.source.as_str()), Some("b.mp4"));
    }
}
