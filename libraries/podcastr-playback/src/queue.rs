//! Episode queue with index-based navigation
//!
//! The queue never reorders or consumes episodes: moving forward or back
//! only changes the current index, so "previous" always lands on the
//! episode that was actually listed before.

use crate::types::Episode;

/// Ordered episodes plus the position of the one being played
///
/// ```text
/// episodes: [ A, B, C, D ]
///                  ^
///                index = 2
/// ```
///
/// An empty queue always has index 0 and means "no session".
#[derive(Debug, Clone, Default)]
pub struct EpisodeQueue {
    episodes: Vec<Episode>,
    index: usize,
}

impl EpisodeQueue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole queue and jump to `index`
    ///
    /// The index is stored as given, even when it points past the end.
    pub fn replace(&mut self, episodes: Vec<Episode>, index: usize) {
        self.episodes = episodes;
        self.index = index;
    }

    /// Empty the queue and reset the index
    pub fn clear(&mut self) {
        self.episodes.clear();
        self.index = 0;
    }

    /// Move to an arbitrary position (no bounds check)
    pub fn jump_to(&mut self, index: usize) {
        self.index = index;
    }

    /// Whether an episode follows the current one in list order
    pub fn has_next_in_order(&self) -> bool {
        self.index < self.episodes.len().saturating_sub(1)
    }

    /// Whether an episode precedes the current one
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    /// Advance one position
    ///
    /// Returns false (and stays put) when already on the last episode.
    pub fn advance(&mut self) -> bool {
        if self.has_next_in_order() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Step back one position
    ///
    /// Returns false (and stays put) when already on the first episode.
    pub fn go_back(&mut self) -> bool {
        if self.can_go_back() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Episode at the current index
    pub fn current(&self) -> Option<&Episode> {
        self.episodes.get(self.index)
    }

    /// Current index
    pub fn index(&self) -> usize {
        self.index
    }

    /// All episodes in queue order
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// Number of episodes in the queue
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}
