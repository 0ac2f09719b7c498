//! Core types for the player session

use serde::{Deserialize, Serialize};

/// Episode information handed to the player
///
/// Immutable value produced by the feed. The player only stores clones
/// of it and never edits the fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode title
    pub title: String,

    /// Hosts and guests, as a single display string
    pub members: String,

    /// Cover image URL
    pub thumbnail: String,

    /// Length in whole seconds
    pub duration: u64,

    /// Audio file URL consumed by the media element
    pub url: String,
}

/// Configuration for a new player context
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial loop flag (default: false)
    #[serde(default)]
    pub looping: bool,

    /// Initial shuffle flag (default: false)
    #[serde(default)]
    pub shuffling: bool,
}

/// Read-only view of the session, including derived navigation flags
///
/// `has_next` and `has_previous` are computed when the snapshot is taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub episode_list: Vec<Episode>,
    pub current_episode_index: usize,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PlayerSnapshot {
    /// Episode at the current index, if any
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }
}
