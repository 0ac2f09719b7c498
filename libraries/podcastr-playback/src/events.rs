//! Player Events
//!
//! Change notifications for consumers of the player context.
//! Every mutating action records what it changed; the UI drains the
//! pending list after handling a user or media-element event and
//! re-renders from `PlayerContext::snapshot`.

use serde::{Deserialize, Serialize};

/// Events emitted by the player context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Queue was replaced (`play` / `play_list`)
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Current position moved
    EpisodeChanged {
        /// New index
        index: usize,
        /// Index before the move
        previous_index: usize,
    },

    /// Playing flag changed
    PlayingChanged {
        /// New value
        is_playing: bool,
    },

    /// Loop flag changed
    LoopingChanged {
        /// New value
        is_looping: bool,
    },

    /// Shuffle flag changed
    ShufflingChanged {
        /// New value
        is_shuffling: bool,
    },

    /// Queue emptied by `clear_player_state`
    Cleared,
}

impl PlayerEvent {
    /// Whether the event changes which episode the media element should load
    pub fn changes_source(&self) -> bool {
        matches!(
            self,
            PlayerEvent::QueueChanged { .. } | PlayerEvent::EpisodeChanged { .. } | PlayerEvent::Cleared
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_changing_events() {
        assert!(PlayerEvent::QueueChanged { length: 1 }.changes_source());
        assert!(PlayerEvent::EpisodeChanged {
            index: 1,
            previous_index: 0
        }
        .changes_source());
        assert!(PlayerEvent::Cleared.changes_source());

        assert!(!PlayerEvent::PlayingChanged { is_playing: true }.changes_source());
        assert!(!PlayerEvent::LoopingChanged { is_looping: true }.changes_source());
        assert!(!PlayerEvent::ShufflingChanged { is_shuffling: true }.changes_source());
    }

    #[test]
    fn event_serializes_with_variant_name() {
        let json = serde_json::to_string(&PlayerEvent::PlayingChanged { is_playing: false }).unwrap();
        assert_eq!(json, r#"{"PlayingChanged":{"is_playing":false}}"#);
    }
}
