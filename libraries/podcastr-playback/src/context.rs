//! Player context - the session store
//!
//! Owns the episode queue and the transport flags, and records change
//! events for every consumer that renders player state.

use crate::{
    events::PlayerEvent,
    queue::EpisodeQueue,
    shuffle::random_index,
    types::{Episode, PlayerConfig, PlayerSnapshot},
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, warn};

/// Central player state
///
/// Single owned value, passed by `&mut` to whatever handles a UI event:
/// - Queue (episode list + current index)
/// - Playing, looping and shuffling flags
/// - Derived navigation (`has_next`, `has_previous`), computed on read
/// - Pending change events for UI synchronization
///
/// None of the actions can fail. Any combination of flags is allowed.
pub struct PlayerContext {
    queue: EpisodeQueue,

    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,

    rng: Box<dyn RngCore>,

    pending_events: Vec<PlayerEvent>,
}

impl std::fmt::Debug for PlayerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerContext")
            .field("queue", &self.queue)
            .field("is_playing", &self.is_playing)
            .field("is_looping", &self.is_looping)
            .field("is_shuffling", &self.is_shuffling)
            .field("pending_events", &self.pending_events.len())
            .finish()
    }
}

impl PlayerContext {
    /// Create new player context with an entropy-seeded random source
    pub fn new(config: PlayerConfig) -> Self {
        Self::with_rng(config, Box::new(StdRng::from_entropy()))
    }

    /// Create new player context with a caller-supplied random source
    ///
    /// The source only drives shuffle selection.
    pub fn with_rng(config: PlayerConfig, rng: Box<dyn RngCore>) -> Self {
        Self {
            queue: EpisodeQueue::new(),
            is_playing: false,
            is_looping: config.looping,
            is_shuffling: config.shuffling,
            rng,
            pending_events: Vec::new(),
        }
    }

    // ===== Starting playback =====

    /// Play a single episode
    ///
    /// Replaces the queue with `[episode]`, regardless of prior state.
    pub fn play(&mut self, episode: Episode) {
        debug!(title = %episode.title, "Playing single episode");
        self.load_queue(vec![episode], 0);
    }

    /// Play a list of episodes starting at `index`
    ///
    /// `index` is not checked against the list; an out-of-bounds value is
    /// kept and `current_episode` returns `None` until the caller moves.
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        if index >= list.len() {
            warn!(index, length = list.len(), "play_list index out of bounds");
        }
        debug!(index, length = list.len(), "Playing episode list");
        self.load_queue(list, index);
    }

    fn load_queue(&mut self, episodes: Vec<Episode>, index: usize) {
        let previous_index = self.queue.index();
        self.queue.replace(episodes, index);

        self.emit(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
        self.emit(PlayerEvent::EpisodeChanged {
            index,
            previous_index,
        });
        self.set_playing(true);
    }

    // ===== Transport flags =====

    /// Flip the playing flag
    pub fn toggle_play(&mut self) {
        self.set_playing(!self.is_playing);
    }

    /// Flip the loop flag
    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        self.emit(PlayerEvent::LoopingChanged {
            is_looping: self.is_looping,
        });
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        self.emit(PlayerEvent::ShufflingChanged {
            is_shuffling: self.is_shuffling,
        });
    }

    /// Set the playing flag directly
    ///
    /// Called when the media element reports play or pause on its own.
    pub fn set_player_state(&mut self, is_playing: bool) {
        self.set_playing(is_playing);
    }

    fn set_playing(&mut self, is_playing: bool) {
        self.is_playing = is_playing;
        self.emit(PlayerEvent::PlayingChanged { is_playing });
    }

    // ===== Navigation =====

    /// Go to the next episode
    ///
    /// While shuffling, picks a uniformly random position (the current one
    /// included). Otherwise advances by one, or does nothing on the last
    /// episode.
    pub fn play_next(&mut self) {
        let previous_index = self.queue.index();

        if self.is_shuffling {
            let next = random_index(self.rng.as_mut(), self.queue.len());
            self.queue.jump_to(next);
        } else if !self.queue.advance() {
            return;
        }

        self.emit_episode_changed(previous_index);
    }

    /// Go to the previous episode, or do nothing on the first one
    pub fn play_previous(&mut self) {
        let previous_index = self.queue.index();
        if self.queue.go_back() {
            self.emit_episode_changed(previous_index);
        }
    }

    /// Whether `play_next` can move
    ///
    /// Always true while shuffling, even for an empty or single-episode queue.
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.queue.has_next_in_order()
    }

    /// Whether `play_previous` can move
    pub fn has_previous(&self) -> bool {
        self.queue.can_go_back()
    }

    /// Handle the end of the current episode
    ///
    /// A looping episode is restarted by the media element itself, so the
    /// session is left alone. Otherwise moves to the next episode, or ends
    /// the session when there is none.
    pub fn episode_ended(&mut self) {
        if self.is_looping {
            return;
        }

        if self.has_next() {
            self.play_next();
        } else {
            self.clear_player_state();
            self.set_playing(false);
        }
    }

    /// Empty the queue and reset the index
    ///
    /// Playing, looping and shuffling flags are left untouched.
    pub fn clear_player_state(&mut self) {
        debug!(length = self.queue.len(), "Clearing player state");
        self.queue.clear();
        self.emit(PlayerEvent::Cleared);
    }

    // ===== State Queries =====

    /// Episodes in the current queue
    pub fn episode_list(&self) -> &[Episode] {
        self.queue.episodes()
    }

    /// Current queue position
    pub fn current_episode_index(&self) -> usize {
        self.queue.index()
    }

    /// Episode at the current position
    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.current()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// Copy of the full session state, derived flags included
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            episode_list: self.queue.episodes().to_vec(),
            current_episode_index: self.queue.index(),
            is_playing: self.is_playing,
            is_looping: self.is_looping,
            is_shuffling: self.is_shuffling,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events that have been emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit_episode_changed(&mut self, previous_index: usize) {
        let index = self.queue.index();
        debug!(index, previous_index, "Episode changed");
        self.emit(PlayerEvent::EpisodeChanged {
            index,
            previous_index,
        });
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }
}

impl Default for PlayerContext {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}
