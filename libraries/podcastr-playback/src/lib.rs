//! Podcastr - Player State
//!
//! Session state for the Podcastr audio player.
//!
//! This crate provides:
//! - Episode queue with index-based next/previous navigation
//! - Play/pause, loop and shuffle flags
//! - Random "next" selection while shuffling
//! - Derived navigation flags (`has_next`, `has_previous`)
//! - Change events for UI synchronization
//!
//! # Architecture
//!
//! `podcastr-playback` holds state only:
//! - No audio decoding or output (the media element lives in the UI)
//! - No network access (episodes come from `podcastr-feed`)
//! - No global singleton: the UI owns one `PlayerContext` and passes it
//!   by reference to whatever handles an event
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use podcastr_playback::{Episode, PlayerContext};
//!
//! let mut player = PlayerContext::default();
//!
//! let episode = Episode {
//!     title: "Faladev #30".to_string(),
//!     members: "Diego e Richard".to_string(),
//!     thumbnail: "https://example.com/faladev.jpg".to_string(),
//!     duration: 3981,
//!     url: "https://example.com/faladev.m4a".to_string(),
//! };
//!
//! player.play(episode);
//! assert!(player.is_playing());
//! assert!(!player.has_next());
//!
//! player.toggle_play();
//! assert!(!player.is_playing());
//! ```
//!
//! # Example: Queue and Shuffle
//!
//! ```rust
//! use podcastr_playback::{Episode, PlayerContext};
//!
//! # let episode = |title: &str| Episode {
//! #     title: title.to_string(),
//! #     members: String::new(),
//! #     thumbnail: String::new(),
//! #     duration: 60,
//! #     url: String::new(),
//! # };
//! let mut player = PlayerContext::default();
//! player.play_list(vec![episode("a"), episode("b"), episode("c")], 0);
//!
//! player.play_next();
//! assert_eq!(player.current_episode_index(), 1);
//!
//! player.toggle_shuffle();
//! player.play_next();
//! assert!(player.current_episode_index() < 3);
//!
//! // Re-render from the drained events
//! for event in player.drain_events() {
//!     println!("{:?}", event);
//! }
//! ```

mod context;
pub mod events;
mod queue;
mod shuffle;
pub mod types;

// Public exports
pub use context::PlayerContext;
pub use events::PlayerEvent;
pub use types::{Episode, PlayerConfig, PlayerSnapshot};
