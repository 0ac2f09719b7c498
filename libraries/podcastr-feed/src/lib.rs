//! Podcastr Feed
//!
//! Turns the episode collection into the home page listing.
//!
//! # Features
//!
//! - **Source seam**: [`EpisodeSource`] for the collection endpoint, plus a
//!   JSON database reader for local use
//! - **Formatting**: `HH:MM:SS` durations and pt-BR short dates
//! - **Listing**: latest releases and the full table, ready for the player
//! - **Revalidation**: rebuild the listing at most once per interval
//!
//! # Example
//!
//! ```ignore
//! use podcastr_feed::{FeedCache, JsonFileSource};
//! use podcastr_playback::PlayerContext;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut cache = FeedCache::new(JsonFileSource::new("server.json"));
//!     let feed = cache.get().await?;
//!
//!     let mut player = PlayerContext::default();
//!     if let Some(episode) = feed.latest_episodes.first() {
//!         player.play(episode.to_episode());
//!     }
//!
//!     Ok(())
//! }
//! ```

mod cache;
mod error;
mod feed;
pub mod format;
mod source;
mod types;

// Re-export main types
pub use cache::{FeedCache, DEFAULT_REVALIDATE_SECS};
pub use error::{FeedError, Result};
pub use feed::{HomeFeed, LATEST_EPISODES};
pub use source::{EpisodeSource, JsonFileSource};
pub use types::{
    ApiEpisode, ApiEpisodeFile, EpisodeQuery, HomeEpisode, RawDuration, SortOrder,
};
