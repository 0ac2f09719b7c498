//! Error types for the episode feed.

use thiserror::Error;

/// Errors that can occur while loading or preparing the episode listing.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The episode source failed or rejected the query
    #[error("Episode source error: {0}")]
    Source(String),

    /// IO error while reading a local source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source returned malformed JSON
    #[error("Failed to parse episodes: {0}")]
    Json(#[from] serde_json::Error),

    /// `published_at` is not an ISO-8601 timestamp
    #[error("Invalid publication date {value:?}")]
    InvalidDate { value: String },

    /// `file.duration` is not a non-negative whole number of seconds
    #[error("Invalid duration {value:?} for episode {episode_id}")]
    InvalidDuration { episode_id: String, value: String },
}

impl FeedError {
    /// Create a source error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }
}

/// Result type for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;
