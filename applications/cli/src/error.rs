/// CLI error types
use podcastr_feed::FeedError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Episode not found: {0}")]
    EpisodeNotFound(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
