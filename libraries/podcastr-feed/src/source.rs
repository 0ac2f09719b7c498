//! Episode sources.
//!
//! The HTTP collection endpoint lives outside this crate; anything that can
//! answer an [`EpisodeQuery`] implements [`EpisodeSource`].

use crate::error::{FeedError, Result};
use crate::types::{ApiEpisode, EpisodeQuery, SortOrder};
use async_trait::async_trait;
use serde::Deserialize;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Provider of episode records.
#[async_trait]
pub trait EpisodeSource: Send + Sync {
    /// Fetch records sorted and limited as `query` asks
    async fn fetch_episodes(&self, query: &EpisodeQuery) -> Result<Vec<ApiEpisode>>;
}

#[derive(Deserialize)]
struct EpisodeDatabase {
    episodes: Vec<ApiEpisode>,
}

/// Reads episodes from a local JSON database file.
///
/// The file has the same shape the collection endpoint serves from:
/// `{ "episodes": [ ... ] }`. Sorting and limiting happen in memory.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl EpisodeSource for JsonFileSource {
    async fn fetch_episodes(&self, query: &EpisodeQuery) -> Result<Vec<ApiEpisode>> {
        debug!(path = %self.path.display(), ?query, "Reading episode database");

        let contents = tokio::fs::read_to_string(&self.path).await?;
        let database: EpisodeDatabase = serde_json::from_str(&contents)?;

        apply_query(database.episodes, query)
    }
}

/// Sort and limit records the way the collection endpoint does
pub(crate) fn apply_query(
    mut episodes: Vec<ApiEpisode>,
    query: &EpisodeQuery,
) -> Result<Vec<ApiEpisode>> {
    let compare: fn(&ApiEpisode, &ApiEpisode) -> Ordering = match query.sort.as_str() {
        "published_at" => |a, b| a.published_at.cmp(&b.published_at),
        "title" => |a, b| a.title.cmp(&b.title),
        "id" => |a, b| a.id.cmp(&b.id),
        "members" => |a, b| a.members.cmp(&b.members),
        "duration" => |a, b| a.file.duration.seconds().cmp(&b.file.duration.seconds()),
        other => {
            return Err(FeedError::unavailable(format!(
                "unsupported sort field: {}",
                other
            )))
        }
    };

    // Stable sort keeps database order among equal keys
    match query.order {
        SortOrder::Asc => episodes.sort_by(compare),
        SortOrder::Desc => episodes.sort_by(|a, b| compare(b, a)),
    }
    episodes.truncate(query.limit);

    Ok(episodes)
}
