//! Periodic regeneration of the home feed.
//!
//! The listing is built once and served until the revalidation interval
//! has passed. The next request after that rebuilds it from the source.

use crate::error::Result;
use crate::feed::HomeFeed;
use crate::source::EpisodeSource;
use crate::types::EpisodeQuery;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

/// Default revalidation interval: 8 hours
pub const DEFAULT_REVALIDATE_SECS: i64 = 60 * 60 * 8;

#[derive(Debug, Clone)]
struct CachedFeed {
    feed: HomeFeed,
    generated_at: DateTime<Utc>,
}

/// Home feed with time-based revalidation.
///
/// A failed rebuild keeps serving the previous listing; only the very first
/// build reports the error to the caller.
pub struct FeedCache<S> {
    source: S,
    query: EpisodeQuery,
    revalidate: Duration,
    cached: Option<CachedFeed>,
}

impl<S: EpisodeSource> FeedCache<S> {
    /// Cache for the home query with the default interval
    pub fn new(source: S) -> Self {
        Self::with_settings(
            source,
            EpisodeQuery::home(),
            Duration::seconds(DEFAULT_REVALIDATE_SECS),
        )
    }

    pub fn with_settings(source: S, query: EpisodeQuery, revalidate: Duration) -> Self {
        Self {
            source,
            query,
            revalidate,
            cached: None,
        }
    }

    /// Current feed, rebuilding it first when stale
    pub async fn get(&mut self) -> Result<&HomeFeed> {
        self.get_at(Utc::now()).await
    }

    /// Current feed as seen at `now`
    pub async fn get_at(&mut self, now: DateTime<Utc>) -> Result<&HomeFeed> {
        let revalidate = self.revalidate;

        let cached = match self.cached.take() {
            Some(cached) if now - cached.generated_at < revalidate => cached,
            previous => match HomeFeed::load(&self.source, &self.query).await {
                Ok(feed) => {
                    debug!(generated_at = %now, "Home feed regenerated");
                    CachedFeed {
                        feed,
                        generated_at: now,
                    }
                }
                Err(err) => match previous {
                    Some(stale) => {
                        warn!(
                            error = %err,
                            generated_at = %stale.generated_at,
                            "Feed regeneration failed, serving stale feed"
                        );
                        stale
                    }
                    None => return Err(err),
                },
            },
        };

        Ok(&self.cached.insert(cached).feed)
    }

    /// When the cached feed was built, if there is one
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.cached.as_ref().map(|cached| cached.generated_at)
    }

    /// Drop the cached feed so the next `get` rebuilds it
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    pub fn revalidate_interval(&self) -> Duration {
        self.revalidate
    }
}
