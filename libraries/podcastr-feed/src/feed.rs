//! Home page listing.

use crate::error::Result;
use crate::source::EpisodeSource;
use crate::types::{ApiEpisode, EpisodeQuery, HomeEpisode};
use podcastr_playback::Episode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Number of episodes highlighted as latest releases
pub const LATEST_EPISODES: usize = 2;

/// The two sections of the home page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeFeed {
    /// Newest releases, shown as cards
    pub latest_episodes: Vec<HomeEpisode>,
    /// Everything after the latest releases, shown as a table
    pub all_episodes: Vec<HomeEpisode>,
}

impl HomeFeed {
    /// Prepare records for display, keeping their order
    ///
    /// Fails on the first record with an unparseable date or duration.
    pub fn build(records: Vec<ApiEpisode>) -> Result<Self> {
        let mut episodes = records
            .into_iter()
            .map(HomeEpisode::try_from)
            .collect::<Result<Vec<_>>>()?;

        let all_episodes = episodes.split_off(LATEST_EPISODES.min(episodes.len()));

        Ok(Self {
            latest_episodes: episodes,
            all_episodes,
        })
    }

    /// Fetch from `source` and build the listing
    pub async fn load<S>(source: &S, query: &EpisodeQuery) -> Result<Self>
    where
        S: EpisodeSource + ?Sized,
    {
        let records = source.fetch_episodes(query).await?;
        debug!(records = records.len(), "Fetched episode records");

        let feed = Self::build(records)?;
        info!(
            latest = feed.latest_episodes.len(),
            all = feed.all_episodes.len(),
            "Built home feed"
        );

        Ok(feed)
    }

    /// Every episode in listing order
    pub fn episodes(&self) -> impl Iterator<Item = &HomeEpisode> {
        self.latest_episodes.iter().chain(self.all_episodes.iter())
    }

    /// Find an episode by id in either section
    pub fn find(&self, id: &str) -> Option<&HomeEpisode> {
        self.episodes().find(|episode| episode.id == id)
    }

    /// Queue for `PlayerContext::play_list`, in listing order
    pub fn playlist(&self) -> Vec<Episode> {
        self.episodes().map(HomeEpisode::to_episode).collect()
    }

    /// Position of `id` in [`HomeFeed::playlist`]
    pub fn playlist_index(&self, id: &str) -> Option<usize> {
        self.episodes().position(|episode| episode.id == id)
    }

    pub fn len(&self) -> usize {
        self.latest_episodes.len() + self.all_episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latest_episodes.is_empty() && self.all_episodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ApiEpisodeFile, RawDuration};

    fn record(id: &str) -> ApiEpisode {
        ApiEpisode {
            id: id.to_string(),
            title: format!("Episode {}", id),
            members: "Diego e Richard".to_string(),
            thumbnail: format!("https://example.com/{}.jpg", id),
            published_at: "2021-01-08 12:00:00".to_string(),
            description: None,
            file: ApiEpisodeFile {
                url: format!("https://example.com/{}.m4a", id),
                mime_type: None,
                duration: RawDuration::Seconds(1800),
            },
        }
    }

    fn records(count: usize) -> Vec<ApiEpisode> {
        (0..count).map(|i| record(&format!("ep{}", i))).collect()
    }

    #[test]
    fn twelve_records_split_two_and_ten() {
        let feed = HomeFeed::build(records(12)).unwrap();

        assert_eq!(feed.latest_episodes.len(), 2);
        assert_eq!(feed.all_episodes.len(), 10);
        assert_eq!(feed.latest_episodes[0].id, "ep0");
        assert_eq!(feed.latest_episodes[1].id, "ep1");
        assert_eq!(feed.all_episodes[0].id, "ep2");
        assert_eq!(feed.all_episodes[9].id, "ep11");
    }

    #[test]
    fn fewer_records_than_latest() {
        let feed = HomeFeed::build(records(1)).unwrap();
        assert_eq!(feed.latest_episodes.len(), 1);
        assert!(feed.all_episodes.is_empty());

        let empty = HomeFeed::build(Vec::new()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn playlist_follows_listing_order() {
        let feed = HomeFeed::build(records(4)).unwrap();
        let playlist = feed.playlist();

        assert_eq!(playlist.len(), 4);
        assert_eq!(playlist[2].title, "Episode ep2");
        assert_eq!(feed.playlist_index("ep3"), Some(3));
        assert_eq!(feed.playlist_index("missing"), None);
    }

    #[test]
    fn find_searches_both_sections() {
        let feed = HomeFeed::build(records(5)).unwrap();
        assert_eq!(feed.find("ep1").unwrap().title, "Episode ep1");
        assert_eq!(feed.find("ep4").unwrap().title, "Episode ep4");
        assert!(feed.find("ep9").is_none());
    }

    #[test]
    fn bad_record_fails_the_build() {
        let mut input = records(3);
        input[2].published_at = "not a date".to_string();

        assert!(HomeFeed::build(input).is_err());
    }
}
