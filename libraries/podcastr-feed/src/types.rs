//! Types exchanged with the episode source and handed to the UI.

use crate::error::{FeedError, Result};
use crate::format::{duration_to_time_string, format_published_at};
use podcastr_playback::Episode;
use serde::{Deserialize, Serialize};

/// Episode record as returned by the collection endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEpisode {
    pub id: String,
    pub title: String,
    pub members: String,
    pub thumbnail: String,
    /// ISO-8601 publication timestamp
    pub published_at: String,
    #[serde(default)]
    pub description: Option<String>,
    pub file: ApiEpisodeFile,
}

/// Audio file attached to an episode record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEpisodeFile {
    pub url: String,
    #[serde(default, rename = "type")]
    pub mime_type: Option<String>,
    pub duration: RawDuration,
}

/// Duration as sent by the source: a number, or a numeric string.
///
/// Fractional numbers are floored to whole seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDuration {
    Seconds(u64),
    Fractional(f64),
    Text(String),
}

impl RawDuration {
    /// Whole seconds, or `None` when the value is not a non-negative integer
    pub fn seconds(&self) -> Option<u64> {
        match self {
            RawDuration::Seconds(secs) => Some(*secs),
            RawDuration::Fractional(secs) => {
                (secs.is_finite() && *secs >= 0.0).then(|| secs.floor() as u64)
            }
            RawDuration::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl std::fmt::Display for RawDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawDuration::Seconds(secs) => write!(f, "{}", secs),
            RawDuration::Fractional(secs) => write!(f, "{}", secs),
            RawDuration::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Sort direction for a collection query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Parameters for fetching the episode collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeQuery {
    /// Maximum number of records
    pub limit: usize,
    /// Record field to sort by
    pub sort: String,
    pub order: SortOrder,
}

impl EpisodeQuery {
    /// Number of episodes shown on the home page
    pub const HOME_LIMIT: usize = 12;

    /// Newest episodes first, limited to the home page size
    pub fn home() -> Self {
        Self::latest(Self::HOME_LIMIT)
    }

    /// Newest `limit` episodes first
    pub fn latest(limit: usize) -> Self {
        Self {
            limit,
            sort: "published_at".to_string(),
            order: SortOrder::Desc,
        }
    }

    /// Query string pairs in the collection endpoint's convention
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("_limit", self.limit.to_string()),
            ("_sort", self.sort.clone()),
            ("_order", self.order.as_str().to_string()),
        ]
    }
}

impl Default for EpisodeQuery {
    fn default() -> Self {
        Self::home()
    }
}

/// Episode prepared for the home listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeEpisode {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub members: String,
    /// Localized short date
    pub published_at: String,
    /// Length in whole seconds
    pub duration: u64,
    /// `HH:MM:SS`
    pub duration_as_string: String,
    pub url: String,
}

impl HomeEpisode {
    /// Playable episode for the player context
    pub fn to_episode(&self) -> Episode {
        Episode {
            title: self.title.clone(),
            members: self.members.clone(),
            thumbnail: self.thumbnail.clone(),
            duration: self.duration,
            url: self.url.clone(),
        }
    }
}

impl TryFrom<ApiEpisode> for HomeEpisode {
    type Error = FeedError;

    fn try_from(record: ApiEpisode) -> Result<Self> {
        let duration = record
            .file
            .duration
            .seconds()
            .ok_or_else(|| FeedError::InvalidDuration {
                episode_id: record.id.clone(),
                value: record.file.duration.to_string(),
            })?;

        Ok(Self {
            published_at: format_published_at(&record.published_at)?,
            duration_as_string: duration_to_time_string(duration),
            duration,
            id: record.id,
            title: record.title,
            thumbnail: record.thumbnail,
            members: record.members,
            url: record.file.url,
        })
    }
}

impl From<&HomeEpisode> for Episode {
    fn from(episode: &HomeEpisode) -> Self {
        episode.to_episode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(duration: RawDuration) -> ApiEpisode {
        ApiEpisode {
            id: "a-importancia-da-contribuicao-em-open-source".to_string(),
            title: "Faladev #30 | A importância da contribuição em Open Source".to_string(),
            members: "Diego Fernandes, João Pedro, Diego Haz e Bruno Lemos".to_string(),
            thumbnail: "https://example.com/opensource.jpg".to_string(),
            published_at: "2021-01-22 19:00:00".to_string(),
            description: None,
            file: ApiEpisodeFile {
                url: "https://example.com/opensource.m4a".to_string(),
                mime_type: Some("audio/x-m4a".to_string()),
                duration,
            },
        }
    }

    #[test]
    fn home_query_params() {
        let params = EpisodeQuery::home().to_params();
        assert_eq!(
            params,
            vec![
                ("_limit", "12".to_string()),
                ("_sort", "published_at".to_string()),
                ("_order", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn record_with_numeric_duration() {
        let episode = HomeEpisode::try_from(record(RawDuration::Seconds(3981))).unwrap();
        assert_eq!(episode.duration, 3981);
        assert_eq!(episode.duration_as_string, "01:06:21");
        assert_eq!(episode.published_at, "22 jan 21");
        assert_eq!(episode.url, "https://example.com/opensource.m4a");
    }

    #[test]
    fn record_with_text_duration() {
        let episode =
            HomeEpisode::try_from(record(RawDuration::Text("2100".to_string()))).unwrap();
        assert_eq!(episode.duration, 2100);
        assert_eq!(episode.duration_as_string, "00:35:00");
    }

    #[test]
    fn record_with_fractional_duration() {
        let duration: RawDuration = serde_json::from_str("3981.7").unwrap();
        assert_eq!(duration, RawDuration::Fractional(3981.7));

        let episode = HomeEpisode::try_from(record(duration)).unwrap();
        assert_eq!(episode.duration, 3981);
        assert_eq!(episode.duration_as_string, "01:06:21");
    }

    #[test]
    fn negative_duration_is_rejected() {
        let duration: RawDuration = serde_json::from_str("-12.5").unwrap();
        assert_eq!(duration.seconds(), None);
        assert!(HomeEpisode::try_from(record(duration)).is_err());
    }

    #[test]
    fn record_with_bad_duration() {
        let err = HomeEpisode::try_from(record(RawDuration::Text("long".to_string()))).unwrap_err();
        assert!(matches!(
            err,
            FeedError::InvalidDuration { ref value, .. } if value == "long"
        ));
    }

    #[test]
    fn record_deserializes_from_collection_json() {
        let json = r#"{
            "id": "typescript-vale-a-pena",
            "title": "TypeScript vale a pena?",
            "members": "Diego e Richard",
            "published_at": "2021-01-08 12:00:00",
            "thumbnail": "https://example.com/ts.jpg",
            "description": "<p>Neste episódio...</p>",
            "file": {
                "url": "https://example.com/ts.m4a",
                "type": "audio/x-m4a",
                "duration": 3288
            }
        }"#;

        let record: ApiEpisode = serde_json::from_str(json).unwrap();
        assert_eq!(record.file.duration, RawDuration::Seconds(3288));
        assert_eq!(record.file.mime_type.as_deref(), Some("audio/x-m4a"));
    }

    #[test]
    fn home_episode_to_player_episode() {
        let home = HomeEpisode::try_from(record(RawDuration::Seconds(60))).unwrap();
        let episode = Episode::from(&home);

        assert_eq!(episode.title, home.title);
        assert_eq!(episode.members, home.members);
        assert_eq!(episode.thumbnail, home.thumbnail);
        assert_eq!(episode.duration, 60);
        assert_eq!(episode.url, home.url);
    }
}
