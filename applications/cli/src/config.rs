/// Podcastr configuration
use crate::error::{CliError, Result};
use chrono::Duration;
use podcastr_feed::{EpisodeQuery, DEFAULT_REVALIDATE_SECS};
use podcastr_playback::PlayerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file read when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "podcastr.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PodcastrConfig {
    #[serde(default = "default_feed")]
    pub feed: FeedSettings,

    #[serde(default)]
    pub player: PlayerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedSettings {
    /// Episodes requested for the home page
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Seconds before the listing is rebuilt
    #[serde(default = "default_revalidate_secs")]
    pub revalidate_secs: u64,

    /// JSON episode database
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,
}

impl FeedSettings {
    pub fn query(&self) -> EpisodeQuery {
        EpisodeQuery::latest(self.limit)
    }

    pub fn revalidate_interval(&self) -> Duration {
        let secs = i64::try_from(self.revalidate_secs).unwrap_or(i64::MAX);
        Duration::seconds(secs.min(i64::MAX / 1000))
    }
}

impl PodcastrConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables, e.g. PODCASTR_FEED__LIMIT=6
        settings = settings.add_source(
            config::Environment::with_prefix("PODCASTR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.feed.limit == 0 {
            return Err(CliError::Config(
                "feed.limit must be at least 1".to_string(),
            ));
        }

        if self.feed.revalidate_secs == 0 {
            return Err(CliError::Config(
                "feed.revalidate_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_feed() -> FeedSettings {
    FeedSettings {
        limit: default_limit(),
        revalidate_secs: default_revalidate_secs(),
        source_path: default_source_path(),
    }
}

fn default_limit() -> usize {
    EpisodeQuery::HOME_LIMIT
}

fn default_revalidate_secs() -> u64 {
    DEFAULT_REVALIDATE_SECS as u64
}

fn default_source_path() -> PathBuf {
    PathBuf::from("server.json")
}

impl Default for PodcastrConfig {
    fn default() -> Self {
        Self {
            feed: default_feed(),
            player: PlayerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = PodcastrConfig::default();
        assert_eq!(config.feed.limit, 12);
        assert_eq!(config.feed.revalidate_secs, 28_800);
        assert_eq!(config.feed.source_path, PathBuf::from("server.json"));
        assert!(!config.player.looping);
        assert!(!config.player.shuffling);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_partial_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[feed]\nlimit = 6\n\n[player]\nshuffling = true").unwrap();

        let config = PodcastrConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.feed.limit, 6);
        assert_eq!(config.feed.revalidate_secs, 28_800);
        assert!(config.player.shuffling);
        assert!(!config.player.looping);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PodcastrConfig::load(Some(&dir.path().join("nope.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn zero_limit_is_rejected() {
        let mut config = PodcastrConfig::default();
        config.feed.limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn query_and_interval_follow_settings() {
        let config = PodcastrConfig::default();
        assert_eq!(config.feed.query(), EpisodeQuery::home());
        assert_eq!(config.feed.revalidate_interval(), Duration::hours(8));
    }
}
