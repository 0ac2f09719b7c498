/// Scripted listening sessions
///
/// Stands in for the player UI: starts playback from the home listing and
/// replays transport actions against a `PlayerContext`, recording the
/// state and events after each one.
use crate::error::{CliError, Result};
use clap::ValueEnum;
use podcastr_feed::HomeFeed;
use podcastr_playback::{PlayerContext, PlayerEvent, PlayerSnapshot};
use serde::Serialize;

/// A user or media-element event the player reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerAction {
    TogglePlay,
    Pause,
    Resume,
    Next,
    Previous,
    ToggleLoop,
    ToggleShuffle,
    /// Media element reached the end of the episode
    Ended,
    Clear,
}

impl PlayerAction {
    pub fn apply(self, player: &mut PlayerContext) {
        match self {
            PlayerAction::TogglePlay => player.toggle_play(),
            PlayerAction::Pause => player.set_player_state(false),
            PlayerAction::Resume => player.set_player_state(true),
            PlayerAction::Next => player.play_next(),
            PlayerAction::Previous => player.play_previous(),
            PlayerAction::ToggleLoop => player.toggle_loop(),
            PlayerAction::ToggleShuffle => player.toggle_shuffle(),
            PlayerAction::Ended => player.episode_ended(),
            PlayerAction::Clear => player.clear_player_state(),
        }
    }
}

/// How the session starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStart {
    /// Play one episode on its own
    Single(String),
    /// Queue the whole listing, starting at this episode
    List(String),
}

/// State after one step of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionStep {
    /// `None` for the initial play
    pub action: Option<PlayerAction>,
    pub current_title: Option<String>,
    pub snapshot: SessionState,
    pub events: Vec<PlayerEvent>,
}

/// Snapshot with the queue reduced to its length
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    pub queue_length: usize,
    pub current_episode_index: usize,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

impl From<&PlayerSnapshot> for SessionState {
    fn from(snapshot: &PlayerSnapshot) -> Self {
        Self {
            queue_length: snapshot.episode_list.len(),
            current_episode_index: snapshot.current_episode_index,
            is_playing: snapshot.is_playing,
            is_looping: snapshot.is_looping,
            is_shuffling: snapshot.is_shuffling,
            has_next: snapshot.has_next,
            has_previous: snapshot.has_previous,
        }
    }
}

/// Start playback from `feed` and apply `actions` in order
pub fn run_session(
    player: &mut PlayerContext,
    feed: &HomeFeed,
    start: &SessionStart,
    actions: &[PlayerAction],
) -> Result<Vec<SessionStep>> {
    match start {
        SessionStart::Single(id) => {
            let episode = feed
                .find(id)
                .ok_or_else(|| CliError::EpisodeNotFound(id.clone()))?;
            player.play(episode.to_episode());
        }
        SessionStart::List(id) => {
            let index = feed
                .playlist_index(id)
                .ok_or_else(|| CliError::EpisodeNotFound(id.clone()))?;
            player.play_list(feed.playlist(), index);
        }
    }

    let mut steps = vec![record_step(player, None)];
    for action in actions {
        tracing::debug!(?action, "Applying player action");
        action.apply(player);
        steps.push(record_step(player, Some(*action)));
    }

    Ok(steps)
}

fn record_step(player: &mut PlayerContext, action: Option<PlayerAction>) -> SessionStep {
    let snapshot = player.snapshot();
    SessionStep {
        action,
        current_title: snapshot.current_episode().map(|e| e.title.clone()),
        snapshot: SessionState::from(&snapshot),
        events: player.drain_events(),
    }
}
