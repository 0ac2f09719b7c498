/// Podcastr - podcast listing and player session
use clap::{Parser, Subcommand};
use podcastr::{
    config::PodcastrConfig,
    session::{run_session, PlayerAction, SessionStart},
};
use podcastr_feed::{FeedCache, HomeEpisode, JsonFileSource};
use podcastr_playback::PlayerContext;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "podcastr")]
#[command(about = "Podcast listing and player session", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the home listing
    Feed {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Start playback and replay player actions
    Play {
        /// Episode id to start from
        episode: String,
        /// Queue the whole listing instead of a single episode
        #[arg(long)]
        list: bool,
        /// Actions applied after playback starts
        #[arg(value_enum)]
        actions: Vec<PlayerAction>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podcastr=info,podcastr_feed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = PodcastrConfig::load(cli.config.as_deref())?;
    config.validate()?;

    tracing::info!("Episode source: {}", config.feed.source_path.display());

    let source = JsonFileSource::new(config.feed.source_path.clone());
    let mut cache = FeedCache::with_settings(
        source,
        config.feed.query(),
        config.feed.revalidate_interval(),
    );
    let feed = cache.get().await?;

    match cli.command {
        Commands::Feed { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(feed)?);
            } else {
                println!("Latest releases");
                for episode in &feed.latest_episodes {
                    print_episode(episode);
                }
                println!();
                println!("All episodes");
                for episode in &feed.all_episodes {
                    print_episode(episode);
                }
            }
        }
        Commands::Play {
            episode,
            list,
            actions,
        } => {
            let start = if list {
                SessionStart::List(episode)
            } else {
                SessionStart::Single(episode)
            };

            let mut player = PlayerContext::new(config.player);
            let steps = run_session(&mut player, feed, &start, &actions)?;
            println!("{}", serde_json::to_string_pretty(&steps)?);
        }
    }

    Ok(())
}

fn print_episode(episode: &HomeEpisode) {
    println!(
        "  {:<10} {:>8}  {}  ({})",
        episode.published_at, episode.duration_as_string, episode.title, episode.members
    );
}
