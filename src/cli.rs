use std::time::Duration;

use clap::Parser;
use log::info;
use symphony_seed::clients::{SymphonyClient, errors::Result, symphony::DEFAULT_API_BASE_URL};
use symphony_seed::populator::DEFAULT_DELAY_MS;
use symphony_seed::{ConfigBuilder, Counts, Populator, RunSummary};

#[derive(Parser)]
#[command(name = "symphony-seed")]
#[command(version, about = "Populate the Symphony API with synthetic demo data", long_about = None)]
struct Cli {
    /// Base URL of the Symphony API
    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, default_value_t = Counts::default().users)]
    users: usize,

    #[arg(long, default_value_t = Counts::default().artists)]
    artists: usize,

    #[arg(long, default_value_t = Counts::default().songs)]
    songs: usize,

    #[arg(long, default_value_t = Counts::default().playlists)]
    playlists: usize,

    #[arg(long, default_value_t = Counts::default().posts)]
    posts: usize,

    #[arg(long, default_value_t = Counts::default().communities)]
    communities: usize,

    #[arg(long, default_value_t = Counts::default().chats)]
    chats: usize,

    /// Pause after every submission, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    delay_ms: u64,

    /// Seed the payload generator for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn counts(&self) -> Counts {
        Counts {
            users: self.users,
            artists: self.artists,
            songs: self.songs,
            playlists: self.playlists,
            posts: self.posts,
            communities: self.communities,
            chats: self.chats,
        }
    }
}

pub async fn run() -> Result<RunSummary> {
    let cli = Cli::parse();

    info!("Building config ...");
    let config = ConfigBuilder::new()
        .client(SymphonyClient::new(&cli.base_url)?)
        .counts(cli.counts())
        .delay(Duration::from_millis(cli.delay_ms))
        .seed(cli.seed)
        .build()?;

    let mut populator = Populator::new(config);
    populator.run().await
}
