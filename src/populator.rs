use std::fmt;
use std::time::{Duration, Instant};

use log::{info, warn};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::clients::{
    SymphonyClient,
    entities::{
        Artist, Community, CommunityMembership, Created, Playlist, Post, Song, StoredUser, UserPair,
    },
    errors::Result,
};
use crate::generator;

/// Pause after every submission, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 100;
/// [`DEFAULT_DELAY_MS`] as a [`Duration`].
pub const DEFAULT_DELAY: Duration = Duration::from_millis(DEFAULT_DELAY_MS);

/// How many records each phase attempts to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub users: usize,
    pub artists: usize,
    pub songs: usize,
    pub playlists: usize,
    pub posts: usize,
    pub communities: usize,
    pub chats: usize,
}

impl Default for Counts {
    fn default() -> Self {
        Counts {
            users: 50,
            artists: 30,
            songs: 100,
            playlists: 40,
            posts: 200,
            communities: 15,
            chats: 80,
        }
    }
}

/// Configuration for the [`Populator`].
pub struct Config {
    pub client: SymphonyClient,
    pub counts: Counts,
    pub delay: Duration,
    pub seed: Option<u64>,
}

/// Builds a [`Config`], falling back to the defaults for anything unset.
#[derive(Default)]
pub struct ConfigBuilder {
    client: Option<SymphonyClient>,
    counts: Option<Counts>,
    delay: Option<Duration>,
    seed: Option<u64>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn client(mut self, client: SymphonyClient) -> Self {
        self.client = Some(client);
        self
    }

    #[must_use]
    pub fn counts(mut self, counts: Counts) -> Self {
        self.counts = Some(counts);
        self
    }

    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<Config> {
        let client = match self.client {
            Some(c) => c,
            None => SymphonyClient::try_default()?,
        };
        Ok(Config {
            client,
            counts: self.counts.unwrap_or_default(),
            delay: self.delay.unwrap_or(DEFAULT_DELAY),
            seed: self.seed,
        })
    }
}

/// Records created per entity type during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub users: usize,
    pub communities: usize,
    pub memberships: usize,
    pub posts: usize,
    pub friendships: usize,
    pub chats: usize,
    pub genre_preferences: usize,
    pub artists: usize,
    pub songs: usize,
    pub playlists: usize,
    pub elapsed: Duration,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Database population completed")?;
        writeln!(f, "Total time: {:.2} seconds", self.elapsed.as_secs_f64())?;
        writeln!(f, "Users created: {}", self.users)?;
        writeln!(f, "Communities created: {}", self.communities)?;
        writeln!(f, "Community memberships created: {}", self.memberships)?;
        writeln!(f, "Posts created: {}", self.posts)?;
        writeln!(f, "Friendships created: {}", self.friendships)?;
        writeln!(f, "Chats created: {}", self.chats)?;
        writeln!(f, "Genre preferences created: {}", self.genre_preferences)?;
        writeln!(f, "Artists created: {}", self.artists)?;
        writeln!(f, "Songs created: {}", self.songs)?;
        write!(f, "Playlists created: {}", self.playlists)
    }
}

/// Accumulators of the relational/graph phases.
#[derive(Debug, Default)]
struct Social {
    users: Vec<StoredUser>,
    communities: Vec<Community>,
    posts: Vec<Created<Post>>,
    chats: Vec<Created<UserPair>>,
    memberships: usize,
    friendships: usize,
    genre_preferences: usize,
}

/// Accumulators of the document phases.
#[derive(Debug, Default)]
struct Catalog {
    artists: Vec<Created<Artist>>,
    songs: Vec<Created<Song>>,
    playlists: Vec<Created<Playlist>>,
}

/// Drives the generate-then-submit phases against the Symphony API.
pub struct Populator {
    config: Config,
    rng: StdRng,
}

impl Populator {
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Populator { config, rng }
    }

    /// Probe the API, then run every phase in order.
    ///
    /// Fails only when the liveness probe does; individual submission failures
    /// only lower the counts in the summary.
    pub async fn run(&mut self) -> Result<RunSummary> {
        let counts = self.config.counts;
        info!("Target API: {}", self.config.client.base_url());
        info!(
            "Planned records: users={}, artists={}, songs={}, playlists={}, posts={}, \
             communities={}, chats={}",
            counts.users,
            counts.artists,
            counts.songs,
            counts.playlists,
            counts.posts,
            counts.communities,
            counts.chats
        );

        self.config.client.check_liveness().await?;
        info!("API is running and accessible");

        let started = Instant::now();
        let social = self.populate_social().await;
        let catalog = self.populate_catalog().await;

        Ok(RunSummary {
            users: social.users.len(),
            communities: social.communities.len(),
            memberships: social.memberships,
            posts: social.posts.len(),
            friendships: social.friendships,
            chats: social.chats.len(),
            genre_preferences: social.genre_preferences,
            artists: catalog.artists.len(),
            songs: catalog.songs.len(),
            playlists: catalog.playlists.len(),
            elapsed: started.elapsed(),
        })
    }

    async fn pause(&self) {
        if !self.config.delay.is_zero() {
            tokio::time::sleep(self.config.delay).await;
        }
    }

    // Users, communities, posts, chats, friendships and genre preferences
    async fn populate_social(&mut self) -> Social {
        info!("Populating users, communities, posts and chats ...");
        let mut social = Social::default();

        self.create_users(&mut social).await;
        self.create_communities(&mut social).await;
        self.add_community_members(&mut social).await;
        self.create_posts(&mut social).await;
        self.create_chats(&mut social).await;
        self.like_genres(&mut social).await;

        social
    }

    // Artists, songs and playlists
    async fn populate_catalog(&mut self) -> Catalog {
        info!("Populating artists, songs and playlists ...");
        let mut catalog = Catalog::default();

        self.create_artists(&mut catalog).await;
        self.create_songs(&mut catalog).await;
        self.create_playlists(&mut catalog).await;

        catalog
    }

    async fn create_users(&mut self, social: &mut Social) {
        info!("Creating users ...");
        for index in 0..self.config.counts.users {
            let user = generator::user(&mut self.rng);
            if self.config.client.create_user(&user).await.is_some() {
                info!("Created user: {}", user.username);
                // The endpoint only answers with a message; the attempt index stands in for the id
                social.users.push(StoredUser {
                    id: index + 1,
                    user,
                });
            }
            self.pause().await;
        }
    }

    async fn create_communities(&mut self, social: &mut Social) {
        info!("Creating communities ...");
        for _ in 0..self.config.counts.communities {
            let community = generator::community(&mut self.rng);
            if self
                .config
                .client
                .create_community(&community)
                .await
                .is_some()
            {
                info!("Created community: {}", community.community_name);
                social.communities.push(community);
            }
            self.pause().await;
        }
    }

    async fn add_community_members(&mut self, social: &mut Social) {
        info!("Adding users to communities ...");
        if social.users.is_empty() {
            if !social.communities.is_empty() {
                warn!("No users were created, skipping community membership");
            }
            return;
        }
        for community in &social.communities {
            let members = generator::community_members(&mut self.rng, &social.users);
            for member in members {
                let membership = CommunityMembership {
                    username: member.user.username.clone(),
                    community_name: community.community_name.clone(),
                };
                if self
                    .config
                    .client
                    .add_community_user(&membership)
                    .await
                    .is_some()
                {
                    social.memberships += 1;
                }
            }
            self.pause().await;
        }
    }

    async fn create_posts(&mut self, social: &mut Social) {
        info!("Creating posts ...");
        let total = self.config.counts.posts;
        if total > 0 && social.users.is_empty() {
            warn!("No users were created, skipping posts");
            return;
        }
        for i in 0..total {
            let Some(author) = social.users.choose(&mut self.rng) else {
                break;
            };
            let post = generator::post(&mut self.rng, author.id);
            if let Some(response) = self.config.client.create_post(&post).await {
                info!("Created post {}/{total}", i + 1);
                social.posts.push(Created {
                    id: response.identifier(),
                    record: post,
                });
            }
            self.pause().await;
        }
    }

    // Every chat iteration also befriends the same pair of users
    async fn create_chats(&mut self, social: &mut Social) {
        info!("Creating chats and friendships ...");
        let total = self.config.counts.chats;
        if total > 0 && social.users.len() < 2 {
            warn!("Fewer than two users were created, skipping chats and friendships");
            return;
        }
        for i in 0..total {
            let Some(pair) = generator::user_pair(&mut self.rng, &social.users) else {
                break;
            };
            if self
                .config
                .client
                .create_friendship(&pair)
                .await
                .is_some()
            {
                social.friendships += 1;
            }
            if let Some(response) = self.config.client.create_chat(&pair).await {
                info!("Created chat {}/{total}", i + 1);
                social.chats.push(Created {
                    id: response.identifier(),
                    record: pair,
                });
            }
            self.pause().await;
        }
    }

    async fn like_genres(&mut self, social: &mut Social) {
        info!("Adding genre preferences ...");
        for stored in &social.users {
            for preference in generator::liked_genres(&mut self.rng, &stored.user.username) {
                if self.config.client.like_genre(&preference).await.is_some() {
                    social.genre_preferences += 1;
                }
            }
            self.pause().await;
        }
    }

    async fn create_artists(&mut self, catalog: &mut Catalog) {
        info!("Creating artists ...");
        for _ in 0..self.config.counts.artists {
            let artist = generator::artist(&mut self.rng);
            if let Some(response) = self.config.client.create_artist(&artist).await {
                let id = response.identifier();
                if id.is_none() {
                    warn!("API returned no identifier for artist {}", artist.name);
                }
                info!("Created artist: {}", artist.name);
                catalog.artists.push(Created { record: artist, id });
            }
            self.pause().await;
        }
    }

    async fn create_songs(&mut self, catalog: &mut Catalog) {
        info!("Creating songs ...");
        let total = self.config.counts.songs;
        if total > 0 && catalog.artists.is_empty() {
            warn!("No artists were created, skipping songs");
            return;
        }
        for i in 0..total {
            let Some(artist) = catalog.artists.choose(&mut self.rng) else {
                break;
            };
            let song = generator::song(&mut self.rng, artist.id.clone());
            if let Some(response) = self.config.client.create_song(&song).await {
                info!("Created song {}/{total}: {}", i + 1, song.title);
                catalog.songs.push(Created {
                    id: response.identifier(),
                    record: song,
                });
            }
            self.pause().await;
        }
    }

    async fn create_playlists(&mut self, catalog: &mut Catalog) {
        info!("Creating playlists ...");
        let total = self.config.counts.playlists;
        let song_ids: Vec<String> = catalog
            .songs
            .iter()
            .filter_map(|song| song.id.clone())
            .collect();
        if total > 0 && song_ids.len() < catalog.songs.len() {
            warn!(
                "{} of {} songs have no identifier and cannot be placed in playlists",
                catalog.songs.len() - song_ids.len(),
                catalog.songs.len()
            );
        }
        // Playlist owners are drawn from the configured user range, not from the created users
        let max_user = self.config.counts.users.max(1);
        for i in 0..total {
            let user_id = format!("user_{}", self.rng.random_range(1..=max_user));
            let playlist = generator::playlist(&mut self.rng, user_id, &song_ids);
            if let Some(response) = self.config.client.create_playlist(&playlist).await {
                info!("Created playlist {}/{total}: {}", i + 1, playlist.name);
                catalog.playlists.push(Created {
                    id: response.identifier(),
                    record: playlist,
                });
            }
            self.pause().await;
        }
    }
}
