//! Randomized record generators.
//!
//! Every function is a pure mapping from an RNG (plus upstream identifiers
//! where the record references one) to a new record. No I/O happens here.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::clients::entities::{
    Artist, Community, GenrePreference, Playlist, PlaylistSong, Post, Song, StoredUser, User,
    UserPair,
};
use crate::vocabulary::{
    ALBUMS, ARTIST_NAMES, COMMUNITY_NAMES, COUNTRIES, FIRST_NAMES, LAST_NAMES, MUSIC_GENRES,
    PLAYLIST_NAMES, POST_TEXTS, SONG_TITLES,
};

pub const BIRTH_YEARS: (u32, u32) = (1980, 2005);
pub const SONG_DURATION_SECS: (u32, u32) = (120, 360);
pub const RELEASE_YEARS: (u32, u32) = (1990, 2024);
pub const MAX_PLAYLIST_SONGS: usize = 10;
pub const COMMUNITY_MEMBERS: (usize, usize) = (5, 20);
pub const MAX_ARTIST_GENRES: usize = 3;
pub const MAX_LIKED_GENRES: usize = 5;

// Word lists are non-empty constants
fn pick<R: Rng + ?Sized>(rng: &mut R, words: &[&'static str]) -> &'static str {
    words[rng.random_range(0..words.len())]
}

fn spotify_id<R: Rng + ?Sized>(rng: &mut R, kind: &str) -> String {
    format!("spotify_{kind}_{}", rng.random_range(1_000_000..=9_999_999))
}

fn distinct_genres<R: Rng + ?Sized>(rng: &mut R, max: usize) -> Vec<String> {
    let amount = rng.random_range(1..=max);
    MUSIC_GENRES
        .choose_multiple(rng, amount)
        .map(ToString::to_string)
        .collect()
}

pub fn user<R: Rng + ?Sized>(rng: &mut R) -> User {
    let first_name = pick(rng, FIRST_NAMES);
    let last_name = pick(rng, LAST_NAMES);
    let username = format!(
        "{}{}{}",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        rng.random_range(1..=999)
    );
    let birth_date = format!(
        "{}-{:02}-{:02}T00:00:00Z",
        rng.random_range(BIRTH_YEARS.0..=BIRTH_YEARS.1),
        rng.random_range(1..=12),
        rng.random_range(1..=28)
    );
    User {
        email: format!("{username}@example.com"),
        fullname: format!("{first_name} {last_name}"),
        telephone: format!(
            "+55{}{}",
            rng.random_range(10..=99),
            rng.random_range(10_000_000..=99_999_999)
        ),
        username,
        birth_date,
    }
}

pub fn artist<R: Rng + ?Sized>(rng: &mut R) -> Artist {
    let name = pick(rng, ARTIST_NAMES);
    let country = pick(rng, COUNTRIES);
    let genres = distinct_genres(rng, MAX_ARTIST_GENRES);
    Artist {
        description: format!(
            "Amazing {} artist from {country}",
            genres[0].to_lowercase()
        ),
        country: country.to_string(),
        biography: format!(
            "{name} is a talented musician known for their unique style and innovative approach \
             to music. They have been active in the music industry for over a decade and have \
             released multiple successful albums."
        ),
        genres,
        id_spotify: spotify_id(rng, "artist"),
        image_url: format!(
            "https://example.com/artists/{}.jpg",
            name.to_lowercase().replace(' ', "_")
        ),
        name: name.to_string(),
    }
}

pub fn song<R: Rng + ?Sized>(rng: &mut R, artist_id: Option<String>) -> Song {
    Song {
        title: pick(rng, SONG_TITLES).to_string(),
        duration: rng.random_range(SONG_DURATION_SECS.0..=SONG_DURATION_SECS.1),
        artist_id,
        genre: pick(rng, MUSIC_GENRES).to_string(),
        release_year: rng.random_range(RELEASE_YEARS.0..=RELEASE_YEARS.1),
        album: pick(rng, ALBUMS).to_string(),
        id_spotify: spotify_id(rng, "song"),
        url_spotify: format!(
            "https://open.spotify.com/track/{}",
            rng.random_range(1_000_000_000_000_000_000_u64..=9_999_999_999_999_999_999_u64)
        ),
    }
}

/// Playlist over a random subset of `song_ids`. An empty candidate list
/// yields a playlist without songs.
pub fn playlist<R: Rng + ?Sized>(rng: &mut R, user_id: String, song_ids: &[String]) -> Playlist {
    let songs = if song_ids.is_empty() {
        Vec::new()
    } else {
        let amount = rng.random_range(1..=MAX_PLAYLIST_SONGS.min(song_ids.len()));
        song_ids
            .choose_multiple(rng, amount)
            .zip(1..)
            .map(|(song_id, order)| PlaylistSong {
                song_id: song_id.clone(),
                order,
            })
            .collect()
    };
    Playlist {
        name: pick(rng, PLAYLIST_NAMES).to_string(),
        description: "A curated collection of amazing music".to_string(),
        user_id,
        public: rng.random_bool(0.5),
        id_spotify: spotify_id(rng, "playlist"),
        title: pick(rng, PLAYLIST_NAMES).to_string(),
        image_url: format!(
            "https://example.com/playlists/playlist_{}.jpg",
            rng.random_range(1..=100)
        ),
        songs,
    }
}

pub fn post<R: Rng + ?Sized>(rng: &mut R, user_id: usize) -> Post {
    Post {
        user_id,
        text: pick(rng, POST_TEXTS).to_string(),
        url_foto: format!(
            "https://example.com/posts/post_{}.jpg",
            rng.random_range(1..=100)
        ),
    }
}

pub fn community<R: Rng + ?Sized>(rng: &mut R) -> Community {
    let name = pick(rng, COMMUNITY_NAMES);
    Community {
        description: format!(
            "A community for {} enthusiasts to share and discover music together.",
            name.to_lowercase()
        ),
        community_name: name.to_string(),
    }
}

/// Distinct members for one community, clamped to the users available.
pub fn community_members<'a, R: Rng + ?Sized>(
    rng: &mut R,
    users: &'a [StoredUser],
) -> Vec<&'a StoredUser> {
    if users.is_empty() {
        return Vec::new();
    }
    let min = COMMUNITY_MEMBERS.0.min(users.len());
    let max = COMMUNITY_MEMBERS.1.min(users.len());
    let amount = rng.random_range(min..=max);
    users.choose_multiple(rng, amount).collect()
}

/// Two distinct users, or `None` when fewer than two are available.
pub fn user_pair<R: Rng + ?Sized>(rng: &mut R, users: &[StoredUser]) -> Option<UserPair> {
    let picked: Vec<&StoredUser> = users.choose_multiple(rng, 2).collect();
    match picked.as_slice() {
        [first, second] => Some(UserPair {
            username1: first.user.username.clone(),
            username2: second.user.username.clone(),
        }),
        _ => None,
    }
}

pub fn liked_genres<R: Rng + ?Sized>(rng: &mut R, username: &str) -> Vec<GenrePreference> {
    distinct_genres(rng, MAX_LIKED_GENRES)
        .into_iter()
        .map(|genre_name| GenrePreference {
            username: username.to_string(),
            genre_name,
        })
        .collect()
}
