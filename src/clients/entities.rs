use serde::Serialize;

/// Body of `POST /api/user/create`.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub username: String,
    pub fullname: String,
    pub email: String,
    pub telephone: String,
    pub birth_date: String, // ISO-8601, always midnight UTC
}

/// A user the API accepted, paired with a locally assigned surrogate id.
///
/// The user endpoint only answers with a status message, so `id` is the
/// 1-based attempt index of the creation loop. It drifts from the ids stored
/// by the API as soon as one creation fails earlier in the run.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub id: usize,
    pub user: User,
}

/// Body of `POST /artists`.
#[derive(Debug, Clone, Serialize)]
pub struct Artist {
    pub name: String,
    pub description: String,
    pub country: String,
    pub biography: String,
    pub genres: Vec<String>,
    pub id_spotify: String,
    pub image_url: String,
}

/// Body of `POST /songs`.
#[derive(Debug, Clone, Serialize)]
pub struct Song {
    pub title: String,
    pub duration: u32, // seconds
    pub artist_id: Option<String>,
    pub genre: String,
    pub release_year: u32,
    pub album: String,
    pub id_spotify: String,
    pub url_spotify: String,
}

/// Position of one song inside a playlist, `order` starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistSong {
    pub song_id: String,
    pub order: u32,
}

/// Body of `POST /playlists`.
#[derive(Debug, Clone, Serialize)]
pub struct Playlist {
    pub name: String,
    pub description: String,
    pub user_id: String,
    pub public: bool,
    pub id_spotify: String,
    pub title: String,
    pub image_url: String,
    pub songs: Vec<PlaylistSong>,
}

/// Body of `POST /api/create-post`. `user_id` is a [`StoredUser`] surrogate id.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub user_id: usize,
    pub text: String,
    pub url_foto: String,
}

/// Body of `POST /api/community/create`.
#[derive(Debug, Clone, Serialize)]
pub struct Community {
    pub community_name: String,
    pub description: String,
}

/// Body of `POST /api/community/add_user`.
#[derive(Debug, Clone, Serialize)]
pub struct CommunityMembership {
    pub username: String,
    pub community_name: String,
}

/// Body shared by the friendship and chat endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct UserPair {
    pub username1: String,
    pub username2: String,
}

/// Body of `POST /api/user/like_genre`.
#[derive(Debug, Clone, Serialize)]
pub struct GenrePreference {
    pub username: String,
    pub genre_name: String,
}

/// A record the API accepted, with the identifier it answered with (if any).
#[derive(Debug, Clone)]
pub struct Created<T> {
    pub record: T,
    pub id: Option<String>,
}
