use log::{debug, error, warn};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;

use crate::clients::{
    entities::{
        Artist, Community, CommunityMembership, GenrePreference, Playlist, Post, Song, User,
        UserPair,
    },
    errors::{Error, Result},
};

/// Where the Symphony API listens when started locally.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Routes of the Symphony API the seeder talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Endpoint {
    Root,
    CreateUser,
    CreateCommunity,
    AddCommunityUser,
    CreatePost,
    CreateFriendship,
    CreateChat,
    LikeGenre,
    CreateArtist,
    CreateSong,
    CreatePlaylist,
}

impl Endpoint {
    /// Path of the route, relative to the base URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Root => "/",
            Endpoint::CreateUser => "/api/user/create",
            Endpoint::CreateCommunity => "/api/community/create",
            Endpoint::AddCommunityUser => "/api/community/add_user",
            Endpoint::CreatePost => "/api/create-post",
            Endpoint::CreateFriendship => "/api/user/create_friendship",
            Endpoint::CreateChat => "/api/chat/create",
            Endpoint::LikeGenre => "/api/user/like_genre",
            Endpoint::CreateArtist => "/artists",
            Endpoint::CreateSong => "/songs",
            Endpoint::CreatePlaylist => "/playlists",
        }
    }
}

/// Successful answer of the API (status 200 or 201).
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Parsed JSON body.
    Json(Value),
    /// No body, or a body that is not JSON.
    Empty,
}

impl ApiResponse {
    /// Identifier of the created document, if the body carries one.
    ///
    /// Handlers of the document store do not agree on the key, so `_id`, `id`
    /// and `ID` are tried in that order.
    pub fn identifier(&self) -> Option<String> {
        let ApiResponse::Json(body) = self else {
            return None;
        };
        ["_id", "id", "ID"]
            .iter()
            .find_map(|key| match body.get(key)? {
                Value::String(id) => Some(id.clone()),
                Value::Number(id) => Some(id.to_string()),
                _ => None,
            })
    }
}

/// Sequential HTTP client for the Symphony API.
///
/// Request failures are logged and reported as `None`, never as errors.
pub struct SymphonyClient {
    http: Client,
    base_url: String,
}

impl SymphonyClient {
    /// Client for the API at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url)
            .map_err(|e| Error::Configuration(format!("invalid API base URL {base_url:?}: {e}")))?;
        let mut builder = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        // A local API is never reached through the system proxy
        if matches!(url.host_str(), Some("localhost" | "127.0.0.1" | "[::1]")) {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;
        Ok(SymphonyClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client for a Symphony API running locally on its default port.
    pub fn try_default() -> Result<Self> {
        Self::new(DEFAULT_API_BASE_URL)
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Probe `GET /`. Anything but a 200 is fatal for the run.
    pub async fn check_liveness(&self) -> Result<()> {
        let response = self.http.get(self.url(Endpoint::Root.as_str())).send().await?;
        let status = response.status();
        if status == StatusCode::OK {
            debug!("Symphony API answered liveness probe at {}", self.base_url);
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(Error::ApiUnavailable {
            status: status.as_u16(),
            body,
        })
    }

    /// `GET path`; `None` when the request fails or the status is not 200/201.
    pub async fn get(&self, path: &str) -> Option<ApiResponse> {
        let url = self.url(path);
        debug!("GET {url}");
        Self::dispatch(self.http.get(url)).await
    }

    /// `POST path` with a JSON body; `None` when the request fails or the status is not 200/201.
    pub async fn post<B>(&self, path: &str, body: &B) -> Option<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!("POST {url}");
        Self::dispatch(self.http.post(url).json(body)).await
    }

    // Failures are logged here and collapse into `None`; callers never see an error
    async fn dispatch(request: RequestBuilder) -> Option<ApiResponse> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Request failed: {e}");
                return None;
            }
        };
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to read response body (status {status}): {e}");
                return None;
            }
        };

        if status != StatusCode::OK && status != StatusCode::CREATED {
            error!("Error {}: {}", status.as_u16(), body.trim());
            return None;
        }
        if body.trim().is_empty() {
            return Some(ApiResponse::Empty);
        }
        match serde_json::from_str(&body) {
            Ok(json) => Some(ApiResponse::Json(json)),
            Err(e) => {
                warn!("Status {status} with a non-JSON body ({e}), keeping the call as successful");
                Some(ApiResponse::Empty)
            }
        }
    }

    pub async fn create_user(&self, user: &User) -> Option<ApiResponse> {
        self.post(Endpoint::CreateUser.as_str(), user).await
    }

    pub async fn create_community(&self, community: &Community) -> Option<ApiResponse> {
        self.post(Endpoint::CreateCommunity.as_str(), community).await
    }

    pub async fn add_community_user(
        &self,
        membership: &CommunityMembership,
    ) -> Option<ApiResponse> {
        self.post(Endpoint::AddCommunityUser.as_str(), membership).await
    }

    pub async fn create_post(&self, post: &Post) -> Option<ApiResponse> {
        self.post(Endpoint::CreatePost.as_str(), post).await
    }

    pub async fn create_friendship(&self, pair: &UserPair) -> Option<ApiResponse> {
        self.post(Endpoint::CreateFriendship.as_str(), pair).await
    }

    pub async fn create_chat(&self, pair: &UserPair) -> Option<ApiResponse> {
        self.post(Endpoint::CreateChat.as_str(), pair).await
    }

    pub async fn like_genre(&self, preference: &GenrePreference) -> Option<ApiResponse> {
        self.post(Endpoint::LikeGenre.as_str(), preference).await
    }

    pub async fn create_artist(&self, artist: &Artist) -> Option<ApiResponse> {
        self.post(Endpoint::CreateArtist.as_str(), artist).await
    }

    pub async fn create_song(&self, song: &Song) -> Option<ApiResponse> {
        self.post(Endpoint::CreateSong.as_str(), song).await
    }

    pub async fn create_playlist(&self, playlist: &Playlist) -> Option<ApiResponse> {
        self.post(Endpoint::CreatePlaylist.as_str(), playlist).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identifier_prefers_underscore_id() {
        let response = ApiResponse::Json(json!({"_id": "abc", "id": "def"}));
        assert_eq!(response.identifier().as_deref(), Some("abc"));
    }

    #[test]
    fn identifier_falls_back_to_other_keys() {
        let upper = ApiResponse::Json(json!({"ID": "65f1c0ffee", "Name": "Queen"}));
        assert_eq!(upper.identifier().as_deref(), Some("65f1c0ffee"));

        let numeric = ApiResponse::Json(json!({"id": 42}));
        assert_eq!(numeric.identifier().as_deref(), Some("42"));
    }

    #[test]
    fn identifier_missing() {
        assert_eq!(ApiResponse::Empty.identifier(), None);
        assert_eq!(ApiResponse::Json(json!({"message": "ok"})).identifier(), None);
        assert_eq!(ApiResponse::Json(json!([1, 2])).identifier(), None);
        assert_eq!(ApiResponse::Json(json!({"_id": null})).identifier(), None);
    }

    #[test]
    fn base_url_is_validated_and_normalized() {
        assert!(matches!(
            SymphonyClient::new("not a url"),
            Err(Error::Configuration(_))
        ));

        let client = SymphonyClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(
            client.url(Endpoint::CreateUser.as_str()),
            "http://localhost:8080/api/user/create"
        );
    }
}
