use std::sync::Arc;
use std::time::{Duration, Instant};

use base64::prelude::{Engine as _, BASE64_STANDARD};
use encore_models::v0;
use encore_result::{create_error, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tokio::sync::RwLock;

use crate::{decode_error, request_error, status_error, CLIENT};

pub mod types;

const ACCOUNTS_URL: &str = "https://accounts.spotify.com/api/token";
const API_BASE_URL: &str = "https://api.spotify.com/v1";

const PROVIDER: &str = "spotify";

/// A detail view shows at most this many related artists
const MAX_RELATED_ARTISTS: usize = 5;

/// Client credentials token shared by all requests
#[derive(Clone, Debug)]
pub struct CachedToken {
    pub access_token: String,
    pub expires_at: Instant,
}

impl CachedToken {
    /// Tokens are retired a minute early so an almost-expired token is
    /// never sent upstream.
    pub fn is_expired(&self) -> bool {
        Instant::now() + Duration::from_secs(60) >= self.expires_at
    }
}

#[derive(Clone)]
pub struct Spotify {
    pub client_id: Arc<str>,
    pub client_secret: Arc<str>,
    pub client: Client,
    token: Arc<RwLock<Option<CachedToken>>>,
}

impl Spotify {
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Self {
            client_id: Arc::from(client_id),
            client_secret: Arc::from(client_secret),
            client: CLIENT.clone(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Strip tour names and parenthesised qualifiers from a search query.
    pub fn clean_query(query: &str) -> &str {
        query
            .split('-')
            .next()
            .unwrap_or(query)
            .split('(')
            .next()
            .unwrap_or(query)
            .trim()
    }

    /// Fetch the shared access token, refreshing it when expired.
    ///
    /// Two requests observing expiry at once both refresh; the second
    /// write wins and neither corrupts the slot.
    async fn token(&self) -> Result<String> {
        if let Some(token) = self.token.read().await.as_ref() {
            if !token.is_expired() {
                return Ok(token.access_token.to_string());
            }
        }

        let credentials =
            BASE64_STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret));

        let response = self
            .client
            .post(ACCOUNTS_URL)
            .header(AUTHORIZATION, format!("Basic {credentials}"))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body("grant_type=client_credentials")
            .send()
            .await
            .map_err(|err| request_error(PROVIDER, err))?;

        if !response.status().is_success() {
            return Err(status_error(PROVIDER, response.status()));
        }

        let token: types::TokenResponse = response
            .json()
            .await
            .map_err(|err| decode_error(PROVIDER, err))?;

        let cached = CachedToken {
            access_token: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        };

        let access_token = cached.access_token.to_string();
        *self.token.write().await = Some(cached);
        Ok(access_token)
    }

    async fn get(&self, url: String, query: &[(&str, &str)]) -> Result<reqwest::Response> {
        let token = self.token().await?;

        self.client
            .get(url)
            .query(query)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await
            .map_err(|err| request_error(PROVIDER, err))
    }

    /// Find the artist best matching a free-text query.
    pub async fn search_artist(&self, query: &str) -> Result<Option<types::Artist>> {
        let response = self
            .get(
                format!("{API_BASE_URL}/search"),
                &[
                    ("q", Self::clean_query(query)),
                    ("type", "artist"),
                    ("limit", "1"),
                    ("market", "US"),
                ],
            )
            .await?;

        if !response.status().is_success() {
            return Err(status_error(PROVIDER, response.status()));
        }

        let page: types::SearchResponse = response
            .json()
            .await
            .map_err(|err| decode_error(PROVIDER, err))?;

        Ok(page
            .artists
            .map(|artists| artists.items)
            .unwrap_or_default()
            .into_iter()
            .next())
    }

    /// Fetch an artist's top tracks.
    pub async fn top_tracks(&self, artist_id: &str) -> Result<Vec<v0::TrackSummary>> {
        let response = self
            .get(
                format!("{API_BASE_URL}/artists/{artist_id}/top-tracks"),
                &[("market", "US")],
            )
            .await?;

        if !response.status().is_success() {
            return Err(status_error(PROVIDER, response.status()));
        }

        let page: types::TopTracksResponse = response
            .json()
            .await
            .map_err(|err| decode_error(PROVIDER, err))?;

        Ok(page.tracks.into_iter().map(Into::into).collect())
    }

    /// Fetch an artist by their id.
    pub async fn artist(&self, artist_id: &str) -> Result<types::Artist> {
        let response = self
            .get(format!("{API_BASE_URL}/artists/{artist_id}"), &[])
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(create_error!(NotFound));
        }

        if !response.status().is_success() {
            return Err(status_error(PROVIDER, response.status()));
        }

        response
            .json()
            .await
            .map_err(|err| decode_error(PROVIDER, err))
    }

    /// Fetch artists related to the given one.
    ///
    /// Best-effort enrichment: failures degrade to an empty list so the
    /// artist lookup itself still succeeds.
    pub async fn related_artists(&self, artist_id: &str) -> Vec<types::Artist> {
        let response = match self
            .get(
                format!("{API_BASE_URL}/artists/{artist_id}/related-artists"),
                &[],
            )
            .await
        {
            Ok(response) => response,
            Err(_) => return vec![],
        };

        if !response.status().is_success() {
            warn!(
                "could not fetch related artists for {artist_id}: {}",
                response.status()
            );
            return vec![];
        }

        match response.json::<types::RelatedArtistsResponse>().await {
            Ok(related) => related
                .artists
                .into_iter()
                .take(MAX_RELATED_ARTISTS)
                .collect(),
            Err(_) => vec![],
        }
    }
}

impl From<types::Image> for v0::ArtistImage {
    fn from(image: types::Image) -> Self {
        v0::ArtistImage {
            url: image.url,
            height: image.height,
            width: image.width,
        }
    }
}

impl From<types::Track> for v0::TrackSummary {
    fn from(track: types::Track) -> Self {
        v0::TrackSummary {
            id: track.id,
            name: track.name,
            preview_url: track.preview_url,
            album_art: track
                .album
                .and_then(|album| album.images.into_iter().next())
                .map(|image| image.url),
            spotify_url: track.external_urls.and_then(|urls| urls.spotify),
        }
    }
}

impl From<types::Artist> for v0::ArtistProfile {
    fn from(artist: types::Artist) -> Self {
        v0::ArtistProfile {
            name: artist.name,
            genres: artist.genres,
            popularity: artist.popularity,
            followers: artist.followers.map(|f| f.total).unwrap_or_default(),
            images: artist.images.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<types::Artist> for v0::RelatedArtist {
    fn from(artist: types::Artist) -> Self {
        v0::RelatedArtist {
            id: artist.id,
            name: artist.name,
            genres: artist.genres,
            images: artist.images.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use encore_models::v0;

    use super::types::TopTracksResponse;
    use super::{CachedToken, Spotify};

    #[test]
    fn clean_up_search_queries() {
        assert_eq!(
            Spotify::clean_query("The Headliners - World Tour 2025"),
            "The Headliners"
        );
        assert_eq!(
            Spotify::clean_query("The Headliners (Acoustic Night)"),
            "The Headliners"
        );
        assert_eq!(Spotify::clean_query("  The Headliners  "), "The Headliners");
    }

    #[test]
    fn retire_tokens_before_they_expire() {
        let fresh = CachedToken {
            access_token: "token".to_string(),
            expires_at: Instant::now() + Duration::from_secs(3600),
        };
        assert!(!fresh.is_expired());

        // Within the safety margin counts as expired.
        let stale = CachedToken {
            access_token: "token".to_string(),
            expires_at: Instant::now() + Duration::from_secs(30),
        };
        assert!(stale.is_expired());
    }

    #[test]
    fn reshape_track_with_sparse_fields() {
        let page: TopTracksResponse = serde_json::from_str(
            r#"{
                "tracks": [
                    {
                        "id": "trk-1",
                        "name": "Opening Song",
                        "album": { "images": [{ "url": "https://img.example/cover.jpg" }] },
                        "external_urls": { "spotify": "https://open.example/trk-1" }
                    },
                    { "id": "trk-2", "name": "Encore" }
                ]
            }"#,
        )
        .expect("decode");

        let tracks: Vec<v0::TrackSummary> = page.tracks.into_iter().map(Into::into).collect();

        assert_eq!(tracks[0].album_art.as_deref(), Some("https://img.example/cover.jpg"));
        assert!(tracks[0].preview_url.is_none());
        assert!(tracks[1].album_art.is_none());
        assert!(tracks[1].spotify_url.is_none());
    }
}
