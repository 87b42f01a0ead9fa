//! Spotify Web API models

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub artists: Option<ArtistPage>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ArtistPage {
    #[serde(default)]
    pub items: Vec<Artist>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub followers: Option<Followers>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Followers {
    #[serde(default)]
    pub total: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub height: Option<u64>,
    #[serde(default)]
    pub width: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TopTracksResponse {
    #[serde(default)]
    pub tracks: Vec<Track>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Track {
    pub id: String,
    pub name: String,
    /// Absent for tracks without a preview clip
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub album: Option<Album>,
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Album {
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RelatedArtistsResponse {
    #[serde(default)]
    pub artists: Vec<Artist>,
}
