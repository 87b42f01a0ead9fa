//! YouTube Data API search models

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SearchItem {
    pub id: ItemId,
    pub snippet: Snippet,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ItemId {
    /// Absent for non-video results
    #[serde(rename = "videoId", default)]
    pub video_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Snippet {
    pub title: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Thumbnails {
    #[serde(default)]
    pub high: Option<Thumbnail>,
    #[serde(default)]
    pub default: Option<Thumbnail>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Thumbnail {
    pub url: String,
}
