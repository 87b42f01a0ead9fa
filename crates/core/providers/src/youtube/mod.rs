use std::sync::Arc;

use encore_models::v0;
use encore_result::Result;
use reqwest::Client;

use crate::{decode_error, request_error, status_error, CLIENT};

pub mod types;

const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

const PROVIDER: &str = "youtube";

/// A detail view embeds at most this many videos
const MAX_RESULTS: &str = "3";

#[derive(Clone)]
pub struct YouTube {
    pub key: Arc<str>,
    pub client: Client,
}

impl YouTube {
    pub fn new(key: &str) -> Self {
        Self {
            key: Arc::from(key),
            client: CLIENT.clone(),
        }
    }

    /// Search for live performance videos matching a query.
    pub async fn search_videos(&self, query: &str) -> Result<Vec<v0::VideoSummary>> {
        let query = format!("{query} live performance");
        let response = self
            .client
            .get(format!("{API_BASE_URL}/search"))
            .query(&[
                ("part", "snippet"),
                ("maxResults", MAX_RESULTS),
                ("q", query.as_str()),
                ("type", "video"),
                ("key", &*self.key),
            ])
            .send()
            .await
            .map_err(|err| request_error(PROVIDER, err))?;

        if !response.status().is_success() {
            return Err(status_error(PROVIDER, response.status()));
        }

        let page: types::SearchResponse = response
            .json()
            .await
            .map_err(|err| decode_error(PROVIDER, err))?;

        Ok(reshape(page))
    }
}

/// Flatten search results, skipping anything that is not a video.
fn reshape(page: types::SearchResponse) -> Vec<v0::VideoSummary> {
    page.items
        .into_iter()
        .filter_map(|item| {
            let id = item.id.video_id?;
            Some(v0::VideoSummary {
                id,
                title: item.snippet.title,
                thumbnail: item
                    .snippet
                    .thumbnails
                    .high
                    .or(item.snippet.thumbnails.default)
                    .map(|thumbnail| thumbnail.url),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::reshape;
    use super::types::SearchResponse;

    #[test]
    fn skip_results_without_a_video_id() {
        let page: SearchResponse = serde_json::from_str(
            r#"{
                "items": [
                    {
                        "id": { "kind": "youtube#channel" },
                        "snippet": { "title": "A channel" }
                    },
                    {
                        "id": { "videoId": "vid-1" },
                        "snippet": {
                            "title": "Live in Berlin",
                            "thumbnails": { "high": { "url": "https://img.example/hq.jpg" } }
                        }
                    }
                ]
            }"#,
        )
        .expect("decode");

        let videos = reshape(page);
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "vid-1");
        assert_eq!(videos[0].thumbnail.as_deref(), Some("https://img.example/hq.jpg"));
    }

    #[test]
    fn fall_back_to_default_thumbnail() {
        let page: SearchResponse = serde_json::from_str(
            r#"{
                "items": [
                    {
                        "id": { "videoId": "vid-2" },
                        "snippet": {
                            "title": "Acoustic set",
                            "thumbnails": { "default": { "url": "https://img.example/sd.jpg" } }
                        }
                    }
                ]
            }"#,
        )
        .expect("decode");

        let videos = reshape(page);
        assert_eq!(videos[0].thumbnail.as_deref(), Some("https://img.example/sd.jpg"));
    }
}
