use std::sync::Arc;

use encore_models::v0;
use encore_result::Result;
use reqwest::Client;

use crate::{decode_error, request_error, status_error, CLIENT};

pub mod types;

const API_BASE_URL: &str = "https://app.ticketmaster.com/discovery/v2";

const PROVIDER: &str = "ticketmaster";

#[derive(Clone)]
pub struct Ticketmaster {
    pub key: Arc<str>,
    pub client: Client,
}

impl Ticketmaster {
    pub fn new(key: &str) -> Self {
        Self {
            key: Arc::from(key),
            client: CLIENT.clone(),
        }
    }

    /// Search music events in a city, soonest first.
    pub async fn search_events(&self, city: &str) -> Result<Vec<v0::EventSummary>> {
        let response = self
            .client
            .get(format!("{API_BASE_URL}/events.json"))
            .query(&[
                ("apikey", &*self.key),
                ("city", city),
                ("classificationName", "music"),
                ("sort", "date,asc"),
                ("size", "50"),
            ])
            .send()
            .await
            .map_err(|err| request_error(PROVIDER, err))?;

        if !response.status().is_success() {
            return Err(status_error(PROVIDER, response.status()));
        }

        let page: types::DiscoveryResponse = response
            .json()
            .await
            .map_err(|err| decode_error(PROVIDER, err))?;

        Ok(page
            .embedded
            .map(|embedded| embedded.events)
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

impl From<types::Event> for v0::EventSummary {
    fn from(event: types::Event) -> Self {
        let start = event.dates.and_then(|dates| dates.start);
        let venue = event
            .embedded
            .and_then(|embedded| embedded.venues.into_iter().next());

        v0::EventSummary {
            id: event.id,
            name: event.name,
            url: event.url,
            date: start.as_ref().and_then(|start| start.local_date.clone()),
            date_time: start.and_then(|start| start.date_time),
            image_url: event.images.into_iter().next().map(|image| image.url),
            genre: event
                .classifications
                .into_iter()
                .next()
                .and_then(|classification| classification.genre)
                .map(|genre| genre.name),
            venue: venue.map(|venue| v0::Venue {
                name: venue.name,
                city: venue.city.map(|city| city.name),
                latitude: venue
                    .location
                    .as_ref()
                    .and_then(|location| location.latitude.parse().ok()),
                longitude: venue
                    .location
                    .as_ref()
                    .and_then(|location| location.longitude.parse().ok()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use encore_models::v0;

    use super::types::DiscoveryResponse;

    #[test]
    fn decode_page_without_events() {
        let page: DiscoveryResponse =
            serde_json::from_str(r#"{ "page": { "totalElements": 0 } }"#).expect("decode");

        assert!(page.embedded.is_none());
    }

    #[test]
    fn reshape_event_record() {
        let page: DiscoveryResponse = serde_json::from_str(
            r#"{
                "_embedded": {
                    "events": [
                        {
                            "id": "evt-42",
                            "name": "Show A",
                            "url": "https://tickets.example/evt-42",
                            "dates": { "start": { "localDate": "2025-06-01" } },
                            "images": [{ "url": "https://img.example/a.jpg" }],
                            "classifications": [{ "genre": { "name": "Rock" } }],
                            "_embedded": {
                                "venues": [
                                    {
                                        "name": "The Venue",
                                        "city": { "name": "Berlin" },
                                        "location": {
                                            "latitude": "52.52",
                                            "longitude": "13.40"
                                        }
                                    }
                                ]
                            }
                        }
                    ]
                }
            }"#,
        )
        .expect("decode");

        let events = page.embedded.expect("events").events;
        let event: v0::EventSummary = events.into_iter().next().expect("one event").into();

        assert_eq!(event.id, "evt-42");
        assert_eq!(event.date.as_deref(), Some("2025-06-01"));
        assert_eq!(event.genre.as_deref(), Some("Rock"));

        let venue = event.venue.expect("venue");
        assert_eq!(venue.city.as_deref(), Some("Berlin"));
        assert_eq!(venue.latitude, Some(52.52));
    }

    #[test]
    fn reshape_event_with_sparse_fields() {
        let page: DiscoveryResponse = serde_json::from_str(
            r#"{ "_embedded": { "events": [{ "id": "evt-1", "name": "Show B" }] } }"#,
        )
        .expect("decode");

        let events = page.embedded.expect("events").events;
        let event: v0::EventSummary = events.into_iter().next().expect("one event").into();

        assert_eq!(event.name, "Show B");
        assert!(event.date.is_none());
        assert!(event.venue.is_none());
    }
}
