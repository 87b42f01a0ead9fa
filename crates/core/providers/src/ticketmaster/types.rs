//! Ticketmaster Discovery API models

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DiscoveryResponse {
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<DiscoveryEmbedded>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DiscoveryEmbedded {
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub dates: Option<Dates>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub classifications: Vec<Classification>,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<EventEmbedded>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Dates {
    #[serde(default)]
    pub start: Option<StartDate>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StartDate {
    #[serde(rename = "localDate", default)]
    pub local_date: Option<String>,
    #[serde(rename = "dateTime", default)]
    pub date_time: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub width: Option<u64>,
    #[serde(default)]
    pub height: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Classification {
    #[serde(default)]
    pub genre: Option<Genre>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Genre {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventEmbedded {
    #[serde(default)]
    pub venues: Vec<VenueRecord>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VenueRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<CityRecord>,
    #[serde(default)]
    pub location: Option<LocationRecord>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CityRecord {
    pub name: String,
}

/// Coordinates are decimal strings in the provider payload
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LocationRecord {
    pub latitude: String,
    pub longitude: String,
}
