//! OpenWeatherMap forecast API models

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ForecastEntry {
    /// Sample time as a unix timestamp
    pub dt: i64,
    pub main: MainMetrics,
    #[serde(default)]
    pub weather: Vec<Condition>,
    /// Probability of precipitation, 0 to 1
    #[serde(default)]
    pub pop: f64,
    #[serde(default)]
    pub wind: Option<Wind>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MainMetrics {
    pub temp: f64,
    pub feels_like: f64,
    #[serde(default)]
    pub humidity: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Wind {
    #[serde(default)]
    pub speed: f64,
}
