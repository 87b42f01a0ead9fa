use std::sync::Arc;

use chrono::{DateTime, Utc};
use encore_models::v0;
use encore_result::Result;
use reqwest::Client;

use crate::{decode_error, request_error, status_error, CLIENT};

pub mod types;

const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

const PROVIDER: &str = "openweather";

/// Samples this close to the target date are considered relevant
const FORECAST_WINDOW_SECS: i64 = 24 * 60 * 60;

#[derive(Clone)]
pub struct OpenWeather {
    pub key: Arc<str>,
    pub client: Client,
}

impl OpenWeather {
    pub fn new(key: &str) -> Self {
        Self {
            key: Arc::from(key),
            client: CLIENT.clone(),
        }
    }

    /// Fetch the 5 day / 3 hour forecast for a position, imperial units.
    pub async fn forecast(&self, lat: f64, lon: f64) -> Result<Vec<types::ForecastEntry>> {
        let response = self
            .client
            .get(format!("{API_BASE_URL}/forecast"))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.key.to_string()),
                ("units", "imperial".to_string()),
            ])
            .send()
            .await
            .map_err(|err| request_error(PROVIDER, err))?;

        if !response.status().is_success() {
            return Err(status_error(PROVIDER, response.status()));
        }

        let forecast: types::ForecastResponse = response
            .json()
            .await
            .map_err(|err| decode_error(PROVIDER, err))?;

        Ok(forecast.list)
    }
}

/// Keep samples within a day of the target date.
///
/// Without a target date the whole forecast is returned, rather than
/// nothing.
pub fn samples_near(
    entries: Vec<types::ForecastEntry>,
    date: Option<DateTime<Utc>>,
) -> Vec<types::ForecastEntry> {
    match date {
        Some(date) => {
            let target = date.timestamp();
            entries
                .into_iter()
                .filter(|entry| (entry.dt - target).abs() < FORECAST_WINDOW_SECS)
                .collect()
        }
        None => entries,
    }
}

impl From<types::ForecastEntry> for v0::ForecastSample {
    fn from(entry: types::ForecastEntry) -> Self {
        let condition = entry.weather.into_iter().next();

        v0::ForecastSample {
            datetime: DateTime::from_timestamp(entry.dt, 0).unwrap_or(DateTime::UNIX_EPOCH),
            temp: entry.main.temp,
            feels_like: entry.main.feels_like,
            description: condition.as_ref().map(|c| c.description.clone()),
            icon: condition.map(|c| c.icon),
            precipitation: entry.pop * 100.0,
            humidity: entry.main.humidity,
            wind_speed: entry.wind.map(|wind| wind.speed).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use encore_models::v0;

    use super::types::{Condition, ForecastEntry, MainMetrics, Wind};
    use super::samples_near;

    fn entry(dt: i64) -> ForecastEntry {
        ForecastEntry {
            dt,
            main: MainMetrics {
                temp: 68.0,
                feels_like: 66.2,
                humidity: 40.0,
            },
            weather: vec![Condition {
                description: "clear sky".to_string(),
                icon: "01d".to_string(),
            }],
            pop: 0.25,
            wind: Some(Wind { speed: 7.2 }),
        }
    }

    fn target() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap()
    }

    #[test]
    fn keep_samples_within_a_day() {
        let date = target();
        let entries = vec![
            entry(date.timestamp() - 3 * 60 * 60),
            entry(date.timestamp() + 23 * 60 * 60),
            entry(date.timestamp() + 25 * 60 * 60),
            entry(date.timestamp() - 48 * 60 * 60),
        ];

        let relevant = samples_near(entries, Some(date));
        assert_eq!(relevant.len(), 2);
    }

    #[test]
    fn keep_everything_without_a_date() {
        let entries = vec![entry(0), entry(1_000_000)];
        assert_eq!(samples_near(entries, None).len(), 2);
    }

    #[test]
    fn reshape_forecast_sample() {
        let sample: v0::ForecastSample = entry(target().timestamp()).into();

        assert_eq!(sample.datetime, target());
        assert_eq!(sample.precipitation, 25.0);
        assert_eq!(sample.description.as_deref(), Some("clear sky"));
        assert_eq!(sample.wind_speed, 7.2);
    }
}
