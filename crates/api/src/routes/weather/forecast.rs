use chrono::{DateTime, NaiveDate, Utc};
use encore_models::v0;
use encore_providers::openweather::{samples_near, OpenWeather};
use encore_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;

/// Accept either a full timestamp or a bare event date, read as midday.
fn parse_target_date(raw: &str) -> Option<DateTime<Utc>> {
    raw.parse::<DateTime<Utc>>().ok().or_else(|| {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .map(|datetime| datetime.and_utc())
    })
}

/// # Fetch Forecast
///
/// Fetch forecast samples for a position, narrowed to within a day of
/// the target date when one is given.
#[openapi(tag = "Weather")]
#[get("/?<lat>&<lon>&<date>")]
pub async fn forecast(
    openweather: &State<OpenWeather>,
    lat: Option<f64>,
    lon: Option<f64>,
    date: Option<String>,
) -> Result<Json<v0::ForecastResponse>> {
    let (lat, lon) = lat.zip(lon).ok_or_else(|| {
        create_error!(InvalidRequest {
            message: "Latitude and longitude are required".to_string()
        })
    })?;

    let date = date.as_deref().and_then(parse_target_date);
    let entries = openweather.forecast(lat, lon).await?;

    Ok(Json(v0::ForecastResponse {
        forecast: samples_near(entries, date)
            .into_iter()
            .map(Into::into)
            .collect(),
    }))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use chrono::{Datelike, Timelike};
    use rocket::http::Status;

    use super::parse_target_date;

    #[test]
    fn parse_timestamps_and_bare_dates() {
        let timestamp = parse_target_date("2025-06-01T20:00:00Z").expect("timestamp");
        assert_eq!(timestamp.hour(), 20);

        let date = parse_target_date("2025-06-01").expect("date");
        assert_eq!(date.day(), 1);
        assert_eq!(date.hour(), 12);

        assert!(parse_target_date("whenever").is_none());
    }

    #[rocket::async_test]
    async fn fail_forecast_without_coordinates() {
        let harness = TestHarness::new().await;

        let response = harness.client.get("/weather?lat=52.52").dispatch().await;
        assert_eq!(response.status(), Status::BadRequest);
    }
}
