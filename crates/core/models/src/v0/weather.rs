use chrono::{DateTime, Utc};

auto_derived!(
    /// Single forecast sample
    pub struct ForecastSample {
        /// Time this sample applies to
        pub datetime: DateTime<Utc>,
        /// Temperature (°F)
        pub temp: f64,
        /// Perceived temperature (°F)
        pub feels_like: f64,
        /// Condition description
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub description: Option<String>,
        /// Condition icon code
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub icon: Option<String>,
        /// Probability of precipitation as a percentage
        pub precipitation: f64,
        /// Relative humidity as a percentage
        pub humidity: f64,
        /// Wind speed
        pub wind_speed: f64,
    }

    /// Response from the weather forecast proxy
    pub struct ForecastResponse {
        /// Samples near the requested date
        pub forecast: Vec<ForecastSample>,
    }
);
