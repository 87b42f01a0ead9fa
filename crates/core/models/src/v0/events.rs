auto_derived!(
    /// Venue an event takes place at
    pub struct Venue {
        /// Venue name
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub name: Option<String>,
        /// City the venue is located in
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub city: Option<String>,
        /// Venue latitude
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub latitude: Option<f64>,
        /// Venue longitude
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub longitude: Option<f64>,
    }

    /// Event record reshaped from the ticketing provider
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    pub struct EventSummary {
        /// Opaque identifier issued by the ticketing provider
        pub id: String,
        /// Event name
        pub name: String,
        /// Ticket purchase link
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub url: Option<String>,
        /// Local event date (YYYY-MM-DD)
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub date: Option<String>,
        /// Full event start timestamp when the provider has one
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub date_time: Option<String>,
        /// Promo image
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub image_url: Option<String>,
        /// Music genre
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub genre: Option<String>,
        /// Venue information
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub venue: Option<Venue>,
    }

    /// Response from the event search proxy
    pub struct EventSearchResponse {
        /// Matching events, soonest first
        pub events: Vec<EventSummary>,
    }
);
