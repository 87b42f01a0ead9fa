use chrono::{DateTime, Utc};

auto_derived!(
    /// One user's bookmark of one external event
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    pub struct SavedEvent {
        /// Opaque event id issued by the ticketing provider
        pub event_id: String,
        /// Provider-shaped event payload captured at save time
        pub event_data: serde_json::Value,
        /// When the bookmark was created
        pub saved_at: DateTime<Utc>,
    }

    /// Response to a save request
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    pub struct SaveEventResponse {
        /// Human-readable confirmation
        pub message: String,
        /// The persisted (or pre-existing) record
        pub saved_event: SavedEvent,
    }

    /// Response listing a user's saved events
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    pub struct SavedEventsResponse {
        /// All events the user has saved, in no particular order
        pub saved_events: Vec<SavedEvent>,
    }
);
