auto_derived!(
    /// Video search result
    pub struct VideoSummary {
        /// Video id on the hosting platform
        pub id: String,
        /// Video title
        pub title: String,
        /// Thumbnail URL
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub thumbnail: Option<String>,
    }

    /// Response from the video search proxy
    pub struct VideoSearchResponse {
        /// Up to three matching videos
        pub videos: Vec<VideoSummary>,
    }
);
