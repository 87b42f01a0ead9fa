auto_derived!(
    /// Image in one of the provider's sizes
    pub struct ArtistImage {
        /// Image URL
        pub url: String,
        /// Image height in pixels
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub height: Option<u64>,
        /// Image width in pixels
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub width: Option<u64>,
    }

    /// One of an artist's top tracks
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    pub struct TrackSummary {
        /// Track id on the music platform
        pub id: String,
        /// Track name
        pub name: String,
        /// 30 second preview clip, not available for all tracks
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub preview_url: Option<String>,
        /// Album cover art
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub album_art: Option<String>,
        /// Link to the track on the platform
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub spotify_url: Option<String>,
    }

    /// Response from the artist search proxy
    ///
    /// `artist_id` is null when no artist matched; callers treat the
    /// enrichment as absent rather than an error.
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    pub struct ArtistSearchResponse {
        /// Matched artist id, if any
        pub artist_id: Option<String>,
        /// The artist's top tracks
        pub tracks: Vec<TrackSummary>,
    }

    /// Artist metadata
    pub struct ArtistProfile {
        /// Artist name
        pub name: String,
        /// Genres associated with the artist
        pub genres: Vec<String>,
        /// Popularity score (0-100)
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub popularity: Option<u32>,
        /// Follower count
        pub followers: u64,
        /// Artist images
        pub images: Vec<ArtistImage>,
    }

    /// Artist related to the one looked up
    pub struct RelatedArtist {
        /// Artist id on the music platform
        pub id: String,
        /// Artist name
        pub name: String,
        /// Genres associated with the artist
        pub genres: Vec<String>,
        /// Artist images
        pub images: Vec<ArtistImage>,
    }

    /// Response from the artist lookup proxy
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    pub struct ArtistLookupResponse {
        /// Artist metadata
        pub artist: ArtistProfile,
        /// Up to five related artists; empty when that lookup fails
        pub related_artists: Vec<RelatedArtist>,
    }
);
