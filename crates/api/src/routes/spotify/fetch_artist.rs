use encore_models::v0;
use encore_providers::spotify::Spotify;
use encore_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;

/// # Artist Lookup Options
#[derive(FromForm, JsonSchema)]
pub struct OptionsFetchArtist {
    /// Artist id on the music platform
    #[field(name = "artistId")]
    artist_id: Option<String>,
}

/// # Fetch Artist
///
/// Fetch artist metadata and related artists.
///
/// Related artists are best-effort; the lookup succeeds without them.
#[openapi(tag = "Music")]
#[get("/artist?<options..>")]
pub async fn fetch_artist(
    spotify: &State<Spotify>,
    options: OptionsFetchArtist,
) -> Result<Json<v0::ArtistLookupResponse>> {
    let artist_id = options
        .artist_id
        .filter(|artist_id| !artist_id.trim().is_empty())
        .ok_or_else(|| {
            create_error!(InvalidRequest {
                message: "Artist ID is required".to_string()
            })
        })?;

    let artist = spotify.artist(&artist_id).await?;
    let related_artists = spotify.related_artists(&artist_id).await;

    Ok(Json(v0::ArtistLookupResponse {
        artist: artist.into(),
        related_artists: related_artists.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn fail_fetch_without_artist_id() {
        let harness = TestHarness::new().await;

        let response = harness.client.get("/spotify/artist").dispatch().await;
        assert_eq!(response.status(), Status::BadRequest);
    }
}
