use encore_models::v0;
use encore_providers::spotify::Spotify;
use encore_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # Search Artist
///
/// Find an artist by name and fetch their top tracks.
///
/// A query that matches nothing is not an error; callers treat the
/// enrichment as absent.
#[openapi(tag = "Music")]
#[get("/search?<q>")]
pub async fn search_artist(
    spotify: &State<Spotify>,
    q: Option<String>,
) -> Result<Json<v0::ArtistSearchResponse>> {
    let query = q.filter(|q| !q.trim().is_empty()).ok_or_else(|| {
        create_error!(InvalidRequest {
            message: "Artist name is required".to_string()
        })
    })?;

    let Some(artist) = spotify.search_artist(&query).await? else {
        return Ok(Json(v0::ArtistSearchResponse {
            artist_id: None,
            tracks: vec![],
        }));
    };

    let tracks = spotify.top_tracks(&artist.id).await?;
    Ok(Json(v0::ArtistSearchResponse {
        artist_id: Some(artist.id),
        tracks,
    }))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn fail_search_without_query() {
        let harness = TestHarness::new().await;

        let response = harness.client.get("/spotify/search").dispatch().await;
        assert_eq!(response.status(), Status::BadRequest);
    }
}
