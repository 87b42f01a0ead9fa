use encore_models::v0;
use encore_providers::youtube::YouTube;
use encore_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # Search Videos
///
/// Search live performance videos for an artist or event.
#[openapi(tag = "Videos")]
#[get("/?<q>")]
pub async fn search(
    youtube: &State<YouTube>,
    q: Option<String>,
) -> Result<Json<v0::VideoSearchResponse>> {
    let query = q.filter(|q| !q.trim().is_empty()).ok_or_else(|| {
        create_error!(InvalidRequest {
            message: "Search query is required".to_string()
        })
    })?;

    let videos = youtube.search_videos(&query).await?;
    Ok(Json(v0::VideoSearchResponse { videos }))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn fail_search_without_query() {
        let harness = TestHarness::new().await;

        let response = harness.client.get("/youtube").dispatch().await;
        assert_eq!(response.status(), Status::BadRequest);
    }
}
